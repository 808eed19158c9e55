use crate::err::Error;
use crate::sql::number::Number;
use crate::sql::value::Value;

/// Collect the numeric entries of the first argument
fn numbers(args: Vec<Value>) -> Vec<Number> {
	match args.into_iter().next() {
		Some(Value::Array(v)) => v
			.into_iter()
			.filter_map(|v| match v {
				Value::Number(n) => Some(n),
				_ => None,
			})
			.collect(),
		Some(Value::Number(n)) => vec![n],
		_ => vec![],
	}
}

pub fn max(args: Vec<Value>) -> Result<Value, Error> {
	Ok(match numbers(args).into_iter().max() {
		Some(n) => n.into(),
		None => Value::None,
	})
}

pub fn mean(args: Vec<Value>) -> Result<Value, Error> {
	let val = numbers(args);
	Ok(match val.len() {
		0 => Value::None,
		len => (val.into_iter().sum::<Number>() / Number::from(len)).into(),
	})
}

pub fn min(args: Vec<Value>) -> Result<Value, Error> {
	Ok(match numbers(args).into_iter().min() {
		Some(n) => n.into(),
		None => Value::None,
	})
}

pub fn sum(args: Vec<Value>) -> Result<Value, Error> {
	Ok(numbers(args).into_iter().sum::<Number>().into())
}

#[cfg(test)]
mod tests {

	use super::*;

	fn args(v: Vec<i64>) -> Vec<Value> {
		vec![Value::from(v.into_iter().map(Value::from).collect::<Vec<_>>())]
	}

	#[test]
	fn math_sum() {
		assert_eq!(sum(args(vec![1, 2, 3])).unwrap(), Value::from(6));
	}

	#[test]
	fn math_min_max() {
		assert_eq!(min(args(vec![3, 1, 2])).unwrap(), Value::from(1));
		assert_eq!(max(args(vec![3, 1, 2])).unwrap(), Value::from(3));
		assert_eq!(max(args(vec![])).unwrap(), Value::None);
	}

	#[test]
	fn math_mean() {
		assert_eq!(mean(args(vec![1, 2, 3, 4])).unwrap(), Value::from(2.5));
		assert_eq!(mean(args(vec![])).unwrap(), Value::None);
	}
}
