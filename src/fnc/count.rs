use crate::err::Error;
use crate::sql::value::Value;

/// Count a group of values, or test a single value. An array counts its
/// entries, no argument counts as one record, and any other value counts
/// as one if it is truthy.
pub fn count(args: Vec<Value>) -> Result<Value, Error> {
	match args.into_iter().next() {
		Some(Value::Array(v)) => Ok(v.len().into()),
		Some(v) => Ok(match v.is_truthy() {
			true => 1.into(),
			false => 0.into(),
		}),
		None => Ok(1.into()),
	}
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn count_array() {
		let arr = Value::from(vec![Value::None, Value::None, Value::None]);
		assert_eq!(count(vec![arr]).unwrap(), Value::from(3));
	}

	#[test]
	fn count_scalar() {
		assert_eq!(count(vec![Value::from(true)]).unwrap(), Value::from(1));
		assert_eq!(count(vec![Value::from(false)]).unwrap(), Value::from(0));
		assert_eq!(count(vec![]).unwrap(), Value::from(1));
	}
}
