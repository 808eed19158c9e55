use crate::err::Error;
use crate::sql::value::Value;

pub mod count;
pub mod math;

/// The functions which receive the whole group of records as their first
/// argument when used with a GROUP clause
pub const AGGREGATES: &[&str] = &["count", "math::max", "math::mean", "math::min", "math::sum"];

/// Run a function with the specified arguments
pub fn run(name: &str, args: Vec<Value>) -> Result<Value, Error> {
	match name {
		"count" => count::count(args),
		"math::max" => math::max(args),
		"math::mean" => math::mean(args),
		"math::min" => math::min(args),
		"math::sum" => math::sum(args),
		_ => Err(Error::InvalidFunction {
			name: name.to_owned(),
		}),
	}
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn run_unknown_function() {
		assert!(matches!(
			run("math::nope", vec![]),
			Err(Error::InvalidFunction { ref name }) if name == "math::nope"
		));
	}

	#[test]
	fn aggregates_are_registered() {
		for name in AGGREGATES {
			assert!(run(name, vec![Value::from(vec![Value::from(1)])]).is_ok());
		}
	}
}
