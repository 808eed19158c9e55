use crate::err::Error;
use crate::sql::number::Number;
use crate::sql::operator::Operator;
use crate::sql::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary expression over two values.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Expression {
	pub l: Value,
	pub o: Operator,
	pub r: Value,
}

impl Expression {
	pub fn new(l: Value, o: Operator, r: Value) -> Self {
		Self {
			l,
			o,
			r,
		}
	}

	/// Evaluate this expression against an optional document
	pub(crate) fn compute(&self, doc: Option<&Value>) -> Result<Value, Error> {
		let l = self.l.compute(doc)?;
		// Short-circuit the logical operators
		match self.o {
			Operator::Or if l.is_truthy() => return Ok(Value::Bool(true)),
			Operator::And if !l.is_truthy() => return Ok(Value::Bool(false)),
			_ => (),
		}
		let r = self.r.compute(doc)?;
		Ok(match self.o {
			Operator::Or => Value::Bool(r.is_truthy()),
			Operator::And => Value::Bool(r.is_truthy()),
			Operator::Equal => Value::Bool(l == r),
			Operator::NotEqual => Value::Bool(l != r),
			Operator::LessThan => Value::Bool(l < r),
			Operator::LessThanOrEqual => Value::Bool(l <= r),
			Operator::MoreThan => Value::Bool(l > r),
			Operator::MoreThanOrEqual => Value::Bool(l >= r),
			Operator::Add => Self::binary(l, r, |l, r| l + r),
			Operator::Sub => Self::binary(l, r, |l, r| l - r),
			Operator::Mul => Self::binary(l, r, |l, r| l * r),
			Operator::Div => Self::binary(l, r, |l, r| l / r),
		})
	}

	fn binary(l: Value, r: Value, f: fn(Number, Number) -> Number) -> Value {
		match (l, r) {
			(Value::Number(l), Value::Number(r)) => Value::Number(f(l, r)),
			_ => Value::None,
		}
	}
}

impl fmt::Display for Expression {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} {} {}", self.l, self.o, self.r)
	}
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn expression_comparison() {
		let expr = Expression::new(Value::from(1), Operator::LessThan, Value::from(2));
		assert_eq!(expr.compute(None).unwrap(), Value::Bool(true));
	}

	#[test]
	fn expression_logical_short_circuit() {
		// The right hand side references a document field, but is never reached
		let expr = Expression::new(Value::Bool(true), Operator::Or, Value::field("x"));
		assert_eq!(expr.compute(None).unwrap(), Value::Bool(true));
	}

	#[test]
	fn expression_arithmetic() {
		let expr = Expression::new(Value::from(2), Operator::Add, Value::from(3));
		assert_eq!(expr.compute(None).unwrap(), Value::from(5));
	}
}
