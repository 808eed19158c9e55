use crate::err::Error;
use crate::sql::number::Number;
use crate::sql::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// The LIMIT clause of a SELECT statement.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Limit(pub Value);

impl Deref for Limit {
	type Target = Value;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<i32> for Limit {
	fn from(v: i32) -> Self {
		Self(Value::from(v))
	}
}

impl From<i64> for Limit {
	fn from(v: i64) -> Self {
		Self(Value::from(v))
	}
}

impl Limit {
	/// Evaluate the clause expression to a record count
	pub(crate) fn process(&self) -> Result<usize, Error> {
		match self.0.compute(None) {
			// This is a valid limiting value
			Ok(Value::Number(Number::Int(v))) if v >= 0 => Ok(v as usize),
			// An invalid value was specified
			Ok(v) => Err(Error::InvalidLimit {
				value: v.to_string(),
			}),
			// A computation error occurred
			Err(e) => Err(e),
		}
	}
}

impl fmt::Display for Limit {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "LIMIT {}", self.0)
	}
}
