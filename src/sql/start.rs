use crate::err::Error;
use crate::sql::number::Number;
use crate::sql::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// The START clause of a SELECT statement.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Start(pub Value);

impl Deref for Start {
	type Target = Value;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<i32> for Start {
	fn from(v: i32) -> Self {
		Self(Value::from(v))
	}
}

impl From<i64> for Start {
	fn from(v: i64) -> Self {
		Self(Value::from(v))
	}
}

impl Start {
	/// Evaluate the clause expression to a record offset
	pub(crate) fn process(&self) -> Result<usize, Error> {
		match self.0.compute(None) {
			// This is a valid starting value
			Ok(Value::Number(Number::Int(v))) if v >= 0 => Ok(v as usize),
			// An invalid value was specified
			Ok(v) => Err(Error::InvalidStart {
				value: v.to_string(),
			}),
			// A computation error occurred
			Err(e) => Err(e),
		}
	}
}

impl fmt::Display for Start {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "START {}", self.0)
	}
}
