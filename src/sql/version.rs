use crate::err::Error;
use crate::sql::number::Number;
use crate::sql::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// The VERSION clause of a SELECT statement, fixing the logical timestamp
/// at which all reads for the statement are performed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Version(pub Value);

impl Deref for Version {
	type Target = Value;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<i32> for Version {
	fn from(v: i32) -> Self {
		Self(Value::from(v))
	}
}

impl From<i64> for Version {
	fn from(v: i64) -> Self {
		Self(Value::from(v))
	}
}

impl Version {
	/// Evaluate the clause expression to a logical timestamp
	pub(crate) fn process(&self) -> Result<u64, Error> {
		match self.0.compute(None) {
			// This is a valid version timestamp
			Ok(Value::Number(Number::Int(v))) if v > 0 => Ok(v as u64),
			// An invalid value was specified
			Ok(v) => Err(Error::InvalidVersion {
				value: v.to_string(),
			}),
			// A computation error occurred
			Err(e) => Err(e),
		}
	}
}

impl fmt::Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "VERSION {}", self.0)
	}
}
