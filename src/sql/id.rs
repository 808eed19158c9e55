use crate::cnf::ID_CHARS;
use crate::sql::number::Number;
use nanoid::nanoid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifying part of a record id.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Id {
	Number(Number),
	String(String),
}

impl From<i32> for Id {
	fn from(v: i32) -> Self {
		Id::Number(Number::Int(v as i64))
	}
}

impl From<i64> for Id {
	fn from(v: i64) -> Self {
		Id::Number(Number::Int(v))
	}
}

impl From<f64> for Id {
	fn from(v: f64) -> Self {
		Id::Number(Number::Float(v))
	}
}

impl From<Number> for Id {
	fn from(v: Number) -> Self {
		Id::Number(v)
	}
}

impl From<String> for Id {
	fn from(v: String) -> Self {
		Id::String(v)
	}
}

impl From<&str> for Id {
	fn from(v: &str) -> Self {
		Id::String(v.to_owned())
	}
}

impl From<crate::sql::value::Value> for Id {
	/// Convert an arbitrary value into a usable record id
	fn from(v: crate::sql::value::Value) -> Self {
		use crate::sql::value::Value;
		match v {
			Value::Number(v) => Id::Number(v),
			Value::Strand(v) => Id::String(v),
			v => Id::String(v.to_string()),
		}
	}
}

impl Id {
	/// Generate a new random id
	pub fn rand() -> Id {
		Id::String(nanoid!(20, &ID_CHARS))
	}
}

impl fmt::Display for Id {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Id::Number(v) => write!(f, "{v}"),
			Id::String(v) => write!(f, "{v}"),
		}
	}
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn id_rand_is_unique() {
		assert_ne!(Id::rand(), Id::rand());
	}
}
