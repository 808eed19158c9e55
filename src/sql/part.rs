use serde::{Deserialize, Serialize};
use std::fmt;

/// A single step in a document path.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Part {
	All,
	Field(String),
	Index(usize),
}

impl From<&str> for Part {
	fn from(v: &str) -> Self {
		Part::Field(v.to_owned())
	}
}

impl From<String> for Part {
	fn from(v: String) -> Self {
		Part::Field(v)
	}
}

impl From<usize> for Part {
	fn from(v: usize) -> Self {
		Part::Index(v)
	}
}

impl fmt::Display for Part {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Part::All => write!(f, "[*]"),
			Part::Field(v) => write!(f, ".{v}"),
			Part::Index(v) => write!(f, "[{v}]"),
		}
	}
}
