use crate::sql::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// A WHERE clause condition.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Cond(pub Value);

impl Deref for Cond {
	type Target = Value;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl fmt::Display for Cond {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "WHERE {}", self.0)
	}
}
