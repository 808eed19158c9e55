use crate::sql::table::Table;
use crate::sql::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct UpsertStatement {
	pub into: Table,
	pub data: Value,
}

impl fmt::Display for UpsertStatement {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "UPSERT INTO {} {}", self.into, self.data)
	}
}
