use crate::sql::data::Data;
use crate::sql::table::Table;
use crate::sql::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RelateStatement {
	pub kind: Table,
	pub from: Value,
	pub with: Value,
	pub data: Option<Data>,
}

impl fmt::Display for RelateStatement {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "RELATE {} -> {} -> {}", self.from, self.kind, self.with)?;
		if let Some(ref v) = self.data {
			write!(f, " {v}")?;
		}
		Ok(())
	}
}
