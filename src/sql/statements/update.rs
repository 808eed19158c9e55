use crate::sql::cond::Cond;
use crate::sql::data::Data;
use crate::sql::value::Values;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatement {
	pub what: Values,
	pub data: Option<Data>,
	pub cond: Option<Cond>,
}

impl fmt::Display for UpdateStatement {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "UPDATE {}", self.what)?;
		if let Some(ref v) = self.data {
			write!(f, " {v}")?;
		}
		if let Some(ref v) = self.cond {
			write!(f, " {v}")?;
		}
		Ok(())
	}
}
