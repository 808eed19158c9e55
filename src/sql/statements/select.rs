use crate::sql::cond::Cond;
use crate::sql::field::Fields;
use crate::sql::group::Groups;
use crate::sql::limit::Limit;
use crate::sql::order::Orders;
use crate::sql::split::Splits;
use crate::sql::start::Start;
use crate::sql::value::Values;
use crate::sql::version::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
	pub expr: Fields,
	pub what: Values,
	pub cond: Option<Cond>,
	pub split: Option<Splits>,
	pub group: Option<Groups>,
	pub order: Option<Orders>,
	pub limit: Option<Limit>,
	pub start: Option<Start>,
	pub version: Option<Version>,
}

impl fmt::Display for SelectStatement {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "SELECT {} FROM {}", self.expr, self.what)?;
		if let Some(ref v) = self.cond {
			write!(f, " {v}")?;
		}
		if let Some(ref v) = self.split {
			write!(f, " {v}")?;
		}
		if let Some(ref v) = self.group {
			write!(f, " {v}")?;
		}
		if let Some(ref v) = self.order {
			write!(f, " {v}")?;
		}
		if let Some(ref v) = self.limit {
			write!(f, " {v}")?;
		}
		if let Some(ref v) = self.start {
			write!(f, " {v}")?;
		}
		if let Some(ref v) = self.version {
			write!(f, " {v}")?;
		}
		Ok(())
	}
}
