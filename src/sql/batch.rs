use crate::sql::table::Table;
use crate::sql::thing::Thing;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An explicit batch of record ids to operate on.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Batch {
	pub tb: Table,
	pub ba: Vec<Thing>,
}

impl Batch {
	pub fn new(tb: Table, ba: Vec<Thing>) -> Self {
		Self {
			tb,
			ba,
		}
	}
}

impl fmt::Display for Batch {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "batch({}, [", self.tb)?;
		for (i, v) in self.ba.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{v}")?;
		}
		write!(f, "])")
	}
}
