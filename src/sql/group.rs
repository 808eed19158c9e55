use crate::sql::idiom::Idiom;
use crate::sql::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// The GROUP BY clause of a SELECT statement.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Groups(pub Vec<Group>);

impl Deref for Groups {
	type Target = Vec<Group>;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl fmt::Display for Groups {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "GROUP BY ")?;
		for (i, v) in self.0.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{v}")?;
		}
		Ok(())
	}
}

/// A single grouping expression.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group(pub Value);

impl Deref for Group {
	type Target = Value;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Idiom> for Group {
	fn from(v: Idiom) -> Self {
		Self(Value::Idiom(v))
	}
}

impl fmt::Display for Group {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
