use crate::sql::idiom::Idiom;
use crate::sql::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// The ORDER BY clause of a SELECT statement.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Orders(pub Vec<Order>);

impl Deref for Orders {
	type Target = Vec<Order>;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl fmt::Display for Orders {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "ORDER BY ")?;
		for (i, v) in self.0.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{v}")?;
		}
		Ok(())
	}
}

/// A single ordering key.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Order {
	/// The expression to order by
	pub expr: Value,
	/// true if the direction is ascending
	pub direction: bool,
}

impl Order {
	pub fn asc(expr: impl Into<Idiom>) -> Self {
		Self {
			expr: Value::Idiom(expr.into()),
			direction: true,
		}
	}

	pub fn desc(expr: impl Into<Idiom>) -> Self {
		Self {
			expr: Value::Idiom(expr.into()),
			direction: false,
		}
	}
}

impl fmt::Display for Order {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.expr)?;
		if !self.direction {
			write!(f, " DESC")?;
		}
		Ok(())
	}
}
