use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary operator within an expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Operator {
	Or,
	And,
	Equal,
	NotEqual,
	LessThan,
	LessThanOrEqual,
	MoreThan,
	MoreThanOrEqual,
	Add,
	Sub,
	Mul,
	Div,
}

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Or => write!(f, "OR"),
			Self::And => write!(f, "AND"),
			Self::Equal => write!(f, "="),
			Self::NotEqual => write!(f, "!="),
			Self::LessThan => write!(f, "<"),
			Self::LessThanOrEqual => write!(f, "<="),
			Self::MoreThan => write!(f, ">"),
			Self::MoreThanOrEqual => write!(f, ">="),
			Self::Add => write!(f, "+"),
			Self::Sub => write!(f, "-"),
			Self::Mul => write!(f, "*"),
			Self::Div => write!(f, "/"),
		}
	}
}
