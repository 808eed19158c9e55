use crate::err::Error;
use crate::fnc;
use crate::sql::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A function call expression.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Function {
	pub name: String,
	pub args: Vec<Value>,
}

impl Function {
	pub fn new(name: &str, args: Vec<Value>) -> Self {
		Self {
			name: name.to_owned(),
			args,
		}
	}

	/// Check if this function invocation is one of the aggregate functions
	pub fn is_aggregate(&self) -> bool {
		fnc::AGGREGATES.contains(&self.name.as_str())
	}

	/// Evaluate this function against an optional document
	pub(crate) fn compute(&self, doc: Option<&Value>) -> Result<Value, Error> {
		let mut args = Vec::with_capacity(self.args.len());
		for arg in self.args.iter() {
			args.push(arg.compute(doc)?);
		}
		fnc::run(&self.name, args)
	}
}

impl fmt::Display for Function {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}(", self.name)?;
		for (i, v) in self.args.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{v}")?;
		}
		write!(f, ")")
	}
}
