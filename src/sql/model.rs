use crate::sql::number::Number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A record generator. `Count` produces the given number of records with
/// freshly generated ids; `Range` steps numerically from the start to the
/// end of the range inclusive, ascending or descending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Model {
	Count(String, u64),
	Range(String, Number, Number, Number),
}

impl Model {
	/// The table which this generator produces records for
	pub fn tb(&self) -> &str {
		match self {
			Model::Count(tb, _) => tb,
			Model::Range(tb, _, _, _) => tb,
		}
	}
}

impl fmt::Display for Model {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Model::Count(tb, c) => {
				write!(f, "|{tb}:{c}|")
			}
			Model::Range(tb, b, e, s) => match s {
				Number::Int(1) => write!(f, "|{tb}:{b}..{e}|"),
				s => write!(f, "|{tb}:{b}..{e} STEP {s}|"),
			},
		}
	}
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn model_count() {
		let out = Model::Count(String::from("test"), 1000);
		assert_eq!("|test:1000|", format!("{out}"));
	}

	#[test]
	fn model_range() {
		let out = Model::Range(String::from("test"), 1.into(), 1000.into(), 1.into());
		assert_eq!("|test:1..1000|", format!("{out}"));
	}

	#[test]
	fn model_range_step() {
		let out = Model::Range(String::from("test"), 1.into(), 3.into(), 0.5.into());
		assert_eq!("|test:1..3 STEP 0.5|", format!("{out}"));
	}
}
