use crate::sql::idiom::Idiom;
use crate::sql::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The data modification clause of a writeable statement.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Data {
	/// Replace the document content entirely
	ContentExpression(Value),
	/// Merge the specified object into the document
	MergeExpression(Value),
	/// Set individual fields on the document
	SetExpression(Vec<(Idiom, Value)>),
}

impl fmt::Display for Data {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::ContentExpression(v) => write!(f, "CONTENT {v}"),
			Self::MergeExpression(v) => write!(f, "MERGE {v}"),
			Self::SetExpression(v) => {
				write!(f, "SET ")?;
				for (i, (k, v)) in v.iter().enumerate() {
					if i > 0 {
						write!(f, ", ")?;
					}
					write!(f, "{k} = {v}")?;
				}
				Ok(())
			}
		}
	}
}
