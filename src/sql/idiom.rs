use crate::sql::part::Part;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// A path addressing a value within a document.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Idiom(pub Vec<Part>);

impl Deref for Idiom {
	type Target = [Part];
	fn deref(&self) -> &Self::Target {
		self.0.as_slice()
	}
}

impl From<&str> for Idiom {
	fn from(v: &str) -> Self {
		Self(vec![Part::from(v)])
	}
}

impl From<String> for Idiom {
	fn from(v: String) -> Self {
		Self(vec![Part::from(v)])
	}
}

impl From<Vec<Part>> for Idiom {
	fn from(v: Vec<Part>) -> Self {
		Self(v)
	}
}

impl Idiom {
	/// Appends a part to the end of this Idiom
	pub(crate) fn push(mut self, n: Part) -> Idiom {
		self.0.push(n);
		self
	}
}

impl fmt::Display for Idiom {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (i, p) in self.0.iter().enumerate() {
			match (i, p) {
				// The leading part of a path prints without a separator
				(0, Part::Field(v)) => write!(f, "{v}")?,
				_ => write!(f, "{p}")?,
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn idiom_display() {
		let idiom = Idiom(vec![Part::from("tags"), Part::All, Part::from("name")]);
		assert_eq!("tags[*].name", format!("{idiom}"));
	}
}
