use crate::err::Error;
use crate::sql::id::Id;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully qualified record identity within a database.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Thing {
	pub tb: String,
	pub id: Id,
}

impl From<(String, Id)> for Thing {
	fn from((tb, id): (String, Id)) -> Self {
		Self {
			tb,
			id,
		}
	}
}

impl From<(String, String)> for Thing {
	fn from((tb, id): (String, String)) -> Self {
		Self::from((tb, Id::from(id)))
	}
}

impl From<(&str, &str)> for Thing {
	fn from((tb, id): (&str, &str)) -> Self {
		Self::from((tb.to_owned(), Id::from(id)))
	}
}

impl From<(&str, i64)> for Thing {
	fn from((tb, id): (&str, i64)) -> Self {
		Self::from((tb.to_owned(), Id::from(id)))
	}
}

impl TryFrom<&str> for Thing {
	type Error = Error;
	/// Parse a record id literal of the form `table:id`. An id consisting
	/// only of digits is parsed as a numeric id.
	fn try_from(v: &str) -> Result<Self, Self::Error> {
		match v.split_once(':') {
			Some((tb, id)) if !tb.is_empty() && !id.is_empty() => {
				let id = match id.parse::<i64>() {
					Ok(v) => Id::from(v),
					_ => Id::from(id),
				};
				Ok(Thing::from((tb.to_owned(), id)))
			}
			_ => Err(Error::IdInvalid {
				value: v.to_owned(),
			}),
		}
	}
}

impl Thing {
	/// Convert the Thing to a raw String
	pub fn to_raw(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Thing {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}:{}", self.tb, self.id)
	}
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn thing_normal() {
		let res = Thing::try_from("test:id").unwrap();
		assert_eq!("test:id", format!("{res}"));
		assert_eq!(
			res,
			Thing {
				tb: String::from("test"),
				id: Id::from("id"),
			}
		);
	}

	#[test]
	fn thing_integer() {
		let res = Thing::try_from("test:42").unwrap();
		assert_eq!("test:42", format!("{res}"));
		assert_eq!(
			res,
			Thing {
				tb: String::from("test"),
				id: Id::from(42),
			}
		);
	}

	#[test]
	fn thing_invalid() {
		assert!(Thing::try_from("test").is_err());
		assert!(Thing::try_from(":id").is_err());
		assert!(Thing::try_from("test:").is_err());
	}
}
