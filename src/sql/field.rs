use crate::err::Error;
use crate::sql::idiom::Idiom;
use crate::sql::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// The projected fields of a SELECT statement.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fields(pub Vec<Field>);

impl Deref for Fields {
	type Target = Vec<Field>;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Vec<Field>> for Fields {
	fn from(v: Vec<Field>) -> Self {
		Self(v)
	}
}

impl Fields {
	/// A `SELECT *` projection
	pub fn all() -> Self {
		Self(vec![Field::All])
	}

	/// Evaluate the projection against a document. When `group` is set,
	/// aggregate function fields are not run per record; instead the value
	/// of their first argument is stored under the output idiom, ready to
	/// be collected once the records have been bucketed.
	pub(crate) fn compute(&self, doc: &Value, group: bool) -> Result<Value, Error> {
		// Start from the full document if a `*` projection is present
		let mut out = match self.iter().any(|f| matches!(f, Field::All)) {
			true => doc.clone(),
			false => Value::base(),
		};
		for field in self.iter() {
			let (expr, idiom) = match field {
				Field::All => continue,
				Field::Alone(v) => (v, v.to_idiom()),
				Field::Alias(v, i) => (v, i.clone()),
			};
			match expr {
				Value::Function(f) if group && f.is_aggregate() => {
					let val = match f.args.first() {
						Some(v) => v.compute(Some(doc))?,
						None => Value::None,
					};
					out.put(&idiom, val);
				}
				v => {
					let val = v.compute(Some(doc))?;
					out.put(&idiom, val);
				}
			}
		}
		Ok(out)
	}
}

impl fmt::Display for Fields {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (i, v) in self.0.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{v}")?;
		}
		Ok(())
	}
}

/// A single projected field.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Field {
	All,
	Alone(Value),
	Alias(Value, Idiom),
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::All => write!(f, "*"),
			Self::Alone(v) => write!(f, "{v}"),
			Self::Alias(v, i) => write!(f, "{v} AS {i}"),
		}
	}
}
