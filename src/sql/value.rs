use crate::err::Error;
use crate::sql::array::Array;
use crate::sql::batch::Batch;
use crate::sql::expression::Expression;
use crate::sql::function::Function;
use crate::sql::idiom::Idiom;
use crate::sql::model::Model;
use crate::sql::number::Number;
use crate::sql::object::Object;
use crate::sql::part::Part;
use crate::sql::table::Table;
use crate::sql::thing::Thing;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A list of values, as used for statement targets and expressions.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Values(pub Vec<Value>);

impl std::ops::Deref for Values {
	type Target = Vec<Value>;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl IntoIterator for Values {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Self::Item>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl From<Vec<Value>> for Values {
	fn from(v: Vec<Value>) -> Self {
		Self(v)
	}
}

impl From<Value> for Values {
	fn from(v: Value) -> Self {
		Self(vec![v])
	}
}

impl fmt::Display for Values {
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

/// The single dynamic value type. Plain data variants come first; the
/// remaining variants are expression and source forms which are resolved
/// by [`Value::compute`] or consumed by the iterator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	None,
	Null,
	Bool(bool),
	Number(Number),
	Strand(String),
	Array(Array),
	Object(Object),
	Thing(Thing),
	// ---
	Idiom(Idiom),
	Expression(Box<Expression>),
	Function(Box<Function>),
	Table(Table),
	Model(Model),
	Batch(Batch),
}

impl Eq for Value {}

impl Default for Value {
	fn default() -> Value {
		Value::None
	}
}

impl Ord for Value {
	fn cmp(&self, other: &Self) -> Ordering {
		self.partial_cmp(other).unwrap_or(Ordering::Equal)
	}
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
			(Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
			(Value::Strand(a), Value::Strand(b)) => a.partial_cmp(b),
			(Value::Array(a), Value::Array(b)) => a.partial_cmp(b),
			(Value::Object(a), Value::Object(b)) => a.partial_cmp(b),
			(Value::Thing(a), Value::Thing(b)) => a.partial_cmp(b),
			(a, b) => a.rank().partial_cmp(&b.rank()),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Number(Number::from(v))
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Number(Number::from(v))
	}
}

impl From<usize> for Value {
	fn from(v: usize) -> Self {
		Value::Number(Number::from(v))
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Number(Number::from(v))
	}
}

impl From<Number> for Value {
	fn from(v: Number) -> Self {
		Value::Number(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Strand(v.to_owned())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Strand(v)
	}
}

impl From<Array> for Value {
	fn from(v: Array) -> Self {
		Value::Array(v)
	}
}

impl From<Vec<Value>> for Value {
	fn from(v: Vec<Value>) -> Self {
		Value::Array(Array::from(v))
	}
}

impl From<Object> for Value {
	fn from(v: Object) -> Self {
		Value::Object(v)
	}
}

impl From<Thing> for Value {
	fn from(v: Thing) -> Self {
		Value::Thing(v)
	}
}

impl From<Idiom> for Value {
	fn from(v: Idiom) -> Self {
		Value::Idiom(v)
	}
}

impl From<Expression> for Value {
	fn from(v: Expression) -> Self {
		Value::Expression(Box::new(v))
	}
}

impl From<Function> for Value {
	fn from(v: Function) -> Self {
		Value::Function(Box::new(v))
	}
}

impl From<Table> for Value {
	fn from(v: Table) -> Self {
		Value::Table(v)
	}
}

impl From<Model> for Value {
	fn from(v: Model) -> Self {
		Value::Model(v)
	}
}

impl From<Batch> for Value {
	fn from(v: Batch) -> Self {
		Value::Batch(v)
	}
}

impl Value {
	/// Create an empty object value
	pub fn base() -> Self {
		Value::Object(Object::default())
	}

	/// Create an idiom value addressing a single top-level field
	pub fn field(name: &str) -> Self {
		Value::Idiom(Idiom::from(name))
	}

	// -----------------------------------
	// Simple value detection
	// -----------------------------------

	pub fn is_none(&self) -> bool {
		matches!(self, Value::None)
	}

	pub fn is_some(&self) -> bool {
		!self.is_none()
	}

	pub fn is_truthy(&self) -> bool {
		match self {
			Value::Bool(v) => *v,
			Value::Number(v) => v.is_truthy(),
			Value::Strand(v) => !v.is_empty() && !v.eq_ignore_ascii_case("false"),
			Value::Array(v) => !v.is_empty(),
			Value::Object(v) => !v.is_empty(),
			Value::Thing(_) => true,
			_ => false,
		}
	}

	// -----------------------------------
	// Path handling
	// -----------------------------------

	/// Fetch the value stored at the specified path
	pub fn pick(&self, path: &[Part]) -> Value {
		match path.first() {
			Some(p) => match p {
				Part::Field(name) => match self {
					Value::Object(v) => match v.get(name) {
						Some(v) => v.pick(&path[1..]),
						None => Value::None,
					},
					_ => Value::None,
				},
				Part::Index(i) => match self {
					Value::Array(v) => match v.get(*i) {
						Some(v) => v.pick(&path[1..]),
						None => Value::None,
					},
					_ => Value::None,
				},
				Part::All => match self {
					Value::Array(v) => v.iter().map(|v| v.pick(&path[1..])).collect::<Array>().into(),
					v => v.pick(&path[1..]),
				},
			},
			None => self.clone(),
		}
	}

	/// Store a value at the specified path, creating intermediate objects
	/// along the way if necessary
	pub fn put(&mut self, path: &[Part], val: Value) {
		match path.first() {
			Some(p) => match p {
				Part::Field(name) => match self {
					Value::Object(v) => {
						v.entry(name.clone()).or_insert(Value::None).put(&path[1..], val)
					}
					v @ (Value::None | Value::Null) => {
						*v = Value::base();
						v.put(path, val)
					}
					_ => (),
				},
				Part::Index(i) => {
					if let Value::Array(v) = self {
						if let Some(v) = v.get_mut(*i) {
							v.put(&path[1..], val)
						}
					}
				}
				Part::All => {
					if let Value::Array(v) = self {
						for v in v.iter_mut() {
							v.put(&path[1..], val.clone())
						}
					}
				}
			},
			None => *self = val,
		}
	}

	// -----------------------------------
	// Expression evaluation
	// -----------------------------------

	/// Evaluate this value as an expression against an optional document.
	/// Plain data values evaluate to themselves; path references resolve
	/// against the document, or to nothing when no document is present.
	pub fn compute(&self, doc: Option<&Value>) -> Result<Value, Error> {
		match self {
			Value::Idiom(v) => Ok(doc.map(|d| d.pick(v)).unwrap_or(Value::None)),
			Value::Expression(v) => v.compute(doc),
			Value::Function(v) => v.compute(doc),
			Value::Array(v) => {
				let mut out = Array::with_capacity(v.len());
				for v in v.iter() {
					out.push(v.compute(doc)?);
				}
				Ok(out.into())
			}
			Value::Object(v) => {
				let mut out = Object::default();
				for (k, v) in v.iter() {
					out.insert(k.clone(), v.compute(doc)?);
				}
				Ok(out.into())
			}
			v => Ok(v.clone()),
		}
	}

	/// Convert this value to the idiom under which its result is output
	pub(crate) fn to_idiom(&self) -> Idiom {
		match self {
			Value::Idiom(v) => v.clone(),
			v => Idiom::from(v.to_string()),
		}
	}

	/// The ordering rank of this value's type, used to compare values of
	/// differing types deterministically
	fn rank(&self) -> u8 {
		match self {
			Value::None => 0,
			Value::Null => 1,
			Value::Bool(_) => 2,
			Value::Number(_) => 3,
			Value::Strand(_) => 4,
			Value::Array(_) => 5,
			Value::Object(_) => 6,
			Value::Thing(_) => 7,
			Value::Idiom(_) => 8,
			Value::Expression(_) => 9,
			Value::Function(_) => 10,
			Value::Table(_) => 11,
			Value::Model(_) => 12,
			Value::Batch(_) => 13,
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Value::None => write!(f, "NONE"),
			Value::Null => write!(f, "NULL"),
			Value::Bool(v) => write!(f, "{v}"),
			Value::Number(v) => write!(f, "{v}"),
			Value::Strand(v) => write!(f, "'{v}'"),
			Value::Array(v) => write!(f, "{v}"),
			Value::Object(v) => write!(f, "{v}"),
			Value::Thing(v) => write!(f, "{v}"),
			Value::Idiom(v) => write!(f, "{v}"),
			Value::Expression(v) => write!(f, "{v}"),
			Value::Function(v) => write!(f, "{v}"),
			Value::Table(v) => write!(f, "{v}"),
			Value::Model(v) => write!(f, "{v}"),
			Value::Batch(v) => write!(f, "{v}"),
		}
	}
}
