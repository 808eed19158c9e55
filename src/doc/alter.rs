use crate::dbs::Statement;
use crate::doc::Document;
use crate::err::Error;
use crate::sql::data::Data;
use crate::sql::idiom::Idiom;
use crate::sql::value::Value;

impl Document {
	/// Merge the fields of the supplied object into the document
	pub(super) fn merge(&mut self, val: Value) {
		if self.current.is_none() {
			self.current = Value::base();
		}
		if let (Value::Object(cur), Value::Object(val)) = (&mut self.current, val) {
			for (k, v) in val {
				cur.insert(k, v);
			}
		}
	}

	/// Apply the statement data clause to the document
	pub(super) fn alter(&mut self, stm: &Statement) -> Result<(), Error> {
		match stm.data() {
			Some(Data::ContentExpression(v)) => {
				self.current = v.compute(None)?;
			}
			Some(Data::MergeExpression(v)) => {
				let val = v.compute(None)?;
				self.merge(val);
			}
			Some(Data::SetExpression(x)) => {
				for (k, v) in x {
					let val = v.compute(Some(&self.current))?;
					self.current.put(k, val);
				}
			}
			None => (),
		}
		Ok(())
	}

	/// Stamp the canonical record id on the document
	pub(super) fn stamp(&mut self) {
		if let Some(id) = self.id.clone() {
			self.current.put(&Idiom::from("id"), Value::Thing(id));
		}
	}
}
