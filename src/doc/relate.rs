use crate::ctx::Context;
use crate::dbs::Options;
use crate::dbs::Statement;
use crate::dbs::Transaction;
use crate::doc::Document;
use crate::err::Error;
use crate::sql::idiom::Idiom;
use crate::sql::value::Value;

impl Document {
	pub(super) async fn relate(
		&mut self,
		_ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
	) -> Result<Value, Error> {
		// Start from an empty document
		self.current = Value::base();
		// Stamp the relation endpoints
		if let Statement::Relate(s) = stm {
			match (s.from.compute(None)?, s.with.compute(None)?) {
				(f @ Value::Thing(_), w @ Value::Thing(_)) => {
					self.current.put(&Idiom::from("in"), f);
					self.current.put(&Idiom::from("out"), w);
				}
				(Value::Thing(_), w) => {
					return Err(Error::RelateStatement {
						value: w.to_string(),
					})
				}
				(f, _) => {
					return Err(Error::RelateStatement {
						value: f.to_string(),
					})
				}
			}
		}
		// Apply the statement data clause
		self.alter(stm)?;
		// Stamp the record id
		self.stamp();
		// Write the record
		self.store(opt, txn).await?;
		// Yield the document
		Ok(self.current.clone())
	}
}
