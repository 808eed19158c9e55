use crate::ctx::Context;
use crate::dbs::Options;
use crate::dbs::Statement;
use crate::dbs::Transaction;
use crate::doc::Document;
use crate::err::Error;
use crate::sql::value::Value;

impl Document {
	pub(super) async fn update(
		&mut self,
		_ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
	) -> Result<Value, Error> {
		// The record must exist
		if self.current.is_none() {
			return Err(Error::Ignore);
		}
		// Check where condition
		self.check(stm, &self.current)?;
		// Apply the supplied record contents
		if let Some(v) = self.overlay.take() {
			self.merge(v);
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
