use crate::ctx::Context;
use crate::dbs::Options;
use crate::dbs::Statement;
use crate::dbs::Transaction;
use crate::doc::Document;
use crate::err::Error;
use crate::sql::value::Value;

impl Document {
	pub(super) async fn delete(
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
		// Remove the record
		self.purge(opt, txn).await?;
		// Deletes produce no output rows
		Err(Error::Ignore)
	}
}
