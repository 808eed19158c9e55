use crate::ctx::Context;
use crate::dbs::Options;
use crate::dbs::Statement;
use crate::dbs::Transaction;
use crate::doc::Document;
use crate::err::Error;
use crate::sql::value::Value;

impl Document {
	pub(super) async fn select(
		&mut self,
		_ctx: &Context<'_>,
		_opt: &Options,
		_txn: &Transaction,
		stm: &Statement,
	) -> Result<Value, Error> {
		// A direct record read must find a stored record
		if self.id.is_some() && self.overlay.is_none() && self.current.is_none() {
			return Err(Error::Ignore);
		}
		// Check where condition
		self.check(stm, self.subject())?;
		// Yield the projected fields
		self.pluck(stm)
	}
}
