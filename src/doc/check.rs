use crate::dbs::Statement;
use crate::doc::Document;
use crate::err::Error;
use crate::sql::value::Value;

impl Document {
	/// Check any WHERE condition against the given document, ignoring the
	/// record when the condition is not truthy
	pub(super) fn check(&self, stm: &Statement, doc: &Value) -> Result<(), Error> {
		if let Some(cond) = stm.conds() {
			if !cond.compute(Some(doc))?.is_truthy() {
				return Err(Error::Ignore);
			}
		}
		Ok(())
	}
}
