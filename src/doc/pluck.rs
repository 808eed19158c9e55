use crate::dbs::Statement;
use crate::doc::Document;
use crate::err::Error;
use crate::sql::value::Value;

impl Document {
	/// Yield the output value for this record
	pub(super) fn pluck(&self, stm: &Statement) -> Result<Value, Error> {
		match stm {
			// When a GROUP clause is present the projection defers any
			// aggregate functions, storing their argument values for the
			// grouping stage to collect
			Statement::Select(s) => s.expr.compute(self.subject(), s.group.is_some()),
			_ => Ok(self.current.clone()),
		}
	}
}
