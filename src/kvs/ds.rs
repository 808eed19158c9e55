use crate::ctx::Context;
use crate::dbs::Executor;
use crate::dbs::Options;
use crate::err::Error;
use crate::kvs::tx::{Inner, Transaction};
use crate::kvs::LOG;
use crate::sql::Statement;
use crate::sql::Value;
use futures::lock::Mutex;
use std::sync::Arc;

/// An in-memory versioned key-value datastore. Every committed write is
/// stamped with a monotonically increasing sequence number, and reads can
/// be performed at any historic sequence.
#[derive(Clone)]
pub struct Datastore {
	inner: Arc<Mutex<Inner>>,
}

impl Default for Datastore {
	fn default() -> Self {
		Datastore::new()
	}
}

impl Datastore {
	/// Create a new datastore
	pub fn new() -> Datastore {
		info!(target: LOG, "Starting kvs store in memory");
		Datastore {
			inner: Arc::new(Mutex::new(Inner::default())),
		}
	}

	/// Start a new transaction on this datastore
	pub async fn transaction(&self, write: bool) -> Result<Transaction, Error> {
		Ok(Transaction::new(self.inner.clone(), write))
	}

	/// Process a single statement against this datastore
	pub async fn process(&self, stm: Statement, opt: &Options) -> Result<Value, Error> {
		let ctx = Context::background();
		self.process_with(&ctx, stm, opt).await
	}

	/// Process a single statement against this datastore, under the given
	/// execution context
	pub async fn process_with(
		&self,
		ctx: &Context<'_>,
		stm: Statement,
		opt: &Options,
	) -> Result<Value, Error> {
		let mut exe = Executor::new(self);
		exe.execute(ctx, opt, stm).await
	}
}
