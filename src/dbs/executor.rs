use crate::ctx::Context;
use crate::dbs::Iterable;
use crate::dbs::Iterator;
use crate::dbs::Options;
use crate::dbs::Statement;
use crate::dbs::Transaction;
use crate::err::Error;
use crate::kvs::Datastore;
use crate::sql;
use crate::sql::array::Array;
use crate::sql::id::Id;
use crate::sql::thing::Thing;
use crate::sql::value::Value;
use futures::lock::Mutex;
use std::sync::Arc;

/// An Executor processes a single statement: it starts a transaction on
/// the datastore, prepares the statement's sources into an iterator,
/// drives the iterator, and commits or cancels the transaction depending
/// on the outcome.
pub(crate) struct Executor<'a> {
	kvs: &'a Datastore,
}

impl<'a> Executor<'a> {
	pub fn new(kvs: &'a Datastore) -> Executor<'a> {
		Executor {
			kvs,
		}
	}

	/// Execute a parsed statement, returning the assembled result set
	pub async fn execute(
		&mut self,
		ctx: &Context<'_>,
		opt: &Options,
		stm: sql::Statement,
	) -> Result<Value, Error> {
		// A namespace and database must be selected
		opt.valid_for_db()?;
		// Wrap the parsed statement for processing
		let stm = Statement::from(stm);
		// Start a new transaction on the datastore
		let txn = self.kvs.transaction(stm.writeable()).await?;
		let txn: Transaction = Arc::new(Mutex::new(txn));
		// Run the statement through a new iterator
		let res = self.run(ctx, opt, &txn, &stm).await;
		// Commit or cancel the transaction
		match res {
			Ok(v) => {
				match stm.writeable() {
					true => txn.lock().await.commit().await?,
					false => txn.lock().await.cancel().await?,
				};
				Ok(v)
			}
			Err(e) => {
				let _ = txn.lock().await.cancel().await;
				Err(e)
			}
		}
	}

	async fn run(
		&mut self,
		ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
	) -> Result<Value, Error> {
		// Create a new iterator
		let mut ite = Iterator::new(opt.virt);
		// Prepare the statement sources
		match stm {
			Statement::Select(v) => {
				for w in v.what.iter() {
					self.ingest(stm, &mut ite, w.compute(None)?);
				}
			}
			Statement::Create(v) => {
				for w in v.what.iter() {
					self.ingest(stm, &mut ite, w.compute(None)?);
				}
			}
			Statement::Update(v) => {
				for w in v.what.iter() {
					self.ingest(stm, &mut ite, w.compute(None)?);
				}
			}
			Statement::Delete(v) => {
				for w in v.what.iter() {
					self.ingest(stm, &mut ite, w.compute(None)?);
				}
			}
			// A relation is a new record in the relation table
			Statement::Relate(v) => {
				ite.ingest(Iterable::Thing(Thing {
					tb: v.kind.0.clone(),
					id: Id::rand(),
				}));
			}
			// The insert payload is an inline array for the target table
			Statement::Insert(v) => {
				let arr = match v.data.compute(None)? {
					Value::Array(v) => v,
					v => Array::from(v),
				};
				ite.ingest(Iterable::Array(v.into.0.clone(), arr));
			}
			Statement::Upsert(v) => {
				let arr = match v.data.compute(None)? {
					Value::Array(v) => v,
					v => Array::from(v),
				};
				ite.ingest(Iterable::Array(v.into.0.clone(), arr));
			}
		}
		// Process the iterator
		ite.output(ctx, opt, txn, stm).await
	}

	/// Route a computed source value to the relevant source driver
	fn ingest(&self, stm: &Statement, ite: &mut Iterator, v: Value) {
		match v {
			Value::Thing(v) => ite.ingest(Iterable::Thing(v)),
			// Creating on a table target creates one new record
			Value::Table(v) => match stm {
				Statement::Create(_) => ite.ingest(Iterable::Thing(Thing {
					tb: v.0,
					id: Id::rand(),
				})),
				_ => ite.ingest(Iterable::Table(v)),
			},
			Value::Model(v) => ite.ingest(Iterable::Model(v)),
			Value::Batch(v) => ite.ingest(Iterable::Batch(v)),
			// Arrays are subquery feeds, or inline contents for a create
			Value::Array(v) => match stm {
				Statement::Select(_) => ite.ingest(Iterable::Query(v)),
				Statement::Create(_) => ite.ingest(Iterable::Array(String::new(), v)),
				_ => ite.ingest(Iterable::Other(v)),
			},
			// Any other value is consumed directly
			v => match stm {
				Statement::Select(_) => ite.ingest(Iterable::Query(Array::from(v))),
				_ => ite.ingest(Iterable::Other(Array::from(v))),
			},
		}
	}
}
