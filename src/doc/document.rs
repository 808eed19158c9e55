use crate::ctx::Context;
use crate::dbs::Options;
use crate::dbs::Statement;
use crate::dbs::Transaction;
use crate::err::Error;
use crate::key;
use crate::kvs::Val;
use crate::sql::thing::Thing;
use crate::sql::value::Value;

/// A single record under evaluation.
#[derive(Clone, Debug)]
pub(crate) struct Document {
	/// The record id, if the statement addresses one
	pub(super) id: Option<Thing>,
	/// The stored record value as it is being modified
	pub(super) current: Value,
	/// In-memory record contents supplied with the statement
	pub(super) overlay: Option<Value>,
}

impl Document {
	pub fn new(id: Option<Thing>, val: Value, overlay: Option<Value>) -> Self {
		Document {
			id,
			current: val,
			overlay,
		}
	}

	/// The document which read conditions and projections apply to
	pub(super) fn subject(&self) -> &Value {
		match self.overlay {
			Some(ref v) => v,
			None => &self.current,
		}
	}

	/// Process a single record against the statement. The stored record
	/// value is decoded when supplied, or fetched at the iteration version
	/// when only a record id is known.
	pub(crate) async fn process(
		ctx: &Context<'_>,
		opt: &Options,
		txn: &Transaction,
		stm: &Statement,
		version: u64,
		thg: Option<Thing>,
		val: Option<Val>,
		doc: Option<Value>,
	) -> Result<Value, Error> {
		// Materialise the stored record value
		let current = match (&val, &thg) {
			(Some(v), _) => msgpack::from_slice(v)?,
			(None, Some(t)) => {
				let key = key::thing::new(opt.ns(), opt.db(), &t.tb, &t.id).encode()?;
				match txn.lock().await.get(version, key).await? {
					Some(v) => msgpack::from_slice(&v)?,
					None => Value::None,
				}
			}
			(None, None) => Value::None,
		};
		// Setup a new document
		let mut doc = Document::new(thg, current, doc);
		// Process the statement
		match stm {
			Statement::Select(_) => doc.select(ctx, opt, txn, stm).await,
			Statement::Create(_) => doc.create(ctx, opt, txn, stm).await,
			Statement::Update(_) => doc.update(ctx, opt, txn, stm).await,
			Statement::Relate(_) => doc.relate(ctx, opt, txn, stm).await,
			Statement::Delete(_) => doc.delete(ctx, opt, txn, stm).await,
			Statement::Insert(_) => doc.insert(ctx, opt, txn, stm).await,
			Statement::Upsert(_) => doc.upsert(ctx, opt, txn, stm).await,
		}
	}
}
