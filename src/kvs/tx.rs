use crate::err::Error;
use crate::key;
use crate::kvs::{Key, Val};
use crate::sql::statements::define::DefineDatabaseStatement;
use crate::sql::statements::define::DefineNamespaceStatement;
use crate::sql::statements::define::DefineTableStatement;
use futures::lock::Mutex;
use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::Arc;

/// The shared state of a datastore: a monotone commit sequence, and a
/// version chain per key. A `None` entry in a chain is a deletion.
#[derive(Default)]
pub(crate) struct Inner {
	pub(crate) seq: u64,
	pub(crate) keys: BTreeMap<Key, BTreeMap<u64, Option<Val>>>,
}

/// A transaction over the datastore. Writes are buffered in a local
/// writeset, and are stamped with the next commit sequence when the
/// transaction commits. Reads overlay the writeset over the store state
/// at the requested version.
pub struct Transaction {
	/// Is the transaction complete?
	ok: bool,
	/// Is the transaction read+write?
	rw: bool,
	/// The buffered writes of this transaction
	pending: BTreeMap<Key, Option<Val>>,
	/// The shared datastore state
	inner: Arc<Mutex<Inner>>,
}

impl Transaction {
	pub(crate) fn new(inner: Arc<Mutex<Inner>>, write: bool) -> Transaction {
		Transaction {
			ok: false,
			rw: write,
			pending: BTreeMap::new(),
			inner,
		}
	}

	/// Check if closed
	pub fn closed(&self) -> bool {
		self.ok
	}

	/// Cancel a transaction
	pub async fn cancel(&mut self) -> Result<(), Error> {
		// Check to see if transaction is closed
		if self.ok {
			return Err(Error::TxFinished);
		}
		// Mark this transaction as done
		self.ok = true;
		// Discard any buffered writes
		self.pending.clear();
		// Continue
		Ok(())
	}

	/// Commit a transaction
	pub async fn commit(&mut self) -> Result<(), Error> {
		// Check to see if transaction is closed
		if self.ok {
			return Err(Error::TxFinished);
		}
		// Check to see if transaction is writable
		if !self.rw {
			return Err(Error::TxReadonly);
		}
		// Mark this transaction as done
		self.ok = true;
		// Stamp all writes with the next commit sequence
		let mut inner = self.inner.lock().await;
		inner.seq += 1;
		let seq = inner.seq;
		for (k, v) in std::mem::take(&mut self.pending) {
			inner.keys.entry(k).or_default().insert(seq, v);
		}
		// Continue
		Ok(())
	}

	/// Check if a key exists
	pub async fn exi(&mut self, key: Key) -> Result<bool, Error> {
		Ok(self.get(u64::MAX, key).await?.is_some())
	}

	/// Fetch a key from the datastore at the specified version
	pub async fn get(&mut self, version: u64, key: Key) -> Result<Option<Val>, Error> {
		// Check to see if transaction is closed
		if self.ok {
			return Err(Error::TxFinished);
		}
		// Check the buffered writes first
		if let Some(v) = self.pending.get(&key) {
			return Ok(v.clone());
		}
		// Fetch the latest entry at or before the version
		let inner = self.inner.lock().await;
		let res = inner
			.keys
			.get(&key)
			.and_then(|chain| chain.range(..=version).next_back())
			.and_then(|(_, v)| v.clone());
		Ok(res)
	}

	/// Insert or update a key in the datastore
	pub async fn set(&mut self, key: Key, val: Val) -> Result<(), Error> {
		// Check to see if transaction is closed
		if self.ok {
			return Err(Error::TxFinished);
		}
		// Check to see if transaction is writable
		if !self.rw {
			return Err(Error::TxReadonly);
		}
		// Buffer the write
		self.pending.insert(key, Some(val));
		// Continue
		Ok(())
	}

	/// Insert a key in the datastore if it doesn't exist
	pub async fn put(&mut self, key: Key, val: Val) -> Result<(), Error> {
		// Check the key
		if self.get(u64::MAX, key.clone()).await?.is_some() {
			return Err(Error::TxKeyAlreadyExists);
		}
		// Set the key
		self.set(key, val).await
	}

	/// Delete a key from the datastore
	pub async fn del(&mut self, key: Key) -> Result<(), Error> {
		// Check to see if transaction is closed
		if self.ok {
			return Err(Error::TxFinished);
		}
		// Check to see if transaction is writable
		if !self.rw {
			return Err(Error::TxReadonly);
		}
		// Buffer the deletion
		self.pending.insert(key, None);
		// Continue
		Ok(())
	}

	/// Retrieve a page of key-value pairs from the datastore, in ascending
	/// key order, at the specified version
	pub async fn getr(
		&mut self,
		version: u64,
		rng: Range<Key>,
		limit: u32,
	) -> Result<Vec<(Key, Val)>, Error> {
		// Check to see if transaction is closed
		if self.ok {
			return Err(Error::TxFinished);
		}
		// Merge the store state at the version with the buffered writes
		let mut out: BTreeMap<Key, Val> = BTreeMap::new();
		let inner = self.inner.lock().await;
		for (k, chain) in inner.keys.range(rng.clone()) {
			if let Some((_, Some(v))) = chain.range(..=version).next_back() {
				out.insert(k.clone(), v.clone());
			}
		}
		for (k, v) in self.pending.range(rng) {
			match v {
				Some(v) => {
					out.insert(k.clone(), v.clone());
				}
				None => {
					out.remove(k);
				}
			}
		}
		Ok(out.into_iter().take(limit as usize).collect())
	}

	// -----------------------------------
	// Catalog entries
	// -----------------------------------

	/// Retrieve a namespace definition
	pub async fn get_ns(&mut self, ns: &str) -> Result<DefineNamespaceStatement, Error> {
		let key = key::namespace::new(ns).encode()?;
		match self.get(u64::MAX, key).await? {
			Some(v) => Ok(msgpack::from_slice(&v)?),
			None => Err(Error::NsNotFound),
		}
	}

	/// Retrieve a database definition
	pub async fn get_db(&mut self, ns: &str, db: &str) -> Result<DefineDatabaseStatement, Error> {
		let key = key::database::new(ns, db).encode()?;
		match self.get(u64::MAX, key).await? {
			Some(v) => Ok(msgpack::from_slice(&v)?),
			None => Err(Error::DbNotFound),
		}
	}

	/// Retrieve a table definition
	pub async fn get_tb(&mut self, ns: &str, db: &str, tb: &str) -> Result<DefineTableStatement, Error> {
		let key = key::table::new(ns, db, tb).encode()?;
		match self.get(u64::MAX, key).await? {
			Some(v) => Ok(msgpack::from_slice(&v)?),
			None => Err(Error::TbNotFound),
		}
	}

	/// Retrieve a namespace definition, creating it if it doesn't exist
	pub async fn add_ns(&mut self, ns: &str) -> Result<DefineNamespaceStatement, Error> {
		match self.get_ns(ns).await {
			Err(Error::NsNotFound) => {
				let val = DefineNamespaceStatement {
					name: ns.to_owned(),
				};
				let key = key::namespace::new(ns).encode()?;
				self.set(key, msgpack::to_vec(&val)?).await?;
				Ok(val)
			}
			res => res,
		}
	}

	/// Retrieve a database definition, creating it if it doesn't exist
	pub async fn add_db(&mut self, ns: &str, db: &str) -> Result<DefineDatabaseStatement, Error> {
		self.add_ns(ns).await?;
		match self.get_db(ns, db).await {
			Err(Error::DbNotFound) => {
				let val = DefineDatabaseStatement {
					name: db.to_owned(),
				};
				let key = key::database::new(ns, db).encode()?;
				self.set(key, msgpack::to_vec(&val)?).await?;
				Ok(val)
			}
			res => res,
		}
	}

	/// Retrieve a table definition, creating it if it doesn't exist
	pub async fn add_tb(&mut self, ns: &str, db: &str, tb: &str) -> Result<DefineTableStatement, Error> {
		self.add_db(ns, db).await?;
		match self.get_tb(ns, db, tb).await {
			Err(Error::TbNotFound) => {
				let val = DefineTableStatement {
					name: tb.to_owned(),
					..Default::default()
				};
				let key = key::table::new(ns, db, tb).encode()?;
				self.set(key, msgpack::to_vec(&val)?).await?;
				Ok(val)
			}
			res => res,
		}
	}

	/// Store a table definition, replacing any existing definition
	pub async fn set_tb(
		&mut self,
		ns: &str,
		db: &str,
		dt: &DefineTableStatement,
	) -> Result<(), Error> {
		self.add_db(ns, db).await?;
		let key = key::table::new(ns, db, &dt.name).encode()?;
		self.set(key, msgpack::to_vec(dt)?).await
	}
}
