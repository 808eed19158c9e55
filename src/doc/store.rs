use crate::dbs::Options;
use crate::dbs::Transaction;
use crate::doc::Document;
use crate::err::Error;
use crate::key;

impl Document {
	/// Write the document contents to the datastore
	pub(super) async fn store(&self, opt: &Options, txn: &Transaction) -> Result<(), Error> {
		if let Some(id) = &self.id {
			let key = key::thing::new(opt.ns(), opt.db(), &id.tb, &id.id).encode()?;
			txn.lock().await.set(key, msgpack::to_vec(&self.current)?).await?;
		}
		Ok(())
	}

	/// Remove the document from the datastore
	pub(super) async fn purge(&self, opt: &Options, txn: &Transaction) -> Result<(), Error> {
		if let Some(id) = &self.id {
			let key = key::thing::new(opt.ns(), opt.db(), &id.tb, &id.id).encode()?;
			txn.lock().await.del(key).await?;
		}
		Ok(())
	}
}
