use crate::dbs::Auth;
use crate::err::Error;
use std::sync::Arc;

/// An Options is passed around when processing a statement, and specifies
/// the namespace and database to operate on, the authentication of the
/// request, and whether the statement runs on behalf of a view refresh.
#[derive(Clone, Debug)]
pub struct Options {
	/// Currently selected NS
	ns: Option<Arc<str>>,
	/// Currently selected DB
	db: Option<Arc<str>>,
	/// Currently selected authentication
	pub auth: Arc<Auth>,
	/// Whether this statement runs on behalf of a view refresh, in which
	/// case writes to view tables are permitted
	pub virt: bool,
}

impl Default for Options {
	fn default() -> Self {
		Options::new()
	}
}

impl Options {
	/// Create a new Options object
	pub fn new() -> Options {
		Options {
			ns: None,
			db: None,
			auth: Arc::new(Auth::No),
			virt: false,
		}
	}

	/// Set the selected NS
	pub fn with_ns(mut self, ns: &str) -> Self {
		self.ns = Some(ns.into());
		self
	}

	/// Set the selected DB
	pub fn with_db(mut self, db: &str) -> Self {
		self.db = Some(db.into());
		self
	}

	/// Set the authentication
	pub fn with_auth(mut self, auth: Auth) -> Self {
		self.auth = Arc::new(auth);
		self
	}

	/// Set whether this statement runs on behalf of a view refresh
	pub fn with_virt(mut self, virt: bool) -> Self {
		self.virt = virt;
		self
	}

	/// Get the currently selected NS. This panics if no NS has been
	/// selected, so ensure that `valid_for_db` has been checked first.
	pub fn ns(&self) -> &str {
		self.ns.as_ref().map(AsRef::as_ref).unwrap()
	}

	/// Get the currently selected DB. This panics if no DB has been
	/// selected, so ensure that `valid_for_db` has been checked first.
	pub fn db(&self) -> &str {
		self.db.as_ref().map(AsRef::as_ref).unwrap()
	}

	/// Check that a namespace and database are selected
	pub fn valid_for_db(&self) -> Result<(), Error> {
		if self.ns.is_none() {
			return Err(Error::NsEmpty);
		}
		if self.db.is_none() {
			return Err(Error::DbEmpty);
		}
		Ok(())
	}
}
