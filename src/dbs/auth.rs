use std::fmt;

/// The authentication level for a datastore execution context.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd)]
pub enum Level {
	No,
	Kv,
	Ns,
	Db,
	Sc,
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Level::No => write!(f, "unauthenticated"),
			Level::Kv => write!(f, "root"),
			Level::Ns => write!(f, "namespace"),
			Level::Db => write!(f, "database"),
			Level::Sc => write!(f, "scope"),
		}
	}
}

/// Specifies the current authentication for the datastore execution context.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Auth {
	/// Specifies that the user is not authenticated
	#[default]
	No,
	/// Specifies that the user has full permissions for the KV level
	Kv,
	/// Specifies that the user has full permissions for a particular Namespace
	Ns(String),
	/// Specifies that the user has full permissions for a particular Namespace and Database
	Db(String, String),
	/// Specifies that the user has full permissions for a particular Namespace, Database, and Scope
	Sc(String, String, String),
}

impl Auth {
	/// Return current authentication level
	pub fn level(&self) -> Level {
		match self {
			Auth::No => Level::No,
			Auth::Sc(_, _, _) => Level::Sc,
			Auth::Db(_, _) => Level::Db,
			Auth::Ns(_) => Level::Ns,
			Auth::Kv => Level::Kv,
		}
	}
	/// Checks whether permissions clauses need to be processed
	pub(crate) fn perms(&self) -> bool {
		match self {
			Auth::No => true,
			Auth::Sc(_, _, _) => true,
			Auth::Db(_, _) => false,
			Auth::Ns(_) => false,
			Auth::Kv => false,
		}
	}
}
