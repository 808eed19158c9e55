//! Statement processing module, which is the core of the database engine.
//! In this module an executor prepares the sources of a statement into an
//! iterator, and the iterator drains each source through the per-record
//! document processor, assembling the final result set.

mod auth;
mod executor;
mod iterator;
mod options;
mod statement;
mod transaction;

pub use self::auth::*;
pub use self::options::*;

pub(crate) use self::executor::*;
pub(crate) use self::iterator::*;
pub(crate) use self::statement::*;
pub(crate) use self::transaction::*;

pub const LOG: &str = "opaldb::dbs";
