//! This library provides the query iteration core for opaldb, an embedded
//! document-graph database engine. For a single parsed statement it
//! enumerates candidate records from the storage layer, applies per-record
//! processing, and assembles the final result set under SQL-like semantics
//! for filtering, splitting, grouping, ordering, paging, and versioned
//! reads.
//!
//! Statements are built as ASTs using the types in [`sql`], and executed
//! against an in-memory versioned [`Datastore`].

#[macro_use]
extern crate log;

#[macro_use]
mod mac;

mod cnf;
mod ctx;
mod dbs;
mod doc;
mod err;
mod fnc;
mod key;
mod kvs;

// SQL
pub mod sql;

// Exports
pub use dbs::Auth;
pub use dbs::Level;
pub use dbs::Options;
pub use err::Error;
pub use kvs::Datastore;
pub use kvs::Key;
pub use kvs::Transaction;
pub use kvs::Val;
