//! Ordered key encoding for the storage layer. Keys encode to byte strings
//! which sort grouped by namespace, database, and table, with all of the
//! records for a table forming one contiguous range.

pub mod database;
pub mod namespace;
pub mod table;
pub mod thing;
