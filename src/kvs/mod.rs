mod ds;
mod tx;

pub use self::ds::*;
pub use self::tx::*;

pub const LOG: &str = "opaldb::kvs";

/// The key part of a key-value pair. An alias for [`Vec<u8>`].
pub type Key = Vec<u8>;

/// The value part of a key-value pair. An alias for [`Vec<u8>`].
pub type Val = Vec<u8>;
