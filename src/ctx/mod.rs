pub use self::canceller::*;
pub use self::context::*;
pub use self::reason::*;

mod canceller;
mod context;
mod reason;
