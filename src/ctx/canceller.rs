use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A one-shot cancellation latch for a context. Raising the latch is
/// idempotent: the first call cancels the context and its children, and
/// every subsequent call is a no-op.
#[derive(Clone, Debug, Default)]
pub struct Canceller {
	/// A reference to the shared cancellation status
	cancelled: Arc<AtomicBool>,
}

impl Canceller {
	/// Create a new canceller over the given status
	pub fn new(cancelled: Arc<AtomicBool>) -> Canceller {
		Canceller {
			cancelled,
		}
	}
	/// Cancel the context this canceller belongs to
	pub fn cancel(&self) {
		self.cancelled.store(true, Ordering::Relaxed);
	}
}
