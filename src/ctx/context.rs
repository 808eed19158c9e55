use crate::ctx::canceller::Canceller;
use crate::ctx::reason::Reason;
use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// An execution context carrying the deadline and cancellation state for a
/// single unit of work. Contexts form a chain: a child is done as soon as
/// any of its ancestors is done.
pub struct Context<'a> {
	// An optional parent context.
	parent: Option<&'a Context<'a>>,
	// An optional deadline.
	deadline: Option<Instant>,
	// Whether or not this context is cancelled.
	cancelled: Option<Arc<AtomicBool>>,
}

impl<'a> Default for Context<'a> {
	fn default() -> Self {
		Context::background()
	}
}

impl<'a> Debug for Context<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Context")
			.field("parent", &self.parent)
			.field("deadline", &self.deadline)
			.field("cancelled", &self.cancelled)
			.finish()
	}
}

impl<'a> Context<'a> {
	/// Create an empty background context.
	pub fn background() -> Self {
		Context {
			parent: None,
			deadline: None,
			cancelled: None,
		}
	}

	/// Create a new child from a frozen context.
	pub fn new(parent: &'a Context) -> Self {
		Context {
			parent: Some(parent),
			deadline: parent.deadline,
			cancelled: None,
		}
	}

	/// Add cancellation to the context. The value that is returned will cancel
	/// the context and it's children once called.
	pub fn add_cancel(&mut self) -> Canceller {
		if let Some(c) = &self.cancelled {
			Canceller::new(c.clone())
		} else {
			let c = Arc::new(AtomicBool::new(false));
			self.cancelled = Some(c.clone());
			Canceller::new(c)
		}
	}

	/// Add a deadline to the context. If the current deadline is sooner than
	/// the provided deadline, this method does nothing.
	pub fn add_deadline(&mut self, deadline: Instant) {
		match self.deadline {
			Some(current) if current < deadline => (),
			_ => self.deadline = Some(deadline),
		}
	}

	/// Add a timeout to the context. If the current timeout is sooner than
	/// the provided timeout, this method does nothing.
	pub fn add_timeout(&mut self, timeout: Duration) {
		self.add_deadline(Instant::now() + timeout)
	}

	/// Get the timeout for this operation, if any. This is useful for
	/// checking if a long job should be started or not.
	pub fn timeout(&self) -> Option<Duration> {
		self.deadline.map(|v| v.saturating_duration_since(Instant::now()))
	}

	/// Check if the context is done. If it returns `None` the operation may
	/// proceed, otherwise the operation should be stopped.
	pub fn done(&self) -> Option<Reason> {
		// Did we reach the time out?
		if let Some(dl) = &self.deadline {
			if Instant::now().ge(dl) {
				return Some(Reason::Timedout);
			}
		}
		// Did we cancel this context?
		if let Some(c) = &self.cancelled {
			if c.load(Ordering::Relaxed) {
				return Some(Reason::Canceled);
			}
		}
		// Is the parent context done?
		if let Some(p) = self.parent {
			return p.done();
		}
		// Otherwise we're not done
		None
	}

	/// Check if the context is ok to continue.
	pub fn is_ok(&self) -> bool {
		self.done().is_none()
	}

	/// Check if the context is not ok to continue.
	pub fn is_done(&self) -> bool {
		self.done().is_some()
	}
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn cancelled_context_is_done() {
		let mut ctx = Context::background();
		let canceller = ctx.add_cancel();
		assert!(ctx.is_ok());
		canceller.cancel();
		assert!(ctx.is_done());
		assert_eq!(ctx.done(), Some(Reason::Canceled));
	}

	#[test]
	fn child_observes_parent_cancellation() {
		let mut root = Context::background();
		let canceller = root.add_cancel();
		let child = Context::new(&root);
		assert!(child.is_ok());
		canceller.cancel();
		assert!(child.is_done());
	}

	#[test]
	fn deadline_in_the_past_is_done() {
		let mut ctx = Context::background();
		ctx.add_deadline(Instant::now() - Duration::from_secs(1));
		assert_eq!(ctx.done(), Some(Reason::Timedout));
	}
}
