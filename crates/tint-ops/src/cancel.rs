//! Cooperative cancellation.
//!
//! Render loops take a `&dyn Stop` token from the `enough` crate and poll
//! it once per row. [`CancelFlag`] is a shared flag the host can raise from
//! any thread; use [`Unstoppable`] when cancellation is not needed.
//!
//! ```rust
//! use tint_ops::{CancelFlag, Stop};
//!
//! let flag = CancelFlag::new();
//! let worker_view = flag.clone();
//! assert!(!worker_view.should_stop());
//!
//! flag.cancel();
//! assert!(worker_view.should_stop());
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub use enough::{Stop, StopReason, Unstoppable};

/// Shared cancellation flag.
///
/// Clones share the same flag. Raising it is sticky until [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    raised: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Workers stop at their next row.
    #[inline]
    pub fn cancel(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Lower the flag so the same token can drive another render.
    pub fn reset(&self) {
        self.raised.store(false, Ordering::Release);
    }
}

impl Stop for CancelFlag {
    #[inline]
    fn check(&self) -> Result<(), StopReason> {
        if self.is_cancelled() {
            Err(StopReason::Cancelled)
        } else {
            Ok(())
        }
    }
}
