//! Reset coordinator - cleanup callbacks drained on editor reset
//!
//! Configuration units and embedders subscribe zero-argument cleanup
//! callbacks for the lifetime of one editor session. When the host signals a
//! reset, every accumulated callback runs exactly once, in insertion order,
//! and the list ends the pass empty, ready for the next session.
//!
//! Two boundary conditions are pinned down here:
//!
//! - **Failure isolation**: a panicking callback is caught and logged; the
//!   remaining callbacks in the same pass still run.
//! - **Re-entrancy**: the backing list is swapped out before the pass and the
//!   lock released, so a callback that subscribes during the pass appends to
//!   the fresh list. It is never dropped and never runs in the active pass;
//!   it waits for the next reset.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Mutex;

use tracing::{debug, error};

type Cleanup = Box<dyn FnOnce() + Send>;

/// Ordered, appendable list of one-shot cleanup callbacks.
///
/// The coordinator itself lives as long as the editor; only its backing list
/// cycles between empty and populated.
#[derive(Default)]
pub struct ResetCoordinator {
    callbacks: Mutex<Vec<Cleanup>>,
}

impl ResetCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cleanup callback. O(1); runs on the next reset.
    pub fn subscribe(&self, cleanup: impl FnOnce() + Send + 'static) {
        self.callbacks.lock().unwrap().push(Box::new(cleanup));
    }

    /// Number of callbacks waiting for the next reset.
    pub fn pending(&self) -> usize {
        self.callbacks.lock().unwrap().len()
    }

    /// Run every accumulated callback in insertion order, then leave the list
    /// empty. Invoked by the host's reset signal.
    pub fn run_reset_pass(&self) {
        // Take the list and release the lock before invoking anything, so
        // callbacks may subscribe (for the next session) without deadlocking.
        let callbacks = std::mem::take(&mut *self.callbacks.lock().unwrap());
        let total = callbacks.len();
        debug!(total, "reset pass");
        for (index, cleanup) in callbacks.into_iter().enumerate() {
            if catch_unwind(AssertUnwindSafe(cleanup)).is_err() {
                error!(index, total, "cleanup callback panicked; continuing");
            }
        }
    }
}
