//! Stopping a running simulation from another thread.

use std::{
    sync::{Arc, Condvar, Mutex, MutexGuard},
    time::Duration,
};

/// A handle to cancel a simulation.
///
/// Clones share the same flag. Once cancelled, a token stays cancelled.
///
/// The simulation checks the token before every transition,
/// and a pause between two transitions ends as soon as the token is cancelled.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    fn flag(&self) -> MutexGuard<'_, bool> {
        // The flag is a plain bool, so a poisoned lock still holds a valid value.
        self.inner.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Cancels the simulation, waking it up if it is pausing.
    pub fn cancel(&self) {
        *self.flag() = true;
        self.inner.1.notify_all();
    }

    /// Whether the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        *self.flag()
    }

    /// Blocks the current thread for `duration`, or until the token is cancelled.
    ///
    /// Returns `true` if the token was cancelled.
    pub fn sleep(&self, duration: Duration) -> bool {
        let guard = self.flag();
        if *guard || duration.is_zero() {
            return *guard;
        }
        let (guard, _) = self
            .inner
            .1
            .wait_timeout_while(guard, duration, |cancelled| !*cancelled)
            .unwrap_or_else(|e| e.into_inner());
        *guard
    }
}
