use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Owns a resource that gets closed exactly once.
///
/// A `Close` starts open and moves to closed on the first call to
/// [`already`](Close::already) or [`close`](Close::close); it never reopens.
/// All synchronisation for closing lives here, so owners can share
/// themselves across threads and call `close` from any of them.
///
/// The lock is only held to hand out or take back the resource, never while
/// caller code runs on it. A `with` call still in flight when `close` runs
/// keeps its own reference; the resource is dropped once that call returns.
pub struct Close<T> {
    closed: AtomicBool,
    resource: Mutex<Option<Arc<T>>>,
}

impl<T> Close<T> {
    pub fn new(resource: T) -> Self {
        Close {
            closed: AtomicBool::new(false),
            resource: Mutex::new(Some(Arc::new(resource))),
        }
    }

    /// Mark this closed, returning true if it already was.
    ///
    /// Exactly one caller ever sees `false`; that caller is the one that
    /// should release the resource.
    pub fn already(&self) -> bool {
        self.closed.swap(true, Ordering::AcqRel)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Run `f` on the resource while it is still open.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        if self.is_closed() {
            return None;
        }
        let resource = self.lock().as_ref().map(Arc::clone)?;
        Some(f(&*resource))
    }

    /// Close and drop the resource, returning true if this call did it.
    /// Later calls do nothing and return false.
    pub fn close(&self) -> bool {
        if self.already() {
            return false;
        }
        drop(self.lock().take());
        true
    }

    // A panic while holding the lock can't leave the Option half-updated.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> fmt::Debug for Close<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Close")
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
