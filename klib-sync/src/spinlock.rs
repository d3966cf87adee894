//! Spin lock wrapper
//!
//! The spin lock itself is the host's. This wrapper records whether it is
//! held and catches double acquires and releases without an acquire.

use crate::op::{LockClass, LockOp};
use crate::tracker::{DefaultTracker, Tracker};

/// Instrumented spin lock
#[repr(C)]
#[derive(Debug)]
pub struct SpinLock<T: Tracker = DefaultTracker> {
    state: T,
}

impl SpinLock {
    /// Create an unlocked spin lock using the build's default tracker
    pub const fn new() -> Self {
        Self::unlocked()
    }
}

impl<T: Tracker> SpinLock<T> {
    /// Create an unlocked spin lock with an explicit tracker
    pub const fn unlocked() -> Self {
        Self { state: T::UNLOCKED }
    }

    /// Reinitialize to the unlocked state
    pub fn init(&mut self) {
        self.state.reset();
    }

    /// Record an acquire
    ///
    /// The lock must be initialized and not held.
    #[inline]
    #[track_caller]
    pub fn acquire(&self) {
        self.state.transition(LockClass::Spin, LockOp::Acquire);
    }

    /// Record a release
    ///
    /// The lock must be initialized and held.
    #[inline]
    #[track_caller]
    pub fn release(&self) {
        self.state.transition(LockClass::Spin, LockOp::Release);
    }

    /// Acquire and return a guard that releases on drop
    #[inline]
    #[track_caller]
    pub fn guard(&self) -> SpinGuard<'_, T> {
        self.acquire();
        SpinGuard { lock: self }
    }

    pub fn is_tracked(&self) -> bool {
        T::TRACKED
    }

    /// Current count, `None` when untracked
    pub fn count(&self) -> Option<i32> {
        self.state.count()
    }

    /// Current tag, `None` when untracked
    pub fn tag(&self) -> Option<u32> {
        self.state.tag()
    }

    #[cfg(test)]
    pub(crate) fn from_state(state: T) -> Self {
        Self { state }
    }
}

impl<T: Tracker> Default for SpinLock<T> {
    fn default() -> Self {
        Self::unlocked()
    }
}

/// RAII guard for SpinLock
#[must_use = "if unused the SpinLock will immediately release"]
pub struct SpinGuard<'a, T: Tracker = DefaultTracker> {
    lock: &'a SpinLock<T>,
}

impl<'a, T: Tracker> SpinGuard<'a, T> {
    /// The lock this guard holds
    pub fn lock(&self) -> &'a SpinLock<T> {
        self.lock
    }
}

impl<T: Tracker> Drop for SpinGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.release();
    }
}
