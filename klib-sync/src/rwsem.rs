//! Reader/writer semaphore wrapper
//!
//! States are encoded in the count: `0` idle, `n > 0` held by `n` readers,
//! `-1` held by one writer. There is no upgrade or downgrade; a reader that
//! wants exclusive access releases and reacquires.

use crate::op::{LockClass, LockOp};
use crate::tracker::{DefaultTracker, Tracker};

/// Lock subclass passed to the `_nested` acquire variants
///
/// Only a naming hint for lock-order annotations; it has no effect on the
/// tracked state.
pub type Subclass = u32;

/// Subclass for taking a second lock of the same class
pub const SINGLE_DEPTH_NESTING: Subclass = 1;

/// Instrumented reader/writer semaphore
#[repr(C)]
#[derive(Debug)]
pub struct RwSemaphore<T: Tracker = DefaultTracker> {
    state: T,
}

impl RwSemaphore {
    /// Create an idle semaphore using the build's default tracker
    pub const fn new() -> Self {
        Self::unlocked()
    }
}

impl<T: Tracker> RwSemaphore<T> {
    /// Create an idle semaphore with an explicit tracker
    pub const fn unlocked() -> Self {
        Self { state: T::UNLOCKED }
    }

    /// Reinitialize to the idle state
    pub fn init(&mut self) {
        self.state.reset();
    }

    #[cfg(test)]
    pub(crate) fn from_state(state: T) -> Self {
        Self { state }
    }

    /// Record a read acquire; the semaphore must not be write-held
    #[inline]
    #[track_caller]
    pub fn acquire_read(&self) {
        self.transition(LockClass::RwSemaphore, LockOp::AcquireRead);
    }

    #[inline]
    #[track_caller]
    pub fn acquire_read_nested(&self, _subclass: Subclass) {
        self.acquire_read();
    }

    /// Record a write acquire; the semaphore must be idle
    #[inline]
    #[track_caller]
    pub fn acquire_write(&self) {
        self.transition(LockClass::RwSemaphore, LockOp::AcquireWrite);
    }

    #[inline]
    #[track_caller]
    pub fn acquire_write_nested(&self, _subclass: Subclass) {
        self.acquire_write();
    }

    /// Record a read release; at least one reader must hold the semaphore
    #[inline]
    #[track_caller]
    pub fn release_read(&self) {
        self.transition(LockClass::RwSemaphore, LockOp::ReleaseRead);
    }

    /// Record a write release; a writer must hold the semaphore
    #[inline]
    #[track_caller]
    pub fn release_write(&self) {
        self.transition(LockClass::RwSemaphore, LockOp::ReleaseWrite);
    }

    /// Acquire for reading and return a guard that releases on drop
    #[inline]
    #[track_caller]
    pub fn read(&self) -> ReadGuard<'_, T> {
        self.acquire_read();
        ReadGuard { sem: self }
    }

    #[inline]
    #[track_caller]
    pub fn read_nested(&self, subclass: Subclass) -> ReadGuard<'_, T> {
        self.acquire_read_nested(subclass);
        ReadGuard { sem: self }
    }

    /// Acquire for writing and return a guard that releases on drop
    #[inline]
    #[track_caller]
    pub fn write(&self) -> WriteGuard<'_, T> {
        self.acquire_write();
        WriteGuard { sem: self }
    }

    #[inline]
    #[track_caller]
    pub fn write_nested(&self, subclass: Subclass) -> WriteGuard<'_, T> {
        self.acquire_write_nested(subclass);
        WriteGuard { sem: self }
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

    /// Apply `op`, reporting any violation against `class`
    #[inline]
    #[track_caller]
    pub(crate) fn transition(&self, class: LockClass, op: LockOp) {
        self.state.transition(class, op);
    }
}

impl<T: Tracker> Default for RwSemaphore<T> {
    fn default() -> Self {
        Self::unlocked()
    }
}

/// RAII guard for a read-held RwSemaphore
#[must_use = "if unused the RwSemaphore will immediately release"]
pub struct ReadGuard<'a, T: Tracker = DefaultTracker> {
    sem: &'a RwSemaphore<T>,
}

impl<T: Tracker> Drop for ReadGuard<'_, T> {
    fn drop(&mut self) {
        self.sem.release_read();
    }
}

/// RAII guard for a write-held RwSemaphore
#[must_use = "if unused the RwSemaphore will immediately release"]
pub struct WriteGuard<'a, T: Tracker = DefaultTracker> {
    sem: &'a RwSemaphore<T>,
}

impl<T: Tracker> Drop for WriteGuard<'_, T> {
    fn drop(&mut self) {
        self.sem.release_write();
    }
}
