//! Mutex wrapper
//!
//! A mutex is an rw-semaphore that is only ever taken for writing.

use crate::op::{LockClass, LockOp};
use crate::rwsem::{RwSemaphore, Subclass};
use crate::tracker::{DefaultTracker, Tracker};

/// Instrumented mutex
#[repr(C)]
#[derive(Debug)]
pub struct Mutex<T: Tracker = DefaultTracker> {
    sem: RwSemaphore<T>,
}

impl Mutex {
    /// Create an unlocked mutex using the build's default tracker
    pub const fn new() -> Self {
        Self::unlocked()
    }
}

impl<T: Tracker> Mutex<T> {
    /// Create an unlocked mutex with an explicit tracker
    pub const fn unlocked() -> Self {
        Self {
            sem: RwSemaphore::unlocked(),
        }
    }

    pub fn init(&mut self) {
        self.sem.init();
    }

    #[cfg(test)]
    pub(crate) fn from_state(state: T) -> Self {
        Self {
            sem: RwSemaphore::from_state(state),
        }
    }

    #[inline]
    #[track_caller]
    pub fn lock(&self) {
        self.sem.transition(LockClass::Mutex, LockOp::AcquireWrite);
    }

    #[inline]
    #[track_caller]
    pub fn lock_nested(&self, _subclass: Subclass) {
        self.lock();
    }

    #[inline]
    #[track_caller]
    pub fn unlock(&self) {
        self.sem.transition(LockClass::Mutex, LockOp::ReleaseWrite);
    }

    /// Lock and return a guard that unlocks on drop
    #[inline]
    #[track_caller]
    pub fn guard(&self) -> MutexGuard<'_, T> {
        self.lock();
        MutexGuard { mutex: self }
    }

    #[inline]
    #[track_caller]
    pub fn guard_nested(&self, subclass: Subclass) -> MutexGuard<'_, T> {
        self.lock_nested(subclass);
        MutexGuard { mutex: self }
    }

    /// True while the tracked state records a holder
    ///
    /// Always false when untracked.
    pub fn is_locked(&self) -> bool {
        self.sem.count() == Some(-1)
    }

    pub fn is_tracked(&self) -> bool {
        T::TRACKED
    }

    pub fn count(&self) -> Option<i32> {
        self.sem.count()
    }

    pub fn tag(&self) -> Option<u32> {
        self.sem.tag()
    }
}

impl<T: Tracker> Default for Mutex<T> {
    fn default() -> Self {
        Self::unlocked()
    }
}

/// RAII guard for Mutex
#[must_use = "if unused the Mutex will immediately unlock"]
pub struct MutexGuard<'a, T: Tracker = DefaultTracker> {
    mutex: &'a Mutex<T>,
}

impl<T: Tracker> Drop for MutexGuard<'_, T> {
    fn drop(&mut self) {
        self.mutex.unlock();
    }
}
