//! Lock state trackers
//!
//! Every wrapper in this crate is generic over a [`Tracker`]. [`LockState`]
//! carries a sentinel tag and a count and checks each transition;
//! [`Untracked`] is zero-size and every operation on it compiles to nothing.
//! [`DefaultTracker`] picks one of the two from the `lock-debug` feature.

use core::sync::atomic::{AtomicI32, AtomicU32, Ordering};

use static_assertions::{assert_eq_size, assert_impl_all};
use tracing::trace;

use crate::op::{LockClass, LockOp};
use crate::violation;

/// Tag stored in every initialized [`LockState`]
pub const SENTINEL: u32 = 0xdead4ead;

/// Whether this build tracks lock state by default
pub const LOCK_DEBUG: bool = cfg!(feature = "lock-debug");

/// Tracker selected by the `lock-debug` feature
#[cfg(feature = "lock-debug")]
pub type DefaultTracker = LockState;

/// Tracker selected by the `lock-debug` feature
#[cfg(not(feature = "lock-debug"))]
pub type DefaultTracker = Untracked;

/// Per-instance bookkeeping behind a lock wrapper
pub trait Tracker: Sized {
    /// Freshly initialized, unlocked state
    const UNLOCKED: Self;

    /// Whether this tracker records anything at all
    const TRACKED: bool;

    /// Check `op` against the current state and apply it
    ///
    /// Panics with an [`InvariantViolation`](crate::InvariantViolation) if
    /// the precondition does not hold.
    fn transition(&self, class: LockClass, op: LockOp);

    /// Return to the unlocked state
    fn reset(&mut self) {
        *self = Self::UNLOCKED;
    }

    fn tag(&self) -> Option<u32>;

    fn count(&self) -> Option<i32>;
}

/// Sentinel tag and acquisition count
///
/// Fields are relaxed atomics so instances can live in `static`s and be
/// shared between threads. They give no exclusion of their own: callers
/// serialize through the host lock this state annotates.
#[repr(C)]
#[derive(Debug)]
pub struct LockState {
    tag: AtomicU32,
    count: AtomicI32,
}

assert_eq_size!(LockState, [u32; 2]);
assert_impl_all!(LockState: Send, Sync);

impl LockState {
    /// Build a state with explicit raw fields
    ///
    /// Mirrors memory that was never initialized, or was overwritten, so
    /// tests and the C boundary can model corrupted instances.
    pub const fn from_raw(tag: u32, count: i32) -> Self {
        Self {
            tag: AtomicU32::new(tag),
            count: AtomicI32::new(count),
        }
    }
}

impl Tracker for LockState {
    #[allow(clippy::declare_interior_mutable_const)]
    const UNLOCKED: Self = LockState::from_raw(SENTINEL, 0);
    const TRACKED: bool = true;

    #[track_caller]
    fn transition(&self, class: LockClass, op: LockOp) {
        let tag = self.tag.load(Ordering::Relaxed);
        let mut count = self.count.load(Ordering::Relaxed);

        // A lost race means a caller bypassed the host lock; recheck what it left
        loop {
            let next = match op.check(class, SENTINEL, tag, count) {
                Ok(next) => next,
                Err(v) => violation::fail(v),
            };
            match self
                .count
                .compare_exchange(count, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => {
                    trace!(class = %class, op = %op, count = next, "lock transition");
                    return;
                }
                Err(actual) => count = actual,
            }
        }
    }

    fn reset(&mut self) {
        *self.tag.get_mut() = SENTINEL;
        *self.count.get_mut() = 0;
    }

    fn tag(&self) -> Option<u32> {
        Some(self.tag.load(Ordering::Relaxed))
    }

    fn count(&self) -> Option<i32> {
        Some(self.count.load(Ordering::Relaxed))
    }
}

/// No state at all
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Untracked;

assert_eq_size!(Untracked, ());

impl Tracker for Untracked {
    const UNLOCKED: Self = Untracked;
    const TRACKED: bool = false;

    #[inline(always)]
    fn transition(&self, _class: LockClass, _op: LockOp) {}

    #[inline(always)]
    fn reset(&mut self) {}

    fn tag(&self) -> Option<u32> {
        None
    }

    fn count(&self) -> Option<i32> {
        None
    }
}
