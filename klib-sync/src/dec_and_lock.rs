//! Lock on reaching reference count zero

use klib_core::DecAndTest;

use crate::spinlock::{SpinGuard, SpinLock};
use crate::tracker::Tracker;

/// Decrement `counter` and keep `lock` held if it reached zero
///
/// The lock is taken before the decrement, so the caller that sees zero
/// holds it for the teardown and nobody else can observe the zero count
/// under the lock first. Returns true with the lock held, or false with
/// the lock released.
#[track_caller]
pub fn dec_and_lock<C, T>(counter: &C, lock: &SpinLock<T>) -> bool
where
    C: DecAndTest + ?Sized,
    T: Tracker,
{
    lock.acquire();
    if counter.dec_and_test() {
        return true;
    }
    lock.release();
    false
}

/// Scoped form of [`dec_and_lock`]
///
/// Returns the guard when the counter reached zero; the lock is released
/// when it drops.
#[track_caller]
pub fn dec_and_lock_guard<'a, C, T>(counter: &C, lock: &'a SpinLock<T>) -> Option<SpinGuard<'a, T>>
where
    C: DecAndTest + ?Sized,
    T: Tracker,
{
    let guard = lock.guard();
    counter.dec_and_test().then_some(guard)
}
