//! Helpers shared by the Gherkin steps

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use klib_core::Atomic;
use klib_sync::{dec_and_lock, LockState, SpinLock};

/// Run `f` and return the violation message if it panicked
pub fn violation_of<F: FnOnce()>(f: F) -> Option<String> {
    let payload = catch_unwind(AssertUnwindSafe(f)).err()?;
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_owned()
    } else {
        String::from("<non-string panic payload>")
    };
    Some(message)
}

/// Outcome of several threads calling `dec_and_lock` on one counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceOutcome {
    /// Callers that saw the counter reach zero
    pub winners: usize,
    /// Counter value after every caller returned
    pub remaining: i32,
    /// Tracked count of the spin lock after every caller returned
    pub lock_count: Option<i32>,
}

/// Race `callers` threads through `dec_and_lock` on a counter at `start`
///
/// A `spin::Mutex` plays the host's real lock so the tracker sees properly
/// serialized acquire/release pairs. Winners release the tracked lock
/// before leaving the host lock, as a teardown path would.
pub fn race_dec_and_lock(start: i32, callers: usize) -> RaceOutcome {
    let host = spin::Mutex::new(());
    let counter = Atomic::new(start);
    let lock = SpinLock::<LockState>::unlocked();
    let winners = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..callers {
            s.spawn(|| {
                let _host = host.lock();
                if dec_and_lock(&counter, &lock) {
                    winners.fetch_add(1, Ordering::Relaxed);
                    lock.release();
                }
            });
        }
    });

    RaceOutcome {
        winners: winners.into_inner(),
        remaining: counter.read(),
        lock_count: lock.count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_of_clean_run() {
        assert_eq!(violation_of(|| {}), None);
    }

    #[test]
    fn test_violation_of_captures_message() {
        let lock = SpinLock::<LockState>::unlocked();
        let message = violation_of(|| lock.release()).expect("release must violate");
        assert!(message.contains("spinlock release: bad count"), "{message}");
    }

    #[test]
    fn test_race_single_winner() {
        let outcome = race_dec_and_lock(4, 4);
        assert_eq!(outcome.winners, 1);
        assert_eq!(outcome.remaining, 0);
        assert_eq!(outcome.lock_count, Some(0));
    }
}
