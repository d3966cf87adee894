//! Kernel synchronization primitive instrumentation
//!
//! This crate wraps the host's spin locks, reader/writer semaphores and
//! mutexes with bookkeeping that catches usage bugs: double acquires,
//! releases without an acquire, writers entering a read-held semaphore, and
//! use of uninitialized locks. It does not provide mutual exclusion itself.
//!
//! With the `lock-debug` feature the wrappers default to [`LockState`], a
//! sentinel tag plus a count checked on every transition. Without it they
//! default to [`Untracked`], which is zero-size, and every call compiles
//! away. Either tracker can also be named explicitly:
//!
//! ```
//! use klib_sync::{LockState, SpinLock};
//!
//! static LOCK: SpinLock<LockState> = SpinLock::unlocked();
//!
//! let guard = LOCK.guard();
//! assert_eq!(LOCK.count(), Some(1));
//! drop(guard);
//! assert_eq!(LOCK.count(), Some(0));
//! ```
//!
//! A violated precondition panics with an [`InvariantViolation`] message.

#![cfg_attr(not(test), no_std)]

pub mod dec_and_lock;
pub mod mutex;
pub mod op;
pub mod rwsem;
pub mod spinlock;
pub mod tracker;
pub mod violation;

pub use dec_and_lock::*;
pub use mutex::*;
pub use op::*;
pub use rwsem::*;
pub use spinlock::*;
pub use tracker::*;
pub use violation::{Breach, InvariantViolation};
