//! Linux-compatible type definitions

use core::mem::{align_of, size_of};

use klib_core::Atomic;
use klib_sync::{Mutex, RwSemaphore, SpinLock, LOCK_DEBUG};

use static_assertions::{assert_eq_size, const_assert, const_assert_eq};

pub type atomic_t = Atomic;
pub type spinlock_t = SpinLock;
pub type rw_semaphore = RwSemaphore;
pub type mutex = Mutex;

/// Size of the lock types as seen by C for this build
pub const LOCK_SIZE: usize = if LOCK_DEBUG {
    2 * size_of::<libc::c_uint>()
} else {
    0
};

assert_eq_size!(atomic_t, libc::c_int);
const_assert_eq!(size_of::<spinlock_t>(), LOCK_SIZE);
const_assert_eq!(size_of::<rw_semaphore>(), LOCK_SIZE);
const_assert_eq!(size_of::<mutex>(), LOCK_SIZE);
const_assert!(!LOCK_DEBUG || align_of::<spinlock_t>() == align_of::<libc::c_uint>());
