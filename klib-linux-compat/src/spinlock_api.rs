//! spinlock_t API

use klib_sync::dec_and_lock;
use libc::c_int;

use crate::types::{atomic_t, spinlock_t};

/// Initialize a spin lock in caller-owned memory
///
/// # Safety
/// `lock` must be valid for writes and suitably aligned
#[no_mangle]
pub unsafe extern "C" fn spin_lock_init(lock: *mut spinlock_t) {
    lock.write(spinlock_t::new());
}

/// # Safety
/// `lock` must point to an initialized spinlock_t
#[no_mangle]
pub unsafe extern "C" fn spin_lock(lock: *mut spinlock_t) {
    (*lock).acquire();
}

/// # Safety
/// `lock` must point to an initialized spinlock_t
#[no_mangle]
pub unsafe extern "C" fn spin_unlock(lock: *mut spinlock_t) {
    (*lock).release();
}

/// Decrement `atomic`; return 1 with `lock` held if it reached zero
///
/// # Safety
/// Both pointers must be valid and `lock` initialized
#[no_mangle]
pub unsafe extern "C" fn atomic_dec_and_lock(atomic: *mut atomic_t, lock: *mut spinlock_t) -> c_int {
    dec_and_lock(&*atomic, &*lock) as c_int
}
