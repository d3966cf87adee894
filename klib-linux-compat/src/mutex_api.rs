//! struct mutex API

use libc::c_int;

use crate::types::mutex;

/// Initialize a mutex in caller-owned memory
///
/// # Safety
/// `lock` must be valid for writes and suitably aligned
#[no_mangle]
pub unsafe extern "C" fn mutex_init(lock: *mut mutex) {
    lock.write(mutex::new());
}

/// # Safety
/// `lock` must point to an initialized mutex
#[no_mangle]
pub unsafe extern "C" fn mutex_lock(lock: *mut mutex) {
    (*lock).lock();
}

/// # Safety
/// `lock` must point to an initialized mutex
#[no_mangle]
pub unsafe extern "C" fn mutex_lock_nested(lock: *mut mutex, subclass: c_int) {
    (*lock).lock_nested(subclass as u32);
}

/// # Safety
/// `lock` must point to an initialized mutex
#[no_mangle]
pub unsafe extern "C" fn mutex_unlock(lock: *mut mutex) {
    (*lock).unlock();
}
