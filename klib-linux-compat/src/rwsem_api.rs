//! struct rw_semaphore API

use libc::c_int;

use crate::types::rw_semaphore;

/// Initialize a semaphore in caller-owned memory
///
/// # Safety
/// `sem` must be valid for writes and suitably aligned
#[no_mangle]
pub unsafe extern "C" fn init_rwsem(sem: *mut rw_semaphore) {
    sem.write(rw_semaphore::new());
}

/// # Safety
/// `sem` must point to an initialized rw_semaphore
#[no_mangle]
pub unsafe extern "C" fn down_read(sem: *mut rw_semaphore) {
    (*sem).acquire_read();
}

/// # Safety
/// `sem` must point to an initialized rw_semaphore
#[no_mangle]
pub unsafe extern "C" fn down_read_nested(sem: *mut rw_semaphore, subclass: c_int) {
    (*sem).acquire_read_nested(subclass as u32);
}

/// # Safety
/// `sem` must point to an initialized rw_semaphore
#[no_mangle]
pub unsafe extern "C" fn down_write(sem: *mut rw_semaphore) {
    (*sem).acquire_write();
}

/// # Safety
/// `sem` must point to an initialized rw_semaphore
#[no_mangle]
pub unsafe extern "C" fn down_write_nested(sem: *mut rw_semaphore, subclass: c_int) {
    (*sem).acquire_write_nested(subclass as u32);
}

/// # Safety
/// `sem` must point to an initialized rw_semaphore
#[no_mangle]
pub unsafe extern "C" fn up_read(sem: *mut rw_semaphore) {
    (*sem).release_read();
}

/// # Safety
/// `sem` must point to an initialized rw_semaphore
#[no_mangle]
pub unsafe extern "C" fn up_write(sem: *mut rw_semaphore) {
    (*sem).release_write();
}
