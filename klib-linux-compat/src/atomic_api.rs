//! atomic_t API

use libc::c_int;

use crate::types::atomic_t;

/// # Safety
/// `v` must point to a valid atomic_t
#[no_mangle]
pub unsafe extern "C" fn atomic_read(v: *const atomic_t) -> c_int {
    (*v).read()
}

/// # Safety
/// `v` must point to a valid atomic_t
#[no_mangle]
pub unsafe extern "C" fn atomic_set(v: *mut atomic_t, i: c_int) {
    (*v).set(i);
}

/// # Safety
/// `v` must point to a valid atomic_t
#[no_mangle]
pub unsafe extern "C" fn atomic_inc(v: *mut atomic_t) {
    (*v).inc();
}

/// # Safety
/// `v` must point to a valid atomic_t
#[no_mangle]
pub unsafe extern "C" fn atomic_dec_and_test(v: *mut atomic_t) -> bool {
    (*v).dec_and_test()
}
