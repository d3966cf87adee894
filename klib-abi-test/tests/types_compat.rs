//! Lock Type ABI Compatibility Tests
//!
//! Verify the exported types match the shapes the C header declares

use klib_abi_test::{lock_words, verify_align, verify_size};
use klib_core::{Atomic, Kref};
use klib_linux_compat::{atomic_t, mutex, spinlock_t, LOCK_SIZE};
use klib_sync::{LockState, SpinLock, Untracked, LOCK_DEBUG, SENTINEL};
use static_assertions::*;

// typedef struct { int counter; } atomic_t;
verify_size!(Atomic, 4);
verify_align!(Atomic, 4);
verify_size!(Kref, 4);

// Tracked locks are { unsigned int magic; int lock; }
verify_size!(SpinLock<LockState>, 8);
verify_align!(SpinLock<LockState>, 4);

// Untracked locks are empty structs
verify_size!(SpinLock<Untracked>, 0);

assert_eq_size!(atomic_t, i32);
assert_eq_size!(mutex, spinlock_t);

#[test]
fn test_lock_size_follows_switch() {
    assert_eq!(core::mem::size_of::<spinlock_t>(), LOCK_SIZE);
    assert_eq!(LOCK_SIZE == 8, LOCK_DEBUG);
}

#[test]
fn test_static_initializer_words() {
    static LOCK: spinlock_t = spinlock_t::new();
    if LOCK_DEBUG {
        assert_eq!(lock_words(&LOCK), Some([SENTINEL, 0]));
    } else {
        assert_eq!(lock_words(&LOCK), None);
    }
}

#[test]
fn test_atomic_transparent() {
    let v = atomic_t::new(1234);
    let raw = &v as *const atomic_t as *const i32;
    unsafe {
        assert_eq!(*raw, 1234);
    }
}
