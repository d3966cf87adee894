//! Linux Kernel ABI Compatibility Adapter
//!
//! This crate exposes klib's instrumented locks to C code under the names
//! the Linux headers use. Types are layout-compatible with the C structs:
//!
//! ```text
//! typedef struct {
//! #ifdef LOCK_DEBUG
//!     unsigned int magic;
//!     int lock;
//! #endif
//! } spinlock_t;
//! ```
//!
//! `struct rw_semaphore` has the same shape with `count` in place of `lock`,
//! and `struct mutex` wraps one `struct rw_semaphore`. The C side must
//! define `LOCK_DEBUG` exactly when this crate is built with the
//! `lock-debug` feature.
//!
//! # Violations
//!
//! A misused lock panics inside an `extern "C"` function. Panics cannot
//! unwind into C, so the process aborts at the faulty call.

#![cfg_attr(not(test), no_std)]
#![allow(non_camel_case_types)]

pub mod atomic_api;
pub mod mutex_api;
pub mod rwsem_api;
pub mod spinlock_api;
pub mod types;

pub use types::*;

/// Marker module to identify Linux compatibility layer
pub mod linux_compat {
    //! Code in this crate should:
    //!
    //! - Match the Linux lock API names and argument order
    //! - Use layout-compatible types only
    //! - Export with #[no_mangle] and the "C" calling convention
    //! - Forward to klib-sync without adding behaviour
}
