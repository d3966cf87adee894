//! Reference counter (kref equivalent)

use crate::atomic::{Atomic, DecAndTest};

/// Atomic reference counter
#[repr(transparent)]
#[derive(Debug)]
pub struct Kref {
    refcount: Atomic,
}

impl Kref {
    /// Create a new reference counter with initial value of 1
    pub const fn new() -> Self {
        Self {
            refcount: Atomic::new(1),
        }
    }

    /// Take another reference
    pub fn get(&self) {
        self.refcount.inc();
    }

    /// Drop a reference and return true if it was the last one
    pub fn put(&self) -> bool {
        self.refcount.dec_and_test()
    }

    /// Get current reference count (for debugging/testing only)
    pub fn count(&self) -> i32 {
        self.refcount.read()
    }
}

impl Default for Kref {
    fn default() -> Self {
        Self::new()
    }
}

impl DecAndTest for Kref {
    #[inline]
    fn dec_and_test(&self) -> bool {
        self.put()
    }
}
