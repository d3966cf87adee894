//! Atomic integer (`atomic_t` equivalent)
//!
//! Operations that do not return a value are relaxed. Operations that return
//! a value or test the result are fully ordered, so a caller that observes a
//! counter reach zero also observes every write made before the other
//! decrements.

use core::sync::atomic::{AtomicI32, AtomicIsize, AtomicU32, AtomicUsize, Ordering};

use static_assertions::assert_eq_size;

/// Atomic 32-bit signed counter
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct Atomic {
    counter: AtomicI32,
}

assert_eq_size!(Atomic, i32);

impl Atomic {
    /// Create a counter holding `value`
    pub const fn new(value: i32) -> Self {
        Self {
            counter: AtomicI32::new(value),
        }
    }

    /// Read the current value
    #[inline]
    pub fn read(&self) -> i32 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Overwrite the current value
    #[inline]
    pub fn set(&self, value: i32) {
        self.counter.store(value, Ordering::Relaxed);
    }

    #[inline]
    pub fn add(&self, delta: i32) {
        self.counter.fetch_add(delta, Ordering::Relaxed);
    }

    #[inline]
    pub fn sub(&self, delta: i32) {
        self.counter.fetch_sub(delta, Ordering::Relaxed);
    }

    #[inline]
    pub fn inc(&self) {
        self.add(1);
    }

    #[inline]
    pub fn dec(&self) {
        self.sub(1);
    }

    /// Add `delta` and return the new value
    #[inline]
    pub fn add_return(&self, delta: i32) -> i32 {
        self.counter
            .fetch_add(delta, Ordering::SeqCst)
            .wrapping_add(delta)
    }

    /// Subtract `delta` and return the new value
    #[inline]
    pub fn sub_return(&self, delta: i32) -> i32 {
        self.counter
            .fetch_sub(delta, Ordering::SeqCst)
            .wrapping_sub(delta)
    }

    /// Increment and return true if the result is zero
    #[inline]
    pub fn inc_and_test(&self) -> bool {
        self.add_return(1) == 0
    }

    /// Decrement and return true if the result is zero
    #[inline]
    pub fn dec_and_test(&self) -> bool {
        self.sub_return(1) == 0
    }

    /// Consume the counter and return its value
    pub fn into_inner(self) -> i32 {
        self.counter.into_inner()
    }
}

/// Atomic decrement with a "reached zero" observation
///
/// This is the host counter consumed by lock helpers such as
/// `dec_and_lock`. Implementations must perform the decrement as a single
/// atomic read-modify-write and report whether the new value is zero.
pub trait DecAndTest {
    /// Decrement by one and return true if the result is zero
    fn dec_and_test(&self) -> bool;
}

impl DecAndTest for Atomic {
    #[inline]
    fn dec_and_test(&self) -> bool {
        Atomic::dec_and_test(self)
    }
}

macro_rules! impl_dec_and_test {
    ($($atomic:ty),* $(,)?) => {
        $(
            impl DecAndTest for $atomic {
                #[inline]
                fn dec_and_test(&self) -> bool {
                    self.fetch_sub(1, Ordering::SeqCst) == 1
                }
            }
        )*
    };
}

impl_dec_and_test!(AtomicI32, AtomicU32, AtomicIsize, AtomicUsize);

impl<T: DecAndTest + ?Sized> DecAndTest for &T {
    #[inline]
    fn dec_and_test(&self) -> bool {
        (**self).dec_and_test()
    }
}
