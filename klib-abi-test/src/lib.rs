//! ABI Compatibility Testing for klib
//!
//! This crate verifies that the lock types exported by
//! `klib-linux-compat` are binary-compatible with the C structures that
//! include them, in whichever shape the build selected.

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]

use core::mem::{align_of, size_of};

/// Macro to verify structure size matches expected value
#[macro_export]
macro_rules! verify_size {
    ($rust_type:ty, $expected_size:expr) => {
        const _: () = {
            const SIZE: usize = ::core::mem::size_of::<$rust_type>();
            const EXPECTED: usize = $expected_size;

            // This will fail at compile time if sizes don't match
            assert!(SIZE == EXPECTED, "Size mismatch");
        };
    };
}

/// Macro to verify type alignment
#[macro_export]
macro_rules! verify_align {
    ($type:ty, $expected_align:expr) => {
        const _: () = {
            const ALIGN: usize = ::core::mem::align_of::<$type>();
            const EXPECTED: usize = $expected_align;

            assert!(ALIGN == EXPECTED, "Alignment mismatch");
        };
    };
}

/// Structure to hold ABI compatibility test results
#[derive(Debug, PartialEq, Eq)]
pub struct AbiCompatResult {
    pub struct_name: &'static str,
    pub size_match: bool,
    pub align_match: bool,
}

impl AbiCompatResult {
    pub fn is_compatible(&self) -> bool {
        self.size_match && self.align_match
    }
}

/// Compare a Rust type's layout with the C reference values
///
/// Zero-size C structs report an alignment of 1, so alignment is only
/// compared for non-empty types.
pub fn verify_struct_layout<T>(
    name: &'static str,
    expected_size: usize,
    expected_align: usize,
) -> AbiCompatResult {
    AbiCompatResult {
        struct_name: name,
        size_match: size_of::<T>() == expected_size,
        align_match: expected_size == 0 || align_of::<T>() == expected_align,
    }
}

/// Read the two 32-bit words of a tracked lock as C would see them
///
/// Returns `None` for untracked (zero-size) locks.
pub fn lock_words<T>(lock: &T) -> Option<[u32; 2]> {
    if size_of::<T>() != size_of::<[u32; 2]>() {
        return None;
    }
    // SAFETY: T is exactly two u32s wide and 4-byte aligned when tracked
    let words = unsafe { (lock as *const T).cast::<[u32; 2]>().read_unaligned() };
    Some(words)
}
