//! Test framework for klib lock instrumentation
//!
//! This crate provides testing infrastructure for exercising the lock
//! trackers. Unlike the klib crates, this runs in userspace and can use std.

// Test framework can use std (runs in userspace)
pub mod helpers;

pub use helpers::*;
