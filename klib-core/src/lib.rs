//! Core atomic primitives
//!
//! This crate provides the atomic integer (`atomic_t`) and reference count
//! (`kref`) types used by the rest of klib, together with the [`DecAndTest`]
//! seam that lets lock helpers consume any host counter.

#![cfg_attr(not(test), no_std)]

pub mod atomic;
pub mod kref;

pub use atomic::*;
pub use kref::*;
