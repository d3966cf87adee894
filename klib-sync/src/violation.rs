//! Lock invariant violations
//!
//! A violation is a caller bug, not a runtime condition. The tracker never
//! hands one back to its caller; it reports it and panics, and kernel
//! profiles build with `panic = "abort"`.

use core::fmt;

use crate::op::{LockClass, LockOp};

/// Which part of the lock state failed the precondition
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Breach {
    /// Tag is not the sentinel: uninitialized or corrupted instance
    BadTag,
    /// Count does not permit the requested transition
    BadCount,
}

impl fmt::Display for Breach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breach::BadTag => f.write_str("bad tag (uninitialized or corrupted lock)"),
            Breach::BadCount => f.write_str("bad count"),
        }
    }
}

/// A failed acquire/release precondition
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{class} {op}: {breach} (tag={tag:#010x}, count={count})")]
pub struct InvariantViolation {
    pub class: LockClass,
    pub op: LockOp,
    pub tag: u32,
    pub count: i32,
    pub breach: Breach,
}

/// Report a violation and terminate
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail(violation: InvariantViolation) -> ! {
    tracing::error!(
        class = %violation.class,
        op = %violation.op,
        tag = violation.tag,
        count = violation.count,
        breach = %violation.breach,
        "lock invariant violated"
    );
    panic!("lock invariant violated: {violation}");
}
