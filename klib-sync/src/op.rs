//! Lock operations and the transition table they share

use core::fmt;

use crate::violation::{Breach, InvariantViolation};

/// Which wrapper an operation was issued on
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LockClass {
    Spin,
    RwSemaphore,
    Mutex,
}

impl LockClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            LockClass::Spin => "spinlock",
            LockClass::RwSemaphore => "rw_semaphore",
            LockClass::Mutex => "mutex",
        }
    }
}

impl fmt::Display for LockClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single acquire or release transition
///
/// The count encodes the lock state: `0` is idle, a spin lock holds `1`
/// while locked, an rw-semaphore holds the number of readers or `-1` for a
/// writer. A mutex only ever uses the writer transitions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LockOp {
    Acquire,
    Release,
    AcquireRead,
    ReleaseRead,
    AcquireWrite,
    ReleaseWrite,
}

impl LockOp {
    /// Whether the transition is allowed from `count`
    pub const fn permits(self, count: i32) -> bool {
        match self {
            LockOp::Acquire => count == 0,
            LockOp::Release => count == 1,
            // Reader count must not wrap into the writer encoding
            LockOp::AcquireRead => count >= 0 && count < i32::MAX,
            LockOp::ReleaseRead => count >= 1,
            LockOp::AcquireWrite => count == 0,
            LockOp::ReleaseWrite => count == -1,
        }
    }

    /// Change applied to the count when the transition is taken
    pub const fn delta(self) -> i32 {
        match self {
            LockOp::Acquire | LockOp::AcquireRead | LockOp::ReleaseWrite => 1,
            LockOp::Release | LockOp::ReleaseRead | LockOp::AcquireWrite => -1,
        }
    }

    /// Validate a transition against an observed tag and count
    ///
    /// Returns the count after the transition. The tag is checked first, so
    /// a corrupted instance is reported as such even if its count happens
    /// to permit the operation.
    pub fn check(
        self,
        class: LockClass,
        sentinel: u32,
        tag: u32,
        count: i32,
    ) -> Result<i32, InvariantViolation> {
        let breach = if tag != sentinel {
            Breach::BadTag
        } else if !self.permits(count) {
            Breach::BadCount
        } else {
            return Ok(count + self.delta());
        };

        Err(InvariantViolation {
            class,
            op: self,
            tag,
            count,
            breach,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LockOp::Acquire => "acquire",
            LockOp::Release => "release",
            LockOp::AcquireRead => "acquire_read",
            LockOp::ReleaseRead => "release_read",
            LockOp::AcquireWrite => "acquire_write",
            LockOp::ReleaseWrite => "release_write",
        }
    }
}

impl fmt::Display for LockOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
