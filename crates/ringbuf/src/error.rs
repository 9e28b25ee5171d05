//! crates/ringbuf/src/error.rs
//!
//! Failures surfaced by offset-taking ring operations.

use std::io;

use thiserror::Error;

/// Errors returned by [`RingBuf`](crate::RingBuf) operations.
///
/// Every variant describes a caller-side mistake or an end-of-stream
/// condition. None of them leave the buffer partially mutated.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum RingBufError {
    /// The requested logical range is not inside the live window.
    ///
    /// This usually means the caller holds a stale offset whose bytes have
    /// already been overwritten.
    #[error("range [{offset}, {offset}+{len}) is outside the live window [{begin}, {end})")]
    OutOfRange {
        /// Logical offset supplied by the caller.
        offset: u64,
        /// Length of the requested range.
        len: u64,
        /// Oldest retained logical offset at the time of the call.
        begin: u64,
        /// One past the newest written logical offset at the time of the call.
        end: u64,
    },
    /// A view requested more bytes than have been written past `offset`.
    #[error("view of {requested} byte(s) at offset {offset} has only {available} byte(s) available")]
    UnexpectedEof {
        /// Logical offset supplied by the caller.
        offset: u64,
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes between `offset` and the end of the stream.
        available: usize,
    },
    /// A single write exceeded the buffer capacity.
    #[error("write of {len} byte(s) exceeds ring capacity of {capacity} byte(s)")]
    WriteTooLarge {
        /// Length of the rejected write.
        len: usize,
        /// Capacity of the buffer.
        capacity: usize,
    },
    /// Growing the stream would move `end` past `u64::MAX`.
    #[error("advancing end {end} by {len} byte(s) overflows the logical offset range")]
    OffsetOverflow {
        /// One past the newest written logical offset at the time of the call.
        end: u64,
        /// Number of bytes the call tried to append.
        len: usize,
    },
    /// A resize requested a zero-byte capacity.
    #[error("ring capacity must be non-zero")]
    ZeroCapacity,
}

impl RingBufError {
    pub(crate) const fn out_of_range(offset: u64, len: u64, begin: u64, end: u64) -> Self {
        Self::OutOfRange {
            offset,
            len,
            begin,
            end,
        }
    }
}

impl From<RingBufError> for io::Error {
    fn from(error: RingBufError) -> Self {
        let kind = match error {
            RingBufError::UnexpectedEof { .. } => io::ErrorKind::UnexpectedEof,
            RingBufError::OffsetOverflow { .. } => io::ErrorKind::FileTooLarge,
            RingBufError::OutOfRange { .. }
            | RingBufError::WriteTooLarge { .. }
            | RingBufError::ZeroCapacity => io::ErrorKind::InvalidInput,
        };
        Self::new(kind, error)
    }
}
