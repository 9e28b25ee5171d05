//! Fixed-capacity ring holding the tail of a logical byte stream.
//!
//! The buffer models an unbounded stream in which every byte has a logical
//! offset. Only the most recent `capacity` bytes are retained; the retained
//! range `[begin, end)` is the *live window*. Callers remember the offsets
//! returned by [`RingBuf::write`] and [`RingBuf::evacuate`] and use them to
//! read records back while they are still live.
//!
//! # Invariants
//!
//! - `end - begin <= capacity` and `cursor < capacity`.
//! - `cursor` is the physical position of logical offset `end`.
//! - A live offset `o` is stored at `(cursor + o - end) mod capacity`, i.e.
//!   physical positions rotate backwards from `cursor` as `o` decreases.
//! - `begin` and `end` only move forwards, except through [`RingBuf::reset`]
//!   and [`RingBuf::reset_at`].
//!
//! # Threading
//!
//! The type is not synchronized. Mutation requires `&mut self`, so any
//! sharing between threads has to go through an external lock or a single
//! owner.

use std::fmt;
use std::io;
use std::ops::Range;

use crate::error::RingBufError;
use crate::trace::{trace_evicted, trace_reset};

mod access;
mod evacuate;
mod resize;

#[cfg(test)]
mod tests;

/// A circular byte buffer addressed by logical stream offsets.
///
/// # Example
///
/// ```
/// use ringbuf::RingBuf;
///
/// let mut ring = RingBuf::with_capacity(8);
/// let first = ring.write(b"abcd").unwrap();
/// let second = ring.write(b"efghij").unwrap();
///
/// // Ten bytes were written into an eight byte ring: "ab" fell out.
/// assert_eq!(ring.begin(), 2);
/// assert!(!ring.contains(first, 4));
///
/// let mut out = [0u8; 6];
/// assert_eq!(ring.read_at(&mut out, second).unwrap(), 6);
/// assert_eq!(&out, b"efghij");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RingBuf {
    /// Backing storage, always exactly `capacity` bytes.
    storage: Vec<u8>,
    /// Physical position of logical offset `end`.
    cursor: usize,
    /// Logical offset of the oldest retained byte.
    begin: u64,
    /// Logical offset one past the newest written byte.
    end: u64,
}

impl RingBuf {
    /// Creates an empty, zero-filled ring with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::starting_at(capacity, 0)
    }

    /// Creates an empty ring whose logical stream starts at `begin`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn starting_at(capacity: usize, begin: u64) -> Self {
        assert!(capacity > 0, "ring capacity must be non-zero");
        Self {
            storage: vec![0u8; capacity],
            cursor: 0,
            begin,
            end: begin,
        }
    }

    /// Returns the number of bytes the ring can retain.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the logical offset of the oldest retained byte.
    #[inline]
    #[must_use]
    pub const fn begin(&self) -> u64 {
        self.begin
    }

    /// Returns the logical offset one past the newest written byte.
    ///
    /// This is also the offset the next [`write`](Self::write) will return.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.end
    }

    /// Returns the length of the live window.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        // Bounded by capacity, so the narrowing cannot truncate.
        (self.end - self.begin) as usize
    }

    /// Returns `true` when no bytes are live.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Returns `true` when the live window spans the whole storage.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Returns `true` when `[offset, offset + len)` lies inside the live window.
    #[must_use]
    pub fn contains(&self, offset: u64, len: usize) -> bool {
        offset >= self.begin
            && offset
                .checked_add(len as u64)
                .is_some_and(|range_end| range_end <= self.end)
    }

    /// Appends `data` to the stream and returns the logical offset of its
    /// first byte.
    ///
    /// Bytes that no longer fit are evicted from the front of the window.
    /// A write exactly as large as the capacity replaces the whole window.
    ///
    /// # Errors
    ///
    /// Returns [`RingBufError::WriteTooLarge`] without touching the buffer if
    /// `data` is longer than the capacity, and
    /// [`RingBufError::OffsetOverflow`] if the stream would run past
    /// `u64::MAX`.
    pub fn write(&mut self, data: &[u8]) -> Result<u64, RingBufError> {
        let capacity = self.capacity();
        if data.len() > capacity {
            return Err(RingBufError::WriteTooLarge {
                len: data.len(),
                capacity,
            });
        }

        let offset = self.end;
        if data.is_empty() {
            return Ok(offset);
        }
        self.check_extend(data.len())?;

        let (front, wrapped) = self.runs(self.cursor, data.len());
        let split = front.len();
        self.storage[front].copy_from_slice(&data[..split]);
        self.storage[wrapped].copy_from_slice(&data[split..]);

        self.advance_cursor(data.len());
        self.extend_end(data.len() as u64);
        Ok(offset)
    }

    /// Advances the stream by `len` bytes without writing them.
    ///
    /// Used when the caller filled the storage through other means and only
    /// the bookkeeping needs to catch up. The skipped bytes keep whatever the
    /// storage held before.
    ///
    /// The stream saturates at `u64::MAX`: a skip that would carry `end`
    /// past it stops there instead.
    pub fn skip(&mut self, len: usize) {
        let len = usize::try_from(u64::MAX - self.end).map_or(len, |room| len.min(room));
        self.advance_cursor(len);
        self.extend_end(len as u64);
    }

    /// Returns the ring to its initial empty state without reallocating.
    pub fn reset(&mut self) {
        self.reset_at(0);
    }

    /// Empties the ring and restarts the logical stream at `begin`.
    ///
    /// The storage is zeroed so the ring is indistinguishable from a freshly
    /// constructed one.
    pub fn reset_at(&mut self, begin: u64) {
        self.storage.fill(0);
        self.cursor = 0;
        self.begin = begin;
        self.end = begin;
        trace_reset(self.capacity(), begin);
    }

    /// Returns a copy of the raw physical storage.
    ///
    /// The bytes are in storage order, not stream order. Meant for
    /// diagnostics and tests.
    #[must_use]
    pub fn dump(&self) -> Vec<u8> {
        self.storage.clone()
    }

    /// Maps a logical offset in `[begin, end]` to its physical position.
    #[inline]
    fn physical_position(&self, offset: u64) -> usize {
        debug_assert!(offset >= self.begin && offset <= self.end);
        let back = (self.end - offset) as usize;
        if back <= self.cursor {
            self.cursor - back
        } else {
            self.cursor + self.capacity() - back
        }
    }

    /// Splits `len` bytes starting at physical `start` into the run up to the
    /// end of storage and the wrapped run from position zero.
    ///
    /// `len` must not exceed the capacity.
    #[inline]
    fn runs(&self, start: usize, len: usize) -> (Range<usize>, Range<usize>) {
        let front_len = len.min(self.capacity() - start);
        (start..start + front_len, 0..len - front_len)
    }

    #[inline]
    fn advance_cursor(&mut self, len: usize) {
        let capacity = self.capacity();
        let step = len % capacity;
        let room = capacity - self.cursor;
        self.cursor = if step >= room {
            step - room
        } else {
            self.cursor + step
        };
    }

    /// Moves `end` forward and drops whatever no longer fits.
    #[inline]
    fn extend_end(&mut self, len: u64) {
        self.end += len;
        let capacity = self.capacity() as u64;
        if self.end - self.begin > capacity {
            let old_begin = self.begin;
            self.begin = self.end - capacity;
            trace_evicted(old_begin, self.begin, self.end);
        }
    }

    /// Checks that `end` can grow by `len` without leaving the `u64` range.
    #[inline]
    fn check_extend(&self, len: usize) -> Result<(), RingBufError> {
        if self.end.checked_add(len as u64).is_none() {
            return Err(RingBufError::OffsetOverflow { end: self.end, len });
        }
        Ok(())
    }

    /// Checks that `offset` lies in `[begin, end]`.
    ///
    /// `len` is only reported back in the error.
    #[inline]
    fn check_offset(&self, offset: u64, len: u64) -> Result<(), RingBufError> {
        if offset < self.begin || offset > self.end {
            return Err(RingBufError::out_of_range(offset, len, self.begin, self.end));
        }
        Ok(())
    }

    /// Checks that the whole of `[offset, offset + len)` is live.
    #[inline]
    fn check_range(&self, offset: u64, len: usize) -> Result<(), RingBufError> {
        if !self.contains(offset, len) {
            return Err(RingBufError::out_of_range(
                offset,
                len as u64,
                self.begin,
                self.end,
            ));
        }
        Ok(())
    }
}

impl fmt::Display for RingBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[size:{}, start:{}, end:{}, index:{}]",
            self.capacity(),
            self.begin,
            self.end,
            self.cursor
        )
    }
}

/// Appends to the stream through the standard writer interface.
///
/// A buffer longer than the capacity is accepted partially: only the first
/// `capacity` bytes are taken and the count is returned, so
/// [`io::Write::write_all`] keeps feeding the ring chunk by chunk.
impl io::Write for RingBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let accepted = buf.len().min(self.capacity());
        Self::write(self, &buf[..accepted])?;
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
