use std::borrow::Cow;

use super::RingBuf;
use crate::error::RingBufError;

impl RingBuf {
    /// Copies bytes starting at logical `offset` into `dst`.
    ///
    /// Returns the number of bytes copied. The copy stops at the end of the
    /// stream, so a count smaller than `dst.len()` means the read ran into
    /// `end`; reading exactly at `end` returns `Ok(0)`.
    ///
    /// # Errors
    ///
    /// Returns [`RingBufError::OutOfRange`] if `offset` is outside
    /// `[begin, end]`.
    pub fn read_at(&self, dst: &mut [u8], offset: u64) -> Result<usize, RingBufError> {
        self.check_offset(offset, dst.len() as u64)?;

        let available = (self.end - offset) as usize;
        let count = dst.len().min(available);
        if count == 0 {
            return Ok(0);
        }

        let (front, wrapped) = self.runs(self.physical_position(offset), count);
        let split = front.len();
        dst[..split].copy_from_slice(&self.storage[front]);
        dst[split..count].copy_from_slice(&self.storage[wrapped]);
        Ok(count)
    }

    /// Overwrites live bytes at logical `offset` in place.
    ///
    /// The window and cursor are left untouched, which makes this suitable for
    /// patching a header after the body of a record has been appended.
    ///
    /// # Errors
    ///
    /// Returns [`RingBufError::OutOfRange`] unless the whole of
    /// `[offset, offset + data.len())` is live. Nothing is written in that
    /// case.
    pub fn write_at(&mut self, data: &[u8], offset: u64) -> Result<(), RingBufError> {
        self.check_range(offset, data.len())?;
        if data.is_empty() {
            return Ok(());
        }

        let (front, wrapped) = self.runs(self.physical_position(offset), data.len());
        let split = front.len();
        self.storage[front].copy_from_slice(&data[..split]);
        self.storage[wrapped].copy_from_slice(&data[split..]);
        Ok(())
    }

    /// Returns `true` when the live bytes at `offset` equal `data`.
    ///
    /// A range that is not entirely live compares unequal.
    #[must_use]
    pub fn equal_at(&self, data: &[u8], offset: u64) -> bool {
        if !self.contains(offset, data.len()) {
            return false;
        }
        if data.is_empty() {
            return true;
        }

        let (front, wrapped) = self.runs(self.physical_position(offset), data.len());
        let split = front.len();
        self.storage[front] == data[..split] && self.storage[wrapped] == data[split..]
    }

    /// Returns `len` bytes at logical `offset` as one contiguous slice.
    ///
    /// When the range does not cross the end of storage the returned value
    /// borrows the ring directly. A wrapping range is copied into a fresh
    /// allocation. Either way the view cannot outlive the next mutation, since
    /// it holds a shared borrow of the ring.
    ///
    /// # Errors
    ///
    /// - [`RingBufError::OutOfRange`] if `offset` is outside `[begin, end]`.
    /// - [`RingBufError::UnexpectedEof`] if fewer than `len` bytes were written
    ///   after `offset`.
    pub fn view(&self, offset: u64, len: usize) -> Result<Cow<'_, [u8]>, RingBufError> {
        self.check_offset(offset, len as u64)?;

        let available = (self.end - offset) as usize;
        if len > available {
            return Err(RingBufError::UnexpectedEof {
                offset,
                requested: len,
                available,
            });
        }

        let start = self.physical_position(offset);
        let (front, wrapped) = self.runs(start, len);
        if wrapped.is_empty() {
            return Ok(Cow::Borrowed(&self.storage[front]));
        }

        let mut joined = Vec::with_capacity(len);
        joined.extend_from_slice(&self.storage[front]);
        joined.extend_from_slice(&self.storage[wrapped]);
        Ok(Cow::Owned(joined))
    }
}
