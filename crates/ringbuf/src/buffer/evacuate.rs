use super::RingBuf;
use crate::error::RingBufError;
use crate::trace::trace_evacuate;

impl RingBuf {
    /// Re-appends the live range `[offset, offset + len)` at the write head.
    ///
    /// The copy is treated exactly like freshly written data: `end` grows by
    /// `len` and the oldest bytes are evicted if the window overflows. The
    /// returned offset is where the copy now lives (the value of `end` before
    /// the call). Callers use this to keep a record that is about to be
    /// overwritten alive for another lap of the ring.
    ///
    /// # Errors
    ///
    /// Returns [`RingBufError::OutOfRange`] unless the whole range is live.
    /// The ring is left untouched in that case, and likewise when the copy
    /// would carry `end` past `u64::MAX` ([`RingBufError::OffsetOverflow`]).
    pub fn evacuate(&mut self, offset: u64, len: usize) -> Result<u64, RingBufError> {
        self.check_range(offset, len)?;
        self.check_extend(len)?;

        let new_offset = self.end;
        let read_pos = self.physical_position(offset);
        let moved = read_pos != self.cursor;
        if moved {
            self.copy_to_cursor(read_pos, len);
        }

        self.advance_cursor(len);
        self.extend_end(len as u64);
        trace_evacuate(offset, len, new_offset, moved);
        Ok(new_offset)
    }

    /// Copies `len` bytes from physical `src` to the cursor, front to back.
    ///
    /// The destination only covers storage older than the source range, so a
    /// forward copy never reads a byte it has already overwritten. Each step
    /// copies the longest run that crosses neither end of storage.
    fn copy_to_cursor(&mut self, mut src: usize, len: usize) {
        let capacity = self.capacity();
        let mut dst = self.cursor;
        let mut remaining = len;

        while remaining > 0 {
            let run = remaining.min(capacity - src).min(capacity - dst);
            self.storage.copy_within(src..src + run, dst);
            src = (src + run) % capacity;
            dst = (dst + run) % capacity;
            remaining -= run;
        }
    }
}
