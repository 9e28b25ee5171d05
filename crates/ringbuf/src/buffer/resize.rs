use super::RingBuf;
use crate::error::RingBufError;
use crate::trace::{trace_evicted, trace_resize};

impl RingBuf {
    /// Changes the capacity, keeping as many of the newest bytes as fit.
    ///
    /// The retained bytes are laid out from physical position zero of the new
    /// storage and the cursor is placed right after them. Shrinking below the
    /// live window advances `begin`; `end` never changes. Resizing to the
    /// current capacity is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RingBufError::ZeroCapacity`] if `new_capacity` is zero.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), RingBufError> {
        if new_capacity == 0 {
            return Err(RingBufError::ZeroCapacity);
        }
        let old_capacity = self.capacity();
        if new_capacity == old_capacity {
            return Ok(());
        }

        let retained = self.len().min(new_capacity);
        let keep_from = self.end - retained as u64;

        let mut storage = vec![0u8; new_capacity];
        if retained > 0 {
            let (front, wrapped) = self.runs(self.physical_position(keep_from), retained);
            let split = front.len();
            storage[..split].copy_from_slice(&self.storage[front]);
            storage[split..retained].copy_from_slice(&self.storage[wrapped]);
        }

        if keep_from > self.begin {
            trace_evicted(self.begin, keep_from, self.end);
            self.begin = keep_from;
        }
        self.storage = storage;
        self.cursor = retained % new_capacity;

        trace_resize(old_capacity, new_capacity, retained, self.begin);
        Ok(())
    }
}
