//! Structured tracing for ring window changes.
//!
//! Every helper is compiled behind the `tracing` feature flag and collapses to
//! an empty inline function when the feature is disabled, so the hot write
//! path carries no logging cost in default builds.

/// Target name for tracing events emitted by this crate.
#[cfg(feature = "tracing")]
pub const RINGBUF_TARGET: &str = "ringbuf";

/// Traces the oldest bytes falling out of the live window.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_evicted(old_begin: u64, new_begin: u64, end: u64) {
    tracing::trace!(
        target: RINGBUF_TARGET,
        old_begin = old_begin,
        new_begin = new_begin,
        end = end,
        evicted = new_begin - old_begin,
        "window: evicted oldest bytes"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_evicted(_old_begin: u64, _new_begin: u64, _end: u64) {}

/// Traces a live range being relocated to the write head.
///
/// `moved` is false when the source already sat at the cursor and only the
/// bookkeeping advanced.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_evacuate(offset: u64, len: usize, new_offset: u64, moved: bool) {
    tracing::trace!(
        target: RINGBUF_TARGET,
        offset = offset,
        len = len,
        new_offset = new_offset,
        moved = moved,
        "evacuate: relocated range"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_evacuate(_offset: u64, _len: usize, _new_offset: u64, _moved: bool) {}

/// Traces a capacity change.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_resize(old_capacity: usize, new_capacity: usize, retained: usize, begin: u64) {
    tracing::debug!(
        target: RINGBUF_TARGET,
        old_capacity = old_capacity,
        new_capacity = new_capacity,
        retained = retained,
        begin = begin,
        "resize: storage replaced"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_resize(
    _old_capacity: usize,
    _new_capacity: usize,
    _retained: usize,
    _begin: u64,
) {
}

/// Traces a reset to an empty window.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_reset(capacity: usize, begin: u64) {
    tracing::debug!(
        target: RINGBUF_TARGET,
        capacity = capacity,
        begin = begin,
        "reset: window cleared"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_reset(_capacity: usize, _begin: u64) {}
