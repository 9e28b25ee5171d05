pub(super) use super::RingBuf;
pub(super) use crate::error::RingBufError;

mod access;

/// Asserts the window bookkeeping relations that must hold after every
/// public operation.
pub(super) fn assert_invariants(ring: &RingBuf) {
    let capacity = ring.storage.len();
    assert!(ring.begin <= ring.end, "begin {} past end {}", ring.begin, ring.end);
    assert!(
        ring.end - ring.begin <= capacity as u64,
        "window {} exceeds capacity {capacity}",
        ring.end - ring.begin
    );
    assert!(ring.cursor < capacity, "cursor {} out of storage", ring.cursor);
    assert_eq!(ring.physical_position(ring.end), ring.cursor);
}

/// Reads the entire live window in stream order.
pub(super) fn live_bytes(ring: &RingBuf) -> Vec<u8> {
    let mut out = vec![0u8; ring.len()];
    let copied = ring.read_at(&mut out, ring.begin()).expect("begin is live");
    assert_eq!(copied, out.len());
    out
}
