use super::{RingBuf, RingBufError, assert_invariants};

fn wrapped_ring() -> RingBuf {
    // Storage ends up as "cd2345ab" with the live window "2345abcd" at [2, 10).
    let mut ring = RingBuf::with_capacity(8);
    ring.write(b"012345").unwrap();
    ring.write(b"abcd").unwrap();
    ring
}

#[test]
fn read_after_write_returns_same_bytes() {
    let mut ring = RingBuf::with_capacity(32);
    let records: [&[u8]; 3] = [b"alpha", b"bravo-charlie", b"delta"];
    let offsets: Vec<u64> = records
        .iter()
        .map(|record| ring.write(record).unwrap())
        .collect();

    for (record, offset) in records.iter().zip(offsets) {
        let mut out = vec![0u8; record.len()];
        assert_eq!(ring.read_at(&mut out, offset), Ok(record.len()));
        assert_eq!(&out, record);
    }
}

#[test]
fn read_across_wrap_point() {
    let ring = wrapped_ring();
    let mut out = [0u8; 4];
    assert_eq!(ring.read_at(&mut out, 6), Ok(4));
    assert_eq!(&out, b"abcd");

    let mut out = [0u8; 8];
    assert_eq!(ring.read_at(&mut out, 2), Ok(8));
    assert_eq!(&out, b"2345abcd");
}

#[test]
fn short_read_stops_at_end() {
    let ring = wrapped_ring();
    let mut out = [0u8; 6];
    assert_eq!(ring.read_at(&mut out, 7), Ok(3));
    assert_eq!(&out[..3], b"bcd");
    assert_eq!(&out[3..], [0, 0, 0]);
}

#[test]
fn read_at_end_returns_zero() {
    let ring = wrapped_ring();
    let mut out = [0u8; 4];
    assert_eq!(ring.read_at(&mut out, ring.end()), Ok(0));
}

#[test]
fn read_outside_window_is_out_of_range() {
    let ring = wrapped_ring();
    let mut out = [0u8; 2];
    assert_eq!(
        ring.read_at(&mut out, 1),
        Err(RingBufError::OutOfRange {
            offset: 1,
            len: 2,
            begin: 2,
            end: 10
        })
    );
    assert!(matches!(
        ring.read_at(&mut out, 11),
        Err(RingBufError::OutOfRange { offset: 11, .. })
    ));
}

#[test]
fn write_at_patches_in_place() {
    let mut ring = RingBuf::with_capacity(16);
    let header = ring.write(b"len=?").unwrap();
    ring.write(b"body").unwrap();
    let (cursor, begin, end) = (ring.cursor, ring.begin(), ring.end());

    ring.write_at(b"4", header + 4).unwrap();

    let mut out = [0u8; 9];
    ring.read_at(&mut out, header).unwrap();
    assert_eq!(&out, b"len=4body");
    assert_eq!((ring.cursor, ring.begin(), ring.end()), (cursor, begin, end));
}

#[test]
fn write_at_across_wrap_point() {
    let mut ring = wrapped_ring();
    ring.write_at(b"XYZW", 6).unwrap();
    assert_eq!(ring.dump(), b"ZW2345XY");
    assert!(ring.equal_at(b"2345XYZW", 2));
    assert_invariants(&ring);
}

#[test]
fn write_at_rejects_ranges_past_end_without_mutation() {
    let mut ring = wrapped_ring();
    let before = ring.dump();

    assert!(matches!(
        ring.write_at(b"xyz", 8),
        Err(RingBufError::OutOfRange { offset: 8, len: 3, .. })
    ));
    assert!(matches!(
        ring.write_at(b"x", 0),
        Err(RingBufError::OutOfRange { .. })
    ));
    assert_eq!(ring.dump(), before);
}

#[test]
fn equal_at_compares_live_bytes() {
    let ring = wrapped_ring();
    assert!(ring.equal_at(b"2345", 2));
    assert!(ring.equal_at(b"5abc", 5));
    assert!(!ring.equal_at(b"5abd", 5));
    assert!(!ring.equal_at(b"Xabc", 5));
    assert!(ring.equal_at(b"", 10));
}

#[test]
fn equal_at_outside_window_is_false() {
    let ring = wrapped_ring();
    assert!(!ring.equal_at(b"01", 0));
    assert!(!ring.equal_at(b"cde", 8));
    assert!(!ring.equal_at(b"", 11));
    assert!(!ring.equal_at(b"a", u64::MAX));
}

#[test]
fn contains_matches_live_window() {
    let ring = wrapped_ring();
    assert!(ring.contains(2, 8));
    assert!(ring.contains(10, 0));
    assert!(!ring.contains(1, 1));
    assert!(!ring.contains(9, 2));
    assert!(!ring.contains(u64::MAX, 1));
}
