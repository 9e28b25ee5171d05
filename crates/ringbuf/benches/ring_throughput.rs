//! Throughput of the ring's hot paths.
//!
//! ```bash
//! cargo bench -p ringbuf --bench ring_throughput
//! ```

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ringbuf::RingBuf;

const CAPACITY: usize = 1 << 20;

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");
    for record_len in [64usize, 1024, 16 * 1024] {
        let record = vec![0xA5u8; record_len];
        group.throughput(Throughput::Bytes(record_len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(record_len), &record, |b, record| {
            let mut ring = RingBuf::with_capacity(CAPACITY);
            b.iter(|| black_box(ring.write(black_box(record)).unwrap()));
        });
    }
    group.finish();
}

fn bench_read_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_at");
    let record_len = 4096usize;
    let mut ring = RingBuf::with_capacity(CAPACITY);
    let offsets: Vec<u64> = (0..CAPACITY / record_len)
        .map(|index| ring.write(&vec![index as u8; record_len]).unwrap())
        .collect();
    // Shift the window so some records straddle the end of storage.
    ring.write(&vec![0u8; record_len / 2]).unwrap();
    let offsets: Vec<u64> = offsets
        .into_iter()
        .filter(|offset| ring.contains(*offset, record_len))
        .collect();

    group.throughput(Throughput::Bytes(record_len as u64));
    group.bench_function("4096", |b| {
        let mut out = vec![0u8; record_len];
        let mut cursor = 0usize;
        b.iter(|| {
            let offset = offsets[cursor % offsets.len()];
            cursor += 1;
            black_box(ring.read_at(&mut out, offset).unwrap())
        });
    });
    group.bench_function("view_4096", |b| {
        let mut cursor = 0usize;
        b.iter(|| {
            let offset = offsets[cursor % offsets.len()];
            cursor += 1;
            black_box(ring.view(offset, record_len).unwrap().len())
        });
    });
    group.finish();
}

fn bench_evacuate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evacuate");
    let record_len = 512usize;
    group.throughput(Throughput::Bytes(record_len as u64));
    group.bench_function("oldest_record", |b| {
        let mut ring = RingBuf::with_capacity(CAPACITY);
        while !ring.is_full() {
            ring.write(&[0x5Au8; 512]).unwrap();
        }
        b.iter(|| {
            let oldest = ring.begin() + record_len as u64;
            black_box(ring.evacuate(oldest, record_len).unwrap())
        });
    });
    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    c.bench_function("resize/grow_shrink", |b| {
        let mut ring = RingBuf::with_capacity(CAPACITY);
        while !ring.is_full() {
            ring.write(&[0x3Cu8; 4096]).unwrap();
        }
        b.iter(|| {
            ring.resize(CAPACITY * 2).unwrap();
            ring.resize(CAPACITY).unwrap();
        });
    });
}

criterion_group!(benches, bench_write, bench_read_at, bench_evacuate, bench_resize);
criterion_main!(benches);
