//! Criterion benchmarks for the snapshot record codec and history blob.
//!
//! Benchmarks:
//!   - encode and decode of one fully-populated snapshot record
//!   - a year of daily snapshots through the compressed history blob
//!
//! Run with: cargo bench -p save --bench snapshot_codec_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use save::{
    decode_history, deserialize_snapshot, encode_history, serialize_snapshot,
    CURRENT_FORMAT_VERSION,
};
use statistics::test_harness::random_snapshot;
use statistics::Snapshot;

fn year_of_snapshots() -> Vec<Snapshot> {
    (0..365).map(random_snapshot).collect()
}

// ---------------------------------------------------------------------------
// Single record
// ---------------------------------------------------------------------------

fn bench_record(c: &mut Criterion) {
    let snapshot = random_snapshot(7);
    let bytes = serialize_snapshot(&snapshot);

    c.bench_function("serialize_snapshot", |b| {
        b.iter(|| serialize_snapshot(black_box(&snapshot)))
    });
    c.bench_function("deserialize_snapshot", |b| {
        b.iter(|| deserialize_snapshot(black_box(&bytes), CURRENT_FORMAT_VERSION))
    });
}

// ---------------------------------------------------------------------------
// History blob
// ---------------------------------------------------------------------------

fn bench_history(c: &mut Criterion) {
    let snapshots = year_of_snapshots();
    let blob = encode_history(&snapshots).expect("year of snapshots encodes");

    c.bench_function("encode_history_365", |b| {
        b.iter(|| encode_history(black_box(&snapshots)))
    });
    c.bench_function("decode_history_365", |b| {
        b.iter(|| decode_history(black_box(&blob)))
    });
}

criterion_group!(benches, bench_record, bench_history);
criterion_main!(benches);
