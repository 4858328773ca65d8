//! Benchmarks comparing nexus-collection against `std::vec::Vec`.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use nexus_collection::Collection;

const COUNT: usize = 100_000;
const SHIFT_COUNT: usize = 1_000;

// ============================================================================
// Add Benchmarks
// ============================================================================

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("nexus-collection", |b| {
        b.iter(|| {
            let mut coll = Collection::new();
            for i in 0..COUNT as u64 {
                coll.add(black_box(i));
            }
            black_box(coll.len())
        });
    });

    group.bench_function("vec", |b| {
        b.iter(|| {
            let mut vec = Vec::with_capacity(4);
            for i in 0..COUNT as u64 {
                vec.push(black_box(i));
            }
            black_box(vec.len())
        });
    });

    group.finish();
}

// ============================================================================
// AddRange Benchmarks (single bulk request)
// ============================================================================

fn bench_add_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_range");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("nexus-collection", |b| {
        b.iter(|| {
            let mut coll = Collection::new();
            coll.add_range(0..COUNT as u64);
            black_box(coll.capacity())
        });
    });

    group.bench_function("vec", |b| {
        b.iter(|| {
            let mut vec = Vec::with_capacity(4);
            vec.extend(0..COUNT as u64);
            black_box(vec.capacity())
        });
    });

    group.finish();
}

// ============================================================================
// Shifting Benchmarks (insert/remove at front)
// ============================================================================

fn bench_insert_at_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_at_front");
    group.throughput(Throughput::Elements(SHIFT_COUNT as u64));

    group.bench_function("nexus-collection", |b| {
        b.iter(|| {
            let mut coll = Collection::new();
            for i in 0..SHIFT_COUNT as u64 {
                coll.insert_at(0, black_box(i)).unwrap();
            }
            black_box(coll.len())
        });
    });

    group.bench_function("vec", |b| {
        b.iter(|| {
            let mut vec = Vec::with_capacity(4);
            for i in 0..SHIFT_COUNT as u64 {
                vec.insert(0, black_box(i));
            }
            black_box(vec.len())
        });
    });

    group.finish();
}

fn bench_remove_at_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_at_front");
    group.throughput(Throughput::Elements(SHIFT_COUNT as u64));

    group.bench_function("nexus-collection", |b| {
        b.iter(|| {
            let mut coll: Collection<u64> = (0..SHIFT_COUNT as u64).collect();
            while let Ok(v) = coll.remove_at(0) {
                black_box(v);
            }
        });
    });

    group.bench_function("vec", |b| {
        b.iter(|| {
            let mut vec: Vec<u64> = (0..SHIFT_COUNT as u64).collect();
            while !vec.is_empty() {
                black_box(vec.remove(0));
            }
        });
    });

    group.finish();
}

// ============================================================================
// Remove-from-back (the 1M drain pattern)
// ============================================================================

fn bench_remove_at_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_at_back");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("nexus-collection", |b| {
        b.iter(|| {
            let mut coll: Collection<u64> = (0..COUNT as u64).collect();
            for i in (0..COUNT).rev() {
                black_box(coll.remove_at(i).unwrap());
            }
        });
    });

    group.bench_function("vec", |b| {
        b.iter(|| {
            let mut vec: Vec<u64> = (0..COUNT as u64).collect();
            for i in (0..COUNT).rev() {
                black_box(vec.remove(i));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_add,
    bench_add_range,
    bench_insert_at_front,
    bench_remove_at_front,
    bench_remove_at_back,
);
criterion_main!(benches);
