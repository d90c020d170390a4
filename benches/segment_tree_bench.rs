//! Benchmark for SegmentTree vs a linear fold over Vec.
//!
//! Range queries and point updates on the tree are compared with summing
//! a slice of a standard Vec.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use segtree::tree::SegmentTree;
use segtree::typeclass::Sum;
use std::hint::black_box;

/// Deterministic query bounds spread over `[0, size)`.
fn query_ranges(size: usize) -> Vec<(usize, usize)> {
    (0..256)
        .map(|step: usize| {
            let first = step.wrapping_mul(7919) % size;
            let second = step.wrapping_mul(104_729) % size;
            (first.min(second), first.max(second))
        })
        .collect()
}

// =============================================================================
// Build Benchmark
// =============================================================================

fn benchmark_build(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("build");

    for size in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("SegmentTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let tree: SegmentTree<Sum<i64>> = (0..size).map(Sum::new).collect();
                    black_box(tree)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Query Benchmark
// =============================================================================

fn benchmark_query(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("query");

    for size in [1_000_usize, 10_000, 100_000] {
        let tree: SegmentTree<Sum<i64>> = (0..size as i64).map(Sum::new).collect();
        let standard_vector: Vec<i64> = (0..size as i64).collect();
        let ranges = query_ranges(size);

        group.bench_with_input(BenchmarkId::new("SegmentTree", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut total = 0_i64;
                for &(left, right) in &ranges {
                    if let Ok(sum) = tree.query(black_box(left), black_box(right)) {
                        total = total.wrapping_add(sum.into_inner());
                    }
                }
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut total = 0_i64;
                for &(left, right) in &ranges {
                    let sum: i64 = standard_vector[black_box(left)..=black_box(right)]
                        .iter()
                        .sum();
                    total = total.wrapping_add(sum);
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Update Benchmark
// =============================================================================

fn benchmark_update(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("update");

    for size in [1_000_usize, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("SegmentTree", size),
            &size,
            |bencher, &size| {
                let mut tree: SegmentTree<Sum<i64>> = (0..size as i64).map(Sum::new).collect();
                let ranges = query_ranges(size);
                bencher.iter(|| {
                    for &(index, value) in &ranges {
                        let _ = tree.update(black_box(index), Sum::new(value as i64));
                    }
                });
                black_box(tree.total());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_query, benchmark_update);
criterion_main!(benches);
