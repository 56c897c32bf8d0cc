//! Benchmark for the Traverse primitives.
//!
//! Compares the index-aware traversals against the equivalent standard
//! iterator chains, and measures the in-place bubble sort on sorted and
//! reversed inputs.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqkit::traverse::Traverse;
use std::hint::black_box;

// =============================================================================
// map / filter / fold
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in [1_000, 10_000, 100_000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("map_indexed", size),
            &values,
            |bencher, values| {
                bencher.iter(|| black_box(values.map_indexed(|element, index, _| element * 2 + index as i64)));
            },
        );

        group.bench_with_input(BenchmarkId::new("Iterator", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(
                    values
                        .iter()
                        .enumerate()
                        .map(|(index, element)| element * 2 + index as i64)
                        .collect::<Vec<_>>(),
                )
            });
        });
    }

    group.finish();
}

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter");

    for size in [1_000, 10_000, 100_000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("filter_indexed", size),
            &values,
            |bencher, values| {
                bencher.iter(|| black_box(values.filter_indexed(|element, _, _| element % 3 == 0)));
            },
        );
    }

    group.finish();
}

fn benchmark_reduce(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reduce");

    for size in [1_000, 10_000, 100_000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("reduce_indexed", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    black_box(values.reduce_indexed(|accumulator, element, _, _| accumulator + element, None))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("fold_indexed", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    black_box(values.fold_indexed(0, |accumulator, element, _, _| accumulator + element))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// bubble_sort_by_key
// =============================================================================

fn benchmark_bubble_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bubble_sort");

    for size in [100, 500, 1_000] {
        let sorted: Vec<i64> = (0..size).collect();
        let reversed: Vec<i64> = (0..size).rev().collect();

        group.bench_with_input(BenchmarkId::new("sorted", size), &sorted, |bencher, values| {
            bencher.iter(|| {
                let mut values = values.clone();
                black_box(values.bubble_sort_by_key(|value| *value))
            });
        });

        group.bench_with_input(BenchmarkId::new("reversed", size), &reversed, |bencher, values| {
            bencher.iter(|| {
                let mut values = values.clone();
                black_box(values.bubble_sort_by_key(|value| *value))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map,
    benchmark_filter,
    benchmark_reduce,
    benchmark_bubble_sort
);
criterion_main!(benches);
