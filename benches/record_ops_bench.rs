//! Benchmark for the record utilities: group, merge, flatten and dedup.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqkit::dedup::dedup_by;
use seqkit::flatten::flatten_on;
use seqkit::group::group_by;
use seqkit::merge::merge_on;
use seqkit::record;
use seqkit::record::{Record, field};
use std::hint::black_box;

fn people(size: usize) -> Vec<Record> {
    (0..size)
        .map(|index| {
            record! {
                "id" => index,
                "name" => format!("person-{}", index % 97),
                "city" => format!("city-{}", index % 13),
                "skills" => vec![record! { "name" => "JS" }, record! { "name" => "CSS" }],
            }
        })
        .collect()
}

fn addresses(size: usize) -> Vec<Record> {
    (0..size)
        .rev()
        .map(|index| record! { "id" => index, "zip" => format!("{:06}", index) })
        .collect()
}

fn benchmark_group_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("group_by");

    for size in [100, 1_000, 10_000] {
        let records = people(size);
        group.bench_with_input(BenchmarkId::new("city", size), &records, |bencher, records| {
            bencher.iter(|| black_box(group_by(records, field("city"))));
        });
    }

    group.finish();
}

fn benchmark_merge_on(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("merge_on");

    // The right side is scanned linearly per left record.
    for size in [100, 500, 1_000] {
        let left = people(size);
        let right = addresses(size);
        group.bench_with_input(
            BenchmarkId::new("id", size),
            &(left, right),
            |bencher, (left, right)| {
                bencher.iter(|| black_box(merge_on(left, right, "id")));
            },
        );
    }

    group.finish();
}

fn benchmark_flatten_on(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flatten_on");

    for size in [100, 1_000, 10_000] {
        let records = people(size);
        group.bench_with_input(BenchmarkId::new("skills", size), &records, |bencher, records| {
            bencher.iter(|| {
                black_box(flatten_on(records, "skills", |person, skill| {
                    Ok(record! {
                        "name" => person.require("name")?.clone(),
                        "skill" => skill.require("name")?.clone(),
                    })
                }))
            });
        });
    }

    group.finish();
}

fn benchmark_dedup_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("dedup_by");

    for size in [100, 1_000, 10_000] {
        let records = people(size);
        group.bench_with_input(BenchmarkId::new("name", size), &records, |bencher, records| {
            bencher.iter(|| black_box(dedup_by(records, field("name"))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_group_by,
    benchmark_merge_on,
    benchmark_flatten_on,
    benchmark_dedup_by
);
criterion_main!(benches);
