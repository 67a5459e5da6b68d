//! Criterion benchmarks for the workload phases.

use criterion::{criterion_group, criterion_main, Criterion};
use petri_bench_core::fibonacci::fibonacci;
use petri_bench_core::records::{build_entries, build_labels, build_nested};
use petri_bench_core::sieve::prime_sieve;
use petri_bench_core::{run_workload, BenchConfig, Variant};
use std::hint::black_box;

/// Benchmark: allocation of the reference record set
fn benchmark_allocation(c: &mut Criterion) {
    c.bench_function("build_entries_1000", |b| {
        b.iter(|| black_box(build_entries(black_box(1000), 10)))
    });

    c.bench_function("build_labels_and_nested", |b| {
        b.iter(|| {
            let labels = build_labels(black_box(1000));
            let nested = build_nested(black_box(100), 10);
            black_box((labels, nested))
        })
    });
}

/// Benchmark: Fibonacci and sieve at the reference sizes
fn benchmark_compute(c: &mut Criterion) {
    c.bench_function("fibonacci_50", |b| {
        b.iter(|| black_box(fibonacci(black_box(50))))
    });

    c.bench_function("prime_sieve_1000", |b| {
        b.iter(|| black_box(prime_sieve(black_box(1000))))
    });

    c.bench_function("prime_sieve_1000000", |b| {
        b.iter(|| black_box(prime_sieve(black_box(1_000_000))))
    });
}

/// Benchmark: full driver run per variant
fn benchmark_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("workload");
    for &variant in Variant::all() {
        let config = BenchConfig::for_variant(variant);
        group.bench_function(variant.name(), |b| {
            b.iter(|| black_box(run_workload(&config)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_allocation,
    benchmark_compute,
    benchmark_workload
);
criterion_main!(benches);
