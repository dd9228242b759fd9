//! Benchmark suite for filter operations
//!
//! - Insert and query at several filter sizes
//! - Hash family comparison for raw k-hash computation
//! - Term tracking overhead
//!
//! Run with: cargo bench --bench filter_ops

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use termbloom::core::params::optimal_size_and_hash_count;
use termbloom::hash::{HashFamily, HashFunctionList};
use termbloom::{BloomFilter, StandardBloomFilter, TermBloomFilter};

fn keys(n: usize, prefix: &str) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}-{i}")).collect()
}

fn sized_filter(expected: usize) -> StandardBloomFilter {
    let (size, k) = optimal_size_and_hash_count(expected, 0.01).unwrap();
    StandardBloomFilter::new(size, k).unwrap()
}

// ============================================================================
// Insert
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for expected in [1_000, 100_000] {
        let input = keys(expected, "key");
        group.throughput(Throughput::Elements(expected as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}k_terms", expected / 1000)),
            &input,
            |b, input| {
                b.iter(|| {
                    let mut filter = sized_filter(expected);
                    for key in input {
                        filter.add_term(Some(black_box(key.as_str())));
                    }
                    filter
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Query: hits and misses
// ============================================================================

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for expected in [1_000, 100_000] {
        let present = keys(expected, "key");
        let absent = keys(expected, "missing");
        let mut filter = sized_filter(expected);
        filter.insert_batch(present.iter().map(String::as_str));

        group.throughput(Throughput::Elements(1));
        group.bench_function(BenchmarkId::new("hit", expected), |b| {
            let mut i = 0usize;
            b.iter(|| {
                let hit = filter.in_the_set(Some(black_box(present[i % expected].as_str())));
                i += 1;
                hit
            });
        });
        group.bench_function(BenchmarkId::new("miss", expected), |b| {
            let mut i = 0usize;
            b.iter(|| {
                let hit = filter.in_the_set(Some(black_box(absent[i % expected].as_str())));
                i += 1;
                hit
            });
        });
    }

    group.finish();
}

// ============================================================================
// Hash families
// ============================================================================

fn bench_hash_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_family");
    let key = "a moderately long search term used for hashing";

    for &family in HashFamily::ALL {
        let list = HashFunctionList::new(10, family).unwrap();
        group.bench_function(BenchmarkId::new("bounded_k10", family), |b| {
            b.iter(|| list.bounded_hashes_of(Some(black_box(key)), 1438).unwrap());
        });
    }

    group.finish();
}

// ============================================================================
// Term tracking overhead
// ============================================================================

fn bench_term_tracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("term_tracking");
    let input = keys(10_000, "term");
    group.throughput(Throughput::Elements(input.len() as u64));

    group.bench_function("standard", |b| {
        b.iter(|| {
            let mut filter = sized_filter(input.len());
            filter.insert_batch(input.iter().map(String::as_str));
            filter
        });
    });
    group.bench_function("term", |b| {
        b.iter(|| {
            let mut filter = TermBloomFilter::from(sized_filter(input.len()));
            filter.insert_batch(input.iter().map(String::as_str));
            filter
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_query,
    bench_hash_families,
    bench_term_tracking
);
criterion_main!(benches);
