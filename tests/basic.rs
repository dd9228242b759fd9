//! Basic tests - the public API end to end

use termbloom::core::params::optimal_size_and_hash_count;
use termbloom::hash::{HashFamily, HashFunctionList};
use termbloom::prelude::*;

fn fixed_filter() -> StandardBloomFilter {
    let hashes = HashFunctionList::with_seeds(HashFamily::Murmur3, vec![11, 22, 33]).unwrap();
    StandardBloomFilter::with_hash_list(256, hashes).unwrap()
}

#[test]
fn test_basic_insert_and_find() {
    let mut filter = StandardBloomFilter::with_defaults().unwrap();

    filter.add_term(Some("test-item"));

    assert!(
        filter.in_the_set(Some("test-item")),
        "Should find the item we just added"
    );
    assert_eq!(filter.check_term(Some("test-item")), "probably in the set");
}

#[test]
fn test_fresh_filter_reports_nothing() {
    let filter = StandardBloomFilter::new(64, 4).unwrap();
    assert_eq!(filter.num_terms(), 0);
    for i in 0..1000 {
        assert!(!filter.contains(&format!("item-{i}")));
    }
}

#[test]
fn test_end_to_end_256_by_3() {
    let mut filter = fixed_filter();
    filter.add_term(Some("1-Test"));
    filter.add_term(Some("2-Test"));
    filter.add_term(Some("3-Test"));

    assert_eq!(filter.num_terms(), 3);
    assert!(filter.in_the_set(Some("1-Test")));
    assert!(!filter.in_the_set(Some("4-Test")));
    assert_eq!(filter.check_term(Some("4-Test")), "definitely not in the set");

    filter.clear();
    assert_eq!(filter.num_terms(), 0);
    assert!(!filter.in_the_set(Some("1-Test")));
}

#[test]
fn test_construction_rejections() {
    for (size, k) in [(4, 3), (10, 0)] {
        let err = StandardBloomFilter::new(size, k).unwrap_err();
        assert!(err.is_invalid_argument(), "({size}, {k}) gave {err:?}");
    }
}

#[test]
fn test_null_handling() {
    let mut filter = fixed_filter();
    filter.add_term(None);

    assert_eq!(filter.num_terms(), 0);
    assert_eq!(filter.bits_set(), 0);
    assert!(!filter.in_the_set(None));
    assert_eq!(filter.bit_indices(None), Err(BloomError::NullKey));
    assert_eq!(
        filter.hash_list().hashes_of(None).unwrap_err().kind(),
        termbloom::ErrorKind::NullKey
    );
}

#[test]
fn test_sizing_rejections() {
    for n in 0..5 {
        assert!(optimal_size_and_hash_count(n, 0.01).is_err());
    }
    for p in [0.0, 1.0, -1.0, 2.0] {
        assert!(optimal_size_and_hash_count(100, p).is_err());
    }
    assert_eq!(optimal_size_and_hash_count(100, 0.001).unwrap(), (1438, 10));
}

#[test]
fn test_stats_map() {
    let mut filter = fixed_filter();
    filter.insert_batch(["1-Test", "2-Test", "3-Test"]);

    let map = filter.stats().to_map();
    assert_eq!(map["size"], "256");
    assert_eq!(map["hash_count"], "3");
    assert_eq!(map["num_terms"], "3");
    assert_eq!(map["bits_set"], "9");

    let fp: f64 = map["false_positive_rate"].parse().unwrap();
    let expected = (1.0 - (-9.0_f64 / 256.0).exp()).powi(3);
    assert!((fp - expected).abs() < 1e-12);
}

#[test]
fn test_term_filter_tracks_truth() {
    let mut filter = TermBloomFilter::with_defaults().unwrap();
    let words = ["alpha", "beta", "gamma", "beta"];
    for word in words {
        filter.add_term(Some(word));
    }

    assert_eq!(filter.num_terms(), 4);
    assert_eq!(filter.sorted_terms(), vec!["alpha", "beta", "gamma"]);
    assert!(filter.contains_all(["alpha", "beta", "gamma"]));

    filter.clear();
    assert!(filter.terms().is_empty());
    assert_eq!(filter.num_terms(), 0);
}

#[test]
fn test_observed_fp_rate_near_estimate() {
    let (size, k) = optimal_size_and_hash_count(1000, 0.01).unwrap();
    let mut filter = StandardBloomFilter::new(size, k).unwrap();
    for i in 0..1000 {
        filter.insert(&format!("present-{i}"));
    }

    let trials = 20_000;
    let hits = (0..trials)
        .filter(|i| filter.contains(&format!("absent-{i}")))
        .count();
    let observed = hits as f64 / trials as f64;

    // Expected ~1%; allow generous slack for seed variance.
    assert!(observed < 0.03, "observed FP rate {observed}");
    // Sized for 1% but "filled" is judged at 0.1%.
    assert!(filter.is_filled());
}

#[test]
fn test_filter_sized_at_capacity_rate_is_not_filled() {
    let (size, k) = optimal_size_and_hash_count(1000, 0.001).unwrap();
    let mut filter = StandardBloomFilter::new(size, k).unwrap();
    for i in 0..1000 {
        filter.insert(&format!("present-{i}"));
    }
    assert!(!filter.is_filled());
    assert!(filter.stats().false_positive_rate <= 0.001);
}
