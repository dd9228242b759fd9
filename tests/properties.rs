//! Property tests for filter invariants

use proptest::prelude::*;
use termbloom::core::params::optimal_size_and_hash_count;
use termbloom::hash::{HashFamily, HashFunctionList};
use termbloom::{BloomFilter, StandardBloomFilter, TermBloomFilter};

proptest! {
    #[test]
    fn no_false_negatives(items in any::<Vec<String>>(), size in 5usize..4096, k in 1usize..8) {
        prop_assume!(size >= k);
        let mut filter = StandardBloomFilter::new(size, k).unwrap();

        for item in &items {
            filter.insert(item);
        }

        for item in &items {
            prop_assert!(filter.contains(item));
        }
        prop_assert_eq!(filter.num_terms(), items.len());
    }

    #[test]
    fn fresh_filter_is_empty(probes in any::<Vec<String>>(), size in 5usize..4096, k in 1usize..16) {
        prop_assume!(size >= k);
        let filter = StandardBloomFilter::new(size, k).unwrap();

        prop_assert_eq!(filter.num_terms(), 0);
        prop_assert_eq!(filter.bits_set(), 0);
        prop_assert!(!filter.is_filled());
        for probe in &probes {
            prop_assert!(!filter.contains(probe));
        }
    }

    #[test]
    fn bounded_hashes_in_range(key in any::<String>(), bound in 5usize..100_000, k in 1usize..16) {
        let list = HashFunctionList::new(k, HashFamily::Murmur3).unwrap();
        let positions = list.bounded_hashes_of(Some(key.as_str()), bound).unwrap();

        prop_assert_eq!(positions.len(), k);
        for pos in positions {
            prop_assert!(pos < bound);
        }
    }

    #[test]
    fn bounded_hash_folds_absolute_value(key in any::<String>(), bound in 5usize..100_000) {
        let list = HashFunctionList::new(3, HashFamily::Murmur3).unwrap();
        let raw = list.hashes_of(Some(key.as_str())).unwrap();
        let bounded = list.bounded_hashes_of(Some(key.as_str()), bound).unwrap();

        for (hash, pos) in raw.into_iter().zip(bounded) {
            prop_assert_eq!(pos, hash.unsigned_abs() as usize % bound);
        }
    }

    #[test]
    fn duplicate_inserts_do_not_change_bits(key in any::<String>(), repeats in 1usize..10) {
        let mut filter = StandardBloomFilter::new(512, 4).unwrap();
        filter.insert(&key);
        let bits = filter.bits_set();

        for _ in 0..repeats {
            filter.insert(&key);
        }
        prop_assert_eq!(filter.bits_set(), bits);
        prop_assert_eq!(filter.num_terms(), repeats + 1);
    }

    #[test]
    fn clear_empties_everything(items: Vec<String>) {
        let mut filter = StandardBloomFilter::new(1024, 5).unwrap();
        filter.insert_batch(items.iter().map(String::as_str));
        filter.clear();

        prop_assert_eq!(filter.num_terms(), 0);
        prop_assert_eq!(filter.bits_set(), 0);
        for item in &items {
            prop_assert!(!filter.contains(item));
        }
    }

    #[test]
    fn sizing_is_constructible(n in 5usize..1_000_000, p in 0.0001f64..0.9999) {
        let (size, k) = optimal_size_and_hash_count(n, p).unwrap();
        prop_assert!(k >= 1);
        prop_assert!(StandardBloomFilter::new(size, k).is_ok());
    }

    #[test]
    fn term_mirror_matches_distinct_inserts(items: Vec<String>) {
        let mut filter = TermBloomFilter::new(2048, 4).unwrap();
        for item in &items {
            filter.insert(item);
        }

        let distinct: std::collections::HashSet<&String> = items.iter().collect();
        prop_assert_eq!(filter.terms().len(), distinct.len());
        for item in &items {
            prop_assert!(filter.contains_exact(item));
            prop_assert!(!filter.is_false_positive(item));
        }
    }
}
