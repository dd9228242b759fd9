//! The Bloom filter capability trait.
//!
//! # Guarantees
//!
//! 1. **No False Negatives**: once `add_term(Some(x))` has run, `in_the_set(Some(x))`
//!    returns `true` until the filter is cleared
//! 2. **Bounded False Positives**: the hit rate for absent keys follows
//!    `(1 - e^(-kn/m))^k`
//! 3. **Monotonic Bits**: no query ever unsets a bit; only `clear` does
//!
//! # Absent Keys
//!
//! Keys are passed as `Option<&str>`. Insertion silently ignores `None` and
//! membership reports it as absent, so optional keys from upstream code need
//! no guard. [`BloomFilter::bit_indices`] is stricter and rejects `None`.
//!
//! # Concurrency
//!
//! Mutating methods take `&mut self`. To share a filter between threads wrap
//! it in a lock (`RwLock` or `Mutex`) so `add_term` and `clear` are serialized
//! against every other call.
//!
//! ```
//! use termbloom::core::BloomFilter;
//! use termbloom::StandardBloomFilter;
//! use std::sync::{Arc, RwLock};
//!
//! let filter = Arc::new(RwLock::new(StandardBloomFilter::new(1000, 5).unwrap()));
//!
//! let writer = Arc::clone(&filter);
//! std::thread::spawn(move || {
//!     writer.write().unwrap().add_term(Some("item"));
//! })
//! .join()
//! .unwrap();
//!
//! assert!(filter.read().unwrap().in_the_set(Some("item")));
//! ```

use crate::core::params;
use crate::error::Result;
use crate::filters::FilterStats;
use std::fmt;

/// Verdict of a membership check.
///
/// A Bloom filter never produces false negatives, so a miss is certain while
/// a hit is only probable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    /// Every probed bit was set; the key was probably inserted.
    ProbablyPresent,
    /// At least one probed bit was clear; the key was never inserted.
    DefinitelyAbsent,
}

impl Membership {
    /// Phrase used by [`BloomFilter::check_term`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProbablyPresent => "probably in the set",
            Self::DefinitelyAbsent => "definitely not in the set",
        }
    }

    /// True for [`Membership::ProbablyPresent`].
    #[must_use]
    pub const fn is_probable(&self) -> bool {
        matches!(self, Self::ProbablyPresent)
    }
}

impl From<bool> for Membership {
    fn from(hit: bool) -> Self {
        if hit {
            Self::ProbablyPresent
        } else {
            Self::DefinitelyAbsent
        }
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability set shared by every filter in this crate.
pub trait BloomFilter {
    /// Insert `key`. `None` is a no-op.
    ///
    /// The term counter increments once per call with a present key, even if
    /// every probed bit was already set: it counts insert operations, not
    /// distinct terms.
    fn add_term(&mut self, key: Option<&str>);

    /// True iff every bit `key` maps to is set. `None` is never in the set.
    #[must_use]
    fn in_the_set(&self, key: Option<&str>) -> bool;

    /// Positions `key` maps to, in hash-function order.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::NullKey`](crate::BloomError::NullKey) if `key` is `None`.
    fn bit_indices(&self, key: Option<&str>) -> Result<Vec<usize>>;

    /// Snapshot of size, hash count, term count and current false positive rate.
    #[must_use]
    fn stats(&self) -> FilterStats;

    /// True once more terms were inserted than the filter holds at a
    /// 1-in-1000 false positive rate. Advisory only; inserts never block.
    #[must_use]
    fn is_filled(&self) -> bool;

    /// Filter size in bits.
    #[must_use]
    fn bit_count(&self) -> usize;

    /// Number of hash functions (k).
    #[must_use]
    fn hash_count(&self) -> usize;

    /// Number of insert operations since construction or the last clear.
    #[must_use]
    fn num_terms(&self) -> usize;

    /// Zero every bit and reset the term counter. Hash seeds are kept.
    fn clear(&mut self);

    /// Membership verdict for `key`.
    #[must_use]
    fn membership(&self, key: Option<&str>) -> Membership {
        Membership::from(self.in_the_set(key))
    }

    /// Human-readable membership phrase for `key`.
    #[must_use]
    fn check_term(&self, key: Option<&str>) -> &'static str {
        self.membership(key).as_str()
    }

    /// Sizing advice for `expected_terms` at `fp_rate`. Does not touch the filter.
    ///
    /// # Errors
    ///
    /// See [`params::optimal_size_and_hash_count`].
    fn optimal_size_and_hash_count(&self, expected_terms: usize, fp_rate: f64) -> Result<(usize, usize)> {
        params::optimal_size_and_hash_count(expected_terms, fp_rate)
    }

    /// Insert a present key.
    fn insert(&mut self, key: &str) {
        self.add_term(Some(key));
    }

    /// Membership of a present key.
    #[must_use]
    fn contains(&self, key: &str) -> bool {
        self.in_the_set(Some(key))
    }

    /// Insert every key from an iterator.
    fn insert_batch<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a str>,
        Self: Sized,
    {
        for key in keys {
            self.insert(key);
        }
    }

    /// True iff every key is probably present.
    #[must_use]
    fn contains_all<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
        Self: Sized,
    {
        keys.into_iter().all(|key| self.contains(key))
    }

    /// True iff at least one key is probably present.
    #[must_use]
    fn contains_any<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
        Self: Sized,
    {
        keys.into_iter().any(|key| self.contains(key))
    }

    /// True if nothing has been inserted since the last clear.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.num_terms() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterStats;
    use crate::hash::HashFamily;
    use std::collections::HashSet;

    /// Exact set pretending to be a filter, to exercise the provided methods.
    struct ExactFilter {
        items: HashSet<String>,
        inserts: usize,
    }

    impl ExactFilter {
        fn new() -> Self {
            Self {
                items: HashSet::new(),
                inserts: 0,
            }
        }
    }

    impl BloomFilter for ExactFilter {
        fn add_term(&mut self, key: Option<&str>) {
            if let Some(key) = key {
                self.items.insert(key.to_string());
                self.inserts += 1;
            }
        }

        fn in_the_set(&self, key: Option<&str>) -> bool {
            key.is_some_and(|k| self.items.contains(k))
        }

        fn bit_indices(&self, key: Option<&str>) -> Result<Vec<usize>> {
            key.map(|_| Vec::new()).ok_or(crate::BloomError::NullKey)
        }

        fn stats(&self) -> FilterStats {
            FilterStats::compute(64, 1, self.inserts, 0, HashFamily::Murmur3)
        }

        fn is_filled(&self) -> bool {
            false
        }

        fn bit_count(&self) -> usize {
            64
        }

        fn hash_count(&self) -> usize {
            1
        }

        fn num_terms(&self) -> usize {
            self.inserts
        }

        fn clear(&mut self) {
            self.items.clear();
            self.inserts = 0;
        }
    }

    #[test]
    fn test_membership_phrases() {
        assert_eq!(Membership::ProbablyPresent.as_str(), "probably in the set");
        assert_eq!(
            Membership::DefinitelyAbsent.to_string(),
            "definitely not in the set"
        );
        assert!(Membership::from(true).is_probable());
        assert!(!Membership::from(false).is_probable());
    }

    #[test]
    fn test_check_term_default() {
        let mut filter = ExactFilter::new();
        filter.insert("a");
        assert_eq!(filter.check_term(Some("a")), "probably in the set");
        assert_eq!(filter.check_term(Some("b")), "definitely not in the set");
        assert_eq!(filter.check_term(None), "definitely not in the set");
    }

    #[test]
    fn test_batch_helpers() {
        let mut filter = ExactFilter::new();
        filter.insert_batch(["x", "y", "z"]);
        assert_eq!(filter.num_terms(), 3);
        assert!(filter.contains_all(["x", "z"]));
        assert!(!filter.contains_all(["x", "w"]));
        assert!(filter.contains_any(["w", "y"]));
        assert!(!filter.contains_any(["v", "w"]));
    }

    #[test]
    fn test_is_empty_tracks_clear() {
        let mut filter = ExactFilter::new();
        assert!(filter.is_empty());
        filter.insert("a");
        assert!(!filter.is_empty());
        filter.clear();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_optimal_sizing_default_method() {
        let filter = ExactFilter::new();
        assert_eq!(filter.optimal_size_and_hash_count(100, 0.001).unwrap(), (1438, 10));
        assert!(filter.optimal_size_and_hash_count(4, 0.5).is_err());
    }
}
