//! Aggregate statistics for a filter.
//!
//! [`FilterStats`] is a point-in-time snapshot. It is computed from the
//! filter's counters on demand and never updated afterwards.

use crate::core::params::{self, CAPACITY_FALSE_POSITIVE_RATE};
use crate::hash::HashFamily;
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of a filter's shape and load.
///
/// # Examples
///
/// ```
/// use termbloom::core::BloomFilter;
/// use termbloom::StandardBloomFilter;
///
/// let mut filter = StandardBloomFilter::with_defaults().unwrap();
/// filter.insert("alpha");
///
/// let stats = filter.stats();
/// assert_eq!(stats.size, 1438);
/// assert_eq!(stats.hash_count, 10);
/// assert_eq!(stats.num_terms, 1);
/// assert!(stats.false_positive_rate < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterStats {
    /// Filter size in bits (m).
    pub size: usize,
    /// Number of hash functions (k).
    pub hash_count: usize,
    /// Insert operations since construction or the last clear (n).
    pub num_terms: usize,
    /// Estimated false positive rate at the current load, `(1 - e^(-kn/m))^k`.
    pub false_positive_rate: f64,
    /// Bits currently set to 1.
    pub bits_set: usize,
    /// `bits_set / size`.
    pub fill_ratio: f64,
    /// Term count at which the estimated rate reaches 1 in 1000.
    pub optimal_capacity: f64,
    /// Hash family the filter was built with.
    pub hash_family: HashFamily,
}

impl FilterStats {
    /// Derive a snapshot from raw filter counters.
    #[must_use]
    pub fn compute(
        size: usize,
        hash_count: usize,
        num_terms: usize,
        bits_set: usize,
        hash_family: HashFamily,
    ) -> Self {
        let fill_ratio = if size == 0 {
            0.0
        } else {
            bits_set as f64 / size as f64
        };

        Self {
            size,
            hash_count,
            num_terms,
            false_positive_rate: params::expected_fp_rate(size, num_terms, hash_count),
            bits_set,
            fill_ratio,
            optimal_capacity: params::optimal_capacity(size, hash_count, CAPACITY_FALSE_POSITIVE_RATE)
                .unwrap_or(0.0),
            hash_family,
        }
    }

    /// True once `num_terms` exceeds the 1-in-1000 capacity.
    #[must_use]
    pub fn over_capacity(&self) -> bool {
        self.num_terms as f64 > self.optimal_capacity
    }

    /// Render as a name-to-value map, keyed in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use termbloom::core::BloomFilter;
    /// use termbloom::StandardBloomFilter;
    ///
    /// let filter = StandardBloomFilter::new(256, 3).unwrap();
    /// let map = filter.stats().to_map();
    /// assert_eq!(map["size"], "256");
    /// assert_eq!(map["hash_count"], "3");
    /// assert_eq!(map["num_terms"], "0");
    /// ```
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("size", self.size.to_string()),
            ("hash_count", self.hash_count.to_string()),
            ("num_terms", self.num_terms.to_string()),
            ("false_positive_rate", self.false_positive_rate.to_string()),
            ("bits_set", self.bits_set.to_string()),
            ("fill_ratio", self.fill_ratio.to_string()),
            ("optimal_capacity", format!("{:.2}", self.optimal_capacity)),
            ("hash_family", self.hash_family.to_string()),
        ])
    }
}

impl fmt::Display for FilterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bloom filter: {} bits, {} hashes ({}), {} terms, fill {:.1}%, FPR {:.6}, capacity ~{:.0}",
            self.size,
            self.hash_count,
            self.hash_family,
            self.num_terms,
            self.fill_ratio * 100.0,
            self.false_positive_rate,
            self.optimal_capacity
        )
    }
}
