//! Bloom filter that also remembers the exact terms it was given.
//!
//! [`TermBloomFilter`] wraps a [`StandardBloomFilter`] and mirrors every
//! insert into a `HashSet`. Membership answers still come from the bits; the
//! set is ground truth for showing how the filter behaves, for example which
//! hits are false positives.

use crate::core::BloomFilter;
use crate::error::Result;
use crate::filters::{FilterStats, StandardBloomFilter};
use crate::hash::{HashFamily, HashFunctionList};
use std::collections::HashSet;

/// A [`StandardBloomFilter`] plus the exact set of inserted terms.
///
/// # Examples
///
/// ```
/// use termbloom::core::BloomFilter;
/// use termbloom::TermBloomFilter;
///
/// let mut filter = TermBloomFilter::new(256, 3).unwrap();
/// filter.add_term(Some("apple"));
/// filter.add_term(Some("apple"));
///
/// assert_eq!(filter.num_terms(), 2);
/// assert_eq!(filter.terms().len(), 1);
/// assert!(filter.contains_exact("apple"));
/// ```
#[derive(Debug, Clone)]
pub struct TermBloomFilter {
    inner: StandardBloomFilter,
    terms: HashSet<String>,
}

impl TermBloomFilter {
    /// Create a filter of `size` bits with `k` Murmur3 hash functions.
    ///
    /// # Errors
    ///
    /// See [`StandardBloomFilter::new`].
    pub fn new(size: usize, k: usize) -> Result<Self> {
        StandardBloomFilter::new(size, k).map(Self::from)
    }

    /// Create a filter of `size` bits with `k` hash functions from `family`.
    ///
    /// # Errors
    ///
    /// See [`StandardBloomFilter::with_params`].
    pub fn with_params(size: usize, k: usize, family: HashFamily) -> Result<Self> {
        StandardBloomFilter::with_params(size, k, family).map(Self::from)
    }

    /// Create a default-sized filter using `family`.
    ///
    /// # Errors
    ///
    /// See [`StandardBloomFilter::with_hash_family`].
    pub fn with_hash_family(family: HashFamily) -> Result<Self> {
        StandardBloomFilter::with_hash_family(family).map(Self::from)
    }

    /// Create a default-sized filter with Murmur3 hashing.
    ///
    /// # Errors
    ///
    /// See [`StandardBloomFilter::with_defaults`].
    pub fn with_defaults() -> Result<Self> {
        StandardBloomFilter::with_defaults().map(Self::from)
    }

    /// Create a filter of `size` bits around an existing hash list.
    ///
    /// # Errors
    ///
    /// See [`StandardBloomFilter::with_hash_list`].
    pub fn with_hash_list(size: usize, hashes: HashFunctionList) -> Result<Self> {
        StandardBloomFilter::with_hash_list(size, hashes).map(Self::from)
    }

    /// Every distinct term inserted since the last clear.
    #[must_use]
    pub fn terms(&self) -> &HashSet<String> {
        &self.terms
    }

    /// Inserted terms in sorted order, for display.
    #[must_use]
    pub fn sorted_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.terms.iter().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    /// Exact membership, answered from the mirror set.
    #[must_use]
    pub fn contains_exact(&self, key: &str) -> bool {
        self.terms.contains(key)
    }

    /// True if the filter reports `key` present although it was never inserted.
    #[must_use]
    pub fn is_false_positive(&self, key: &str) -> bool {
        self.inner.contains(key) && !self.contains_exact(key)
    }

    /// The wrapped filter.
    #[must_use]
    pub fn inner(&self) -> &StandardBloomFilter {
        &self.inner
    }

    /// Drop the term set and return the wrapped filter.
    #[must_use]
    pub fn into_inner(self) -> StandardBloomFilter {
        self.inner
    }
}

/// Wrap an existing filter. Terms inserted before wrapping are unknown, so
/// the mirror set starts empty.
impl From<StandardBloomFilter> for TermBloomFilter {
    fn from(inner: StandardBloomFilter) -> Self {
        Self {
            inner,
            terms: HashSet::new(),
        }
    }
}

impl BloomFilter for TermBloomFilter {
    fn add_term(&mut self, key: Option<&str>) {
        let Some(key) = key else {
            return;
        };
        self.inner.add_term(Some(key));
        if !self.terms.contains(key) {
            self.terms.insert(key.to_owned());
        }
    }

    fn in_the_set(&self, key: Option<&str>) -> bool {
        self.inner.in_the_set(key)
    }

    fn bit_indices(&self, key: Option<&str>) -> Result<Vec<usize>> {
        self.inner.bit_indices(key)
    }

    fn stats(&self) -> FilterStats {
        self.inner.stats()
    }

    fn is_filled(&self) -> bool {
        self.inner.is_filled()
    }

    fn bit_count(&self) -> usize {
        self.inner.bit_count()
    }

    fn hash_count(&self) -> usize {
        self.inner.hash_count()
    }

    fn num_terms(&self) -> usize {
        self.inner.num_terms()
    }

    fn clear(&mut self) {
        self.inner.clear();
        self.terms.clear();
    }
}
