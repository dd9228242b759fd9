//! Standard Bloom filter implementation.
//!
//! A Bloom filter answers "have I seen this key before?" in bounded memory.
//! Every key maps to k positions in a bit array; inserting sets those bits,
//! querying checks that all of them are set.
//!
//! # Key Properties
//!
//! - **No false negatives**: an inserted key is always reported present
//! - **Tunable false positives**: absent keys are reported present at a rate
//!   controlled by the size and hash count
//! - **Fixed size**: the bit array is never resized; rebuild to grow
//!
//! # Mathematical Foundation
//!
//! For `n` inserted terms in `m` bits with `k` hash functions, the expected
//! false positive rate is `p ≈ (1 - e^(-kn/m))^k`. Sizing for a target `p` at
//! an expected `n` gives `m = ceil(-n × ln(p) / (ln 2)²)` and
//! `k = round((m/n) × ln 2)`; see [`crate::core::params`].
//!
//! # Seeds and Clearing
//!
//! Hash seeds are drawn once, at construction. [`clear`](BloomFilter::clear)
//! zeroes bits and the term counter but keeps the seeds, so a key maps to the
//! same positions before and after a clear. Use
//! [`StandardBloomFilter::replace_hash_functions`] to draw new seeds; it clears
//! the filter in the same call, since old bits are meaningless under new seeds.
//!
//! # Examples
//!
//! ```
//! use termbloom::core::BloomFilter;
//! use termbloom::StandardBloomFilter;
//!
//! let mut filter = StandardBloomFilter::new(256, 3)?;
//! filter.add_term(Some("1-Test"));
//! filter.add_term(None); // ignored
//!
//! assert!(filter.in_the_set(Some("1-Test")));
//! assert_eq!(filter.check_term(Some("1-Test")), "probably in the set");
//! assert_eq!(filter.num_terms(), 1);
//! # Ok::<(), termbloom::BloomError>(())
//! ```

use crate::core::params::{self, CAPACITY_FALSE_POSITIVE_RATE};
use crate::core::{BitVec, BloomFilter};
use crate::error::{BloomError, Result};
use crate::filters::FilterStats;
use crate::hash::{HashFamily, HashFunctionList};

/// Classic single-array Bloom filter over string keys.
///
/// Mutation takes `&mut self`; the filter does no internal locking. Wrap it
/// in a `Mutex` or `RwLock` to share it between threads.
#[derive(Debug, Clone)]
pub struct StandardBloomFilter {
    bits: BitVec,
    hashes: HashFunctionList,
    num_terms: usize,
    /// Term count at which the estimated rate reaches 1 in 1000.
    capacity: f64,
    /// Set once the capacity warning has been logged for this fill cycle.
    capacity_warned: bool,
}

impl StandardBloomFilter {
    /// Create a filter of `size` bits with `k` Murmur3 hash functions.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidFilterSize`] if `size < 5`
    /// - [`BloomError::InvalidHashCount`] if `k` is 0 or above [`MAX_HASH_FUNCTIONS`](params::MAX_HASH_FUNCTIONS)
    /// - [`BloomError::InsufficientBits`] if `size < k`
    pub fn new(size: usize, k: usize) -> Result<Self> {
        Self::with_params(size, k, HashFamily::default())
    }

    /// Create a filter of `size` bits with `k` hash functions from `family`.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_params(size: usize, k: usize, family: HashFamily) -> Result<Self> {
        params::validate_params(size, k)?;
        let hashes = HashFunctionList::new(k, family)?;
        Self::from_validated(size, hashes)
    }

    /// Create a default-sized filter using `family`.
    ///
    /// The size and hash count are the optimum for 100 terms at a 0.001 false
    /// positive rate: 1438 bits and 10 hash functions.
    ///
    /// # Errors
    ///
    /// Only on internal failure; the default parameters are always valid.
    pub fn with_hash_family(family: HashFamily) -> Result<Self> {
        let (size, k) = params::default_size_and_hash_count()?;
        Self::with_params(size, k, family)
    }

    /// Create a default-sized filter with Murmur3 hashing.
    ///
    /// # Errors
    ///
    /// Only on internal failure; the default parameters are always valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use termbloom::core::BloomFilter;
    /// use termbloom::StandardBloomFilter;
    ///
    /// let filter = StandardBloomFilter::with_defaults().unwrap();
    /// assert_eq!(filter.bit_count(), 1438);
    /// assert_eq!(filter.hash_count(), 10);
    /// ```
    pub fn with_defaults() -> Result<Self> {
        Self::with_hash_family(HashFamily::default())
    }

    /// Create a filter of `size` bits around an existing hash list.
    ///
    /// The list's seeds are used as-is, which makes bit positions
    /// reproducible across runs.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new), with `k` taken from `hashes.count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use termbloom::core::BloomFilter;
    /// use termbloom::hash::{HashFamily, HashFunctionList};
    /// use termbloom::StandardBloomFilter;
    ///
    /// let hashes = HashFunctionList::with_seeds(HashFamily::Murmur3, vec![11, 22, 33])?;
    /// let filter = StandardBloomFilter::with_hash_list(256, hashes)?;
    /// assert_eq!(filter.bit_indices(Some("1-Test"))?, vec![121, 165, 135]);
    /// # Ok::<(), termbloom::BloomError>(())
    /// ```
    pub fn with_hash_list(size: usize, hashes: HashFunctionList) -> Result<Self> {
        params::validate_params(size, hashes.count())?;
        Self::from_validated(size, hashes)
    }

    fn from_validated(size: usize, hashes: HashFunctionList) -> Result<Self> {
        let bits = BitVec::new(size)?;
        let capacity = params::optimal_capacity(size, hashes.count(), CAPACITY_FALSE_POSITIVE_RATE)?;

        tracing::debug!(
            size,
            k = hashes.count(),
            family = hashes.family().name(),
            capacity,
            "bloom filter created"
        );

        Ok(Self {
            bits,
            hashes,
            num_terms: 0,
            capacity,
            capacity_warned: false,
        })
    }

    /// Draw a fresh set of `k` seeds and clear the filter.
    ///
    /// Positions computed under the old seeds are invalid afterwards, so every
    /// bit and the term counter are reset in the same call. On error the
    /// filter is left untouched.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidHashCount`] if `k` is 0 or above [`MAX_HASH_FUNCTIONS`](params::MAX_HASH_FUNCTIONS)
    /// - [`BloomError::InsufficientBits`] if `k` exceeds the filter size
    pub fn replace_hash_functions(&mut self, k: usize) -> Result<()> {
        params::validate_params(self.bits.len(), k)?;
        let capacity = params::optimal_capacity(self.bits.len(), k, CAPACITY_FALSE_POSITIVE_RATE)?;
        self.hashes.reseed(k)?;
        self.capacity = capacity;
        self.reset();
        tracing::debug!(size = self.bits.len(), k, "hash functions replaced, filter cleared");
        Ok(())
    }

    /// Hash family shared by every hash function.
    #[must_use]
    pub fn hash_family(&self) -> HashFamily {
        self.hashes.family()
    }

    /// The hash list this filter evaluates keys with.
    #[must_use]
    pub fn hash_list(&self) -> &HashFunctionList {
        &self.hashes
    }

    /// Number of bits currently set to 1.
    #[must_use]
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Term count at which the estimated rate reaches 1 in 1000.
    #[must_use]
    pub fn optimal_capacity(&self) -> f64 {
        self.capacity
    }

    /// Memory used by the bit array, in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.memory_usage()
    }

    /// Indices of every set bit, ascending.
    pub fn set_bits(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    #[inline]
    fn positions(&self, key: &str) -> Result<Vec<usize>> {
        self.hashes.bounded_hashes_of(Some(key), self.bits.len())
    }

    fn reset(&mut self) {
        self.bits.clear();
        self.num_terms = 0;
        self.capacity_warned = false;
    }
}

impl BloomFilter for StandardBloomFilter {
    fn add_term(&mut self, key: Option<&str>) {
        let Some(key) = key else {
            return;
        };

        let positions = match self.positions(key) {
            Ok(positions) => positions,
            Err(err) => {
                tracing::error!(%err, "failed to hash term, insert skipped");
                return;
            }
        };

        let mut newly_set = 0usize;
        for idx in positions {
            if self.bits.set(idx) {
                newly_set += 1;
            }
        }
        self.num_terms += 1;
        tracing::trace!(num_terms = self.num_terms, newly_set, "term added");

        if !self.capacity_warned && self.num_terms as f64 > self.capacity {
            self.capacity_warned = true;
            tracing::warn!(
                num_terms = self.num_terms,
                capacity = self.capacity,
                size = self.bits.len(),
                k = self.hashes.count(),
                "bloom filter is over capacity; false positive rate now exceeds 1 in 1000"
            );
        }
    }

    fn in_the_set(&self, key: Option<&str>) -> bool {
        let Some(key) = key else {
            return false;
        };

        match self.positions(key) {
            Ok(positions) => {
                let hit = positions.iter().all(|&idx| self.bits.get(idx));
                tracing::trace!(hit, "term queried");
                hit
            }
            Err(err) => {
                tracing::error!(%err, "failed to hash term, reporting absent");
                false
            }
        }
    }

    fn bit_indices(&self, key: Option<&str>) -> Result<Vec<usize>> {
        let key = key.ok_or(BloomError::NullKey)?;
        self.positions(key)
    }

    fn stats(&self) -> FilterStats {
        FilterStats::compute(
            self.bits.len(),
            self.hashes.count(),
            self.num_terms,
            self.bits.count_ones(),
            self.hashes.family(),
        )
    }

    fn is_filled(&self) -> bool {
        self.num_terms as f64 > self.capacity
    }

    fn bit_count(&self) -> usize {
        self.bits.len()
    }

    fn hash_count(&self) -> usize {
        self.hashes.count()
    }

    fn num_terms(&self) -> usize {
        self.num_terms
    }

    fn clear(&mut self) {
        self.reset();
        tracing::debug!(size = self.bits.len(), "bloom filter cleared");
    }
}
