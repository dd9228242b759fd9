//! Ordered list of k independently seeded hash functions.
//!
//! [`HashFunctionList`] owns the seed set of a filter. Every seed is picked
//! once, when the list is built or reseeded, and stays fixed afterwards, so a
//! key always maps to the same positions for the life of the list.
//!
//! # Examples
//!
//! ```
//! use termbloom::hash::{HashFamily, HashFunctionList};
//!
//! let list = HashFunctionList::with_seeds(HashFamily::Murmur3, vec![11, 22, 33]).unwrap();
//! assert_eq!(list.count(), 3);
//!
//! let positions = list.bounded_hashes_of(Some("1-Test"), 256).unwrap();
//! assert_eq!(positions, vec![121, 165, 135]);
//! ```

use super::HashFamily;
use crate::core::params::{check_hash_count, MIN_BOUND};
use crate::error::{BloomError, Result};
use rand::Rng;
use std::collections::HashSet;

/// k seeded instances of one hash family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashFunctionList {
    family: HashFamily,
    seeds: Vec<u32>,
}

impl HashFunctionList {
    /// Build `k` hash functions seeded from the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::InvalidHashCount`] if `k` is 0 or above
    /// [`MAX_HASH_FUNCTIONS`](crate::core::params::MAX_HASH_FUNCTIONS).
    pub fn new(k: usize, family: HashFamily) -> Result<Self> {
        Self::with_rng(k, family, &mut rand::thread_rng())
    }

    /// Build `k` hash functions with seeds drawn from `rng`.
    ///
    /// A seeded RNG makes the resulting positions reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::InvalidHashCount`] if `k` is 0 or above
    /// [`MAX_HASH_FUNCTIONS`](crate::core::params::MAX_HASH_FUNCTIONS).
    pub fn with_rng<R: Rng + ?Sized>(k: usize, family: HashFamily, rng: &mut R) -> Result<Self> {
        Ok(Self {
            family,
            seeds: draw_seeds(k, rng)?,
        })
    }

    /// Build a list from an explicit seed set, one hash function per seed.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidHashCount`] if `seeds` is empty or longer than
    ///   [`MAX_HASH_FUNCTIONS`](crate::core::params::MAX_HASH_FUNCTIONS)
    /// - [`BloomError::DuplicateSeed`] if a seed repeats
    pub fn with_seeds(family: HashFamily, seeds: Vec<u32>) -> Result<Self> {
        check_hash_count(seeds.len())?;
        let mut seen = HashSet::with_capacity(seeds.len());
        if let Some(&seed) = seeds.iter().find(|&&s| !seen.insert(s)) {
            return Err(BloomError::DuplicateSeed { seed });
        }
        Ok(Self { family, seeds })
    }

    /// Discard the current seeds and draw `new_k` fresh ones.
    ///
    /// Every position computed before the call is invalid afterwards; any
    /// bits set from those positions must be cleared by the owner. On error
    /// the current seed set is kept.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::InvalidHashCount`] if `new_k` is 0 or above
    /// [`MAX_HASH_FUNCTIONS`](crate::core::params::MAX_HASH_FUNCTIONS).
    pub fn reseed(&mut self, new_k: usize) -> Result<()> {
        self.reseed_with_rng(new_k, &mut rand::thread_rng())
    }

    /// Like [`reseed`](Self::reseed) but draws from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::InvalidHashCount`] if `new_k` is 0 or above
    /// [`MAX_HASH_FUNCTIONS`](crate::core::params::MAX_HASH_FUNCTIONS).
    pub fn reseed_with_rng<R: Rng + ?Sized>(&mut self, new_k: usize, rng: &mut R) -> Result<()> {
        self.seeds = draw_seeds(new_k, rng)?;
        tracing::debug!(k = new_k, family = self.family.name(), "hash function list reseeded");
        Ok(())
    }

    /// One signed 32-bit hash per function for the UTF-8 bytes of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::NullKey`] if `key` is `None`.
    pub fn hashes_of(&self, key: Option<&str>) -> Result<Vec<i32>> {
        let bytes = key.ok_or(BloomError::NullKey)?.as_bytes();
        self.seeds
            .iter()
            .map(|&seed| self.family.hash32(bytes, seed).map(|h| h as i32))
            .collect()
    }

    /// One position in `[0, bound)` per function for `key`.
    ///
    /// Negative hashes are negated before the modulo, so every hash folds to
    /// `|hash| mod bound`. `i32::MIN` folds as `2^31 mod bound`.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidBound`] if `bound < 5`
    /// - [`BloomError::NullKey`] if `key` is `None`
    pub fn bounded_hashes_of(&self, key: Option<&str>, bound: usize) -> Result<Vec<usize>> {
        if bound < MIN_BOUND {
            return Err(BloomError::invalid_bound(bound, MIN_BOUND));
        }
        Ok(self
            .hashes_of(key)?
            .into_iter()
            .map(|hash| fold(hash, bound))
            .collect())
    }

    /// Number of hash functions (k).
    #[must_use]
    #[inline]
    pub fn count(&self) -> usize {
        self.seeds.len()
    }

    /// The current seed set, in evaluation order.
    #[must_use]
    pub fn seeds(&self) -> &[u32] {
        &self.seeds
    }

    /// Hash family shared by every function in the list.
    #[must_use]
    pub fn family(&self) -> HashFamily {
        self.family
    }
}

#[inline]
fn fold(hash: i32, bound: usize) -> usize {
    hash.unsigned_abs() as usize % bound
}

fn draw_seeds<R: Rng + ?Sized>(k: usize, rng: &mut R) -> Result<Vec<u32>> {
    check_hash_count(k)?;

    let mut seen = HashSet::with_capacity(k);
    let mut seeds = Vec::with_capacity(k);
    while seeds.len() < k {
        let seed: u32 = rng.gen();
        if seen.insert(seed) {
            seeds.push(seed);
        }
    }
    Ok(seeds)
}
