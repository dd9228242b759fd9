//! Builder for standard and term-tracking Bloom filters.
//!
//! # Type-State Pattern
//!
//! A filter is sized either explicitly (bits and hash count) or from an
//! expected load (term count and target false positive rate), never both.
//! The builder tracks which path was taken in its type, so mixing the two is
//! a compile error:
//!
//! ```text
//!            .size() / .hash_functions() / .seeds()
//! Unsized ───────────────────────────────────────────▶ Explicit
//!    │
//!    │       .expected_terms() / .false_positive_rate()
//!    └───────────────────────────────────────────────▶ Derived
//! ```
//!
//! `.build()` is available in every state. Values left unset fall back to the
//! defaults: 100 expected terms at a 0.001 false positive rate, which is 1438
//! bits and 10 hash functions.
//!
//! # Examples
//!
//! ## Explicit Sizing
//!
//! ```
//! use termbloom::builder::BloomFilterBuilder;
//! use termbloom::core::BloomFilter;
//!
//! let filter = BloomFilterBuilder::new()
//!     .size(256)
//!     .hash_functions(3)
//!     .build()
//!     .unwrap();
//! assert_eq!((filter.bit_count(), filter.hash_count()), (256, 3));
//! ```
//!
//! ## Derived Sizing
//!
//! ```
//! use termbloom::builder::BloomFilterBuilder;
//! use termbloom::core::BloomFilter;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_terms(1000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! assert_eq!((filter.bit_count(), filter.hash_count()), (9586, 7));
//! ```
//!
//! ## Reproducible Positions
//!
//! ```
//! use termbloom::builder::BloomFilterBuilder;
//! use termbloom::core::BloomFilter;
//!
//! let filter = BloomFilterBuilder::new()
//!     .size(256)
//!     .seeds(vec![11, 22, 33])
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.bit_indices(Some("1-Test")).unwrap(), vec![121, 165, 135]);
//! ```
//!
//! ## Mixing Sizing Modes Does Not Compile
//!
//! ```compile_fail
//! use termbloom::builder::BloomFilterBuilder;
//!
//! let _ = BloomFilterBuilder::new()
//!     .size(256)
//!     .expected_terms(1000)
//!     .build();
//! ```

use crate::core::params::{self, DEFAULT_EXPECTED_TERMS, DEFAULT_FALSE_POSITIVE_RATE};
use crate::error::Result;
use crate::filters::{StandardBloomFilter, TermBloomFilter};
use crate::hash::{HashFamily, HashFunctionList};
use std::marker::PhantomData;

/// Type-state marker: no sizing parameter set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsized;

/// Type-state marker: size, hash count or seeds set directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Explicit;

/// Type-state marker: size derived from expected terms and target rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Derived;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Unsized {}
    impl Sealed for super::Explicit {}
    impl Sealed for super::Derived {}
}

/// Any builder state.
pub trait BuilderState: sealed::Sealed {}
impl BuilderState for Unsized {}
impl BuilderState for Explicit {}
impl BuilderState for Derived {}

/// States that accept an explicit size, hash count or seed set.
pub trait ExplicitSizing: BuilderState {}
impl ExplicitSizing for Unsized {}
impl ExplicitSizing for Explicit {}

/// States that accept an expected term count or target rate.
pub trait DerivedSizing: BuilderState {}
impl DerivedSizing for Unsized {}
impl DerivedSizing for Derived {}

/// Fluent configuration for [`StandardBloomFilter`] and [`TermBloomFilter`].
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder<S = Unsized> {
    size: Option<usize>,
    hash_functions: Option<usize>,
    seeds: Option<Vec<u32>>,
    expected_terms: Option<usize>,
    fp_rate: Option<f64>,
    family: HashFamily,
    _state: PhantomData<S>,
}

impl BloomFilterBuilder<Unsized> {
    /// Create a builder with every value unset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: None,
            hash_functions: None,
            seeds: None,
            expected_terms: None,
            fp_rate: None,
            family: HashFamily::default(),
            _state: PhantomData,
        }
    }
}

impl Default for BloomFilterBuilder<Unsized> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BuilderState> BloomFilterBuilder<S> {
    fn transition<T: BuilderState>(self) -> BloomFilterBuilder<T> {
        BloomFilterBuilder {
            size: self.size,
            hash_functions: self.hash_functions,
            seeds: self.seeds,
            expected_terms: self.expected_terms,
            fp_rate: self.fp_rate,
            family: self.family,
            _state: PhantomData,
        }
    }

    /// Select the hash family. Defaults to [`HashFamily::Murmur3`].
    #[must_use]
    pub fn hash_family(mut self, family: HashFamily) -> Self {
        self.family = family;
        self
    }

    /// Resolve every unset value and build a [`StandardBloomFilter`].
    ///
    /// # Errors
    ///
    /// Any validation error of the sizing advisor, the filter constructor or
    /// [`HashFunctionList::with_seeds`].
    pub fn build(self) -> Result<StandardBloomFilter> {
        let (size, hashes) = self.resolve()?;
        StandardBloomFilter::with_hash_list(size, hashes)
    }

    /// Like [`build`](Self::build), wrapped in a [`TermBloomFilter`].
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_term_filter(self) -> Result<TermBloomFilter> {
        self.build().map(TermBloomFilter::from)
    }

    fn resolve(self) -> Result<(usize, HashFunctionList)> {
        let (default_size, default_k) = if self.expected_terms.is_some() || self.fp_rate.is_some() {
            params::optimal_size_and_hash_count(
                self.expected_terms.unwrap_or(DEFAULT_EXPECTED_TERMS),
                self.fp_rate.unwrap_or(DEFAULT_FALSE_POSITIVE_RATE),
            )?
        } else {
            params::default_size_and_hash_count()?
        };

        let size = self.size.unwrap_or(default_size);
        let hashes = match self.seeds {
            Some(seeds) => {
                params::validate_params(size, seeds.len())?;
                HashFunctionList::with_seeds(self.family, seeds)?
            }
            None => {
                let k = self.hash_functions.unwrap_or(default_k);
                params::validate_params(size, k)?;
                HashFunctionList::new(k, self.family)?
            }
        };
        Ok((size, hashes))
    }
}

impl<S: ExplicitSizing> BloomFilterBuilder<S> {
    /// Filter size in bits. Defaults to 1438.
    #[must_use]
    pub fn size(mut self, bits: usize) -> BloomFilterBuilder<Explicit> {
        self.size = Some(bits);
        self.transition()
    }

    /// Number of hash functions, seeded at random. Defaults to 10.
    ///
    /// Discards any seed set given earlier.
    #[must_use]
    pub fn hash_functions(mut self, k: usize) -> BloomFilterBuilder<Explicit> {
        self.hash_functions = Some(k);
        self.seeds = None;
        self.transition()
    }

    /// Use exactly these seeds, one hash function each.
    ///
    /// Fixes the hash count to `seeds.len()` and discards any count given
    /// earlier.
    #[must_use]
    pub fn seeds(mut self, seeds: Vec<u32>) -> BloomFilterBuilder<Explicit> {
        self.seeds = Some(seeds);
        self.hash_functions = None;
        self.transition()
    }
}

impl<S: DerivedSizing> BloomFilterBuilder<S> {
    /// Expected number of terms. Defaults to 100.
    #[must_use]
    pub fn expected_terms(mut self, n: usize) -> BloomFilterBuilder<Derived> {
        self.expected_terms = Some(n);
        self.transition()
    }

    /// Target false positive rate in (0, 1). Defaults to 0.001.
    #[must_use]
    pub fn false_positive_rate(mut self, fp_rate: f64) -> BloomFilterBuilder<Derived> {
        self.fp_rate = Some(fp_rate);
        self.transition()
    }
}
