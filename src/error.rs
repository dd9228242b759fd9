//! Error types for termbloom operations.
//!
//! Every failure in this crate is a synchronous precondition violation: the
//! operation either fully succeeds or returns an error without mutating any
//! filter state.
//!
//! # Error Propagation
//!
//! ```
//! use termbloom::{BloomError, Result};
//! use termbloom::core::params::optimal_size_and_hash_count;
//!
//! fn plan(n: usize, fp: f64) -> Result<(usize, usize)> {
//!     let (m, k) = optimal_size_and_hash_count(n, fp)?;
//!     Ok((m, k))
//! }
//! # assert!(plan(1000, 0.01).is_ok());
//! # assert!(matches!(plan(3, 0.01), Err(BloomError::InvalidItemCount { .. })));
//! ```

use thiserror::Error;

/// Result type alias for termbloom operations.
pub type Result<T> = std::result::Result<T, BloomError>;

/// Coarse classification of a [`BloomError`].
///
/// Callers that only care whether an argument was rejected or a key was
/// missing can match on this instead of the detailed variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A size, count, bound or rate was outside its valid range.
    InvalidArgument,
    /// A hash-extraction path was handed an absent key.
    NullKey,
    /// An internal invariant was violated.
    Internal,
}

/// Errors that can occur while building or querying a filter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BloomError {
    /// Filter size is below the minimum number of bits.
    #[error("Invalid filter size: {size} bits. Must be at least {min} bits.")]
    InvalidFilterSize {
        /// The rejected size in bits.
        size: usize,
        /// Smallest accepted size.
        min: usize,
    },

    /// Hash function count is outside the accepted range.
    #[error("Invalid hash function count: {count}. Must be in range [{min}, {max}].")]
    InvalidHashCount {
        /// The rejected count.
        count: usize,
        /// Smallest accepted count.
        min: usize,
        /// Largest accepted count.
        max: usize,
    },

    /// The filter has fewer bits than hash functions.
    #[error("Filter size ({size} bits) must be at least as large as hash count ({hash_count}).")]
    InsufficientBits {
        /// Filter size in bits.
        size: usize,
        /// Requested hash function count.
        hash_count: usize,
    },

    /// Range for bounded hashing is too narrow.
    #[error("Invalid hash bound: {bound}. Bound must be {min} or greater.")]
    InvalidBound {
        /// The rejected bound.
        bound: usize,
        /// Smallest accepted bound.
        min: usize,
    },

    /// Expected term count handed to the sizing advisor is too small.
    #[error("Invalid expected term count: {count}. Expected terms must be at least {min}.")]
    InvalidItemCount {
        /// The rejected count.
        count: usize,
        /// Smallest accepted count.
        min: usize,
    },

    /// False positive rate outside the open interval (0, 1).
    #[error("False positive rate {fp_rate} is out of bounds. Must be in range (0, 1).")]
    FalsePositiveRateOutOfBounds {
        /// The rejected rate.
        fp_rate: f64,
    },

    /// Derived filter size does not fit in memory addressing limits.
    #[error("Calculated filter size {requested:.0} bits exceeds system limits.")]
    SizeOverflow {
        /// The size the formula produced.
        requested: f64,
    },

    /// The same seed appears twice in an explicit seed set.
    #[error("Duplicate hash seed {seed}. Seeds must be distinct.")]
    DuplicateSeed {
        /// The repeated seed.
        seed: u32,
    },

    /// A hash family selector name was not recognized.
    #[error("Unknown hash family '{name}'.")]
    UnknownHashFamily {
        /// The rejected name.
        name: String,
    },

    /// A key was required but none was supplied.
    #[error("Key must not be null.")]
    NullKey,

    /// Internal invariant violated. Indicates a bug in termbloom.
    #[error("Internal error (this is a bug in termbloom): {message}.")]
    InternalError {
        /// Description of the invariant that was violated.
        message: String,
    },
}

impl BloomError {
    /// Create an `InvalidFilterSize` error.
    #[must_use]
    pub fn invalid_filter_size(size: usize, min: usize) -> Self {
        Self::InvalidFilterSize { size, min }
    }

    /// Create an `InvalidHashCount` error.
    #[must_use]
    pub fn invalid_hash_count(count: usize, min: usize, max: usize) -> Self {
        Self::InvalidHashCount { count, min, max }
    }

    /// Create an `InsufficientBits` error.
    #[must_use]
    pub fn insufficient_bits(size: usize, hash_count: usize) -> Self {
        Self::InsufficientBits { size, hash_count }
    }

    /// Create an `InvalidBound` error.
    #[must_use]
    pub fn invalid_bound(bound: usize, min: usize) -> Self {
        Self::InvalidBound { bound, min }
    }

    /// Create an `InvalidItemCount` error.
    #[must_use]
    pub fn invalid_item_count(count: usize, min: usize) -> Self {
        Self::InvalidItemCount { count, min }
    }

    /// Create a `FalsePositiveRateOutOfBounds` error.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// Create an `InternalError`.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullKey => ErrorKind::NullKey,
            Self::InternalError { .. } => ErrorKind::Internal,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// True for every argument-validation failure.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}
