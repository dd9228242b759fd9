//! Optimal parameter calculation for Bloom filters.
//!
//! # Mathematical Background
//!
//! Given:
//! - `n`: Expected number of terms
//! - `p`: Target false positive rate
//!
//! Optimal parameters:
//! - `m = ceil(-n × ln(p) / (ln 2)²)` (bits in filter)
//! - `k = round((m/n) × ln 2)`, at least 1 (number of hash functions)
//!
//! Expected false positive rate after `n` insertions:
//! - `p = (1 - e^(-kn/m))^k`
//!
//! Solving the last formula for `n` gives the optimal capacity of an existing
//! filter at a given target rate:
//! - `n = -(m/k) × ln(1 - p^(1/k))`

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{BloomError, Result};
use std::f64::consts::LN_2;

/// (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Minimum filter size in bits.
///
/// Equal to [`MIN_BOUND`], since the filter size is the bound used to fold
/// every hash into a bit position.
pub const MIN_FILTER_SIZE: usize = 5;

/// Smallest range accepted by bounded hashing.
pub const MIN_BOUND: usize = 5;

/// At least one hash function is required for any Bloom filter.
pub const MIN_HASH_FUNCTIONS: usize = 1;

/// Upper limit on hash functions per filter.
///
/// Above the largest count [`optimal_size_and_hash_count`] returns for any
/// positive `f64` rate (about 1075).
pub const MAX_HASH_FUNCTIONS: usize = 2048;

/// Smallest expected term count the sizing advisor accepts.
///
/// Below this the sizing math degenerates into filters of a handful of bits.
pub const MIN_EXPECTED_TERMS: usize = 5;

/// Expected load used by the default constructors.
pub const DEFAULT_EXPECTED_TERMS: usize = 100;

/// Target false positive rate used by the default constructors.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.001;

/// Rate at which a filter is considered filled (1 in 1000).
pub const CAPACITY_FALSE_POSITIVE_RATE: f64 = 0.001;

/// Check `k` against [`MIN_HASH_FUNCTIONS`] and [`MAX_HASH_FUNCTIONS`].
///
/// # Errors
///
/// Returns [`BloomError::InvalidHashCount`] if `k` is out of range.
pub fn check_hash_count(k: usize) -> Result<()> {
    if !(MIN_HASH_FUNCTIONS..=MAX_HASH_FUNCTIONS).contains(&k) {
        return Err(BloomError::invalid_hash_count(
            k,
            MIN_HASH_FUNCTIONS,
            MAX_HASH_FUNCTIONS,
        ));
    }
    Ok(())
}

fn check_fp_rate(fp_rate: f64) -> Result<()> {
    // Written as a negated range check so NaN is rejected too.
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(BloomError::fp_rate_out_of_bounds(fp_rate));
    }
    Ok(())
}

/// Calculate the optimal bit-array size and hash function count.
///
/// Purely advisory: nothing is allocated, and callers decide whether to build
/// a filter from the returned `(size, k)` pair. The size is never reported
/// below [`MIN_FILTER_SIZE`], so the result is always constructible.
///
/// # Errors
///
/// - [`BloomError::InvalidItemCount`] if `expected_terms < MIN_EXPECTED_TERMS`
/// - [`BloomError::FalsePositiveRateOutOfBounds`] if `fp_rate` is not in (0, 1)
/// - [`BloomError::SizeOverflow`] if the size does not fit in `usize`
///
/// # Examples
///
/// ```
/// use termbloom::core::params::optimal_size_and_hash_count;
///
/// let (m, k) = optimal_size_and_hash_count(100, 0.001).unwrap();
/// assert_eq!((m, k), (1438, 10));
/// ```
pub fn optimal_size_and_hash_count(expected_terms: usize, fp_rate: f64) -> Result<(usize, usize)> {
    if expected_terms < MIN_EXPECTED_TERMS {
        return Err(BloomError::invalid_item_count(
            expected_terms,
            MIN_EXPECTED_TERMS,
        ));
    }
    check_fp_rate(fp_rate)?;

    let n = expected_terms as f64;
    let m = (-(n * fp_rate.ln()) / LN2_SQUARED).ceil();

    // Halved so the bit array's word count never overflows either.
    if !m.is_finite() || m > (usize::MAX / 2) as f64 {
        return Err(BloomError::SizeOverflow { requested: m });
    }

    let m = (m as usize).max(MIN_FILTER_SIZE);
    let k = optimal_hash_count(m, expected_terms);
    Ok((m, k))
}

/// Optimal number of hash functions for `m` bits holding `n` terms.
///
/// `k = round((m/n) × ln 2)`, floored to [`MIN_HASH_FUNCTIONS`]. A zero `n`
/// is treated as one term.
#[must_use]
pub fn optimal_hash_count(m: usize, n: usize) -> usize {
    let k = (m as f64 / n.max(1) as f64) * LN_2;
    (k.round() as usize).max(MIN_HASH_FUNCTIONS)
}

/// Expected false positive rate after `n` insertions into `m` bits with `k` hashes.
///
/// Implements `p = (1 - e^(-kn/m))^k`. An empty filter reports `0.0`; a
/// zero-sized filter reports `1.0`.
///
/// # Examples
///
/// ```
/// use termbloom::core::params::expected_fp_rate;
///
/// let fp = expected_fp_rate(1438, 100, 10);
/// assert!((fp - 0.001).abs() < 0.0001);
/// ```
#[must_use]
pub fn expected_fp_rate(m: usize, n: usize, k: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    if m == 0 {
        return 1.0;
    }

    let k_f64 = k as f64;
    let prob_bit_one = 1.0 - (-(k_f64 * n as f64) / m as f64).exp();
    prob_bit_one.powf(k_f64).clamp(0.0, 1.0)
}

/// Number of terms `m` bits with `k` hashes can hold before the expected
/// false positive rate exceeds `fp_rate`.
///
/// Inverts [`expected_fp_rate`]: `n = -(m/k) × ln(1 - p^(1/k))`.
///
/// # Errors
///
/// - [`BloomError::FalsePositiveRateOutOfBounds`] if `fp_rate` is not in (0, 1)
/// - [`BloomError::InvalidHashCount`] if `k` is 0 or above [`MAX_HASH_FUNCTIONS`]
pub fn optimal_capacity(m: usize, k: usize, fp_rate: f64) -> Result<f64> {
    check_fp_rate(fp_rate)?;
    check_hash_count(k)?;

    let k_f64 = k as f64;
    let per_hash = fp_rate.powf(1.0 / k_f64);
    Ok(-(m as f64 / k_f64) * (1.0 - per_hash).ln())
}

/// Bits required per term for a target rate: `-ln(p) / (ln 2)²`.
///
/// # Errors
///
/// Returns [`BloomError::FalsePositiveRateOutOfBounds`] if `fp_rate` is not in (0, 1).
pub fn bits_per_term(fp_rate: f64) -> Result<f64> {
    check_fp_rate(fp_rate)?;
    Ok(-fp_rate.ln() / LN2_SQUARED)
}

/// Validate construction parameters for a filter of `size` bits and `k` hashes.
///
/// # Errors
///
/// - [`BloomError::InvalidFilterSize`] if `size < MIN_FILTER_SIZE`
/// - [`BloomError::InvalidHashCount`] if `k` is outside
///   [[`MIN_HASH_FUNCTIONS`], [`MAX_HASH_FUNCTIONS`]]
/// - [`BloomError::InsufficientBits`] if `size < k`
pub fn validate_params(size: usize, k: usize) -> Result<()> {
    if size < MIN_FILTER_SIZE {
        return Err(BloomError::invalid_filter_size(size, MIN_FILTER_SIZE));
    }
    check_hash_count(k)?;
    if size < k {
        return Err(BloomError::insufficient_bits(size, k));
    }
    Ok(())
}

/// The `(size, k)` pair used by default constructors.
///
/// Derived from [`DEFAULT_EXPECTED_TERMS`] and [`DEFAULT_FALSE_POSITIVE_RATE`].
///
/// # Errors
///
/// Never fails for the built-in constants; the `Result` is kept so the
/// derivation goes through the same validated path as user input.
pub fn default_size_and_hash_count() -> Result<(usize, usize)> {
    optimal_size_and_hash_count(DEFAULT_EXPECTED_TERMS, DEFAULT_FALSE_POSITIVE_RATE)
}
