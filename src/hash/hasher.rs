//! Seeded 32-bit hash functions.
//!
//! A [`SeededHasher`] maps bytes plus a 32-bit seed to a 32-bit hash. Distinct
//! seeds yield hash functions that behave as if statistically independent,
//! which is all a Bloom filter needs from its k hash functions.
//!
//! # Examples
//!
//! ```
//! use termbloom::hash::hasher::{Murmur3Hasher, SeededHasher};
//!
//! let h1 = Murmur3Hasher.hash32(b"hello", 0).unwrap();
//! let h2 = Murmur3Hasher.hash32(b"hello", 1).unwrap();
//! assert_eq!(h1, 0x248b_fa47);
//! assert_ne!(h1, h2);
//! ```

use crate::error::{BloomError, Result};

/// Base trait for seeded 32-bit hash families.
///
/// Implementations must be deterministic for a given `(bytes, seed)` pair and
/// avalanche well enough that changing the seed decorrelates the output.
pub trait SeededHasher: Send + Sync {
    /// Hash `bytes` under `seed`.
    ///
    /// # Errors
    ///
    /// Only fails if the underlying implementation reports an internal error.
    fn hash32(&self, bytes: &[u8], seed: u32) -> Result<u32>;

    /// Human-readable algorithm name.
    fn name(&self) -> &'static str;
}

/// MurmurHash3 x86 32-bit, via the `murmur3` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Murmur3Hasher;

impl SeededHasher for Murmur3Hasher {
    #[inline]
    fn hash32(&self, bytes: &[u8], seed: u32) -> Result<u32> {
        // The crate hashes any `Read`; a byte slice reader cannot fail.
        let mut reader = bytes;
        murmur3::murmur3_32(&mut reader, seed)
            .map_err(|e| BloomError::internal_error(format!("murmur3 read failed: {e}")))
    }

    #[inline]
    fn name(&self) -> &'static str {
        "Murmur3_32"
    }
}

/// XXH32, via the `xxhash-rust` crate.
#[cfg(feature = "xxhash")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash")))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XxHash32Hasher;

#[cfg(feature = "xxhash")]
impl SeededHasher for XxHash32Hasher {
    #[inline]
    fn hash32(&self, bytes: &[u8], seed: u32) -> Result<u32> {
        Ok(xxhash_rust::xxh32::xxh32(bytes, seed))
    }

    #[inline]
    fn name(&self) -> &'static str {
        "XXHash32"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_murmur3_reference_vectors() {
        assert_eq!(Murmur3Hasher.hash32(b"", 0).unwrap(), 0);
        assert_eq!(Murmur3Hasher.hash32(b"", 1).unwrap(), 0x514e_28b7);
        assert_eq!(Murmur3Hasher.hash32(b"hello", 0).unwrap(), 0x248b_fa47);
        assert_eq!(
            Murmur3Hasher
                .hash32(b"The quick brown fox jumps over the lazy dog", 0)
                .unwrap(),
            0x2e4f_f723
        );
    }

    #[test]
    fn test_murmur3_determinism() {
        let a = Murmur3Hasher.hash32(b"1-Test", 11).unwrap();
        let b = Murmur3Hasher.hash32(b"1-Test", 11).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_murmur3_seed_independence() {
        let hashes: Vec<u32> = (0..16)
            .map(|seed| Murmur3Hasher.hash32(b"same input", seed).unwrap())
            .collect();
        let mut dedup = hashes.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), hashes.len());
    }

    #[cfg(feature = "xxhash")]
    #[test]
    fn test_xxhash32_reference_vectors() {
        assert_eq!(XxHash32Hasher.hash32(b"", 0).unwrap(), 0x02cc_5d05);
        assert_eq!(XxHash32Hasher.hash32(b"a", 0).unwrap(), 0x550d_7456);
    }

    #[test]
    fn test_names() {
        assert_eq!(Murmur3Hasher.name(), "Murmur3_32");
        #[cfg(feature = "xxhash")]
        assert_eq!(XxHash32Hasher.name(), "XXHash32");
    }
}
