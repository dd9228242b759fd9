//! Hash families and the k-function hash list used by every filter.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── hasher.rs  - SeededHasher trait, Murmur3 and XXH32 implementations
//! ├── list.rs    - HashFunctionList: k seeded functions of one family
//! └── mod.rs     - HashFamily selector (this file)
//! ```
//!
//! # Choosing a Hash Family
//!
//! | Family                | Crate         | Feature          |
//! |-----------------------|---------------|------------------|
//! | [`HashFamily::Murmur3`]  | `murmur3`     | always available |
//! | [`HashFamily::XxHash32`] | `xxhash-rust` | `xxhash` (default) |
//!
//! Both are fast, non-cryptographic 32-bit hashes with good avalanche
//! behavior. Neither offers any protection against adversarially chosen keys.
//!
//! # Examples
//!
//! ```
//! use termbloom::hash::{HashFamily, HashFunctionList};
//!
//! let family: HashFamily = "murmur3".parse().unwrap();
//! let list = HashFunctionList::new(7, family).unwrap();
//! assert_eq!(list.bounded_hashes_of(Some("hello"), 1000).unwrap().len(), 7);
//! ```

pub mod hasher;
pub mod list;

pub use hasher::{Murmur3Hasher, SeededHasher};
#[cfg(feature = "xxhash")]
pub use hasher::XxHash32Hasher;
pub use list::HashFunctionList;

use crate::error::{BloomError, Result};
use std::fmt;
use std::str::FromStr;

/// Named selector for the hash family a filter is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HashFamily {
    /// MurmurHash3 x86 32-bit.
    #[default]
    Murmur3,
    /// XXH32.
    #[cfg(feature = "xxhash")]
    #[cfg_attr(docsrs, doc(cfg(feature = "xxhash")))]
    XxHash32,
}

impl HashFamily {
    /// Every family compiled into this build.
    pub const ALL: &'static [HashFamily] = &[
        HashFamily::Murmur3,
        #[cfg(feature = "xxhash")]
        HashFamily::XxHash32,
    ];

    /// Hash `bytes` with this family under `seed`.
    ///
    /// # Errors
    ///
    /// Propagates internal failures of the underlying hasher.
    #[inline]
    pub fn hash32(&self, bytes: &[u8], seed: u32) -> Result<u32> {
        match self {
            Self::Murmur3 => Murmur3Hasher.hash32(bytes, seed),
            #[cfg(feature = "xxhash")]
            Self::XxHash32 => XxHash32Hasher.hash32(bytes, seed),
        }
    }

    /// Short selector name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Murmur3 => "murmur3",
            #[cfg(feature = "xxhash")]
            Self::XxHash32 => "xxhash32",
        }
    }
}

impl fmt::Display for HashFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashFamily {
    type Err = BloomError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "murmur3" | "murmur" | "murmur3_32" => Ok(Self::Murmur3),
            #[cfg(feature = "xxhash")]
            "xxhash32" | "xxhash" | "xxh32" => Ok(Self::XxHash32),
            _ => Err(BloomError::UnknownHashFamily {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_murmur3() {
        assert_eq!(HashFamily::default(), HashFamily::Murmur3);
    }

    #[test]
    fn test_name_roundtrip() {
        for family in HashFamily::ALL {
            assert_eq!(family.name().parse::<HashFamily>().unwrap(), *family);
            assert_eq!(family.to_string(), family.name());
        }
    }

    #[test]
    fn test_parse_aliases_and_case() {
        assert_eq!("MURMUR".parse::<HashFamily>().unwrap(), HashFamily::Murmur3);
        #[cfg(feature = "xxhash")]
        assert_eq!("xxh32".parse::<HashFamily>().unwrap(), HashFamily::XxHash32);
        assert_eq!(
            "sha256".parse::<HashFamily>(),
            Err(BloomError::UnknownHashFamily {
                name: "sha256".to_string()
            })
        );
    }

    #[test]
    fn test_families_disagree() {
        #[cfg(feature = "xxhash")]
        assert_ne!(
            HashFamily::Murmur3.hash32(b"key", 1).unwrap(),
            HashFamily::XxHash32.hash32(b"key", 1).unwrap()
        );
    }
}
