//! termbloom: a Bloom filter over string terms with pluggable seeded hashing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure that tests
//! whether a term is a member of a set. It can produce:
//! - **False positives**: may report a term present when it was never inserted
//! - **Zero false negatives**: a term reported absent was definitely never inserted
//!
//! # Quick Start
//!
//! ```
//! use termbloom::core::BloomFilter;
//! use termbloom::StandardBloomFilter;
//!
//! // 1438 bits and 10 hash functions: the optimum for 100 terms at 0.1% FP
//! let mut filter = StandardBloomFilter::with_defaults().unwrap();
//!
//! filter.add_term(Some("hello"));
//! filter.add_term(Some("world"));
//!
//! assert!(filter.in_the_set(Some("hello")));
//! assert_eq!(filter.check_term(Some("goodbye")), "definitely not in the set");
//! ```
//!
//! # Sizing
//!
//! ```
//! use termbloom::core::BloomFilter;
//! use termbloom::StandardBloomFilter;
//!
//! let (size, k) = termbloom::core::params::optimal_size_and_hash_count(10_000, 0.01).unwrap();
//! let filter = StandardBloomFilter::new(size, k).unwrap();
//! assert_eq!(filter.hash_count(), 7);
//! ```
//!
//! # Using the Builder
//!
//! ```
//! use termbloom::builder::BloomFilterBuilder;
//! use termbloom::hash::HashFamily;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_terms(10_000)
//!     .false_positive_rate(0.01)
//!     .hash_family(HashFamily::Murmur3)
//!     .build()
//!     .unwrap();
//! ```
//!
//! # Tracking Terms
//!
//! [`TermBloomFilter`] keeps the exact set of inserted terms next to the bits,
//! which makes false positives observable:
//!
//! ```
//! use termbloom::core::BloomFilter;
//! use termbloom::TermBloomFilter;
//!
//! let mut filter = TermBloomFilter::new(256, 3).unwrap();
//! filter.insert("apple");
//! assert!(filter.contains_exact("apple"));
//! assert!(!filter.is_false_positive("apple"));
//! ```
//!
//! # Concurrency
//!
//! Filters are single-owner: `add_term` and `clear` take `&mut self` and there
//! is no internal locking. Share a filter between threads behind a `Mutex` or
//! `RwLock`.
//!
//! # Features
//!
//! - `xxhash` (default) - XXH32 as an alternative hash family
//! - `serde` - `Serialize`/`Deserialize` for [`HashFamily`] and [`FilterStats`]
//!
//! # Logging
//!
//! Events are emitted through [`tracing`]: `debug` on construction, reseeding
//! and clearing, `trace` per insert and query, and a single `warn` when a
//! filter first goes over its 1-in-1000 capacity. Install any subscriber to
//! see them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/termbloom/0.1.0")]

/// Core data structures, traits and sizing math
pub mod core;

/// Error types and result aliases
pub mod error;

/// Filter implementations and statistics
pub mod filters;

/// Hash families and the seeded hash function list
pub mod hash;

/// Fluent filter configuration
pub mod builder;

pub use error::{BloomError, ErrorKind, Result};

pub use crate::core::filter::{BloomFilter, Membership};

pub use filters::{FilterStats, StandardBloomFilter, TermBloomFilter};

pub use builder::BloomFilterBuilder;

pub use hash::{HashFamily, HashFunctionList};

/// Prelude for convenient imports.
///
/// ```
/// use termbloom::prelude::*;
///
/// let mut filter = StandardBloomFilter::new(1000, 7).unwrap();
/// filter.insert("hello");
/// assert!(filter.contains("hello"));
/// ```
pub mod prelude {
    pub use crate::builder::BloomFilterBuilder;
    pub use crate::core::filter::{BloomFilter, Membership};
    pub use crate::error::{BloomError, Result};
    pub use crate::filters::{FilterStats, StandardBloomFilter, TermBloomFilter};
    pub use crate::hash::{HashFamily, HashFunctionList};
}
