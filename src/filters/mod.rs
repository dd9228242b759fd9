//! Bloom filter implementations.
//!
//! # Available Filters
//!
//! - [`StandardBloomFilter`] - Fixed-size bit array with k seeded hash functions
//! - [`TermBloomFilter`] - A standard filter that also keeps the exact set of
//!   inserted terms, for showing which hits are false positives
//!
//! Both implement [`BloomFilter`](crate::core::BloomFilter) and report
//! [`FilterStats`].
//!
//! # Choosing a Filter
//!
//! | Filter | Use Case | Memory |
//! |--------|----------|--------|
//! | [`StandardBloomFilter`] | Membership at bounded memory | m bits |
//! | [`TermBloomFilter`] | Teaching, debugging, FP analysis | m bits + every term |
//!
//! # Examples
//!
//! ```
//! use termbloom::core::BloomFilter;
//! use termbloom::filters::{StandardBloomFilter, TermBloomFilter};
//!
//! let mut standard = StandardBloomFilter::with_defaults().unwrap();
//! standard.insert("hello");
//! assert!(standard.contains("hello"));
//!
//! let mut tracked = TermBloomFilter::with_defaults().unwrap();
//! tracked.insert("hello");
//! assert!(tracked.contains_exact("hello"));
//! ```

pub mod standard;
pub mod stats;
pub mod term;

pub use standard::StandardBloomFilter;
pub use stats::FilterStats;
pub use term::TermBloomFilter;
