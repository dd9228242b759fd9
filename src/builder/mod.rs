//! Builder pattern for Bloom filter construction.
//!
//! [`BloomFilterBuilder`] is the single configuration surface of the crate:
//! size and hash count, or expected terms and target rate, plus the hash
//! family and an optional fixed seed set. See [`standard`] for the type-state
//! rules that keep the two sizing modes apart.
//!
//! # Builder Parameters
//!
//! | Parameter | Mode | Default |
//! |-----------|------|---------|
//! | `size` | explicit | 1438 |
//! | `hash_functions` | explicit | 10 |
//! | `seeds` | explicit | random |
//! | `expected_terms` | derived | 100 |
//! | `false_positive_rate` | derived | 0.001 |
//! | `hash_family` | any | `murmur3` |

pub mod standard;

pub use standard::{BloomFilterBuilder, BuilderState, Derived, DerivedSizing, Explicit, ExplicitSizing, Unsized};
