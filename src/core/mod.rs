//! Core types, traits, and utilities shared by every filter.
//!
//! - **Traits**: [`BloomFilter`], plus the [`Membership`] verdict
//! - **Data Structures**: [`BitVec`], a fixed-size bit array
//! - **Utilities**: sizing and capacity math in [`params`]
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── filter.rs    - Trait definitions
//! ├── bitvec.rs    - Bit vector implementation
//! ├── params.rs    - Parameter calculations
//! └── mod.rs       - This file (public API)
//! ```
//!
//! # Examples
//!
//! ## Using Parameter Calculations
//!
//! ```
//! use termbloom::core::params::optimal_size_and_hash_count;
//!
//! // 10K terms at 1% false positives
//! let (m, k) = optimal_size_and_hash_count(10_000, 0.01).unwrap();
//! assert_eq!((m, k), (95_851, 7));
//! ```
//!
//! ## Using BitVec Directly
//!
//! ```
//! use termbloom::core::BitVec;
//!
//! let mut bv = BitVec::new(1000).unwrap();
//! bv.set(42);
//! bv.set(999);
//!
//! assert!(bv.get(42));
//! assert!(!bv.get(43));
//! assert_eq!(bv.count_ones(), 2);
//! ```

pub mod bitvec;
pub mod filter;
pub mod params;

pub use bitvec::BitVec;
pub use filter::{BloomFilter, Membership};

pub use params::{
    bits_per_term, expected_fp_rate, optimal_capacity, optimal_hash_count,
    optimal_size_and_hash_count, validate_params,
};
