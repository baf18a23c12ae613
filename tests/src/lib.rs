//! # murmur-bloom Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmark bodies (driven from benches/)
//! │   └── bloom_filter.rs
//! │
//! └── integration/      # Cross-module behaviour
//!     ├── reference_hash.rs   # murmur3_32 against the murmur3 crate
//!     ├── properties.rs       # proptest properties of the filter
//!     └── false_positives.rs  # saturation and false-positive behaviour
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p murmur-bloom-tests
//!
//! # By category
//! cargo test -p murmur-bloom-tests integration::
//!
//! # Benchmarks
//! cargo bench -p murmur-bloom-tests
//! ```

pub mod benchmarks;
pub mod integration;
