//! # murmur-bloom
//!
//! A compact probabilistic set-membership filter. Answers "possibly present"
//! or "definitely absent" for byte-sequence elements.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `murmur3_32`: MurmurHash3 x86_32, bit-exact with the reference
//!   - `derive_hashes`: k hashes from two base digests (`h1 + i * h2`)
//!   - `BloomFilter`: bit array + hash count, insert/contains
//!   - `FilterConfig` / `FilterConfigBuilder`: validated parameters
//!   - `BitAddressing`: hash-to-bit mapping
//!   - `ElementBytes`: raw byte view of plain values
//!
//! - **Service Layer** (`service/`)
//!   - `MeteredBloomFilter`: filter instrumented with a `MetricsRecorder`
//!
//! - **Metrics** (`metrics`): atomic counters and the recorder trait
//!
//! ## Invariants
//!
//! - No false negatives: if inserted, `contains()` MUST return true
//! - Construction either yields a ready filter or `FilterError::InvalidConfiguration`
//!
//! The filter has no internal synchronization. Share it across threads
//! behind a lock of your choosing.
//!
//! ## Usage Example
//!
//! ```
//! use murmur_bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(5, 1024)?;
//! filter.insert(b"0xABCD");
//!
//! assert!(filter.contains(b"0xABCD"));
//! # Ok::<(), murmur_bloom::FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod service;

// Re-exports for convenience
pub use domain::{
    derive_hashes, murmur3_32, BitAddressing, BloomFilter, BuildMurmur3Hasher, DerivedHashes,
    ElementBytes, FilterConfig, FilterConfigBuilder, Murmur3Hasher, DEFAULT_HASH_COUNT,
    MAX_BITSET_SIZE_BYTES,
};
pub use error::FilterError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use service::MeteredBloomFilter;
