//! Domain Layer - Pure logic
//!
//! This layer contains:
//! - MurmurHash3 x86_32 and the double-hashing derivation
//! - Configuration and bit addressing
//! - Raw byte views of plain values
//! - Core Bloom filter implementation
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod element;
pub mod hash_functions;

pub use bloom_filter::BloomFilter;
pub use config::{
    BitAddressing, FilterConfig, FilterConfigBuilder, DEFAULT_HASH_COUNT, MAX_BITSET_SIZE_BYTES,
};
pub use element::ElementBytes;
pub use hash_functions::{
    derive_hashes, murmur3_32, BuildMurmur3Hasher, DerivedHashes, Murmur3Hasher,
};
