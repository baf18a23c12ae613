//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use murmur_bloom::domain::{BitAddressing, FilterConfigBuilder};
//!
//! let config = FilterConfigBuilder::new()
//!     .hash_count(7)
//!     .bitset_size_bytes(4096)
//!     .addressing(BitAddressing::FullWidth)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.size_bits(), 4096 * 8);
//! ```

use crate::error::FilterError;
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of hash functions used when the caller does not choose one
pub const DEFAULT_HASH_COUNT: usize = 5;

/// Largest bit array, in bytes, the backing bit vector can hold
pub const MAX_BITSET_SIZE_BYTES: usize = BitSlice::<u8, Lsb0>::MAX_BITS / 8;

/// How a derived hash value is mapped onto the bit array
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitAddressing {
    /// `position = hash mod bitset_size_bytes`, then byte `position / 8`,
    /// bit `position mod 8`.
    ///
    /// Matches filters produced by the reference design bit for bit. The byte
    /// size is used as the modulus, so only the first `bitset_size_bytes`
    /// bits are ever addressed.
    #[default]
    Folded,
    /// Bit offset `hash mod 8` taken from the raw hash, byte index
    /// `(hash / 8) mod bitset_size_bytes`. Addresses the whole array.
    FullWidth,
}

impl BitAddressing {
    /// Map a hash value to a bit position in `0..bitset_size_bytes * 8`
    ///
    /// `bitset_size_bytes` must be non-zero; [`FilterConfig::validate`]
    /// guarantees that for every constructed filter.
    #[inline]
    pub fn bit_position(self, hash: u32, bitset_size_bytes: usize) -> usize {
        match self {
            BitAddressing::Folded => hash as usize % bitset_size_bytes,
            BitAddressing::FullWidth => {
                let byte_index = (hash >> 3) as usize % bitset_size_bytes;
                byte_index * 8 + (hash & 7) as usize
            }
        }
    }
}

/// Bloom filter configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// Size of the bit array in bytes
    pub bitset_size_bytes: usize,
    /// Hash-to-bit mapping
    #[serde(default)]
    pub addressing: BitAddressing,
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(hash_count: usize, bitset_size_bytes: usize) -> Result<Self, FilterError> {
        let config = Self {
            hash_count,
            bitset_size_bytes,
            addressing: BitAddressing::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.hash_count == 0 {
            return Err(FilterError::InvalidConfiguration(
                "hash_count must be at least 1".to_string(),
            ));
        }

        if self.bitset_size_bytes == 0 {
            return Err(FilterError::InvalidConfiguration(
                "bitset_size_bytes must be at least 1".to_string(),
            ));
        }

        if self.bitset_size_bytes > MAX_BITSET_SIZE_BYTES {
            return Err(FilterError::InvalidConfiguration(format!(
                "bitset_size_bytes {} exceeds the maximum of {}",
                self.bitset_size_bytes, MAX_BITSET_SIZE_BYTES
            )));
        }

        Ok(())
    }

    /// Size of the bit array in bits
    pub fn size_bits(&self) -> usize {
        self.bitset_size_bytes * 8
    }

    /// Builder-style method to set the addressing scheme
    pub fn with_addressing(mut self, addressing: BitAddressing) -> Self {
        self.addressing = addressing;
        self
    }
}

/// Builder for FilterConfig with validation
///
/// `hash_count` defaults to [`DEFAULT_HASH_COUNT`] and addressing to
/// [`BitAddressing::Folded`]. The bit array size has no default.
#[derive(Default)]
pub struct FilterConfigBuilder {
    hash_count: Option<usize>,
    bitset_size_bytes: Option<usize>,
    addressing: Option<BitAddressing>,
}

impl FilterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of hash functions (must be at least 1)
    pub fn hash_count(mut self, k: usize) -> Self {
        self.hash_count = Some(k);
        self
    }

    /// Set the bit array size in bytes (must be at least 1)
    pub fn bitset_size_bytes(mut self, bytes: usize) -> Self {
        self.bitset_size_bytes = Some(bytes);
        self
    }

    pub fn addressing(mut self, addressing: BitAddressing) -> Self {
        self.addressing = Some(addressing);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let bitset_size_bytes = self.bitset_size_bytes.ok_or_else(|| {
            FilterError::InvalidConfiguration("bitset_size_bytes is required".to_string())
        })?;

        let config = FilterConfig {
            hash_count: self.hash_count.unwrap_or(DEFAULT_HASH_COUNT),
            bitset_size_bytes,
            addressing: self.addressing.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}
