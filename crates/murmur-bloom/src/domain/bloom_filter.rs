//! Core Bloom Filter implementation
//!
//! INVARIANTS:
//! - No false negatives: if inserted, contains() MUST return true
//! - Every addressed bit lies in `0..bitset_size_bytes * 8`
//! - Bits are only ever set, never cleared, so the population count is
//!   non-decreasing across inserts

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{BitAddressing, FilterConfig, DEFAULT_HASH_COUNT};
use super::element::ElementBytes;
use super::hash_functions::{derive_hashes, DerivedHashes};
use crate::error::FilterError;

/// Bloom filter for probabilistic membership testing
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an element is a member of a set. False positives are
/// possible, but false negatives are not.
///
/// A filter is always fully configured: construction validates the
/// parameters and allocates a zeroed bit array in one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FilterSnapshot", into = "FilterSnapshot")]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    config: FilterConfig,
    /// Number of insert calls (duplicates included)
    n: u64,
}

/// Wire form of a filter; validated on the way back in
#[derive(Clone, Serialize, Deserialize)]
struct FilterSnapshot {
    config: FilterConfig,
    bits: Vec<u8>,
    elements_inserted: u64,
}

impl From<BloomFilter> for FilterSnapshot {
    fn from(filter: BloomFilter) -> Self {
        Self {
            config: filter.config,
            bits: filter.bits.into_vec(),
            elements_inserted: filter.n,
        }
    }
}

impl TryFrom<FilterSnapshot> for BloomFilter {
    type Error = FilterError;

    fn try_from(snapshot: FilterSnapshot) -> Result<Self, Self::Error> {
        let mut filter = BloomFilter::from_raw_parts(snapshot.config, snapshot.bits)?;
        filter.n = snapshot.elements_inserted;
        Ok(filter)
    }
}

impl BloomFilter {
    /// Create a new Bloom filter
    ///
    /// # Arguments
    /// * `hash_count` - Number of hash functions (k >= 1)
    /// * `bitset_size_bytes` - Size of the bit array in bytes (>= 1)
    pub fn new(hash_count: usize, bitset_size_bytes: usize) -> Result<Self, FilterError> {
        Self::from_config(&FilterConfig::new(hash_count, bitset_size_bytes)?)
    }

    /// Create a filter with the default hash count
    pub fn with_bitset_size(bitset_size_bytes: usize) -> Result<Self, FilterError> {
        Self::new(DEFAULT_HASH_COUNT, bitset_size_bytes)
    }

    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        config.validate()?;

        debug!(
            hash_count = config.hash_count,
            bitset_size_bytes = config.bitset_size_bytes,
            addressing = ?config.addressing,
            "Bloom filter created"
        );

        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; config.size_bits()],
            config: config.clone(),
            n: 0,
        })
    }

    /// Rebuild a filter from an exported bit array
    ///
    /// `bytes` must be exactly `config.bitset_size_bytes` long. The element
    /// counter starts at zero.
    pub fn from_raw_parts(config: FilterConfig, bytes: Vec<u8>) -> Result<Self, FilterError> {
        config.validate()?;

        if bytes.len() != config.bitset_size_bytes {
            return Err(FilterError::BitArrayLengthMismatch {
                expected: config.bitset_size_bytes,
                actual: bytes.len(),
            });
        }

        debug!(
            hash_count = config.hash_count,
            bitset_size_bytes = config.bitset_size_bytes,
            "Bloom filter restored from raw bit array"
        );

        Ok(Self {
            bits: BitVec::from_vec(bytes),
            config,
            n: 0,
        })
    }

    /// The k derived hash values for an element
    pub fn derive_hashes(&self, element: &[u8]) -> DerivedHashes {
        derive_hashes(element, self.config.hash_count)
    }

    /// Bit position addressed by a derived hash value
    #[inline]
    pub fn bit_position(&self, hash: u32) -> usize {
        self.config
            .addressing
            .bit_position(hash, self.config.bitset_size_bytes)
    }

    /// Insert an element into the filter
    ///
    /// After insertion, `contains(element)` is guaranteed to return true.
    /// Idempotent with respect to the bit array.
    pub fn insert(&mut self, element: &[u8]) {
        for hash in self.derive_hashes(element) {
            let pos = self.bit_position(hash);
            self.bits.set(pos, true);
        }
        self.n += 1;
    }

    /// Test if an element might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be false positive)
    /// - `false` if the element is definitely NOT in the set (never false negative)
    ///
    /// Stops at the first clear bit.
    pub fn contains(&self, element: &[u8]) -> bool {
        self.derive_hashes(element)
            .all(|hash| self.bits[self.bit_position(hash)])
    }

    /// Test if an element might be in the filter (constant-time)
    ///
    /// Always checks all k positions with a branchless accumulator, so the
    /// running time does not reveal which position missed. Use this when the
    /// filter answers queries from untrusted parties.
    pub fn contains_constant_time(&self, element: &[u8]) -> bool {
        let mut result: u8 = 1;
        for hash in self.derive_hashes(element) {
            result &= self.bits[self.bit_position(hash)] as u8;
        }
        result == 1
    }

    /// Insert a plain value using its raw byte representation
    pub fn insert_value<T: ElementBytes + ?Sized>(&mut self, value: &T) {
        value.with_element_bytes(|bytes| self.insert(bytes));
    }

    /// Query a plain value using its raw byte representation
    pub fn contains_value<T: ElementBytes + ?Sized>(&self, value: &T) -> bool {
        value.with_element_bytes(|bytes| self.contains(bytes))
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> usize {
        self.config.hash_count
    }

    /// Get the bit array size in bytes
    pub fn bitset_size_bytes(&self) -> usize {
        self.config.bitset_size_bytes
    }

    /// Get the filter size in bits
    pub fn size_bits(&self) -> usize {
        self.bits.len()
    }

    pub fn addressing(&self) -> BitAddressing {
        self.config.addressing
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Get the number of insert calls made on this filter
    pub fn elements_inserted(&self) -> u64 {
        self.n
    }

    /// Raw bit array, `bitset_size_bytes` long
    ///
    /// Bit `i` of byte `b` is filter position `b * 8 + i`.
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }

    /// Serialize the filter to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, FilterError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize a filter from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FilterError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
