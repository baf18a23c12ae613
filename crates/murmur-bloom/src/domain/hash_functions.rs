//! Hash functions for the Bloom filter
//!
//! MurmurHash3, x86 32-bit variant. Digests match the published reference
//! bit for bit, so filters can be rebuilt from data tagged elsewhere with
//! the same algorithm.
//!
//! All arithmetic is unsigned 32-bit and wraps on overflow.

use std::hash::{BuildHasher, Hasher};
use std::iter::FusedIterator;

const C1: u32 = 0xcc9e2d51;
const C2: u32 = 0x1b873593;

/// Seed used for the first base digest of every element
pub const BASE_SEED: u32 = 0;

#[inline]
fn mix_k1(k1: u32) -> u32 {
    k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

#[inline]
fn mix_h1(h1: u32, k1: u32) -> u32 {
    (h1 ^ mix_k1(k1))
        .rotate_left(13)
        .wrapping_mul(5)
        .wrapping_add(0xe6546b64)
}

/// Finalization mix - force all bits of a hash block to avalanche
#[inline]
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

#[inline]
fn read_block(block: &[u8]) -> u32 {
    u32::from_le_bytes([block[0], block[1], block[2], block[3]])
}

/// Fold the trailing 0-3 bytes into a partial little-endian block
#[inline]
fn read_tail(tail: &[u8]) -> u32 {
    tail.iter()
        .enumerate()
        .fold(0u32, |k1, (i, &byte)| k1 | (u32::from(byte) << (8 * i)))
}

/// Hash a byte sequence with MurmurHash3 x86_32
///
/// Pure and deterministic. Any length is accepted, including zero.
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    let mut h1 = seed;

    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        h1 = mix_h1(h1, read_block(block));
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        h1 ^= mix_k1(read_tail(tail));
    }

    // The reference folds in a 32-bit length
    h1 ^= data.len() as u32;
    fmix32(h1)
}

/// Incremental MurmurHash3 x86_32
///
/// Produces the same digest as [`murmur3_32`] over the concatenation of
/// everything written, regardless of how the input is chunked.
#[derive(Clone, Debug)]
pub struct Murmur3Hasher {
    h1: u32,
    total: u64,
    buf: [u8; 4],
    buf_len: usize,
}

impl Murmur3Hasher {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            h1: seed,
            total: 0,
            buf: [0; 4],
            buf_len: 0,
        }
    }

    /// Digest of everything written so far. The hasher can keep accepting input.
    pub fn finish32(&self) -> u32 {
        let mut h1 = self.h1;
        if self.buf_len > 0 {
            h1 ^= mix_k1(read_tail(&self.buf[..self.buf_len]));
        }
        h1 ^= self.total as u32;
        fmix32(h1)
    }
}

impl Default for Murmur3Hasher {
    fn default() -> Self {
        Self::with_seed(BASE_SEED)
    }
}

impl Hasher for Murmur3Hasher {
    fn finish(&self) -> u64 {
        u64::from(self.finish32())
    }

    fn write(&mut self, mut bytes: &[u8]) {
        self.total = self.total.wrapping_add(bytes.len() as u64);

        if self.buf_len > 0 {
            let wanted = (4 - self.buf_len).min(bytes.len());
            self.buf[self.buf_len..self.buf_len + wanted].copy_from_slice(&bytes[..wanted]);
            self.buf_len += wanted;
            bytes = &bytes[wanted..];

            if self.buf_len < 4 {
                return;
            }
            self.h1 = mix_h1(self.h1, u32::from_le_bytes(self.buf));
            self.buf_len = 0;
        }

        let mut blocks = bytes.chunks_exact(4);
        for block in &mut blocks {
            self.h1 = mix_h1(self.h1, read_block(block));
        }

        let rem = blocks.remainder();
        self.buf[..rem.len()].copy_from_slice(rem);
        self.buf_len = rem.len();
    }
}

/// [`BuildHasher`] producing seeded [`Murmur3Hasher`]s
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildMurmur3Hasher {
    pub seed: u32,
}

impl BuildMurmur3Hasher {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl BuildHasher for BuildMurmur3Hasher {
    type Hasher = Murmur3Hasher;

    fn build_hasher(&self) -> Murmur3Hasher {
        Murmur3Hasher::with_seed(self.seed)
    }
}

/// The k derived hash values of one element
///
/// Lazily yields `h1 + i * h2` for `i in 0..k`, so insert and lookup never
/// allocate.
#[derive(Clone, Debug)]
pub struct DerivedHashes {
    h1: u32,
    h2: u32,
    index: usize,
    count: usize,
}

impl DerivedHashes {
    /// First base digest (`seed = 0`)
    pub fn h1(&self) -> u32 {
        self.h1
    }

    /// Second base digest (seeded with `h1`)
    pub fn h2(&self) -> u32 {
        self.h2
    }
}

impl Iterator for DerivedHashes {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.index >= self.count {
            return None;
        }
        let hash = self
            .h1
            .wrapping_add((self.index as u32).wrapping_mul(self.h2));
        self.index += 1;
        Some(hash)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DerivedHashes {}

impl FusedIterator for DerivedHashes {}

/// Derive `hash_count` hash values for an element
///
/// Uses double hashing: `h1 = murmur3(element, 0)`, `h2 = murmur3(element, h1)`,
/// `hash[i] = h1 + i * h2`. Cheaper than k independent hashes.
pub fn derive_hashes(element: &[u8], hash_count: usize) -> DerivedHashes {
    let h1 = murmur3_32(element, BASE_SEED);
    let h2 = murmur3_32(element, h1);
    DerivedHashes {
        h1,
        h2,
        index: 0,
        count: hash_count,
    }
}
