//! # murmur-bloom Benchmarks
//!
//! | Area | Expectation |
//! |------|-------------|
//! | murmur3_32 | Linear in input length |
//! | insert | k hash-derived bit sets, no allocation |
//! | contains (miss) | Usually stops at the first clear bit |

use criterion::{criterion_group, criterion_main};
use murmur_bloom_tests::benchmarks::bloom_filter::{bench_contains, bench_insert, bench_murmur3};

criterion_group!(benches, bench_murmur3, bench_insert, bench_contains);

criterion_main!(benches);
