//! # murmur-bloom Benchmarks
//!
//! Benchmark bodies, registered by `benches/filter_benchmarks.rs`.
