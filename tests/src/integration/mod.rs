//! # Integration Tests
//!
//! Exercise the public API of `murmur-bloom` end to end.

mod false_positives;
mod properties;
