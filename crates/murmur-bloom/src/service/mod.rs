//! Service Layer
//!
//! Wraps the domain filter with instrumentation.

pub mod metered_filter;

pub use metered_filter::MeteredBloomFilter;
