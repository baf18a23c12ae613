//! Metered Bloom Filter
//!
//! Wraps a [`BloomFilter`] and reports creation, inserts, lookups and
//! deallocation to a [`MetricsRecorder`]. Answers are identical to the
//! wrapped filter.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::domain::{BloomFilter, ElementBytes};
use crate::metrics::{MetricsRecorder, NoOpMetrics};

/// Bloom filter instrumented with a metrics recorder
pub struct MeteredBloomFilter<R: MetricsRecorder = NoOpMetrics> {
    filter: BloomFilter,
    recorder: Arc<R>,
}

impl<R: MetricsRecorder> MeteredBloomFilter<R> {
    /// Wrap a filter; records its allocation immediately
    pub fn new(filter: BloomFilter, recorder: Arc<R>) -> Self {
        recorder.record_filter_created(filter.bitset_size_bytes());

        debug!(
            hash_count = filter.hash_count(),
            bitset_size_bytes = filter.bitset_size_bytes(),
            "Metered Bloom filter created"
        );

        Self { filter, recorder }
    }

    pub fn insert(&mut self, element: &[u8]) {
        let start = Instant::now();
        self.filter.insert(element);
        self.recorder.record_insert(start.elapsed());
    }

    pub fn contains(&self, element: &[u8]) -> bool {
        let start = Instant::now();
        let found = self.filter.contains(element);
        self.recorder.record_lookup(start.elapsed(), found);
        found
    }

    pub fn insert_value<T: ElementBytes + ?Sized>(&mut self, value: &T) {
        value.with_element_bytes(|bytes| self.insert(bytes));
    }

    pub fn contains_value<T: ElementBytes + ?Sized>(&self, value: &T) -> bool {
        value.with_element_bytes(|bytes| self.contains(bytes))
    }

    /// The wrapped filter
    pub fn filter(&self) -> &BloomFilter {
        &self.filter
    }

    pub fn recorder(&self) -> &Arc<R> {
        &self.recorder
    }
}

impl<R: MetricsRecorder> Drop for MeteredBloomFilter<R> {
    fn drop(&mut self) {
        self.recorder
            .record_filter_freed(self.filter.bitset_size_bytes());
    }
}
