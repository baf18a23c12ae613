//! # Filter Properties
//!
//! Property tests over arbitrary elements and filter shapes:
//!
//! 1. **No false negatives**: every inserted element is reported present
//! 2. **Determinism**: repeated queries and hash derivations agree
//! 3. **Monotonicity**: the set-bit count never decreases across inserts
//! 4. **Range**: every addressed bit lies inside the bit array

#[cfg(test)]
mod tests {
    use murmur_bloom::{BitAddressing, BloomFilter, FilterConfig};
    use proptest::prelude::*;

    fn addressing_strategy() -> impl Strategy<Value = BitAddressing> {
        prop_oneof![Just(BitAddressing::Folded), Just(BitAddressing::FullWidth)]
    }

    fn filter_strategy() -> impl Strategy<Value = BloomFilter> {
        (1usize..=12, 1usize..=512, addressing_strategy()).prop_map(|(k, size, addressing)| {
            let config = FilterConfig::new(k, size)
                .expect("strategy only yields valid parameters")
                .with_addressing(addressing);
            BloomFilter::from_config(&config).expect("validated config")
        })
    }

    fn elements_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
        proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..48), 0..64)
    }

    proptest! {
        #[test]
        fn prop_no_false_negatives(
            mut filter in filter_strategy(),
            elements in elements_strategy(),
        ) {
            for element in &elements {
                filter.insert(element);
            }
            for element in &elements {
                prop_assert!(filter.contains(element), "False negative for {:?}", element);
                prop_assert!(filter.contains_constant_time(element));
            }
        }

        #[test]
        fn prop_inserted_element_survives_later_inserts(
            mut filter in filter_strategy(),
            first in proptest::collection::vec(any::<u8>(), 0..48),
            rest in elements_strategy(),
        ) {
            filter.insert(&first);
            for element in &rest {
                filter.insert(element);
                prop_assert!(filter.contains(&first));
            }
        }

        #[test]
        fn prop_queries_are_deterministic(
            mut filter in filter_strategy(),
            elements in elements_strategy(),
            query in proptest::collection::vec(any::<u8>(), 0..48),
        ) {
            for element in &elements {
                filter.insert(element);
            }
            let first = filter.contains(&query);
            for _ in 0..3 {
                prop_assert_eq!(filter.contains(&query), first);
            }

            let a: Vec<u32> = filter.derive_hashes(&query).collect();
            let b: Vec<u32> = filter.derive_hashes(&query).collect();
            prop_assert_eq!(a.len(), filter.hash_count());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_bit_count_is_monotonic(
            mut filter in filter_strategy(),
            elements in elements_strategy(),
        ) {
            let mut previous = filter.bits_set();
            for element in &elements {
                filter.insert(element);
                let current = filter.bits_set();
                prop_assert!(current >= previous);
                prop_assert!(current <= filter.size_bits());
                previous = current;
            }
        }

        #[test]
        fn prop_positions_in_range(
            filter in filter_strategy(),
            element in proptest::collection::vec(any::<u8>(), 0..48),
        ) {
            for hash in filter.derive_hashes(&element) {
                let pos = filter.bit_position(hash);
                prop_assert!(pos < filter.bitset_size_bytes() * 8);
                if filter.addressing() == BitAddressing::Folded {
                    prop_assert!(pos < filter.bitset_size_bytes());
                }
            }
        }

        #[test]
        fn prop_snapshot_preserves_answers(
            mut filter in filter_strategy(),
            elements in elements_strategy(),
            queries in elements_strategy(),
        ) {
            for element in &elements {
                filter.insert(element);
            }
            let restored = BloomFilter::from_bytes(&filter.to_bytes().expect("serialize"))
                .expect("deserialize");
            prop_assert_eq!(&restored, &filter);
            for query in &queries {
                prop_assert_eq!(restored.contains(query), filter.contains(query));
            }
        }
    }
}
