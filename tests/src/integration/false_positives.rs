//! # False Positive Behaviour
//!
//! Degenerate and saturated filters, and measured false-positive rates for
//! both addressing schemes.

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use murmur_bloom::{BitAddressing, BloomFilter, FilterConfig, FilterConfigBuilder};

    fn random_elements(rng: &mut StdRng, count: usize) -> Vec<[u8; 16]> {
        (0..count).map(|_| rng.gen()).collect()
    }

    fn measured_fpr(filter: &BloomFilter, rng: &mut StdRng, queries: usize) -> f64 {
        let mut false_positives = 0;
        for _ in 0..queries {
            // 17-byte queries can never equal a 16-byte inserted element
            let query: [u8; 17] = rng.gen();
            if filter.contains(&query) {
                false_positives += 1;
            }
        }
        false_positives as f64 / queries as f64
    }

    #[test]
    fn test_one_byte_one_hash_filter_is_degenerate() {
        let mut filter = BloomFilter::new(1, 1).expect("k=1, one byte is valid");
        assert!(!filter.contains(b"first"));

        filter.insert(b"first");

        assert_eq!(filter.as_bytes(), &[0x01], "Only bit 0 of the single byte is set");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let query: [u8; 8] = rng.gen();
            assert!(filter.contains(&query), "Every query matches once bit 0 is set");
        }
    }

    #[test]
    fn test_saturation_by_insertion() {
        // Folded addressing on 4 bytes only reaches positions 0..4
        let mut filter = BloomFilter::new(3, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let mut inserted = 0;
        while filter.bits_set() < 4 {
            let element: [u8; 16] = rng.gen();
            filter.insert(&element);
            inserted += 1;
            assert!(inserted < 10_000, "Filter should saturate quickly");
        }

        for _ in 0..1000 {
            let query: [u8; 17] = rng.gen();
            assert!(filter.contains(&query));
        }
    }

    #[test]
    fn test_saturation_by_raw_bits() {
        let config = FilterConfigBuilder::new()
            .hash_count(9)
            .bitset_size_bytes(32)
            .addressing(BitAddressing::FullWidth)
            .build()
            .unwrap();
        let filter = BloomFilter::from_raw_parts(config, vec![0xff; 32]).unwrap();

        let mut rng = StdRng::seed_from_u64(13);
        assert_eq!(measured_fpr(&filter, &mut rng, 1000), 1.0);
        assert!(filter.contains(b""));
    }

    #[test]
    fn test_full_width_false_positive_rate_is_low() {
        let config = FilterConfig::new(5, 8192)
            .unwrap()
            .with_addressing(BitAddressing::FullWidth);
        let mut filter = BloomFilter::from_config(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let elements = random_elements(&mut rng, 2000);
        for element in &elements {
            filter.insert(element);
        }
        for element in &elements {
            assert!(filter.contains(element));
        }

        // Theoretical rate is about 6e-5 for m=65536, n=2000, k=5
        let rate = measured_fpr(&filter, &mut rng, 100_000);
        assert!(rate < 0.005, "Measured FPR {} too high", rate);
    }

    #[test]
    fn test_folded_addressing_has_higher_false_positive_rate() {
        let mut rng = StdRng::seed_from_u64(99);
        let elements = random_elements(&mut rng, 2000);

        let mut folded = BloomFilter::new(5, 8192).unwrap();
        let full_width_config = FilterConfig::new(5, 8192)
            .unwrap()
            .with_addressing(BitAddressing::FullWidth);
        let mut full_width = BloomFilter::from_config(&full_width_config).unwrap();

        for element in &elements {
            folded.insert(element);
            full_width.insert(element);
        }

        let folded_rate = measured_fpr(&folded, &mut rng, 20_000);
        let full_width_rate = measured_fpr(&full_width, &mut rng, 20_000);

        assert!(
            folded_rate > full_width_rate,
            "Folded {} should exceed full-width {}",
            folded_rate,
            full_width_rate
        );
        assert!(folded.bits_set() <= 8192, "Folded addressing reaches only 8192 bits");
    }

    #[test]
    fn test_elements_inserted_counts_calls() {
        let mut filter = BloomFilter::with_bitset_size(64).unwrap();
        filter.insert(b"a");
        filter.insert(b"a");
        filter.insert_value(&1u32);
        assert_eq!(filter.elements_inserted(), 3);
    }
}
