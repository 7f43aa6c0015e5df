use huffcode::huffman::{build_codes,compress,decode,encode};
use huffcode::tools::freq_map::FrequencyMap;
use huffcode::tools::huff_tree::HuffmanTree;
use huffcode::STD_OPTIONS;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_roundtrip(input in prop::collection::vec(any::<u8>(), 1..400)) {
        let enc = compress(&input,&STD_OPTIONS).unwrap();
        let dec = decode(&enc.stream,&enc.table).unwrap();
        prop_assert_eq!(input, dec);
    }

    #[test]
    fn test_text_roundtrip(text in "\\PC{1,200}") {
        let input: Vec<char> = text.chars().collect();
        let freq = FrequencyMap::compute(&input);
        let tree = HuffmanTree::build(&freq).unwrap();
        let table = build_codes(tree.as_ref());
        let stream = encode(&table,&input).unwrap();
        let dec = decode(&stream,&table).unwrap();
        prop_assert_eq!(input, dec);
    }

    #[test]
    fn test_prefix_free(input in prop::collection::vec(0..40u16, 1..300)) {
        let enc = compress(&input,&STD_OPTIONS).unwrap();
        prop_assert_eq!(enc.table.len(), enc.freq.len());
        for (a,ca) in enc.table.iter() {
            prop_assert!(!ca.is_empty());
            for (b,cb) in enc.table.iter() {
                if a != b {
                    prop_assert!(!cb.starts_with(ca));
                }
            }
        }
    }

    #[test]
    fn test_frequency_conservation(input in prop::collection::vec(0..10u8, 0..300)) {
        let freq = FrequencyMap::compute(&input);
        prop_assert_eq!(freq.total(), input.len());
        for (sym,count) in freq.iter() {
            prop_assert_eq!(count, input.iter().filter(|s| *s == sym).count());
        }
    }

    #[test]
    fn test_deterministic(input in prop::collection::vec(0..8u8, 1..200)) {
        let freq = FrequencyMap::compute(&input);
        let t1 = build_codes(HuffmanTree::build(&freq).unwrap().as_ref());
        let t2 = build_codes(HuffmanTree::build(&freq).unwrap().as_ref());
        let v1: Vec<(u8,String)> = t1.iter().map(|(s,c)| (*s,c.to_string())).collect();
        let v2: Vec<(u8,String)> = t2.iter().map(|(s,c)| (*s,c.to_string())).collect();
        prop_assert_eq!(v1, v2);
    }

    #[test]
    fn test_skewed_compresses(n_rare in 1..20usize, n_common in 50..300usize) {
        // one symbol dominates, a handful of rare symbols
        let mut input = vec![b'e'; n_common];
        input.extend((0..n_rare).map(|i| b'a' + (i % 5) as u8));
        let enc = compress(&input,&STD_OPTIONS).unwrap();
        prop_assert!(enc.stream.len() < 8 * input.len());
        prop_assert!(enc.table.get(&b'e').unwrap().len() == 1);
    }
}
