//! Suffix tree property tests.
//!
//! These verify the index invariants over random inputs:
//! - Leftmost occurrence: every substring is found at its first position
//! - Rejection: patterns absent from the text report no match
//! - Suffix round trip: every suffix is found at or before its own start
//! - Structure: the sealed tree passes the full invariant audit

use proptest::prelude::*;
use suft::tree::{Alphabet, SuffixTree};

/// Reference implementation: naive leftmost substring scan.
fn naive_index_of(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Random texts over a deliberately small alphabet, to force repeated
/// substrings and heavy edge splitting.
fn source_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,48}").unwrap()
}

/// Random probe patterns over the same alphabet; mostly absent from short
/// sources, which exercises the rejection path.
fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every substring of the source is found, at its leftmost position.
    #[test]
    fn prop_every_substring_found_leftmost(source in source_strategy()) {
        let bytes = source.as_bytes();
        let tree = SuffixTree::build(bytes.to_vec(), Alphabet::lowercase()).unwrap();

        for i in 0..bytes.len() {
            for j in i + 1..=bytes.len() {
                let pattern = &bytes[i..j];
                prop_assert_eq!(tree.index_of(pattern), naive_index_of(bytes, pattern));
            }
        }
    }

    /// Probe patterns agree with the naive scan, present or not.
    #[test]
    fn prop_probe_agrees_with_naive(source in source_strategy(), pattern in pattern_strategy()) {
        let bytes = source.as_bytes();
        let tree = SuffixTree::build(bytes.to_vec(), Alphabet::lowercase()).unwrap();

        let expected = naive_index_of(bytes, pattern.as_bytes());
        prop_assert_eq!(tree.index_of(pattern.as_bytes()), expected);
        prop_assert_eq!(tree.contains(pattern.as_bytes()), expected.is_some());
    }

    /// The empty pattern always matches at zero.
    #[test]
    fn prop_empty_pattern(source in source_strategy()) {
        let tree = SuffixTree::build(source.as_bytes().to_vec(), Alphabet::lowercase()).unwrap();
        prop_assert_eq!(tree.index_of(b""), Some(0));
        prop_assert!(tree.contains(b""));
    }

    /// Every suffix is found at or before its own starting position.
    #[test]
    fn prop_suffix_round_trip(source in source_strategy()) {
        let bytes = source.as_bytes();
        let tree = SuffixTree::build(bytes.to_vec(), Alphabet::lowercase()).unwrap();

        for i in 0..bytes.len() {
            let found = tree.index_of(&bytes[i..]);
            prop_assert!(found.is_some_and(|k| k <= i), "suffix at {} found at {:?}", i, found);
        }
    }

    /// The sealed tree is structurally well formed and has one leaf per
    /// suffix of the expanded text.
    #[test]
    fn prop_tree_well_formed(source in source_strategy()) {
        let tree = SuffixTree::build(source.as_bytes().to_vec(), Alphabet::lowercase()).unwrap();
        tree.check_invariants().unwrap();
        prop_assert_eq!(tree.leaf_count(), source.len() + 1);
    }

    /// Repeating a query never changes its answer.
    #[test]
    fn prop_queries_deterministic(source in source_strategy(), pattern in pattern_strategy()) {
        let tree = SuffixTree::build(source.as_bytes().to_vec(), Alphabet::lowercase()).unwrap();
        let first = tree.index_of(pattern.as_bytes());
        for _ in 0..3 {
            prop_assert_eq!(tree.index_of(pattern.as_bytes()), first);
        }
    }

    /// Parallel batch lookups agree with sequential ones.
    #[test]
    fn prop_batch_agrees_with_sequential(
        source in source_strategy(),
        patterns in prop::collection::vec(pattern_strategy(), 0..12),
    ) {
        let tree = SuffixTree::build(source.as_bytes().to_vec(), Alphabet::lowercase()).unwrap();
        let batch = tree.index_of_batch(&patterns);
        let sequential: Vec<_> = patterns.iter().map(|p| tree.index_of(p.as_bytes())).collect();
        prop_assert_eq!(batch, sequential);
    }
}
