#![no_main]

use libfuzzer_sys::fuzz_target;
use suft::tree::{Alphabet, SuffixTree};

fuzz_target!(|data: &[u8]| {
    // Build over the full byte alphabet so every input is admissible,
    // then audit the tree and probe it with a slice of itself
    let letters: Vec<u8> = (0..=255u8).collect();
    let alphabet = Alphabet::new(&letters).unwrap();

    let tree = SuffixTree::build(data.to_vec(), alphabet).unwrap();
    tree.check_invariants().unwrap();

    if !data.is_empty() {
        let mid = data.len() / 2;
        let needle = &data[mid..(mid + 8).min(data.len())];
        let found = tree.index_of(needle).unwrap();
        assert!(found <= mid);
        assert_eq!(&data[found..found + needle.len()], needle);
    }
});
