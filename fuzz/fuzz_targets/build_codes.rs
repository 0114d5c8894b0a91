#![no_main]
use huffstat::{CodeMap, FrequencyTable, HuffmanTree, Stats};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let table = FrequencyTable::tally(data.iter().copied());
    let tree = match HuffmanTree::build(&table) {
        Ok(tree) => tree,
        Err(_) => {
            assert!(data.is_empty());
            return;
        }
    };

    let codes = CodeMap::generate(&tree);
    assert_eq!(codes.len(), table.len());
    assert!(codes.is_prefix_free());

    let stats = Stats::compute(&table, &codes, 8).unwrap();
    assert!(stats.entropy <= stats.average_bits + 1e-9);
    assert!(stats.average_bits <= stats.entropy + 1.0 + 1e-9);
});
