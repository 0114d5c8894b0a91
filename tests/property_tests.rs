use huffstat::stats::{average_bits, entropy, weighted_length};
use huffstat::{Analysis, CodeMap, Error, FrequencyTable, HuffmanTree};
use proptest::prelude::*;

fn table_from(counts: &[u64]) -> FrequencyTable<u32> {
    FrequencyTable::from_counts(counts.iter().enumerate().map(|(s, &c)| (s as u32, c))).unwrap()
}

fn codes_for(table: &FrequencyTable<u32>) -> CodeMap<u32> {
    CodeMap::generate(&HuffmanTree::build(table).unwrap())
}

#[test]
fn test_empty_alphabet_produces_nothing() {
    let table: FrequencyTable<char> = FrequencyTable::tally("".chars());
    assert!(matches!(HuffmanTree::build(&table), Err(Error::EmptyAlphabet)));
    assert!(matches!(Analysis::run(table, 8), Err(Error::EmptyAlphabet)));
}

#[test]
fn test_single_symbol_example() {
    let table = FrequencyTable::from_counts(vec![('a', 5)]).unwrap();
    let analysis = Analysis::run(table, 8).unwrap();
    assert_eq!(analysis.codes().get(&'a').unwrap().to_string(), "0");
    let stats = analysis.stats();
    assert_eq!(stats.weighted_length, 5);
    assert_eq!(stats.entropy, 0.0);
    assert_eq!(stats.baseline_length, 40);
    assert_eq!(stats.compression_percent, 87.5);
}

#[test]
fn test_two_symbol_example() {
    let table = FrequencyTable::from_counts(vec![('a', 3), ('b', 1)]).unwrap();
    let analysis = Analysis::run(table, 8).unwrap();
    assert_eq!(analysis.codes().get(&'a').unwrap().len(), 1);
    assert_eq!(analysis.codes().get(&'b').unwrap().len(), 1);
    let stats = analysis.stats();
    assert_eq!(stats.weighted_length, 4);
    assert!((stats.entropy - 0.8113).abs() < 1e-4);
    assert_eq!(stats.baseline_length, 32);
    assert_eq!(stats.compression_percent, 87.5);
}

#[test]
fn test_text_sample() {
    let text = "The quick brown fox jumps over the lazy dog.\nHuffman encoding is greedy.";
    let table = FrequencyTable::from_text(text, true, true);
    let analysis = Analysis::run(table, 8).unwrap();
    let stats = analysis.stats();
    assert!(analysis.codes().is_prefix_free());
    assert!(stats.average_bits < 8.0);
    assert!(stats.compression_percent > 0.0);
}

#[test]
fn test_negative_compression_through_pipeline() {
    let table = FrequencyTable::from_counts(vec![('a', 1), ('b', 1), ('c', 1)]).unwrap();
    let stats = *Analysis::run(table, 1).unwrap().stats();
    assert_eq!(stats.weighted_length, 5);
    assert_eq!(stats.baseline_length, 3);
    assert!(stats.compression_percent < 0.0);
}

#[test]
fn test_huge_counts_fail_instead_of_wrapping() {
    let table = FrequencyTable::from_counts(vec![('a', 1u64 << 61), ('b', 1u64 << 61)]).unwrap();
    assert!(matches!(Analysis::run(table, 8), Err(Error::Overflow(_))));

    let err = FrequencyTable::from_counts(vec![('a', u64::MAX), ('b', 1)]).unwrap_err();
    assert!(matches!(err, Error::Overflow(_)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_prefix_free(counts in prop::collection::vec(1u64..10_000, 1..100)) {
        let table = table_from(&counts);
        let codes = codes_for(&table);
        prop_assert_eq!(codes.len(), table.len());
        prop_assert!(codes.is_prefix_free());
        prop_assert!(codes.iter().all(|(_, c)| !c.is_empty()));
    }

    #[test]
    fn test_deterministic(counts in prop::collection::vec(1u64..50, 1..100)) {
        // Small counts force many ties.
        let first = codes_for(&table_from(&counts));
        let second = codes_for(&table_from(&counts));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_weighted_length_consistent(counts in prop::collection::vec(1u64..10_000, 1..100)) {
        let table = table_from(&counts);
        let codes = codes_for(&table);
        let expected: u64 = table
            .iter()
            .map(|(s, c)| c * codes.get(s).unwrap().len() as u64)
            .sum();
        prop_assert_eq!(weighted_length(&table, &codes).unwrap(), expected);
    }

    #[test]
    fn test_entropy_bound(counts in prop::collection::vec(1u64..10_000, 1..100)) {
        let table = table_from(&counts);
        let codes = codes_for(&table);
        let h = entropy(&table).unwrap();
        let avg = average_bits(weighted_length(&table, &codes).unwrap(), table.total()).unwrap();
        prop_assert!(h <= avg + 1e-9);
        prop_assert!(avg <= h + 1.0 + 1e-9);
    }

    #[test]
    fn test_kraft_equality(counts in prop::collection::vec(1u64..10_000, 2..100)) {
        let codes = codes_for(&table_from(&counts));
        prop_assert!((codes.kraft_sum() - 1.0).abs() < 1e-9);
    }
}
