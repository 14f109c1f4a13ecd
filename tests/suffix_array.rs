use proptest::prelude::*;
use suffixdex::{build_suffix_array, search_array};

fn libsais_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut suffix_array_buffer = vec![0i32; text.len()];

    libsais::SuffixArrayConstruction::for_text(text)
        .in_borrowed_buffer(&mut suffix_array_buffer[..])
        .multi_threaded(libsais::ThreadCount::fixed(1))
        .run()
        .expect("libsais suffix array construction");

    suffix_array_buffer
        .into_iter()
        .map(|offset| offset as usize)
        .collect()
}

#[test]
fn offset_order_misses_matches() {
    let text = b"banana";
    let offset_order: Vec<_> = (0..text.len()).collect();

    // the binary search only probes O(log n) suffixes and steers by their order
    assert_eq!(search_array(text, &offset_order, b"nan"), 0);
    assert_eq!(search_array(text, &build_suffix_array(text), b"nan"), 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_failure_persistence(prop::test_runner::FileFailurePersistence::WithSource("proptest-regressions")))]

    #[test]
    fn same_as_libsais(
        text in prop::collection::vec((0usize..5).prop_map(|i| b"ACGTN"[i]), 1..500),
    ) {
        prop_assert_eq!(build_suffix_array(&text), libsais_suffix_array(&text));
    }

    #[test]
    fn never_exceeds_pattern_length(
        text in prop::collection::vec((0usize..4).prop_map(|i| b"ACGT"[i]), 0..200),
        pattern in prop::collection::vec((0usize..4).prop_map(|i| b"ACGT"[i]), 0..20),
    ) {
        let suffix_array = build_suffix_array(&text);
        prop_assert!(search_array(&text, &suffix_array, &pattern) <= pattern.len());
    }
}
