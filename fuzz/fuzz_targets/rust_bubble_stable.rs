#![no_main]

use libfuzzer_sys::fuzz_target;

use bubblesort::stable::rust_bubble as test_sort;

fuzz_target!(|data: &[u8]| {
    // Pair every byte with its position, sorting only by the byte makes a stability check possible.
    let mut v = data
        .iter()
        .enumerate()
        .map(|(idx, &byte)| (byte, idx))
        .collect::<Vec<_>>();

    // Indices are unique, so the full tuple order is exactly the stable order by byte.
    let mut expected = v.clone();
    expected.sort();

    test_sort::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
    assert_eq!(v, expected);
});
