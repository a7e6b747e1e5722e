//! Baseline for benchmarks, the stdlib stable sort.

use std::cmp::Ordering;

sort_impl!("rust_std_stable");

pub fn sort<T: Ord>(data: &mut [T]) {
    data.sort();
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    data.sort_by(compare);
}
