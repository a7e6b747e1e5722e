//! In-place bubble sort.
//!
//! The reference variant always performs `len - 1` passes, each one scanning a prefix that
//! shrinks by one element, because after pass `i` the `i + 1` largest elements are in their final
//! position at the tail. There is no swapped-flag termination, so already sorted input still costs
//! `len * (len - 1) / 2` comparisons. The `*_early_exit` functions add that termination check and
//! stop after the first pass that did not swap.
//!
//! Only adjacent pairs where the left element is strictly greater than the right are swapped,
//! which makes every variant stable.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::SortError;

/// Work done by a single sort call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    pub passes: usize,
    pub comparisons: usize,
    pub swaps: usize,
}

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, |a, b| a.cmp(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort::<T, _, false>(v, &mut |a, b| compare(a, b) == Ordering::Greater);
}

/// Same as [`sort_by`], but reports how many passes, comparisons and swaps were needed.
pub fn sort_by_with_stats<T, F>(v: &mut [T], mut compare: F) -> PassStats
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort::<T, _, false>(v, &mut |a, b| compare(a, b) == Ordering::Greater)
}

/// Sorts the first `n` elements of `v`, leaving the rest untouched.
///
/// Mirrors the classic `(array, length)` calling convention. A length that exceeds the slice is
/// rejected before anything is mutated.
pub fn sort_n<T>(v: &mut [T], n: usize) -> Result<(), SortError>
where
    T: Ord,
{
    let len = v.len();
    let prefix = v.get_mut(..n).ok_or_else(|| {
        debug!(len, n, "rejecting sort length larger than the sequence");
        SortError::InvalidArgument { len, n }
    })?;

    sort(prefix);
    Ok(())
}

#[inline]
pub fn sort_early_exit<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by_early_exit(v, |a, b| a.cmp(b));
}

#[inline]
pub fn sort_by_early_exit<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort::<T, _, true>(v, &mut |a, b| compare(a, b) == Ordering::Greater);
}

pub fn sort_by_early_exit_with_stats<T, F>(v: &mut [T], mut compare: F) -> PassStats
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort::<T, _, true>(v, &mut |a, b| compare(a, b) == Ordering::Greater)
}

// --- Private ---

#[inline]
fn bubble_sort<T, F, const EARLY_EXIT: bool>(v: &mut [T], is_greater: &mut F) -> PassStats
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut stats = PassStats::default();

    if len < 2 {
        return stats;
    }

    for i in 0..(len - 1) {
        let mut swapped = false;
        stats.passes += 1;

        // v[(len - i)..] already holds the i largest elements in order.
        for j in 0..(len - i - 1) {
            stats.comparisons += 1;

            if is_greater(&v[j], &v[j + 1]) {
                v.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if EARLY_EXIT && !swapped {
            break;
        }
    }

    stats
}
