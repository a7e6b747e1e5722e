use std::cmp::Ordering;

sort_impl!("rust_bubble_early_exit_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    crate::bubble::sort_early_exit(v);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    crate::bubble::sort_by_early_exit(v, compare);
}
