/// Uniform interface over every sort implementation in this crate, used by the tests, the
/// benchmarks and the driver.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

#[macro_use]
pub mod ffi_util;

pub mod bubble;
pub mod error;
pub mod patterns;
pub mod print;
pub mod stable;

pub use bubble::{sort, sort_by, sort_by_with_stats, sort_n, PassStats};
pub use error::SortError;
