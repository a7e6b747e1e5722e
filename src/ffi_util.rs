#![allow(dead_code, unused_macros)] // Dependent on optional features.

use std::cmp::Ordering;

#[repr(C)]
pub(crate) struct CompResult {
    cmp_result: i8, // -1 == less, 0 == equal, 1 == more
    is_panic: bool,
}

/// Comparison trampoline handed to C. `ctx` must point to a live `F`, `a` and `b` to valid `T`
/// inside the slice being sorted.
pub(crate) unsafe extern "C" fn rust_fn_cmp<T, F: FnMut(&T, &T) -> Ordering>(
    a: *const u8,
    b: *const u8,
    ctx: *mut u8,
) -> CompResult {
    let compare_fn = &mut *(ctx as *mut F);
    let a = &*(a as *const T);
    let b = &*(b as *const T);

    // Unwinding across the C frames is UB, report the panic and let the caller re-raise it.
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| compare_fn(a, b))) {
        Ok(val) => CompResult {
            cmp_result: match val {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            },
            is_panic: false,
        },
        Err(err) => {
            eprintln!("Panic during compare call: {err:?}");
            CompResult {
                cmp_result: 0,
                is_panic: true,
            }
        }
    }
}

/// Generates `SortImpl`, `sort`, `sort_by` and `sort_i32` for a C sort exposing
/// `<prefix>_i32(int32_t*, size_t)` and
/// `<prefix>_by(void*, size_t len, size_t elem_size, cmp_fn, void* ctx) -> uint32_t`.
///
/// The `_by` entry point only moves raw bytes, so it works for any `T`.
macro_rules! ffi_sort_impl {
    (
        $name:expr,
        $sort_name_prefix:ident
    ) => {
        use std::cmp::Ordering;
        use std::mem;

        use crate::ffi_util::{rust_fn_cmp, CompResult};

        sort_impl!($name);

        paste::paste! {
            extern "C" {
                fn [<$sort_name_prefix _i32>](data: *mut i32, len: usize);
                #[must_use]
                fn [<$sort_name_prefix _by>](
                    data: *mut u8,
                    len: usize,
                    elem_size: usize,
                    cmp_fn: unsafe extern "C" fn(*const u8, *const u8, *mut u8) -> CompResult,
                    cmp_fn_ctx: *mut u8,
                ) -> u32;
            }

            /// Plain `int` entry point, no callback involved.
            pub fn sort_i32(data: &mut [i32]) {
                unsafe {
                    [<$sort_name_prefix _i32>](data.as_mut_ptr(), data.len());
                }
            }

            pub fn sort<T: Ord>(data: &mut [T]) {
                sort_by(data, |a, b| a.cmp(b));
            }

            pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
                let ret_code = unsafe {
                    [<$sort_name_prefix _by>](
                        data.as_mut_ptr() as *mut u8,
                        data.len(),
                        mem::size_of::<T>(),
                        rust_fn_cmp::<T, F>,
                        &mut compare as *mut F as *mut u8,
                    )
                };

                if ret_code != 0 {
                    panic!("Panic in comparison function");
                }
            }
        } // paste
    };
}
