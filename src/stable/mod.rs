pub mod rust_bubble;
pub mod rust_bubble_early_exit;
pub mod rust_std;

// Call the C bubble sort baseline via FFI.
#[cfg(feature = "c_bubble")]
pub mod c_bubble;
