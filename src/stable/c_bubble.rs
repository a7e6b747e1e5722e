ffi_sort_impl!("c_bubble_stable", bubble_sort_c);
