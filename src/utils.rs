//! # Library-Internal Utilities

/// Builds a slice from a native pointer/length pair, tolerating the null/zero
/// combination some callbacks pass for empty sequences
pub(crate) unsafe fn from_raw_parts_maybe_null<'a, T>(data: *const T, len: usize) -> &'a [T] {
    if data.is_null() {
        debug_assert_eq!(len, 0, "non-empty slice with null data pointer");
        &[]
    } else {
        std::slice::from_raw_parts(data, len)
    }
}
