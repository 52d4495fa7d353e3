#![forbid(unsafe_code)]

//! Byte sizes of fixed-length arrays of common element types

use std::mem::size_of;

/// Length used when none is given
pub const DEFAULT_LENGTH: usize = 7;

/// One row of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySize {
    /// C-style name of the element type
    pub element: &'static str,
    pub element_bytes: usize,
    pub length: usize,
    pub array_bytes: usize,
}

/// Report for arrays of compile-time length `N`
pub fn array_sizes<const N: usize>() -> Vec<ArraySize> {
    vec![
        row("char", size_of::<u8>(), N, size_of::<[u8; N]>()),
        row("short", size_of::<i16>(), N, size_of::<[i16; N]>()),
        row("int", size_of::<i32>(), N, size_of::<[i32; N]>()),
        row("double", size_of::<f64>(), N, size_of::<[f64; N]>()),
    ]
}

/// Report for arrays of runtime length `length`
///
/// Returns `None` if an array size would overflow `usize`.
pub fn array_sizes_for(length: usize) -> Option<Vec<ArraySize>> {
    [
        ("char", size_of::<u8>()),
        ("short", size_of::<i16>()),
        ("int", size_of::<i32>()),
        ("double", size_of::<f64>()),
    ]
    .into_iter()
    .map(|(element, bytes)| {
        bytes
            .checked_mul(length)
            .map(|total| row(element, bytes, length, total))
    })
    .collect()
}

fn row(
    element: &'static str,
    element_bytes: usize,
    length: usize,
    array_bytes: usize,
) -> ArraySize {
    ArraySize {
        element,
        element_bytes,
        length,
        array_bytes,
    }
}
