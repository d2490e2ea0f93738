//! String conversion utilities for Windows API

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;

/// Convert a Rust string to a NUL-terminated Windows wide string (UTF-16)
pub fn string_to_wide(s: &str) -> Vec<u16> {
    OsStr::new(s)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}
