//! Windows API utilities

mod string_conv;

pub use string_conv::string_to_wide;
