//! Windows API layer for version resource retrieval
//!
//! Provides safe wrappers around the version.dll functions for obtaining a
//! file's version resource and looking up key paths inside it. All unsafe
//! FFI calls are contained within this module with proper error handling;
//! interpretation of the located bytes stays in the platform-independent
//! decoders.

pub mod bindings;
pub mod utils;

// Re-export key bindings
pub use bindings::version::{file_version_info, file_version_info_size, SystemLocator};
pub use utils::string_to_wide;
