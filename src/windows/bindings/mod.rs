//! Windows API bindings
//!
//! Low-level FFI wrappers over version.dll.

pub mod version;

// Re-export all bindings
pub use version::*;
