//! Core module containing fundamental types for version resource decoding
//!
//! This module provides the foundational building blocks used throughout the
//! crate: address handling, the resource block view, decoded record types,
//! and error types.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    Address,
    FixedFileInfo,
    RelativeRange,
    TranslationId,
    VersionBlock,
    VersionError,
    VersionResult,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
