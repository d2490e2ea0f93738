//! Core type definitions for version resource decoding
//!
//! This module contains all fundamental types used throughout the crate,
//! including the address wrapper, the resource block view, validated ranges,
//! the decoded record types, and error types.

mod address;
mod block;
mod error;
mod fixed_info;
mod range;
mod translation;

// Re-export all public types
pub use address::Address;
pub use block::VersionBlock;
pub use error::{VersionError, VersionResult};
pub use fixed_info::FixedFileInfo;
pub use range::RelativeRange;
pub use translation::TranslationId;
