//! Custom error types for version resource decoding

use super::address::Address;
use thiserror::Error;

/// Main error type for version resource queries.
///
/// Every variant is a recoverable value; decoders never abort. `NotFound` is
/// an expected outcome (optional localized fields are commonly absent), while
/// `OutOfBounds` and `InvalidLength` indicate a corrupt or unexpected
/// resource.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("value not found in version resource: {0}")]
    NotFound(String),

    #[error("reported value at {address} ({length} bytes) falls outside the {block_len}-byte resource block")]
    OutOfBounds {
        address: Address,
        length: usize,
        block_len: usize,
    },

    #[error("value length {actual} is invalid: expected {requirement}")]
    InvalidLength {
        requirement: &'static str,
        actual: usize,
    },

    #[error("invalid translation identifier: {0}")]
    InvalidTranslation(String),

    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),
}

/// Result type alias for version resource queries
pub type VersionResult<T> = Result<T, VersionError>;

impl VersionError {
    /// Creates a new Windows API error with the last error code
    #[cfg(windows)]
    pub fn last_os_error() -> Self {
        VersionError::WindowsApi(windows::core::Error::from_win32())
    }

    /// Creates a not found error for a key path
    pub fn not_found(key_path: impl Into<String>) -> Self {
        VersionError::NotFound(key_path.into())
    }

    /// Creates an out of bounds error
    pub fn out_of_bounds(address: Address, length: usize, block_len: usize) -> Self {
        VersionError::OutOfBounds {
            address,
            length,
            block_len,
        }
    }

    /// Creates an invalid length error
    pub fn invalid_length(requirement: &'static str, actual: usize) -> Self {
        VersionError::InvalidLength {
            requirement,
            actual,
        }
    }

    /// Checks whether this error is absence of a key path rather than a
    /// malformed resource
    pub fn is_not_found(&self) -> bool {
        matches!(self, VersionError::NotFound(_))
    }
}
