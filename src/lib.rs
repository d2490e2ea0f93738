//! Safe decoding of Windows version resource blocks
//!
//! A version resource is a self-relative, pointer-addressed structure
//! containing a fixed-size version record, a translation table, and a set of
//! localized key/value strings. The native lookup reports values as absolute
//! addresses with lengths; every decoder here translates those reports into
//! bounds-checked ranges inside the caller-owned buffer before reading a
//! single byte, so a corrupt or hostile resource cannot cause a read outside
//! the block.
//!
//! The decoders are pure functions over an immutable buffer, generic over a
//! [`ResourceLocator`] capability. On Windows, `windows::SystemLocator` backs
//! them with the native lookup; tests substitute an in-memory fake.

pub mod core;
pub mod resource;
#[cfg(windows)]
pub mod windows;

// Re-export main types from core module
pub use crate::core::types::{
    Address, FixedFileInfo, RelativeRange, TranslationId, VersionBlock, VersionError,
    VersionResult,
};

// Re-export the decoders and the locator seam
pub use crate::resource::{
    query_fixed_info, query_string_value, query_translations, resolve, string_value_key_path,
    Located, ResourceLocator, VersionInfo, FIXED_INFO_KEY_PATH, TRANSLATION_KEY_PATH,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_module_accessible() {
        assert_eq!(crate::core::VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_address_reexport() {
        let addr = Address::new(0x1000);
        assert_eq!(addr.as_usize(), 0x1000);

        let null = Address::null();
        assert!(null.is_null());
    }

    #[test]
    fn test_fixed_file_info_reexport() {
        assert_eq!(FixedFileInfo::SIZE, 52);
        let info = FixedFileInfo::default();
        assert!(!info.has_valid_signature());
    }

    #[test]
    fn test_translation_id_reexport() {
        let id = TranslationId::new(0x0409, 0x04B0);
        assert_eq!(id.to_string(), "040904b0");
    }

    #[test]
    fn test_version_block_reexport() {
        let data = [0u8; 8];
        let block = VersionBlock::new(&data);
        assert_eq!(block.len(), 8);
    }

    #[test]
    fn test_version_error_reexport() {
        let err = VersionError::not_found(FIXED_INFO_KEY_PATH);
        assert!(err.is_not_found());

        let result: VersionResult<u32> = Ok(42);
        assert!(result.is_ok());
    }
}
