//! Version resource decoding
//!
//! This module provides the decoders over a caller-owned resource block:
//! - Absolute-address to bounds-checked range resolution
//! - The fixed version record
//! - The translation table with its per-entry byte-order correction
//! - Localized UTF-16 string values by key path

mod fixed;
mod locator;
mod resolver;
mod strings;
mod translations;

pub use fixed::query_fixed_info;
pub use locator::{
    string_value_key_path, Located, ResourceLocator, FIXED_INFO_KEY_PATH, TRANSLATION_KEY_PATH,
};
pub use resolver::resolve;
pub use strings::{
    query_string_value, COMPANY_NAME, FILE_DESCRIPTION, FILE_VERSION, LEGAL_COPYRIGHT,
    LEGAL_TRADEMARKS, ORIGINAL_FILENAME, PRIVATE_BUILD, PRODUCT_VERSION, SPECIAL_BUILD,
};
pub use translations::query_translations;

use crate::core::types::{FixedFileInfo, TranslationId, VersionBlock, VersionResult};

/// Version information context that owns a retrieved resource block and
/// provides a unified query interface.
pub struct VersionInfo {
    data: Vec<u8>,
}

impl VersionInfo {
    /// Wraps an externally retrieved resource buffer
    pub fn new(data: Vec<u8>) -> Self {
        VersionInfo { data }
    }

    /// Retrieves the version resource of a file on disk
    #[cfg(windows)]
    pub fn from_file(path: &str) -> VersionResult<Self> {
        let data = crate::windows::bindings::version::file_version_info(path)?;
        tracing::debug!(path, len = data.len(), "retrieved version resource");
        Ok(VersionInfo { data })
    }

    /// View of the owned buffer for use with the free decode functions
    pub fn block(&self) -> VersionBlock<'_> {
        VersionBlock::new(&self.data)
    }

    /// Decodes the fixed version record with the given locator
    pub fn fixed_info_with<L: ResourceLocator>(&self, locator: &L) -> VersionResult<FixedFileInfo> {
        query_fixed_info(locator, &self.block())
    }

    /// Decodes the translation table with the given locator
    pub fn translations_with<L: ResourceLocator>(
        &self,
        locator: &L,
    ) -> VersionResult<Vec<TranslationId>> {
        query_translations(locator, &self.block())
    }

    /// Decodes a localized string value with the given locator
    pub fn string_value_with<L: ResourceLocator>(
        &self,
        locator: &L,
        translation: TranslationId,
        item: &str,
    ) -> VersionResult<String> {
        query_string_value(locator, &self.block(), translation, item)
    }

    /// Decodes the fixed version record via the native lookup
    #[cfg(windows)]
    pub fn fixed_info(&self) -> VersionResult<FixedFileInfo> {
        self.fixed_info_with(&crate::windows::SystemLocator)
    }

    /// Decodes the translation table via the native lookup
    #[cfg(windows)]
    pub fn translations(&self) -> VersionResult<Vec<TranslationId>> {
        self.translations_with(&crate::windows::SystemLocator)
    }

    /// Decodes a localized string value via the native lookup
    #[cfg(windows)]
    pub fn string_value(&self, translation: TranslationId, item: &str) -> VersionResult<String> {
        self.string_value_with(&crate::windows::SystemLocator, translation, item)
    }
}
