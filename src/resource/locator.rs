//! Locator capability for resolving key paths inside a resource block

use crate::core::types::{Address, TranslationId, VersionBlock};

/// Key path of the fixed version record
pub const FIXED_INFO_KEY_PATH: &str = r"\";

/// Key path of the translation table
pub const TRANSLATION_KEY_PATH: &str = r"\VarFileInfo\Translation";

/// Builds the key path of a localized string value.
///
/// Three backslash-delimited segments: the string table marker, the 8-hex
/// translation identifier, and the item name. Item names are forwarded
/// verbatim, so vendor-specific items outside the documented set work too.
pub fn string_value_key_path(translation: TranslationId, item: &str) -> String {
    format!(r"\StringFileInfo\{}\{}", translation, item)
}

/// Outcome of a native resource lookup.
///
/// `Found` carries the absolute address of the value and its reported length.
/// The length unit depends on the query: bytes for the fixed record and the
/// translation table, 16-bit code units for string values. Neither the
/// address nor the length is trusted; both go through the offset resolver
/// before any byte is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Located {
    NotFound,
    Found { address: Address, length: usize },
}

/// Resource lookup capability.
///
/// The production implementation wraps the platform's native lookup; tests
/// substitute an in-memory fake. Implementations report where a value lives,
/// never its contents; interpretation stays in the decoders.
pub trait ResourceLocator {
    /// Looks up a key path inside the block
    fn query(&self, block: &VersionBlock<'_>, key_path: &str) -> Located;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_value_key_path() {
        let id = TranslationId::new(0x0409, 0x04B0);
        assert_eq!(
            string_value_key_path(id, "CompanyName"),
            r"\StringFileInfo\040904b0\CompanyName"
        );
    }

    #[test]
    fn test_key_path_constants() {
        assert_eq!(FIXED_INFO_KEY_PATH, "\\");
        assert_eq!(TRANSLATION_KEY_PATH, "\\VarFileInfo\\Translation");
    }
}
