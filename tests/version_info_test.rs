//! Tests for the owning VersionInfo facade

use std::collections::HashMap;
use verinfo::{
    string_value_key_path, FixedFileInfo, Located, ResourceLocator, TranslationId, VersionBlock,
    VersionError, VersionInfo, FIXED_INFO_KEY_PATH, TRANSLATION_KEY_PATH,
};

#[derive(Default)]
struct FakeLocator {
    entries: HashMap<String, (usize, usize)>,
}

impl ResourceLocator for FakeLocator {
    fn query(&self, block: &VersionBlock<'_>, key_path: &str) -> Located {
        match self.entries.get(key_path) {
            Some(&(offset, length)) => Located::Found {
                address: block.base().offset(offset as isize),
                length,
            },
            None => Located::NotFound,
        }
    }
}

fn sample_info() -> (VersionInfo, FakeLocator) {
    let mut data = Vec::new();
    let mut locator = FakeLocator::default();

    let mut fields = [0u32; 13];
    fields[0] = FixedFileInfo::SIGNATURE;
    fields[2] = 0x0001_0000; // file version 1.0.0.0
    locator
        .entries
        .insert(FIXED_INFO_KEY_PATH.to_string(), (0, FixedFileInfo::SIZE));
    data.extend(fields.iter().flat_map(|f| f.to_le_bytes()));

    locator
        .entries
        .insert(TRANSLATION_KEY_PATH.to_string(), (data.len(), 4));
    data.extend_from_slice(&[0x09, 0x04, 0xB0, 0x04]);

    let value: Vec<u8> = "Example Tool\0"
        .encode_utf16()
        .flat_map(|u| u.to_le_bytes())
        .collect();
    let key_path = string_value_key_path(TranslationId::new(0x0409, 0x04B0), "FileDescription");
    locator
        .entries
        .insert(key_path, (data.len(), value.len() / 2));
    data.extend_from_slice(&value);

    (VersionInfo::new(data), locator)
}

#[test]
fn facade_queries_through_injected_locator() {
    let (info, locator) = sample_info();

    let fixed = info.fixed_info_with(&locator).unwrap();
    assert!(fixed.has_valid_signature());
    assert_eq!(fixed.file_version_string(), "1.0.0.0");

    let translations = info.translations_with(&locator).unwrap();
    assert_eq!(translations, vec![TranslationId::new(0x0409, 0x04B0)]);

    let description = info
        .string_value_with(&locator, translations[0], "FileDescription")
        .unwrap();
    assert_eq!(description, "Example Tool");
}

#[test]
fn facade_reports_missing_values() {
    let (info, locator) = sample_info();

    let result = info.string_value_with(
        &locator,
        TranslationId::new(0x0409, 0x04B0),
        "LegalTrademarks",
    );
    assert!(matches!(result, Err(VersionError::NotFound(_))));
}

#[test]
fn block_view_matches_owned_buffer() {
    let info = VersionInfo::new(vec![1, 2, 3, 4]);
    let block = info.block();
    assert_eq!(block.len(), 4);
    assert_eq!(block.as_bytes(), &[1, 2, 3, 4]);
}

#[cfg(windows)]
mod system {
    use verinfo::VersionInfo;

    // kernel32.dll always carries a version resource
    const SYSTEM_DLL: &str = r"C:\Windows\System32\kernel32.dll";

    #[test]
    fn reads_fixed_info_from_system_dll() {
        let info = VersionInfo::from_file(SYSTEM_DLL).unwrap();
        let fixed = info.fixed_info().unwrap();
        assert!(fixed.has_valid_signature());
    }

    #[test]
    fn reads_translations_and_strings_from_system_dll() {
        let info = VersionInfo::from_file(SYSTEM_DLL).unwrap();
        let translations = info.translations().unwrap();
        assert!(!translations.is_empty());

        let company = info
            .string_value(translations[0], verinfo::resource::COMPANY_NAME)
            .unwrap();
        assert!(!company.is_empty());
    }

    #[test]
    fn missing_file_reports_api_error() {
        let result = VersionInfo::from_file(r"C:\definitely\not\a\real\file.dll");
        assert!(result.is_err());
    }
}
