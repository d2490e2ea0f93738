//! Translation identifiers from the version resource translation table

use super::error::{VersionError, VersionResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One supported localization: a 16-bit language identifier paired with a
/// 16-bit code page identifier.
///
/// Renders as exactly 8 lowercase hex digits (language then code page), the
/// form used as the middle segment of a string-value key path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationId {
    language: u16,
    code_page: u16,
}

impl TranslationId {
    /// Creates an identifier from a language and code page pair
    pub const fn new(language: u16, code_page: u16) -> Self {
        TranslationId {
            language,
            code_page,
        }
    }

    /// Decodes one 4-byte translation table entry.
    ///
    /// Each 16-bit half is stored with its bytes reversed relative to the
    /// textual identifier, so bytes 0/1 and 2/3 are swapped before the entry
    /// is interpreted: raw `09 04 B0 04` decodes to `040904b0` (language
    /// 0x0409, code page 0x04B0).
    pub fn from_table_entry(entry: [u8; 4]) -> Self {
        let mut e = entry;
        e.swap(0, 1);
        e.swap(2, 3);
        TranslationId {
            language: u16::from_be_bytes([e[0], e[1]]),
            code_page: u16::from_be_bytes([e[2], e[3]]),
        }
    }

    /// The language identifier
    pub const fn language(&self) -> u16 {
        self.language
    }

    /// The code page identifier
    pub const fn code_page(&self) -> u16 {
        self.code_page
    }
}

impl fmt::Display for TranslationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lang = self.language.to_be_bytes();
        let page = self.code_page.to_be_bytes();
        f.write_str(&hex::encode([lang[0], lang[1], page[0], page[1]]))
    }
}

impl FromStr for TranslationId {
    type Err = VersionError;

    fn from_str(s: &str) -> VersionResult<Self> {
        if s.len() != 8 {
            return Err(VersionError::InvalidTranslation(s.to_string()));
        }
        let bytes =
            hex::decode(s).map_err(|_| VersionError::InvalidTranslation(s.to_string()))?;
        Ok(TranslationId {
            language: u16::from_be_bytes([bytes[0], bytes[1]]),
            code_page: u16::from_be_bytes([bytes[2], bytes[3]]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entry_byte_swap() {
        // US English, Unicode code page 1200
        let id = TranslationId::from_table_entry([0x09, 0x04, 0xB0, 0x04]);
        assert_eq!(id.language(), 0x0409);
        assert_eq!(id.code_page(), 0x04B0);
        assert_eq!(id.to_string(), "040904b0");
    }

    #[test]
    fn test_display_pads_to_eight_digits() {
        let id = TranslationId::new(0x0007, 0x00B0);
        assert_eq!(id.to_string(), "000700b0");
    }

    #[test]
    fn test_parse_round_trip() {
        let id: TranslationId = "040904b0".parse().unwrap();
        assert_eq!(id, TranslationId::new(0x0409, 0x04B0));
        assert_eq!(id.to_string(), "040904b0");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("0409".parse::<TranslationId>().is_err());
        assert!("040904bx".parse::<TranslationId>().is_err());
        assert!("040904b000".parse::<TranslationId>().is_err());
        assert!("".parse::<TranslationId>().is_err());
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let id: TranslationId = "040904B0".parse().unwrap();
        assert_eq!(id, TranslationId::new(0x0409, 0x04B0));
    }
}
