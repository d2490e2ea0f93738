//! Localized string value query

use super::locator::{string_value_key_path, Located, ResourceLocator};
use super::resolver::resolve;
use crate::core::types::{TranslationId, VersionBlock, VersionError, VersionResult};

// Well-known item names. Documentation, not a validation gate: any other
// name is forwarded to the locator unchanged and simply comes back NotFound
// if the resource lacks it.
pub const COMPANY_NAME: &str = "CompanyName";
pub const FILE_DESCRIPTION: &str = "FileDescription";
pub const FILE_VERSION: &str = "FileVersion";
pub const LEGAL_COPYRIGHT: &str = "LegalCopyright";
pub const LEGAL_TRADEMARKS: &str = "LegalTrademarks";
pub const ORIGINAL_FILENAME: &str = "OriginalFilename";
pub const PRODUCT_VERSION: &str = "ProductVersion";
pub const PRIVATE_BUILD: &str = "PrivateBuild";
pub const SPECIAL_BUILD: &str = "SpecialBuild";

/// Decodes a localized string value for one translation.
///
/// The locator reports string lengths in 16-bit code units, so the resolved
/// byte range is twice the reported length. The bytes are decoded as
/// little-endian UTF-16, truncated at the first NUL code unit; malformed
/// surrogate sequences are replaced rather than rejected, the platform's
/// standard conversion behavior.
pub fn query_string_value<L: ResourceLocator>(
    locator: &L,
    block: &VersionBlock<'_>,
    translation: TranslationId,
    item: &str,
) -> VersionResult<String> {
    let key_path = string_value_key_path(translation, item);

    let (address, length) = match locator.query(block, &key_path) {
        Located::NotFound => return Err(VersionError::NotFound(key_path)),
        Located::Found { address, length } => (address, length),
    };

    // length is in u16 code units; a count too large to double cannot fit
    // any real buffer
    let byte_length = length
        .checked_mul(2)
        .ok_or_else(|| VersionError::out_of_bounds(address, length, block.len()))?;

    let range = resolve(block, address, byte_length)?;
    Ok(decode_utf16_le(block.slice(range)))
}

fn decode_utf16_le(data: &[u8]) -> String {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let len = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    String::from_utf16_lossy(&units[..len])
}
