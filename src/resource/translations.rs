//! Translation table query

use super::locator::{Located, ResourceLocator, TRANSLATION_KEY_PATH};
use super::resolver::resolve;
use crate::core::types::{TranslationId, VersionBlock, VersionError, VersionResult};

/// Size of one translation table entry: a 16-bit language identifier
/// followed by a 16-bit code page identifier
const ENTRY_SIZE: usize = 4;

/// Decodes the translation table of a resource block.
///
/// Entry order is preserved; it reflects the declared priority of supported
/// locales. A table length that is not a multiple of the entry size is
/// `InvalidLength`, never a truncated list.
pub fn query_translations<L: ResourceLocator>(
    locator: &L,
    block: &VersionBlock<'_>,
) -> VersionResult<Vec<TranslationId>> {
    let (address, length) = match locator.query(block, TRANSLATION_KEY_PATH) {
        Located::NotFound => return Err(VersionError::not_found(TRANSLATION_KEY_PATH)),
        Located::Found { address, length } => (address, length),
    };

    let range = resolve(block, address, length)?;
    let data = block.slice(range);

    if data.len() % ENTRY_SIZE != 0 {
        return Err(VersionError::invalid_length(
            "a multiple of 4 bytes",
            data.len(),
        ));
    }

    Ok(data
        .chunks_exact(ENTRY_SIZE)
        .map(|entry| TranslationId::from_table_entry([entry[0], entry[1], entry[2], entry[3]]))
        .collect())
}
