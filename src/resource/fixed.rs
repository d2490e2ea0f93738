//! Fixed version record query

use super::locator::{Located, ResourceLocator, FIXED_INFO_KEY_PATH};
use super::resolver::resolve;
use crate::core::types::{FixedFileInfo, VersionBlock, VersionError, VersionResult};

/// Decodes the fixed version record of a resource block.
///
/// Locates the root key path, resolves the reported range, and requires it
/// to be exactly [`FixedFileInfo::SIZE`] bytes. A mismatched length means a
/// malformed or unexpected resource and is reported as `InvalidLength`,
/// distinct from `OutOfBounds`, where the report did not fit the buffer at
/// all.
pub fn query_fixed_info<L: ResourceLocator>(
    locator: &L,
    block: &VersionBlock<'_>,
) -> VersionResult<FixedFileInfo> {
    let (address, length) = match locator.query(block, FIXED_INFO_KEY_PATH) {
        Located::NotFound => return Err(VersionError::not_found(FIXED_INFO_KEY_PATH)),
        Located::Found { address, length } => (address, length),
    };

    let range = resolve(block, address, length)?;
    FixedFileInfo::from_le_bytes(block.slice(range))
}
