//! Translation of absolute addresses into validated buffer-relative ranges

use crate::core::types::{Address, RelativeRange, VersionBlock, VersionError, VersionResult};

/// Converts an absolute address and byte length reported by a lookup into a
/// bounds-checked range inside the block.
///
/// The address is never dereferenced; it is reduced to an offset from the
/// block's base and rejected with `OutOfBounds` unless the whole implied
/// range fits inside the buffer that was actually supplied. A corrupt or
/// hostile resource whose report lies cannot cause a read past the buffer.
pub fn resolve(
    block: &VersionBlock<'_>,
    address: Address,
    length: usize,
) -> VersionResult<RelativeRange> {
    let out_of_bounds = || VersionError::out_of_bounds(address, length, block.len());

    let start = address
        .as_usize()
        .checked_sub(block.base().as_usize())
        .ok_or_else(out_of_bounds)?;
    let end = start.checked_add(length).ok_or_else(out_of_bounds)?;

    if start >= block.len() || end > block.len() {
        return Err(out_of_bounds());
    }

    Ok(RelativeRange::new(start, end))
}
