//! Borrowed view of a caller-owned version resource buffer

use super::address::Address;
use super::range::RelativeRange;

/// Immutable view of a raw version resource block.
///
/// The buffer is borrowed for the duration of all decode calls, so it cannot
/// be mutated or freed while a query is in flight. `base()` is the address of
/// the first byte and is stable for the lifetime of the borrow; the native
/// lookup reports values as absolute addresses relative to it.
#[derive(Debug, Clone, Copy)]
pub struct VersionBlock<'a> {
    data: &'a [u8],
}

impl<'a> VersionBlock<'a> {
    /// Wraps a raw resource buffer
    pub fn new(data: &'a [u8]) -> Self {
        VersionBlock { data }
    }

    /// Address of the first byte of the buffer
    pub fn base(&self) -> Address {
        Address::from(self.data.as_ptr())
    }

    /// Length of the buffer in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the bytes covered by a validated range.
    ///
    /// Ranges are only produced by the resolver against this buffer's length,
    /// so the slice is always in bounds.
    pub fn slice(&self, range: RelativeRange) -> &'a [u8] {
        &self.data[range.start()..range.end()]
    }
}
