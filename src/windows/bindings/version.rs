//! Version.dll bindings for version resource retrieval and lookup

use crate::core::types::{Address, VersionBlock, VersionError, VersionResult};
use crate::resource::{Located, ResourceLocator};
use crate::windows::utils::string_to_wide;
use std::ptr;
use winapi::shared::minwindef::{DWORD, FALSE, LPVOID, UINT};
use winapi::um::winver::{GetFileVersionInfoSizeW, GetFileVersionInfoW, VerQueryValueW};

/// Safe wrapper for GetFileVersionInfoSizeW.
///
/// Returns the buffer size in bytes required to hold the file's version
/// resource.
pub fn file_version_info_size(path: &str) -> VersionResult<usize> {
    let wide_path = string_to_wide(path);
    let mut handle: DWORD = 0;

    let size = unsafe { GetFileVersionInfoSizeW(wide_path.as_ptr(), &mut handle) };

    if size == 0 {
        Err(VersionError::last_os_error())
    } else {
        Ok(size as usize)
    }
}

/// Safe wrapper for GetFileVersionInfoW.
///
/// Sizes and retrieves the file's version resource into an owned buffer.
pub fn file_version_info(path: &str) -> VersionResult<Vec<u8>> {
    let size = file_version_info_size(path)?;
    let wide_path = string_to_wide(path);
    let mut data = vec![0u8; size];

    let result = unsafe {
        GetFileVersionInfoW(
            wide_path.as_ptr(),
            0,
            size as DWORD,
            data.as_mut_ptr() as LPVOID,
        )
    };

    if result == FALSE {
        Err(VersionError::last_os_error())
    } else {
        Ok(data)
    }
}

/// Resource lookup backed by VerQueryValueW.
///
/// The native call reports an absolute pointer into the block plus a length
/// (bytes, or 16-bit code units for string queries). Both are returned
/// untrusted; the decoders run them through the offset resolver before any
/// read.
pub struct SystemLocator;

impl ResourceLocator for SystemLocator {
    fn query(&self, block: &VersionBlock<'_>, key_path: &str) -> Located {
        let wide_key_path = string_to_wide(key_path);
        let mut value: LPVOID = ptr::null_mut();
        let mut length: UINT = 0;

        let result = unsafe {
            VerQueryValueW(
                block.as_bytes().as_ptr() as *const _,
                wide_key_path.as_ptr(),
                &mut value,
                &mut length,
            )
        };

        if result == FALSE || value.is_null() {
            Located::NotFound
        } else {
            Located::Found {
                address: Address::new(value as usize),
                length: length as usize,
            }
        }
    }
}
