use crate::ffi::{
    CdFn, CpFn, FreeLsInfoFn, GeneralInformation, LsFn, NtfsCloseFn, NtfsInitFn, PwdFn,
};
use crate::library::NtfsDriver;
use crate::listing::Listing;
use libloading::Symbol;
use log::debug;
use ntfsutils_core::{DirectoryEntry, NtfsUtilsError, VolumeOps};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr::NonNull;

/// One open connection to a mounted volume.
///
/// Owns the opaque handle returned by `ntfs_init` and guarantees a single
/// `ntfs_close` when dropped, whatever way the command loop ends. The close
/// symbol is resolved up front so teardown cannot fail to find it.
pub struct Session {
    driver: NtfsDriver,
    handle: NonNull<GeneralInformation>,
    close: NtfsCloseFn,
    device: String,
}

impl Session {
    /// Opens a session on a device image. A null handle from the driver
    /// means no NTFS filesystem was detected and no session exists.
    pub fn open(driver: NtfsDriver, device_path: &str) -> Result<Self, NtfsUtilsError> {
        let c_path = to_c_string(device_path)?;
        let close: NtfsCloseFn = *driver.get::<NtfsCloseFn>("ntfs_close")?;
        let raw = {
            let init: Symbol<'_, NtfsInitFn> = driver.get("ntfs_init")?;
            unsafe { init(c_path.as_ptr()) }
        };
        let handle = NonNull::new(raw)
            .ok_or_else(|| NtfsUtilsError::NotDetected(device_path.to_string()))?;
        debug!("opened session on {}", device_path);
        Ok(Session {
            driver,
            handle,
            close,
            device: device_path.to_string(),
        })
    }
}

impl VolumeOps for Session {
    fn pwd(&mut self) -> Result<String, NtfsUtilsError> {
        let pwd: Symbol<'_, PwdFn> = self.driver.get("pwd")?;
        let raw = unsafe { pwd(self.handle.as_ptr()) };
        take_driver_string(raw).ok_or_else(|| {
            NtfsUtilsError::Other("driver returned no working directory".to_string())
        })
    }

    fn cd(&mut self, path: &str) -> Result<String, NtfsUtilsError> {
        let c_path = to_c_string(path)?;
        let cd: Symbol<'_, CdFn> = self.driver.get("cd")?;
        let raw = unsafe { cd(self.handle.as_ptr(), c_path.as_ptr()) };
        take_driver_string(raw)
            .ok_or_else(|| NtfsUtilsError::Other("driver returned no cd response".to_string()))
    }

    fn ls(&mut self, path: &str) -> Result<Vec<DirectoryEntry>, NtfsUtilsError> {
        let c_path = to_c_string(path)?;
        // Resolve the release hook before asking for a listing, so a
        // missing symbol cannot strand an unreleasable chain.
        let release: FreeLsInfoFn = *self.driver.get::<FreeLsInfoFn>("free_ls_info")?;
        let ls: Symbol<'_, LsFn> = self.driver.get("ls")?;
        let raw = unsafe { ls(self.handle.as_ptr(), c_path.as_ptr()) };
        let entries = match Listing::from_raw(raw, release) {
            Some(listing) => listing.entries(),
            None => Vec::new(),
        };
        debug!("ls {} materialized {} entries", path, entries.len());
        Ok(entries)
    }

    fn cp(&mut self, from_path: &str, to_path: &str) -> Result<String, NtfsUtilsError> {
        let c_from = to_c_string(from_path)?;
        let c_to = to_c_string(to_path)?;
        let cp: Symbol<'_, CpFn> = self.driver.get("cp")?;
        let raw = unsafe { cp(self.handle.as_ptr(), c_from.as_ptr(), c_to.as_ptr()) };
        take_driver_string(raw)
            .ok_or_else(|| NtfsUtilsError::Other("driver returned no cp response".to_string()))
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let status = unsafe { (self.close)(self.handle.as_ptr()) };
        debug!("closed session on {}, status {}", self.device, status);
    }
}

fn to_c_string(text: &str) -> Result<CString, NtfsUtilsError> {
    CString::new(text).map_err(|_| NtfsUtilsError::InvalidPath(text.to_string()))
}

/// Copies a driver-malloc'd string into owned memory and frees the original.
fn take_driver_string(raw: *mut c_char) -> Option<String> {
    if raw.is_null() {
        return None;
    }
    let text = unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned();
    unsafe { libc::free(raw as *mut libc::c_void) };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_nul_is_rejected_before_the_boundary() {
        assert!(matches!(
            to_c_string("bad\0path"),
            Err(NtfsUtilsError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_null_driver_string_is_none() {
        assert!(take_driver_string(std::ptr::null_mut()).is_none());
    }
}
