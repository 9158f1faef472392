use crate::ffi::{PrintDeviceFn, DRIVER_LIBRARY};
use libloading::{Library, Symbol};
use log::debug;
use ntfsutils_core::NtfsUtilsError;

/// Handle to the loaded driver shared object.
///
/// Symbols are resolved on demand; the driver is loaded once per process
/// invocation and dropped when the owning session (or the `list` command)
/// is done with it.
pub struct NtfsDriver {
    lib: Library,
}

impl NtfsDriver {
    pub fn load() -> Result<Self, NtfsUtilsError> {
        let lib = unsafe { Library::new(DRIVER_LIBRARY) }
            .map_err(|e| NtfsUtilsError::DriverLoad(format!("{}: {}", DRIVER_LIBRARY, e)))?;
        debug!("loaded driver library {}", DRIVER_LIBRARY);
        Ok(NtfsDriver { lib })
    }

    pub(crate) fn get<T>(&self, name: &str) -> Result<Symbol<'_, T>, NtfsUtilsError> {
        unsafe { self.lib.get(name.as_bytes()) }
            .map_err(|e| NtfsUtilsError::DriverLoad(format!("missing symbol {}: {}", name, e)))
    }

    /// Driver-side device enumeration; prints directly to the console.
    pub fn print_device(&self) -> Result<(), NtfsUtilsError> {
        let print_device: Symbol<'_, PrintDeviceFn> = self.get("print_device")?;
        unsafe { print_device() };
        Ok(())
    }
}
