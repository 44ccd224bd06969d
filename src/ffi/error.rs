//! Error conversion utilities for FFI.

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int, c_void};

use super::raw::Api;
use crate::error::{Error, Result};
use crate::resource::{RawHandle, Resource};

/// Read the runtime's last error message.
pub fn last_error(api: &Api) -> String {
    // SAFETY: SDL_GetError never returns a dangling pointer.
    unsafe { string_from_ptr((api.SDL_GetError)()) }.unwrap_or_default()
}

/// Build an [`Error::Sdl`] from the runtime's last error message.
pub fn error_from_sdl(api: &Api) -> Error {
    let message = last_error(api);
    if message.is_empty() {
        Error::Sdl("unknown error".to_string())
    } else {
        Error::Sdl(message)
    }
}

/// Check a status code returned by the runtime and convert to Result.
///
/// The runtime reports failure with a negative value.
pub fn check(api: &Api, code: c_int) -> Result<()> {
    if code < 0 {
        Err(error_from_sdl(api))
    } else {
        Ok(())
    }
}

/// Turn an empty resource into the runtime's last error.
pub fn check_resource<H: RawHandle>(api: &Api, resource: Resource<H>) -> Result<Resource<H>> {
    if resource.is_valid() {
        Ok(resource)
    } else {
        Err(error_from_sdl(api))
    }
}

/// Copy a NUL-terminated string owned by the runtime.
///
/// # Safety
///
/// `ptr` must be null or point to a valid NUL-terminated string.
pub unsafe fn string_from_ptr(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

/// Copy a string the runtime allocated for the caller, then free it.
///
/// # Safety
///
/// `ptr` must be null or a NUL-terminated string allocated by the runtime
/// that nothing else frees.
pub unsafe fn take_string(api: &Api, ptr: *mut c_char) -> Option<String> {
    let free = api.SDL_free;
    let owned = Resource::new(ptr, move |p| free(p as *mut c_void));
    string_from_ptr(owned.get())
}

/// Convert a Rust string argument for the runtime.
pub fn to_cstring(what: &str, value: &str) -> Result<CString> {
    CString::new(value).map_err(|_| Error::InvalidArgument(format!("{} contains a nul byte", what)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cstring_rejects_nul() {
        let err = to_cstring("title", "a\0b").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref m) if m.contains("title")));
    }

    #[test]
    fn test_to_cstring_ok() {
        assert_eq!(to_cstring("title", "hello").unwrap().as_bytes(), b"hello");
    }

    #[test]
    fn test_string_from_ptr() {
        let owned = CString::new("abc").unwrap();
        unsafe {
            assert_eq!(string_from_ptr(owned.as_ptr()), Some("abc".to_string()));
            assert_eq!(string_from_ptr(std::ptr::null()), None);
        }
    }
}
