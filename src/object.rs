//! Shared objects loaded through the runtime.

use std::os::raw::c_void;

use crate::error::{Error, Result};
use crate::ffi::{self, check_resource, to_cstring, Api};
use crate::resource::Resource;

/// A shared library opened with `SDL_LoadObject`.
///
/// Unloaded when dropped. Function pointers obtained from it must not be
/// called afterwards.
#[derive(Debug)]
pub struct SharedObject {
    api: &'static Api,
    resource: Resource<*mut c_void>,
}

impl SharedObject {
    /// Load the shared object at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let api = ffi::api()?;
        let path_c = to_cstring("path", path)?;
        let unload = api.SDL_UnloadObject;

        let resource = Resource::construct(
            || unsafe { (api.SDL_LoadObject)(path_c.as_ptr()) },
            move |handle| unsafe { unload(handle) },
        );

        Ok(Self {
            api,
            resource: check_resource(api, resource)?,
        })
    }

    /// The raw object handle.
    pub fn raw(&self) -> *mut c_void {
        self.resource.get()
    }

    /// Look up the address of an exported symbol.
    pub fn symbol(&self, name: &str) -> Result<*mut c_void> {
        let name_c = to_cstring("symbol name", name)?;
        let addr = unsafe { (self.api.SDL_LoadFunction)(self.resource.get(), name_c.as_ptr()) };
        if addr.is_null() {
            Err(ffi::error::error_from_sdl(self.api))
        } else {
            Ok(addr)
        }
    }

    /// Look up an exported function and cast it to `F`.
    ///
    /// # Safety
    ///
    /// `F` must be a function pointer type matching the symbol's real
    /// signature, and it must not be called after this object is dropped.
    pub unsafe fn function<F: Copy>(&self, name: &str) -> Result<F> {
        if std::mem::size_of::<F>() != std::mem::size_of::<*mut c_void>() {
            return Err(Error::InvalidArgument(
                "function type is not pointer sized".to_string(),
            ));
        }

        let addr = self.symbol(name)?;
        Ok(std::mem::transmute_copy::<*mut c_void, F>(&addr))
    }
}
