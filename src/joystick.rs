//! Joystick enumeration and state.

use std::os::raw::c_int;

use crate::error::{Error, Result};
use crate::ffi::{self, check_resource, string_from_ptr, Api, SDL_Joystick, SDL_TRUE};
use crate::resource::Resource;

/// Number of attached joysticks.
pub fn count() -> Result<u32> {
    let api = ffi::api()?;
    let n = unsafe { (api.SDL_NumJoysticks)() };
    u32::try_from(n).map_err(|_| ffi::error_from_sdl(api))
}

/// Name of the joystick at `index`, without opening it.
pub fn name_for_index(index: u32) -> Result<String> {
    let api = ffi::api()?;
    let index = device_index(index)?;
    unsafe { string_from_ptr((api.SDL_JoystickNameForIndex)(index)) }.ok_or_else(|| ffi::error_from_sdl(api))
}

/// An opened joystick. Requires the joystick subsystem.
#[derive(Debug)]
pub struct Joystick {
    api: &'static Api,
    resource: Resource<*mut SDL_Joystick>,
}

impl Joystick {
    /// Open the joystick at device `index` (`0..count()`).
    pub fn open(index: u32) -> Result<Self> {
        let api = ffi::api()?;
        let index = device_index(index)?;
        let close = api.SDL_JoystickClose;

        let resource = Resource::construct(
            || unsafe { (api.SDL_JoystickOpen)(index) },
            move |j| unsafe { close(j) },
        );

        Ok(Self {
            api,
            resource: check_resource(api, resource)?,
        })
    }

    /// The raw joystick pointer.
    pub fn raw(&self) -> *mut SDL_Joystick {
        self.resource.get()
    }

    /// Implementation-dependent device name, if the driver reports one.
    pub fn name(&self) -> Option<String> {
        unsafe { string_from_ptr((self.api.SDL_JoystickName)(self.raw())) }
    }

    /// Instance id used in joystick events; stable while attached.
    pub fn instance_id(&self) -> Result<i32> {
        let id = unsafe { (self.api.SDL_JoystickInstanceID)(self.raw()) };
        if id < 0 {
            return Err(ffi::error_from_sdl(self.api));
        }
        Ok(id)
    }

    /// Number of analog axes.
    pub fn num_axes(&self) -> Result<u32> {
        self.count_of(self.api.SDL_JoystickNumAxes)
    }

    /// Number of buttons.
    pub fn num_buttons(&self) -> Result<u32> {
        self.count_of(self.api.SDL_JoystickNumButtons)
    }

    /// Number of POV hats.
    pub fn num_hats(&self) -> Result<u32> {
        self.count_of(self.api.SDL_JoystickNumHats)
    }

    fn count_of(&self, query: unsafe extern "C" fn(*mut SDL_Joystick) -> c_int) -> Result<u32> {
        let n = unsafe { query(self.raw()) };
        u32::try_from(n).map_err(|_| ffi::error_from_sdl(self.api))
    }

    /// Position of `axis`, from -32768 to 32767.
    pub fn axis(&self, axis: u32) -> Result<i16> {
        let axis = self.checked(axis, self.num_axes()?, "axis")?;
        Ok(unsafe { (self.api.SDL_JoystickGetAxis)(self.raw(), axis) })
    }

    /// Whether `button` is held down.
    pub fn button(&self, button: u32) -> Result<bool> {
        let button = self.checked(button, self.num_buttons()?, "button")?;
        Ok(unsafe { (self.api.SDL_JoystickGetButton)(self.raw(), button) } != 0)
    }

    /// Whether the joystick has force feedback.
    pub fn is_haptic(&self) -> bool {
        unsafe { (self.api.SDL_JoystickIsHaptic)(self.raw()) == SDL_TRUE }
    }

    fn checked(&self, index: u32, len: u32, what: &str) -> Result<c_int> {
        if index >= len {
            return Err(Error::InvalidArgument(format!("{} {} out of range (0..{})", what, index, len)));
        }
        device_index(index)
    }
}

pub(crate) fn device_index(index: u32) -> Result<c_int> {
    c_int::try_from(index).map_err(|_| Error::InvalidArgument(format!("index {} is too large", index)))
}
