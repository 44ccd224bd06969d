//! Force feedback devices.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::ffi::{self, check, check_resource, string_from_ptr, Api, SDL_Haptic, SDL_TRUE};
use crate::joystick::device_index;
use crate::resource::Resource;

/// Number of haptic devices.
pub fn count() -> Result<u32> {
    let api = ffi::api()?;
    let n = unsafe { (api.SDL_NumHaptics)() };
    u32::try_from(n).map_err(|_| ffi::error_from_sdl(api))
}

/// Name of the haptic device at `index`, without opening it.
pub fn name_for_index(index: u32) -> Result<String> {
    let api = ffi::api()?;
    let index = device_index(index)?;
    unsafe { string_from_ptr((api.SDL_HapticName)(index)) }.ok_or_else(|| ffi::error_from_sdl(api))
}

/// An opened haptic device. Requires the haptic subsystem.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use sdl::Haptic;
///
/// let haptic = Haptic::open(0)?;
/// if haptic.rumble_supported()? {
///     haptic.rumble_init()?;
///     haptic.rumble_play(0.5, Duration::from_millis(250))?;
/// }
/// # Ok::<(), sdl::Error>(())
/// ```
#[derive(Debug)]
pub struct Haptic {
    api: &'static Api,
    resource: Resource<*mut SDL_Haptic>,
}

impl Haptic {
    /// Open the haptic device at `index` (`0..count()`).
    pub fn open(index: u32) -> Result<Self> {
        let api = ffi::api()?;
        let index = device_index(index)?;
        let close = api.SDL_HapticClose;

        let resource = Resource::construct(
            || unsafe { (api.SDL_HapticOpen)(index) },
            move |h| unsafe { close(h) },
        );

        Ok(Self {
            api,
            resource: check_resource(api, resource)?,
        })
    }

    /// The raw haptic pointer.
    pub fn raw(&self) -> *mut SDL_Haptic {
        self.resource.get()
    }

    /// Number of axes the device can drive.
    pub fn num_axes(&self) -> Result<u32> {
        let n = unsafe { (self.api.SDL_HapticNumAxes)(self.raw()) };
        u32::try_from(n).map_err(|_| ffi::error_from_sdl(self.api))
    }

    /// Whether simple rumble playback is available.
    pub fn rumble_supported(&self) -> Result<bool> {
        let code = unsafe { (self.api.SDL_HapticRumbleSupported)(self.raw()) };
        check(self.api, code)?;
        Ok(code == SDL_TRUE)
    }

    /// Prepare the device for simple rumble playback.
    pub fn rumble_init(&self) -> Result<()> {
        check(self.api, unsafe { (self.api.SDL_HapticRumbleInit)(self.raw()) })
    }

    /// Rumble at `strength` (0.0 to 1.0) for `length`.
    pub fn rumble_play(&self, strength: f32, length: Duration) -> Result<()> {
        let ms = rumble_millis(strength, length)?;
        check(self.api, unsafe { (self.api.SDL_HapticRumblePlay)(self.raw(), strength, ms) })
    }

    /// Stop a rumble started with [`rumble_play`](Self::rumble_play).
    pub fn rumble_stop(&self) -> Result<()> {
        check(self.api, unsafe { (self.api.SDL_HapticRumbleStop)(self.raw()) })
    }
}

/// Validate a rumble strength and clamp its length to what the runtime takes.
fn rumble_millis(strength: f32, length: Duration) -> Result<u32> {
    if !(0.0..=1.0).contains(&strength) {
        return Err(Error::InvalidArgument(format!("rumble strength {} outside 0.0..=1.0", strength)));
    }
    Ok(u32::try_from(length.as_millis()).unwrap_or(u32::MAX))
}
