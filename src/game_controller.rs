//! Game controllers: joysticks with a known button layout.
//!
//! A mapping database translates raw joystick axes and buttons into the
//! fixed [`GameControllerAxis`] and [`GameControllerButton`] layout.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::ffi::{
    self, check, check_resource, string_from_ptr, take_string, to_cstring, Api, SDL_GameController, SDL_TRUE,
};
use crate::joystick::device_index;
use crate::resource::Resource;

/// Analog inputs of a game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameControllerAxis {
    LeftX,
    LeftY,
    RightX,
    RightY,
    TriggerLeft,
    TriggerRight,
}

/// Buttons of a game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameControllerButton {
    A,
    B,
    X,
    Y,
    Back,
    Guide,
    Start,
    LeftStick,
    RightStick,
    LeftShoulder,
    RightShoulder,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
}

impl From<GameControllerAxis> for i32 {
    fn from(axis: GameControllerAxis) -> i32 {
        axis as i32
    }
}

impl From<GameControllerButton> for i32 {
    fn from(button: GameControllerButton) -> i32 {
        button as i32
    }
}

impl GameControllerAxis {
    /// Name used for this axis in mapping strings (e.g. `"leftx"`).
    pub fn name(self) -> Result<String> {
        let api = ffi::api()?;
        unsafe { string_from_ptr((api.SDL_GameControllerGetStringForAxis)(self.into())) }
            .ok_or_else(|| ffi::error_from_sdl(api))
    }
}

impl GameControllerButton {
    /// Name used for this button in mapping strings (e.g. `"a"`).
    pub fn name(self) -> Result<String> {
        let api = ffi::api()?;
        unsafe { string_from_ptr((api.SDL_GameControllerGetStringForButton)(self.into())) }
            .ok_or_else(|| ffi::error_from_sdl(api))
    }
}

/// Whether the joystick at `index` has a controller mapping.
pub fn is_game_controller(index: u32) -> Result<bool> {
    let api = ffi::api()?;
    let index = device_index(index)?;
    Ok(unsafe { (api.SDL_IsGameController)(index) } == SDL_TRUE)
}

/// Controller name of the joystick at `index`, without opening it.
pub fn name_for_index(index: u32) -> Result<String> {
    let api = ffi::api()?;
    let index = device_index(index)?;
    unsafe { string_from_ptr((api.SDL_GameControllerNameForIndex)(index)) }.ok_or_else(|| ffi::error_from_sdl(api))
}

/// Add or replace a mapping (`"GUID,name,a:b0,b:b1,..."`).
///
/// Returns `true` when the mapping was new and `false` when it replaced an
/// existing one.
pub fn add_mapping(mapping: &str) -> Result<bool> {
    let api = ffi::api()?;
    let mapping = to_cstring("mapping", mapping)?;
    let code = unsafe { (api.SDL_GameControllerAddMapping)(mapping.as_ptr()) };
    check(api, code)?;
    Ok(code == 1)
}

/// An opened game controller. Requires the game controller subsystem.
///
/// # Example
///
/// ```no_run
/// use sdl::{GameController, GameControllerButton, InitFlags, Subsystem};
///
/// let _controllers = Subsystem::init(InitFlags::GAMECONTROLLER)?;
/// for index in 0..sdl::joystick::count()? {
///     if sdl::game_controller::is_game_controller(index)? {
///         let pad = GameController::open(index)?;
///         println!("{}: A held = {}", pad.name().unwrap_or_default(), pad.button(GameControllerButton::A));
///     }
/// }
/// # Ok::<(), sdl::Error>(())
/// ```
#[derive(Debug)]
pub struct GameController {
    api: &'static Api,
    resource: Resource<*mut SDL_GameController>,
}

impl GameController {
    /// Open the joystick at device `index` as a game controller.
    pub fn open(index: u32) -> Result<Self> {
        let api = ffi::api()?;
        let index = device_index(index)?;
        let close = api.SDL_GameControllerClose;

        let resource = Resource::construct(
            || unsafe { (api.SDL_GameControllerOpen)(index) },
            move |c| unsafe { close(c) },
        );

        Ok(Self {
            api,
            resource: check_resource(api, resource)?,
        })
    }

    /// View an already opened controller by joystick instance id.
    ///
    /// The view never closes the controller.
    ///
    /// # Safety
    ///
    /// The controller must stay open for as long as the view is used.
    pub unsafe fn from_instance_id(instance_id: i32) -> Result<Self> {
        let api = ffi::api()?;
        let raw = (api.SDL_GameControllerFromInstanceID)(instance_id);
        if raw.is_null() {
            return Err(Error::InvalidArgument(format!("no open controller with instance id {}", instance_id)));
        }

        Ok(Self {
            api,
            resource: Resource::borrowed(raw),
        })
    }

    /// The raw controller pointer.
    pub fn raw(&self) -> *mut SDL_GameController {
        self.resource.get()
    }

    /// Whether dropping this value closes the controller.
    pub fn is_owning(&self) -> bool {
        self.resource.is_owning()
    }

    /// Name from the controller's mapping.
    pub fn name(&self) -> Option<String> {
        unsafe { string_from_ptr((self.api.SDL_GameControllerName)(self.raw())) }
    }

    /// The mapping string in use for this controller.
    pub fn mapping(&self) -> Option<String> {
        unsafe { take_string(self.api, (self.api.SDL_GameControllerMapping)(self.raw())) }
    }

    /// Whether the controller is still connected.
    pub fn is_attached(&self) -> bool {
        unsafe { (self.api.SDL_GameControllerGetAttached)(self.raw()) == SDL_TRUE }
    }

    /// Instance id of the underlying joystick.
    pub fn instance_id(&self) -> Result<i32> {
        let joystick = unsafe { (self.api.SDL_GameControllerGetJoystick)(self.raw()) };
        if joystick.is_null() {
            return Err(ffi::error_from_sdl(self.api));
        }

        let id = unsafe { (self.api.SDL_JoystickInstanceID)(joystick) };
        if id < 0 {
            return Err(ffi::error_from_sdl(self.api));
        }
        Ok(id)
    }

    /// Position of `axis`. Sticks range over -32768 to 32767, triggers over
    /// 0 to 32767.
    pub fn axis(&self, axis: GameControllerAxis) -> i16 {
        unsafe { (self.api.SDL_GameControllerGetAxis)(self.raw(), axis.into()) }
    }

    /// Whether `button` is held down.
    pub fn button(&self, button: GameControllerButton) -> bool {
        unsafe { (self.api.SDL_GameControllerGetButton)(self.raw(), button.into()) != 0 }
    }

    /// Rumble both motors for `length`; a later call replaces this one.
    pub fn rumble(&self, low_frequency: u16, high_frequency: u16, length: Duration) -> Result<()> {
        let ms = u32::try_from(length.as_millis()).unwrap_or(u32::MAX);
        let code = unsafe { (self.api.SDL_GameControllerRumble)(self.raw(), low_frequency, high_frequency, ms) };
        check(self.api, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_values() {
        assert_eq!(i32::from(GameControllerAxis::LeftX), 0);
        assert_eq!(i32::from(GameControllerAxis::TriggerRight), 5);
        assert_eq!(i32::from(GameControllerButton::A), 0);
        assert_eq!(i32::from(GameControllerButton::Start), 6);
        assert_eq!(i32::from(GameControllerButton::DpadRight), 14);
    }
}
