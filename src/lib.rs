//! RAII bindings for the SDL2 multimedia library.
//!
//! Every object the runtime hands out (windows, renderers, textures,
//! cursors, controllers, audio devices, ...) is owned by a [`Resource`], a move-only
//! value that pairs the raw handle with the function releasing it. Dropping
//! the wrapper releases the object exactly once.
//!
//! SDL2 is loaded at run time; see [`ffi::LoaderOptions`] and the
//! `SDL2_WRAPPER_LIBRARY` environment variable.
//!
//! # Example
//!
//! ```no_run
//! use sdl::{Color, InitFlags, Rect, Renderer, RendererFlags, Subsystem, Window, WindowOptions};
//!
//! fn main() -> sdl::Result<()> {
//!     println!("SDL {}", sdl::linked_version()?);
//!
//!     let _video = Subsystem::init(InitFlags::VIDEO)?;
//!
//!     let window = Window::new(&WindowOptions {
//!         title: "hello".to_string(),
//!         ..Default::default()
//!     })?;
//!     let renderer = Renderer::for_window(&window, None, RendererFlags::empty())?;
//!
//!     renderer.set_draw_color(Color::rgb(32, 32, 32))?;
//!     renderer.clear()?;
//!     renderer.set_draw_color(Color::WHITE)?;
//!     renderer.fill_rect(Some(Rect::new(100, 100, 200, 120)))?;
//!     renderer.present();
//!
//!     sdl::timer::delay(std::time::Duration::from_secs(1))?;
//!
//!     // renderer, window and the video subsystem are released here,
//!     // in reverse order
//!     Ok(())
//! }
//! ```

pub mod audio;
pub mod cursor;
pub mod display;
pub mod error;
pub mod ffi;
pub mod file;
pub mod game_controller;
pub mod haptic;
pub mod joystick;
pub mod object;
pub mod palette;
pub mod pixel_format;
pub mod renderer;
pub mod resource;
pub mod subsystem;
pub mod surface;
pub mod system;
pub mod texture;
pub mod timer;
pub mod types;
pub mod wav;
pub mod window;

// Re-export main types at the crate root
pub use audio::{AudioDevice, AudioLockGuard};
pub use cursor::{Cursor, SystemCursor};
pub use display::{Display, DisplayMode};
pub use error::{Error, Result};
pub use ffi::{is_available, LoaderOptions};
pub use file::File;
pub use game_controller::{GameController, GameControllerAxis, GameControllerButton};
pub use haptic::Haptic;
pub use joystick::Joystick;
pub use object::SharedObject;
pub use palette::Palette;
pub use pixel_format::{Masks, PixelFormat};
pub use renderer::Renderer;
pub use resource::{RawHandle, Resource};
pub use subsystem::{init, init_subsystem, quit, quit_subsystem, was_init, Subsystem};
pub use surface::{Surface, SurfaceRef};
pub use texture::{Texture, TextureQuery};
pub use types::{
    AllowedChanges, AudioFormat, AudioSpec, AudioStatus, BlendMode, Color, InitFlags, PixelFormatEnum, Point,
    Rect, RendererFlags, SeekWhence, TextureAccess, Version, WindowFlags, WindowOptions, WindowPosition,
};
pub use wav::Wav;
pub use window::Window;

/// The runtime's last error message for the calling thread.
pub fn last_error() -> Result<String> {
    let api = ffi::api()?;
    Ok(ffi::last_error(api))
}

/// Clear the runtime's last error message.
pub fn clear_error() {
    if let Ok(api) = ffi::api() {
        unsafe { (api.SDL_ClearError)() }
    }
}

/// Set a configuration hint (e.g. `"SDL_RENDER_SCALE_QUALITY"`).
///
/// Returns `Ok(false)` when the runtime refused the hint because it was
/// overridden from the environment.
pub fn set_hint(name: &str, value: &str) -> Result<bool> {
    let api = ffi::api()?;
    let name = ffi::to_cstring("hint name", name)?;
    let value = ffi::to_cstring("hint value", value)?;
    Ok(unsafe { (api.SDL_SetHint)(name.as_ptr(), value.as_ptr()) } == ffi::SDL_TRUE)
}

/// Current value of a configuration hint.
pub fn hint(name: &str) -> Result<Option<String>> {
    let api = ffi::api()?;
    let name = ffi::to_cstring("hint name", name)?;
    Ok(unsafe { ffi::string_from_ptr((api.SDL_GetHint)(name.as_ptr())) })
}

/// Version of the SDL2 library that was loaded.
pub fn linked_version() -> Result<Version> {
    let api = ffi::api()?;
    let mut v = ffi::SDL_version::default();
    unsafe { (api.SDL_GetVersion)(&mut v) };

    Ok(Version {
        major: v.major,
        minor: v.minor,
        patch: v.patch,
    })
}

/// Source revision the loaded library was built from.
pub fn revision() -> Result<String> {
    let api = ffi::api()?;
    Ok(unsafe { ffi::string_from_ptr((api.SDL_GetRevision)()) }.unwrap_or_default())
}
