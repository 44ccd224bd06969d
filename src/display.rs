//! Video drivers, displays and display modes.
//!
//! Display queries require the video subsystem.

use std::os::raw::c_int;

use crate::error::{Error, Result};
use crate::ffi::{self, check, string_from_ptr, SDL_DisplayMode, SDL_Rect};
use crate::joystick::device_index;
use crate::surface::dimension;
use crate::types::{PixelFormatEnum, Rect};

/// Names of the video drivers compiled into the runtime.
pub fn video_drivers() -> Result<Vec<String>> {
    let api = ffi::api()?;
    let n = unsafe { (api.SDL_GetNumVideoDrivers)() };

    Ok((0..n)
        .filter_map(|i| unsafe { string_from_ptr((api.SDL_GetVideoDriver)(i)) })
        .collect())
}

/// The video driver in use, if the video subsystem is initialised.
pub fn current_video_driver() -> Result<Option<String>> {
    let api = ffi::api()?;
    Ok(unsafe { string_from_ptr((api.SDL_GetCurrentVideoDriver)()) })
}

/// Number of connected displays.
pub fn count() -> Result<u32> {
    let api = ffi::api()?;
    let n = unsafe { (api.SDL_GetNumVideoDisplays)() };
    u32::try_from(n).map_err(|_| ffi::error_from_sdl(api))
}

/// Every connected display.
pub fn displays() -> Result<Vec<Display>> {
    Ok((0..count()?).map(Display::new).collect())
}

/// A display mode: resolution, refresh rate and pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayMode {
    /// Raw pixel format value.
    pub format_raw: u32,
    pub width: u32,
    pub height: u32,
    /// Refresh rate in Hz; `0` when unspecified.
    pub refresh_rate: u32,
}

impl DisplayMode {
    /// A mode with only a size, for [`Display::closest_mode`].
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Decoded pixel format, if known.
    pub fn format(&self) -> Option<PixelFormatEnum> {
        PixelFormatEnum::from_raw(self.format_raw)
    }

    fn to_raw(self) -> Result<SDL_DisplayMode> {
        Ok(SDL_DisplayMode {
            format: self.format_raw,
            w: dimension(self.width)?,
            h: dimension(self.height)?,
            refresh_rate: dimension(self.refresh_rate)?,
            ..Default::default()
        })
    }

    fn from_raw(raw: &SDL_DisplayMode) -> Self {
        Self {
            format_raw: raw.format,
            width: raw.w.max(0) as u32,
            height: raw.h.max(0) as u32,
            refresh_rate: raw.refresh_rate.max(0) as u32,
        }
    }
}

/// Diagonal, horizontal and vertical dots per inch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dpi {
    pub diagonal: f32,
    pub horizontal: f32,
    pub vertical: f32,
}

/// A display, identified by its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Display {
    index: u32,
}

impl Display {
    /// The display at `index` (`0..count()`). Queries fail if it does not
    /// exist.
    pub fn new(index: u32) -> Self {
        Self { index }
    }

    /// Display index.
    pub fn index(&self) -> u32 {
        self.index
    }

    fn raw_index(&self) -> Result<c_int> {
        device_index(self.index)
    }

    /// Name reported by the video driver.
    pub fn name(&self) -> Result<String> {
        let api = ffi::api()?;
        let index = self.raw_index()?;
        unsafe { string_from_ptr((api.SDL_GetDisplayName)(index)) }.ok_or_else(|| ffi::error_from_sdl(api))
    }

    /// Desktop area covered by the display.
    pub fn bounds(&self) -> Result<Rect> {
        self.query_rect(|api, index, rect| unsafe { (api.SDL_GetDisplayBounds)(index, rect) })
    }

    /// Bounds minus taskbars, docks and menu bars.
    pub fn usable_bounds(&self) -> Result<Rect> {
        self.query_rect(|api, index, rect| unsafe { (api.SDL_GetDisplayUsableBounds)(index, rect) })
    }

    fn query_rect(&self, query: impl FnOnce(&ffi::Api, c_int, *mut SDL_Rect) -> c_int) -> Result<Rect> {
        let api = ffi::api()?;
        let mut rect = SDL_Rect::default();
        check(api, query(api, self.raw_index()?, &mut rect))?;
        Ok(Rect::from(rect))
    }

    /// Pixel density; many drivers cannot report it.
    pub fn dpi(&self) -> Result<Dpi> {
        let api = ffi::api()?;
        let mut dpi = Dpi::default();
        let code = unsafe {
            (api.SDL_GetDisplayDPI)(self.raw_index()?, &mut dpi.diagonal, &mut dpi.horizontal, &mut dpi.vertical)
        };
        check(api, code)?;
        Ok(dpi)
    }

    /// Every mode the display supports, best first.
    pub fn modes(&self) -> Result<Vec<DisplayMode>> {
        let api = ffi::api()?;
        let index = self.raw_index()?;
        let n = unsafe { (api.SDL_GetNumDisplayModes)(index) };
        if n < 0 {
            return Err(ffi::error_from_sdl(api));
        }

        (0..n)
            .map(|i| {
                let mut raw = SDL_DisplayMode::default();
                check(api, unsafe { (api.SDL_GetDisplayMode)(index, i, &mut raw) })?;
                Ok(DisplayMode::from_raw(&raw))
            })
            .collect()
    }

    /// The mode the desktop was in when the video subsystem started.
    pub fn desktop_mode(&self) -> Result<DisplayMode> {
        self.query_mode(|api, index, mode| unsafe { (api.SDL_GetDesktopDisplayMode)(index, mode) })
    }

    /// The mode the display is in now.
    pub fn current_mode(&self) -> Result<DisplayMode> {
        self.query_mode(|api, index, mode| unsafe { (api.SDL_GetCurrentDisplayMode)(index, mode) })
    }

    fn query_mode(&self, query: impl FnOnce(&ffi::Api, c_int, *mut SDL_DisplayMode) -> c_int) -> Result<DisplayMode> {
        let api = ffi::api()?;
        let mut raw = SDL_DisplayMode::default();
        check(api, query(api, self.raw_index()?, &mut raw))?;
        Ok(DisplayMode::from_raw(&raw))
    }

    /// The supported mode closest to `desired`. Zero fields in `desired`
    /// match anything.
    pub fn closest_mode(&self, desired: &DisplayMode) -> Result<DisplayMode> {
        let api = ffi::api()?;
        let wanted = desired.to_raw()?;
        let mut closest = SDL_DisplayMode::default();

        let found = unsafe { (api.SDL_GetClosestDisplayMode)(self.raw_index()?, &wanted, &mut closest) };
        if found.is_null() {
            return Err(Error::Sdl(format!("no display mode close to {}x{}", desired.width, desired.height)));
        }
        Ok(DisplayMode::from_raw(&closest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_raw() {
        let mode = DisplayMode {
            format_raw: 0x1616_1804,
            width: 1024,
            height: 768,
            refresh_rate: 60,
        };
        let raw = mode.to_raw().unwrap();
        assert_eq!((raw.w, raw.h, raw.refresh_rate), (1024, 768, 60));
        assert!(raw.driverdata.is_null());
        assert_eq!(DisplayMode::from_raw(&raw), mode);

        assert!(DisplayMode::with_size(u32::MAX, 1).to_raw().is_err());
    }

    #[test]
    fn test_negative_raw_fields_read_as_zero() {
        let raw = SDL_DisplayMode {
            w: -1,
            refresh_rate: -5,
            ..Default::default()
        };
        let mode = DisplayMode::from_raw(&raw);
        assert_eq!((mode.width, mode.refresh_rate), (0, 0));
    }
}
