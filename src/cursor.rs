//! Mouse cursors.

use std::os::raw::c_int;

use crate::error::{Error, Result};
use crate::ffi::{self, check_resource, Api, SDL_Cursor, SDL_DISABLE, SDL_ENABLE, SDL_QUERY};
use crate::resource::Resource;
use crate::surface::{dimension, Surface};

/// Cursors provided by the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemCursor {
    Arrow,
    IBeam,
    Wait,
    Crosshair,
    /// Small wait cursor, or `Wait` when unavailable.
    WaitArrow,
    /// Double arrow pointing northwest and southeast.
    SizeNwse,
    /// Double arrow pointing northeast and southwest.
    SizeNesw,
    SizeWe,
    SizeNs,
    /// Four pointed arrow.
    SizeAll,
    /// Slashed circle or crossbones.
    No,
    Hand,
}

impl From<SystemCursor> for i32 {
    fn from(cursor: SystemCursor) -> i32 {
        cursor as i32
    }
}

/// A mouse cursor.
///
/// Freed when dropped; if it is the active cursor the runtime falls back to
/// the default one.
///
/// # Example
///
/// ```no_run
/// use sdl::{Cursor, SystemCursor};
///
/// let hand = Cursor::system(SystemCursor::Hand)?;
/// hand.set_active();
/// # Ok::<(), sdl::Error>(())
/// ```
#[derive(Debug)]
pub struct Cursor {
    api: &'static Api,
    resource: Resource<*mut SDL_Cursor>,
}

impl Cursor {
    /// Create a monochrome cursor.
    ///
    /// `data` and `mask` hold one bit per pixel, most significant bit first,
    /// `width / 8` bytes per row. `width` must be a multiple of 8.
    pub fn new(data: &[u8], mask: &[u8], width: u32, height: u32, hot_x: u32, hot_y: u32) -> Result<Self> {
        let needed = bitmap_len(width, height)?;
        if data.len() != needed || mask.len() != needed {
            return Err(Error::InvalidArgument(format!(
                "cursor bitmaps must be {} bytes, got data {} and mask {}",
                needed,
                data.len(),
                mask.len()
            )));
        }
        let (w, h) = (dimension(width)?, dimension(height)?);
        let (x, y) = hot_spot(width, height, hot_x, hot_y)?;

        let api = ffi::api()?;
        Self::create(api, || unsafe { (api.SDL_CreateCursor)(data.as_ptr(), mask.as_ptr(), w, h, x, y) })
    }

    /// Create a color cursor from a surface. The surface may be dropped
    /// afterwards.
    pub fn from_surface(surface: &Surface, hot_x: u32, hot_y: u32) -> Result<Self> {
        let (x, y) = hot_spot(surface.width(), surface.height(), hot_x, hot_y)?;
        let api = ffi::api()?;
        Self::create(api, || unsafe { (api.SDL_CreateColorCursor)(surface.raw(), x, y) })
    }

    /// Load one of the system cursors. Not every video driver has them.
    pub fn system(cursor: SystemCursor) -> Result<Self> {
        let api = ffi::api()?;
        Self::create(api, || unsafe { (api.SDL_CreateSystemCursor)(cursor.into()) })
    }

    fn create(api: &'static Api, create: impl FnOnce() -> *mut SDL_Cursor) -> Result<Self> {
        let free = api.SDL_FreeCursor;
        let resource = Resource::construct(create, move |c| unsafe { free(c) });

        Ok(Self {
            api,
            resource: check_resource(api, resource)?,
        })
    }

    /// The raw cursor pointer.
    pub fn raw(&self) -> *mut SDL_Cursor {
        self.resource.get()
    }

    /// Make this the active cursor.
    pub fn set_active(&self) {
        unsafe { (self.api.SDL_SetCursor)(self.raw()) }
    }

    /// Whether this is the active cursor.
    pub fn is_active(&self) -> bool {
        unsafe { (self.api.SDL_GetCursor)() == self.raw() }
    }
}

/// Restore the system's default cursor.
pub fn set_default() -> Result<()> {
    let api = ffi::api()?;
    unsafe { (api.SDL_SetCursor)((api.SDL_GetDefaultCursor)()) };
    Ok(())
}

/// Show or hide the cursor; returns whether it was shown before.
pub fn show_cursor(show: bool) -> Result<bool> {
    toggle(if show { SDL_ENABLE } else { SDL_DISABLE })
}

/// Whether the cursor is shown.
pub fn is_cursor_shown() -> Result<bool> {
    toggle(SDL_QUERY)
}

fn toggle(value: c_int) -> Result<bool> {
    let api = ffi::api()?;
    let state = unsafe { (api.SDL_ShowCursor)(value) };
    ffi::check(api, state)?;
    Ok(state == SDL_ENABLE)
}

fn bitmap_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 || width % 8 != 0 {
        return Err(Error::InvalidArgument(format!(
            "cursor size {}x{} must be non-zero with a width divisible by 8",
            width, height
        )));
    }
    (width as usize / 8)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::InvalidArgument(format!("cursor size {}x{} is too large", width, height)))
}

fn hot_spot(width: u32, height: u32, hot_x: u32, hot_y: u32) -> Result<(c_int, c_int)> {
    if hot_x >= width || hot_y >= height {
        return Err(Error::InvalidArgument(format!(
            "hot spot ({}, {}) outside a {}x{} cursor",
            hot_x, hot_y, width, height
        )));
    }
    Ok((dimension(hot_x)?, dimension(hot_y)?))
}
