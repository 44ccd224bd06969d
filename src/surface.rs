//! Software pixel surfaces.

use std::marker::PhantomData;
use std::ops::Deref;
use std::ptr;

use crate::error::{Error, Result};
use crate::ffi::{self, check, check_resource, Api, SDL_Surface};
use crate::file::File;
use crate::palette::Palette;
use crate::resource::Resource;
use crate::types::{pixel_format_bits, Color, PixelFormatEnum, Rect};

/// A block of pixels in system memory.
///
/// # Example
///
/// ```no_run
/// use sdl::{Color, PixelFormatEnum, Rect, Surface};
///
/// let surface = Surface::new(64, 64, PixelFormatEnum::Rgba8888)?;
/// surface.fill_rect(Some(Rect::new(0, 0, 32, 32)), Color::rgb(255, 0, 0))?;
/// surface.save_bmp("/tmp/red.bmp")?;
/// # Ok::<(), sdl::Error>(())
/// ```
#[derive(Debug)]
pub struct Surface {
    api: &'static Api,
    resource: Resource<*mut SDL_Surface>,
}

impl Surface {
    /// Allocate a surface with the given size and pixel format.
    pub fn new(width: u32, height: u32, format: PixelFormatEnum) -> Result<Self> {
        let api = ffi::api()?;
        let (w, h) = (dimension(width)?, dimension(height)?);
        let depth = i32::from(format.bits_per_pixel());

        Self::create(api, || unsafe {
            (api.SDL_CreateRGBSurfaceWithFormat)(0, w, h, depth, format.raw())
        })
    }

    /// Load a Windows BMP file.
    pub fn load_bmp(path: &str) -> Result<Self> {
        let file = File::open(path, "rb")?;
        let api = ffi::api()?;

        // The runtime closes the stream (freesrc = 1)
        let rw = file.into_raw();
        Self::create(api, || unsafe { (api.SDL_LoadBMP_RW)(rw, 1) })
    }

    fn create(api: &'static Api, create: impl FnOnce() -> *mut SDL_Surface) -> Result<Self> {
        let free = api.SDL_FreeSurface;
        let resource = Resource::construct(create, move |s| unsafe { free(s) });

        Ok(Self {
            api,
            resource: check_resource(api, resource)?,
        })
    }

    /// Wrap a surface owned by the runtime (e.g. a window surface).
    pub(crate) fn borrowed(api: &'static Api, raw: *mut SDL_Surface) -> Self {
        Self {
            api,
            resource: Resource::borrowed(raw),
        }
    }

    /// Write the surface as a Windows BMP file.
    pub fn save_bmp(&self, path: &str) -> Result<()> {
        let file = File::open(path, "wb")?;
        let rw = file.into_raw();
        let code = unsafe { (self.api.SDL_SaveBMP_RW)(self.raw(), rw, 1) };
        check(self.api, code)
    }

    /// The raw surface pointer.
    pub fn raw(&self) -> *mut SDL_Surface {
        self.resource.get()
    }

    fn inner(&self) -> &SDL_Surface {
        // SAFETY: the resource is valid for the life of `self`.
        unsafe { &*self.resource.get() }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.inner().w as u32
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.inner().h as u32
    }

    /// Bytes per row, including padding.
    pub fn pitch(&self) -> u32 {
        self.inner().pitch as u32
    }

    /// Raw pixel format value.
    pub fn format_raw(&self) -> u32 {
        let format = self.inner().format;
        if format.is_null() {
            0
        } else {
            unsafe { (*format).format }
        }
    }

    /// Pixel format, if it is one of the well-known formats.
    pub fn format(&self) -> Option<PixelFormatEnum> {
        PixelFormatEnum::from_raw(self.format_raw())
    }

    /// Map a color to a pixel value in this surface's format.
    pub fn map_color(&self, color: Color) -> u32 {
        unsafe { (self.api.SDL_MapRGBA)(self.inner().format, color.r, color.g, color.b, color.a) }
    }

    /// Fill `rect` (or the whole surface) with `color`.
    pub fn fill_rect(&self, rect: Option<Rect>, color: Color) -> Result<()> {
        let raw_rect = rect.map(ffi::SDL_Rect::from);
        let rect_ptr = raw_rect.as_ref().map_or(ptr::null(), |r| r as *const ffi::SDL_Rect);
        let pixel = self.map_color(color);

        let code = unsafe { (self.api.SDL_FillRect)(self.raw(), rect_ptr, pixel) };
        check(self.api, code)
    }

    /// Attach a palette to an indexed surface.
    pub fn set_palette(&self, palette: &Palette) -> Result<()> {
        let code = unsafe { (self.api.SDL_SetSurfacePalette)(self.raw(), palette.raw()) };
        check(self.api, code)
    }

    /// Copy the surface into a new one with a different pixel format.
    pub fn convert(&self, format: PixelFormatEnum) -> Result<Surface> {
        let api = self.api;
        let raw = self.raw();
        Self::create(api, || unsafe { (api.SDL_ConvertSurfaceFormat)(raw, format.raw(), 0) })
    }

    /// Lock the surface and give `f` access to its pixel rows.
    pub fn with_lock<R>(&mut self, f: impl FnOnce(&mut [u8]) -> R) -> Result<R> {
        let raw = self.raw();
        check(self.api, unsafe { (self.api.SDL_LockSurface)(raw) })?;

        let surface = self.inner();
        let len = surface.pitch as usize * surface.h as usize;
        let pixels = surface.pixels as *mut u8;

        let result = if pixels.is_null() {
            Err(Error::InvalidHandle)
        } else {
            // SAFETY: the surface is locked and owns `pitch * h` bytes.
            let slice = unsafe { std::slice::from_raw_parts_mut(pixels, len) };
            Ok(f(slice))
        };

        unsafe { (self.api.SDL_UnlockSurface)(raw) };
        result
    }

    /// Bits per pixel of the surface's format.
    pub fn bits_per_pixel(&self) -> u8 {
        pixel_format_bits(self.format_raw())
    }
}

/// A surface owned by another object, valid while that object is borrowed.
#[derive(Debug)]
pub struct SurfaceRef<'a> {
    surface: Surface,
    _owner: PhantomData<&'a ()>,
}

impl SurfaceRef<'_> {
    pub(crate) fn new(surface: Surface) -> Self {
        Self {
            surface,
            _owner: PhantomData,
        }
    }
}

impl Deref for SurfaceRef<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.surface
    }
}

pub(crate) fn dimension(value: u32) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::InvalidArgument(format!("dimension {} is too large", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_limits() {
        assert_eq!(dimension(640).unwrap(), 640);
        assert!(dimension(u32::MAX).is_err());
    }
}
