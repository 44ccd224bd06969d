//! Pixel format descriptions.

use crate::error::{Error, Result};
use crate::ffi::{self, check_resource, string_from_ptr, Api, SDL_PixelFormat};
use crate::resource::Resource;
use crate::types::{Color, PixelFormatEnum};

/// A runtime-allocated description of a pixel format.
///
/// Used to convert between colors and pixel values.
#[derive(Debug)]
pub struct PixelFormat {
    api: &'static Api,
    resource: Resource<*mut SDL_PixelFormat>,
}

/// Channel bit masks of a pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Masks {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

impl PixelFormat {
    /// Allocate a description of `format`.
    pub fn new(format: PixelFormatEnum) -> Result<Self> {
        if format == PixelFormatEnum::Unknown {
            return Err(Error::InvalidArgument("unknown pixel format".to_string()));
        }

        let api = ffi::api()?;
        let free = api.SDL_FreeFormat;
        let resource = Resource::construct(
            || unsafe { (api.SDL_AllocFormat)(format.raw()) },
            move |f| unsafe { free(f) },
        );

        Ok(Self {
            api,
            resource: check_resource(api, resource)?,
        })
    }

    fn inner(&self) -> &SDL_PixelFormat {
        // SAFETY: the resource is valid for the life of `self`.
        unsafe { &*self.resource.get() }
    }

    /// Raw format value.
    pub fn format_raw(&self) -> u32 {
        self.inner().format
    }

    /// Decoded format.
    pub fn format(&self) -> Option<PixelFormatEnum> {
        PixelFormatEnum::from_raw(self.format_raw())
    }

    /// Significant bits per pixel.
    pub fn bits_per_pixel(&self) -> u8 {
        self.inner().BitsPerPixel
    }

    /// Storage bytes per pixel.
    pub fn bytes_per_pixel(&self) -> u8 {
        self.inner().BytesPerPixel
    }

    /// Channel masks; all zero for indexed formats.
    pub fn masks(&self) -> Masks {
        let f = self.inner();
        Masks {
            r: f.Rmask,
            g: f.Gmask,
            b: f.Bmask,
            a: f.Amask,
        }
    }

    /// Pixel value closest to `color`.
    pub fn map_rgba(&self, color: Color) -> u32 {
        unsafe { (self.api.SDL_MapRGBA)(self.resource.get(), color.r, color.g, color.b, color.a) }
    }

    /// Color stored in `pixel`.
    pub fn get_rgba(&self, pixel: u32) -> Color {
        let mut c = Color::default();
        unsafe {
            (self.api.SDL_GetRGBA)(pixel, self.resource.get(), &mut c.r, &mut c.g, &mut c.b, &mut c.a);
        }
        c
    }
}

/// Human readable name of a raw pixel format, e.g. `SDL_PIXELFORMAT_RGBA8888`.
pub fn pixel_format_name(format: u32) -> Result<String> {
    let api = ffi::api()?;
    Ok(unsafe { string_from_ptr((api.SDL_GetPixelFormatName)(format)) }.unwrap_or_default())
}
