//! GPU textures created by a [`Renderer`](crate::Renderer).

use std::marker::PhantomData;
use std::os::raw::{c_int, c_void};
use std::ptr;

use crate::error::{Error, Result};
use crate::ffi::{check, check_resource, Api, SDL_Rect, SDL_Texture};
use crate::resource::Resource;
use crate::types::{pixel_format_bytes, BlendMode, Color, PixelFormatEnum, Rect, TextureAccess};

/// Static properties of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureQuery {
    /// Raw pixel format value.
    pub format_raw: u32,
    pub format: Option<PixelFormatEnum>,
    pub access: TextureAccess,
    pub width: u32,
    pub height: u32,
}

/// A texture; it cannot outlive the renderer that created it.
#[derive(Debug)]
pub struct Texture<'r> {
    api: &'static Api,
    resource: Resource<*mut SDL_Texture>,
    _renderer: PhantomData<&'r ()>,
}

impl<'r> Texture<'r> {
    pub(crate) fn create(api: &'static Api, create: impl FnOnce() -> *mut SDL_Texture) -> Result<Self> {
        let destroy = api.SDL_DestroyTexture;
        let resource = Resource::construct(create, move |t| unsafe { destroy(t) });

        Ok(Self {
            api,
            resource: check_resource(api, resource)?,
            _renderer: PhantomData,
        })
    }

    /// The raw texture pointer.
    pub fn raw(&self) -> *mut SDL_Texture {
        self.resource.get()
    }

    /// Format, access and size.
    pub fn query(&self) -> Result<TextureQuery> {
        let mut format = 0u32;
        let (mut access, mut w, mut h): (c_int, c_int, c_int) = (0, 0, 0);

        let code = unsafe { (self.api.SDL_QueryTexture)(self.raw(), &mut format, &mut access, &mut w, &mut h) };
        check(self.api, code)?;

        Ok(TextureQuery {
            format_raw: format,
            format: PixelFormatEnum::from_raw(format),
            access: TextureAccess::from_raw(access).unwrap_or_default(),
            width: w.max(0) as u32,
            height: h.max(0) as u32,
        })
    }

    /// Multiply color channels by `color` when copying. Alpha is ignored.
    pub fn set_color_mod(&self, color: Color) -> Result<()> {
        let code = unsafe { (self.api.SDL_SetTextureColorMod)(self.raw(), color.r, color.g, color.b) };
        check(self.api, code)
    }

    /// Current color modulation.
    pub fn color_mod(&self) -> Result<Color> {
        let mut c = Color::WHITE;
        let code = unsafe { (self.api.SDL_GetTextureColorMod)(self.raw(), &mut c.r, &mut c.g, &mut c.b) };
        check(self.api, code)?;
        Ok(c)
    }

    /// Multiply alpha by `alpha / 255` when copying.
    pub fn set_alpha_mod(&self, alpha: u8) -> Result<()> {
        check(self.api, unsafe { (self.api.SDL_SetTextureAlphaMod)(self.raw(), alpha) })
    }

    /// Current alpha modulation.
    pub fn alpha_mod(&self) -> Result<u8> {
        let mut alpha = 0;
        check(self.api, unsafe { (self.api.SDL_GetTextureAlphaMod)(self.raw(), &mut alpha) })?;
        Ok(alpha)
    }

    /// Blend mode used when copying the texture.
    pub fn set_blend_mode(&self, mode: BlendMode) -> Result<()> {
        check(self.api, unsafe { (self.api.SDL_SetTextureBlendMode)(self.raw(), mode.into()) })
    }

    /// Current blend mode.
    pub fn blend_mode(&self) -> Result<BlendMode> {
        let mut raw: c_int = 0;
        check(self.api, unsafe { (self.api.SDL_GetTextureBlendMode)(self.raw(), &mut raw) })?;
        BlendMode::from_raw(raw).ok_or_else(|| Error::Sdl(format!("unknown blend mode {:#x}", raw)))
    }

    /// Replace the pixels in `rect` (or the whole texture).
    ///
    /// `pitch` is the byte length of one row in `pixels`.
    pub fn update(&self, rect: Option<Rect>, pixels: &[u8], pitch: usize) -> Result<()> {
        let query = self.query()?;
        let (w, h) = match rect {
            Some(r) => (r.w.max(0) as usize, r.h.max(0) as usize),
            None => (query.width as usize, query.height as usize),
        };

        let row = w * pixel_format_bytes(query.format_raw) as usize;
        let raw_pitch = check_pixels(pixels.len(), pitch, row, h)?;

        let raw_rect = rect.map(SDL_Rect::from);
        let rect_ptr = raw_rect.as_ref().map_or(ptr::null(), |r| r as *const SDL_Rect);

        let code = unsafe { (self.api.SDL_UpdateTexture)(self.raw(), rect_ptr, pixels.as_ptr() as *const c_void, raw_pitch) };
        check(self.api, code)
    }
}

/// Validate a pixel buffer of `len` bytes holding `rows` rows of `row`
/// bytes, `pitch` bytes apart. Returns the pitch as the runtime takes it.
fn check_pixels(len: usize, pitch: usize, row: usize, rows: usize) -> Result<c_int> {
    let raw_pitch = c_int::try_from(pitch).map_err(|_| Error::InvalidArgument(format!("pitch {} is too large", pitch)))?;
    if pitch < row {
        return Err(Error::InvalidArgument(format!("pitch {} is shorter than a row of {} bytes", pitch, row)));
    }

    let needed = match rows {
        0 => Some(0),
        n => pitch.checked_mul(n - 1).and_then(|v| v.checked_add(row)),
    };
    match needed {
        Some(needed) if len >= needed => Ok(raw_pitch),
        Some(needed) => Err(Error::InvalidArgument(format!("{} bytes of pixels, need {}", len, needed))),
        None => Err(Error::InvalidArgument(format!("{} rows of pitch {} overflow", rows, pitch))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_pixels() {
        // 4x2 RGBA
        assert!(check_pixels(32, 16, 16, 2).is_ok());
        // last row needs no padding
        assert!(check_pixels(36, 20, 16, 2).is_ok());
        assert!(check_pixels(31, 16, 16, 2).is_err());
        assert!(check_pixels(32, 8, 16, 2).is_err());
        assert!(check_pixels(0, 16, 16, 0).is_ok());
        assert_eq!(check_pixels(32, 16, 16, 2).unwrap(), 16);
    }

    #[test]
    fn test_check_pixels_huge_pitch() {
        assert!(matches!(
            check_pixels(0, usize::MAX / 2, 4, 3),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            check_pixels(usize::MAX, c_int::MAX as usize, 4, usize::MAX),
            Err(Error::InvalidArgument(_))
        ));
    }
}
