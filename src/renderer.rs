//! 2D accelerated rendering.

use std::marker::PhantomData;
use std::os::raw::c_int;
use std::ptr;

use crate::error::Result;
use crate::ffi::{self, check, check_resource, Api, SDL_Rect, SDL_Renderer, SDL_Surface};
use crate::resource::Resource;
use crate::surface::{dimension, Surface};
use crate::texture::Texture;
use crate::types::{Color, PixelFormatEnum, Point, Rect, RendererFlags, TextureAccess};
use crate::window::Window;

/// A rendering context for a window or a software surface.
///
/// The renderer borrows its target for `'a`; textures created from it borrow
/// the renderer in turn.
///
/// # Example
///
/// ```no_run
/// use sdl::{Color, Rect, Renderer, RendererFlags, Window, WindowOptions};
///
/// let window = Window::new(&WindowOptions::default())?;
/// let renderer = Renderer::for_window(&window, None, RendererFlags::ACCELERATED)?;
///
/// renderer.set_draw_color(Color::BLACK)?;
/// renderer.clear()?;
/// renderer.set_draw_color(Color::rgb(0, 128, 255))?;
/// renderer.fill_rect(Some(Rect::new(10, 10, 100, 50)))?;
/// renderer.present();
/// # Ok::<(), sdl::Error>(())
/// ```
#[derive(Debug)]
pub struct Renderer<'a> {
    api: &'static Api,
    resource: Resource<*mut SDL_Renderer>,
    _target: PhantomData<&'a ()>,
}

impl<'a> Renderer<'a> {
    /// Create a renderer for `window`.
    ///
    /// `driver` selects a rendering driver by index; `None` picks the first
    /// one supporting `flags`.
    pub fn for_window(window: &'a Window, driver: Option<u32>, flags: RendererFlags) -> Result<Self> {
        let api = ffi::api()?;
        let index = match driver {
            Some(i) => dimension(i)?,
            None => -1,
        };
        let raw_window = window.raw();

        Self::create(api, || unsafe { (api.SDL_CreateRenderer)(raw_window, index, flags.bits()) })
    }

    /// Create a software renderer drawing into `surface`.
    pub fn software(surface: &'a Surface) -> Result<Self> {
        let api = ffi::api()?;
        let raw_surface: *mut SDL_Surface = surface.raw();

        Self::create(api, || unsafe { (api.SDL_CreateSoftwareRenderer)(raw_surface) })
    }

    fn create(api: &'static Api, create: impl FnOnce() -> *mut SDL_Renderer) -> Result<Self> {
        let destroy = api.SDL_DestroyRenderer;
        let resource = Resource::construct(create, move |r| unsafe { destroy(r) });

        Ok(Self {
            api,
            resource: check_resource(api, resource)?,
            _target: PhantomData,
        })
    }
}

impl Renderer<'_> {
    /// The raw renderer pointer.
    pub fn raw(&self) -> *mut SDL_Renderer {
        self.resource.get()
    }

    /// Color used by `clear`, `fill_rect` and `draw_line`.
    pub fn set_draw_color(&self, color: Color) -> Result<()> {
        let code = unsafe { (self.api.SDL_SetRenderDrawColor)(self.raw(), color.r, color.g, color.b, color.a) };
        check(self.api, code)
    }

    /// Current draw color.
    pub fn draw_color(&self) -> Result<Color> {
        let mut c = Color::default();
        let code = unsafe { (self.api.SDL_GetRenderDrawColor)(self.raw(), &mut c.r, &mut c.g, &mut c.b, &mut c.a) };
        check(self.api, code)?;
        Ok(c)
    }

    /// Fill the whole target with the draw color.
    pub fn clear(&self) -> Result<()> {
        check(self.api, unsafe { (self.api.SDL_RenderClear)(self.raw()) })
    }

    /// Show everything drawn since the last call.
    pub fn present(&self) {
        unsafe { (self.api.SDL_RenderPresent)(self.raw()) }
    }

    /// Fill `rect` (or the whole target) with the draw color.
    pub fn fill_rect(&self, rect: Option<Rect>) -> Result<()> {
        let raw = rect.map(SDL_Rect::from);
        check(self.api, unsafe { (self.api.SDL_RenderFillRect)(self.raw(), rect_ptr(&raw)) })
    }

    /// Draw a line between two points, inclusive.
    pub fn draw_line(&self, from: Point, to: Point) -> Result<()> {
        let code = unsafe { (self.api.SDL_RenderDrawLine)(self.raw(), from.x, from.y, to.x, to.y) };
        check(self.api, code)
    }

    /// Copy part of `texture` to part of the target, scaling as needed.
    ///
    /// `None` stands for the entire texture or the entire target.
    pub fn copy(&self, texture: &Texture<'_>, src: Option<Rect>, dst: Option<Rect>) -> Result<()> {
        let (src, dst) = (src.map(SDL_Rect::from), dst.map(SDL_Rect::from));
        let code = unsafe { (self.api.SDL_RenderCopy)(self.raw(), texture.raw(), rect_ptr(&src), rect_ptr(&dst)) };
        check(self.api, code)
    }

    /// Size of the render target in pixels.
    pub fn output_size(&self) -> Result<(u32, u32)> {
        let (mut w, mut h): (c_int, c_int) = (0, 0);
        check(self.api, unsafe { (self.api.SDL_GetRendererOutputSize)(self.raw(), &mut w, &mut h) })?;
        Ok((w.max(0) as u32, h.max(0) as u32))
    }

    /// Create a texture owned by this renderer.
    pub fn create_texture(
        &self,
        format: PixelFormatEnum,
        access: TextureAccess,
        width: u32,
        height: u32,
    ) -> Result<Texture<'_>> {
        let (w, h) = (dimension(width)?, dimension(height)?);
        let (api, raw) = (self.api, self.raw());

        Texture::create(api, || unsafe { (api.SDL_CreateTexture)(raw, format.raw(), access.into(), w, h) })
    }

    /// Upload a surface into a new static texture.
    pub fn create_texture_from_surface(&self, surface: &Surface) -> Result<Texture<'_>> {
        let (api, raw) = (self.api, self.raw());
        let raw_surface = surface.raw();

        Texture::create(api, || unsafe { (api.SDL_CreateTextureFromSurface)(raw, raw_surface) })
    }
}

fn rect_ptr(rect: &Option<SDL_Rect>) -> *const SDL_Rect {
    rect.as_ref().map_or(ptr::null(), |r| r as *const SDL_Rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_ptr() {
        assert!(rect_ptr(&None).is_null());

        let rect = Some(SDL_Rect::from(Rect::new(1, 2, 3, 4)));
        let p = rect_ptr(&rect);
        assert!(!p.is_null());
        assert_eq!(unsafe { (*p).w }, 3);
    }
}
