//! Top-level windows.

use std::os::raw::c_int;

use crate::error::{Error, Result};
use crate::ffi::{self, check, check_resource, sdl_bool, string_from_ptr, to_cstring, Api, SDL_Window};
use crate::resource::Resource;
use crate::surface::{dimension, Surface, SurfaceRef};
use crate::types::{PixelFormatEnum, Point, WindowFlags, WindowOptions, WindowPosition};

/// An operating system window.
///
/// Destroyed when dropped. Renderers and the window surface borrow the
/// window and cannot outlive it.
///
/// # Example
///
/// ```no_run
/// use sdl::{InitFlags, Subsystem, Window, WindowFlags, WindowOptions};
///
/// let _video = Subsystem::init(InitFlags::VIDEO)?;
/// let window = Window::new(&WindowOptions {
///     title: "sandbox".to_string(),
///     flags: WindowFlags::RESIZABLE,
///     ..Default::default()
/// })?;
///
/// window.set_minimum_size(320, 240)?;
/// println!("window {} is {:?}", window.id(), window.size());
/// # Ok::<(), sdl::Error>(())
/// ```
#[derive(Debug)]
pub struct Window {
    api: &'static Api,
    resource: Resource<*mut SDL_Window>,
}

impl Window {
    /// Create a window.
    pub fn new(options: &WindowOptions) -> Result<Self> {
        let api = ffi::api()?;
        let title = to_cstring("title", &options.title)?;
        let (w, h) = (dimension(options.width)?, dimension(options.height)?);
        let (x, y) = (i32::from(options.x), i32::from(options.y));
        let destroy = api.SDL_DestroyWindow;

        let resource = Resource::construct(
            || unsafe { (api.SDL_CreateWindow)(title.as_ptr(), x, y, w, h, options.flags.bits()) },
            move |window| unsafe { destroy(window) },
        );

        let resource = check_resource(api, resource)?;
        log::debug!("created window {:?} ({}x{})", options.title, w, h);

        Ok(Self { api, resource })
    }

    /// The raw window pointer.
    pub fn raw(&self) -> *mut SDL_Window {
        self.resource.get()
    }

    /// Numeric window identifier, as seen in window events.
    pub fn id(&self) -> u32 {
        unsafe { (self.api.SDL_GetWindowID)(self.raw()) }
    }

    /// Current window flags.
    pub fn flags(&self) -> WindowFlags {
        WindowFlags::from_bits_retain(unsafe { (self.api.SDL_GetWindowFlags)(self.raw()) })
    }

    /// Pixel format of the window's framebuffer.
    pub fn pixel_format(&self) -> Option<PixelFormatEnum> {
        PixelFormatEnum::from_raw(unsafe { (self.api.SDL_GetWindowPixelFormat)(self.raw()) })
    }

    /// Index of the display containing the window center.
    pub fn display_index(&self) -> Result<u32> {
        let index = unsafe { (self.api.SDL_GetWindowDisplayIndex)(self.raw()) };
        u32::try_from(index).map_err(|_| ffi::error_from_sdl(self.api))
    }

    /// Window title; empty when none was set.
    pub fn title(&self) -> String {
        unsafe { string_from_ptr((self.api.SDL_GetWindowTitle)(self.raw())) }.unwrap_or_default()
    }

    /// Change the title. Fails if `title` contains a NUL byte.
    pub fn set_title(&self, title: &str) -> Result<()> {
        let title = to_cstring("title", title)?;
        unsafe { (self.api.SDL_SetWindowTitle)(self.raw(), title.as_ptr()) };
        Ok(())
    }

    /// Set the window icon.
    pub fn set_icon(&self, icon: &Surface) {
        unsafe { (self.api.SDL_SetWindowIcon)(self.raw(), icon.raw()) }
    }

    /// Top-left corner in screen coordinates.
    pub fn position(&self) -> Point {
        let mut p = Point::default();
        unsafe { (self.api.SDL_GetWindowPosition)(self.raw(), &mut p.x, &mut p.y) };
        p
    }

    /// Move the window; either axis may be centered or left undefined.
    pub fn set_position(&self, x: WindowPosition, y: WindowPosition) {
        unsafe { (self.api.SDL_SetWindowPosition)(self.raw(), x.into(), y.into()) }
    }

    /// Client area size in screen coordinates.
    pub fn size(&self) -> (u32, u32) {
        self.query_size(self.api.SDL_GetWindowSize)
    }

    /// Resize the client area. Both sides must be non-zero.
    pub fn set_size(&self, width: u32, height: u32) -> Result<()> {
        let (w, h) = checked_size(width, height)?;
        unsafe { (self.api.SDL_SetWindowSize)(self.raw(), w, h) };
        Ok(())
    }

    /// Current minimum size; `(0, 0)` when unconstrained.
    pub fn minimum_size(&self) -> (u32, u32) {
        self.query_size(self.api.SDL_GetWindowMinimumSize)
    }

    /// Smallest size the user may resize the window to.
    pub fn set_minimum_size(&self, width: u32, height: u32) -> Result<()> {
        let (w, h) = checked_size(width, height)?;
        unsafe { (self.api.SDL_SetWindowMinimumSize)(self.raw(), w, h) };
        Ok(())
    }

    /// Current maximum size; `(0, 0)` when unconstrained.
    pub fn maximum_size(&self) -> (u32, u32) {
        self.query_size(self.api.SDL_GetWindowMaximumSize)
    }

    /// Largest size the user may resize the window to.
    pub fn set_maximum_size(&self, width: u32, height: u32) -> Result<()> {
        let (w, h) = checked_size(width, height)?;
        unsafe { (self.api.SDL_SetWindowMaximumSize)(self.raw(), w, h) };
        Ok(())
    }

    fn query_size(&self, query: unsafe extern "C" fn(*mut SDL_Window, *mut c_int, *mut c_int)) -> (u32, u32) {
        let (mut w, mut h) = (0, 0);
        unsafe { query(self.raw(), &mut w, &mut h) };
        (w.max(0) as u32, h.max(0) as u32)
    }

    /// Add or remove the window decorations.
    pub fn set_bordered(&self, bordered: bool) {
        unsafe { (self.api.SDL_SetWindowBordered)(self.raw(), sdl_bool(bordered)) }
    }

    /// Allow or forbid resizing by the user.
    pub fn set_resizable(&self, resizable: bool) {
        unsafe { (self.api.SDL_SetWindowResizable)(self.raw(), sdl_bool(resizable)) }
    }

    /// Make a hidden window visible.
    pub fn show(&self) {
        unsafe { (self.api.SDL_ShowWindow)(self.raw()) }
    }

    /// Hide the window without destroying it.
    pub fn hide(&self) {
        unsafe { (self.api.SDL_HideWindow)(self.raw()) }
    }

    /// Raise above other windows and request input focus.
    pub fn raise(&self) {
        unsafe { (self.api.SDL_RaiseWindow)(self.raw()) }
    }

    /// Make the window as large as possible.
    pub fn maximize(&self) {
        unsafe { (self.api.SDL_MaximizeWindow)(self.raw()) }
    }

    /// Minimize to an iconic representation.
    pub fn minimize(&self) {
        unsafe { (self.api.SDL_MinimizeWindow)(self.raw()) }
    }

    /// Restore the size and position of a minimized or maximized window.
    pub fn restore(&self) {
        unsafe { (self.api.SDL_RestoreWindow)(self.raw()) }
    }

    /// Switch fullscreen mode.
    ///
    /// `mode` must be empty (windowed), `FULLSCREEN` or `FULLSCREEN_DESKTOP`.
    pub fn set_fullscreen(&self, mode: WindowFlags) -> Result<()> {
        if !WindowFlags::FULLSCREEN_DESKTOP.contains(mode) {
            return Err(Error::InvalidArgument(format!("{:?} is not a fullscreen mode", mode)));
        }
        check(self.api, unsafe { (self.api.SDL_SetWindowFullscreen)(self.raw(), mode.bits()) })
    }

    /// Switch to exclusive fullscreen, changing the display mode.
    pub fn fullscreen(&self) -> Result<()> {
        self.set_fullscreen(WindowFlags::FULLSCREEN)
    }

    /// Switch to borderless fullscreen at the desktop resolution.
    pub fn fullscreen_desktop(&self) -> Result<()> {
        self.set_fullscreen(WindowFlags::FULLSCREEN_DESKTOP)
    }

    /// Leave fullscreen.
    pub fn windowed(&self) -> Result<()> {
        self.set_fullscreen(WindowFlags::empty())
    }

    /// The window's framebuffer surface, for software drawing.
    ///
    /// Cannot be combined with a [`Renderer`](crate::Renderer) on the same
    /// window. The runtime frees this surface whenever the window is resized,
    /// so the view holds the window mutably borrowed; drop it before calling
    /// [`update_surface`](Self::update_surface) or any other method.
    ///
    /// ```compile_fail
    /// # fn resize(window: &mut sdl::Window) -> sdl::Result<()> {
    /// let surface = window.surface()?;
    /// window.set_size(640, 480)?;
    /// surface.fill_rect(None, sdl::Color::WHITE)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn surface(&mut self) -> Result<SurfaceRef<'_>> {
        let raw = unsafe { (self.api.SDL_GetWindowSurface)(self.raw()) };
        if raw.is_null() {
            return Err(ffi::error_from_sdl(self.api));
        }
        Ok(SurfaceRef::new(Surface::borrowed(self.api, raw)))
    }

    /// Copy the window surface to the screen.
    pub fn update_surface(&self) -> Result<()> {
        check(self.api, unsafe { (self.api.SDL_UpdateWindowSurface)(self.raw()) })
    }
}

fn checked_size(width: u32, height: u32) -> Result<(i32, i32)> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidArgument("window size must be non-zero".to_string()));
    }
    Ok((dimension(width)?, dimension(height)?))
}
