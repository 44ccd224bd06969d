//! Library and subsystem initialisation.

use crate::error::{Error, Result};
use crate::ffi::{self, check, Api};
use crate::resource::Resource;
use crate::types::InitFlags;

/// Initialise the runtime with the given subsystems.
///
/// Pair with [`quit`]. Prefer [`Subsystem`] when the lifetime of the
/// subsystems follows a scope.
pub fn init(flags: InitFlags) -> Result<()> {
    let api = ffi::api()?;
    log::debug!("SDL_Init({:?})", flags);
    check(api, unsafe { (api.SDL_Init)(flags.bits()) })
}

/// Shut down every subsystem and release global runtime state.
pub fn quit() {
    if let Ok(api) = ffi::api() {
        log::debug!("SDL_Quit");
        unsafe { (api.SDL_Quit)() }
    }
}

/// Initialise additional subsystems (reference counted by the runtime).
pub fn init_subsystem(flags: InitFlags) -> Result<()> {
    let api = ffi::api()?;
    check(api, unsafe { (api.SDL_InitSubSystem)(flags.bits()) })
}

/// Release one reference on each of the given subsystems.
pub fn quit_subsystem(flags: InitFlags) {
    if let Ok(api) = ffi::api() {
        unsafe { (api.SDL_QuitSubSystem)(flags.bits()) }
    }
}

/// Which of `flags` are currently initialised.
///
/// An empty `flags` asks for every initialised subsystem.
pub fn was_init(flags: InitFlags) -> Result<InitFlags> {
    let api = ffi::api()?;
    let bits = unsafe { (api.SDL_WasInit)(flags.bits()) };
    Ok(InitFlags::from_bits_truncate(bits))
}

/// Scoped subsystem initialisation.
///
/// Holds one reference on each subsystem in its flags and quits them when
/// dropped.
///
/// # Example
///
/// ```no_run
/// use sdl::{InitFlags, Subsystem};
///
/// let video = Subsystem::init(InitFlags::VIDEO)?;
/// assert!(video.flags().contains(InitFlags::VIDEO));
/// // SDL_QuitSubSystem(SDL_INIT_VIDEO) runs here
/// # Ok::<(), sdl::Error>(())
/// ```
#[derive(Debug)]
pub struct Subsystem {
    resource: Resource<u32>,
}

impl Subsystem {
    /// Initialise `flags` for the lifetime of the returned guard.
    pub fn init(flags: InitFlags) -> Result<Self> {
        if flags.is_empty() {
            return Err(Error::InvalidArgument("no subsystem requested".to_string()));
        }

        let api = ffi::api()?;
        check(api, unsafe { (api.SDL_InitSubSystem)(flags.bits()) })?;
        log::debug!("initialised subsystems {:?}", flags);

        Ok(Self {
            resource: Resource::new(flags.bits(), quit_releaser(api)),
        })
    }

    /// The subsystems held by this guard.
    pub fn flags(&self) -> InitFlags {
        InitFlags::from_bits_truncate(self.resource.get())
    }

    /// Quit the subsystems now.
    pub fn quit(&mut self) {
        self.resource.reset();
    }
}

fn quit_releaser(api: &'static Api) -> impl FnOnce(u32) {
    let quit = api.SDL_QuitSubSystem;
    move |bits| {
        log::debug!("quitting subsystems {:?}", InitFlags::from_bits_truncate(bits));
        unsafe { quit(bits) }
    }
}
