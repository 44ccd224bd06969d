//! Raw C types and the SDL2 function table.
//!
//! Struct layouts mirror the SDL2 2.0.10+ public headers. The function table
//! is filled in by [`super::loader`].

use std::os::raw::{c_char, c_float, c_int, c_void};

use super::handles::*;
use crate::error::Error;

// Init flags
pub const SDL_INIT_TIMER: u32 = 0x0000_0001;
pub const SDL_INIT_AUDIO: u32 = 0x0000_0010;
pub const SDL_INIT_VIDEO: u32 = 0x0000_0020;
pub const SDL_INIT_JOYSTICK: u32 = 0x0000_0200;
pub const SDL_INIT_HAPTIC: u32 = 0x0000_1000;
pub const SDL_INIT_GAMECONTROLLER: u32 = 0x0000_2000;
pub const SDL_INIT_EVENTS: u32 = 0x0000_4000;
pub const SDL_INIT_SENSOR: u32 = 0x0000_8000;

// Window position sentinels
pub const SDL_WINDOWPOS_UNDEFINED: c_int = 0x1FFF_0000;
pub const SDL_WINDOWPOS_CENTERED: c_int = 0x2FFF_0000;

// SDL_ShowCursor toggles
pub const SDL_QUERY: c_int = -1;
pub const SDL_DISABLE: c_int = 0;
pub const SDL_ENABLE: c_int = 1;

// RWops seek origins
pub const RW_SEEK_SET: c_int = 0;
pub const RW_SEEK_CUR: c_int = 1;
pub const RW_SEEK_END: c_int = 2;

/// Audio callback type.
pub type SDL_AudioCallback =
    Option<unsafe extern "C" fn(userdata: *mut c_void, stream: *mut u8, len: c_int)>;

/// RGBA color.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Integer rectangle.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_Rect {
    pub x: c_int,
    pub y: c_int,
    pub w: c_int,
    pub h: c_int,
}

/// Integer point.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_Point {
    pub x: c_int,
    pub y: c_int,
}

/// Color palette.
#[repr(C)]
pub struct SDL_Palette {
    pub ncolors: c_int,
    pub colors: *mut SDL_Color,
    pub version: u32,
    pub refcount: c_int,
}

/// Pixel format description.
#[repr(C)]
pub struct SDL_PixelFormat {
    pub format: u32,
    pub palette: *mut SDL_Palette,
    pub BitsPerPixel: u8,
    pub BytesPerPixel: u8,
    pub padding: [u8; 2],
    pub Rmask: u32,
    pub Gmask: u32,
    pub Bmask: u32,
    pub Amask: u32,
    pub Rloss: u8,
    pub Gloss: u8,
    pub Bloss: u8,
    pub Aloss: u8,
    pub Rshift: u8,
    pub Gshift: u8,
    pub Bshift: u8,
    pub Ashift: u8,
    pub refcount: c_int,
    pub next: *mut SDL_PixelFormat,
}

/// Pixel surface.
#[repr(C)]
pub struct SDL_Surface {
    pub flags: u32,
    pub format: *mut SDL_PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub pitch: c_int,
    pub pixels: *mut c_void,
    pub userdata: *mut c_void,
    pub locked: c_int,
    pub list_blitmap: *mut c_void,
    pub clip_rect: SDL_Rect,
    pub map: *mut c_void,
    pub refcount: c_int,
}

/// Audio output/capture format description.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct SDL_AudioSpec {
    pub freq: c_int,
    pub format: u16,
    pub channels: u8,
    pub silence: u8,
    pub samples: u16,
    pub padding: u16,
    pub size: u32,
    pub callback: SDL_AudioCallback,
    pub userdata: *mut c_void,
}

impl Default for SDL_AudioSpec {
    fn default() -> Self {
        Self {
            freq: 0,
            format: 0,
            channels: 0,
            silence: 0,
            samples: 0,
            padding: 0,
            size: 0,
            callback: None,
            userdata: std::ptr::null_mut(),
        }
    }
}

/// Display mode.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_DisplayMode {
    pub format: u32,
    pub w: c_int,
    pub h: c_int,
    pub refresh_rate: c_int,
    pub driverdata: *mut c_void,
}

impl Default for SDL_DisplayMode {
    fn default() -> Self {
        Self {
            format: 0,
            w: 0,
            h: 0,
            refresh_rate: 0,
            driverdata: std::ptr::null_mut(),
        }
    }
}

/// Library version.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SDL_version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

/// Macro to declare the function table.
///
/// Each entry becomes a field holding a function pointer resolved by the
/// symbol of the same name.
macro_rules! sdl_api {
    ($( fn $name:ident ( $($arg:ty),* $(,)? ) $(-> $ret:ty)? ; )*) => {
        /// Function table resolved from the SDL2 shared library.
        ///
        /// The library stays loaded for as long as the table lives.
        pub struct Api {
            $( pub $name: unsafe extern "C" fn($($arg),*) $(-> $ret)?, )*
            _library: libloading::Library,
        }

        impl Api {
            /// Resolve every entry point from `library`.
            ///
            /// # Safety
            ///
            /// `library` must export SDL2 functions matching these signatures.
            pub(crate) unsafe fn resolve(library: libloading::Library) -> Result<Self, Error> {
                $(
                    let $name = *library
                        .get::<unsafe extern "C" fn($($arg),*) $(-> $ret)?>(
                            concat!(stringify!($name), "\0").as_bytes(),
                        )
                        .map_err(|_| Error::MissingSymbol(stringify!($name).to_string()))?;
                )*

                Ok(Self {
                    $( $name, )*
                    _library: library,
                })
            }
        }

        impl std::fmt::Debug for Api {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct("Api").finish_non_exhaustive()
            }
        }
    };
}

sdl_api! {
    // Init and errors
    fn SDL_Init(u32) -> c_int;
    fn SDL_InitSubSystem(u32) -> c_int;
    fn SDL_QuitSubSystem(u32);
    fn SDL_WasInit(u32) -> u32;
    fn SDL_Quit();
    fn SDL_GetError() -> *const c_char;
    fn SDL_ClearError();
    fn SDL_SetHint(*const c_char, *const c_char) -> SDL_bool;
    fn SDL_GetHint(*const c_char) -> *const c_char;
    fn SDL_GetVersion(*mut SDL_version);
    fn SDL_GetRevision() -> *const c_char;
    fn SDL_free(*mut c_void);

    // CPU, power and filesystem
    fn SDL_GetCPUCount() -> c_int;
    fn SDL_GetCPUCacheLineSize() -> c_int;
    fn SDL_GetSystemRAM() -> c_int;
    fn SDL_HasSSE2() -> SDL_bool;
    fn SDL_HasAVX() -> SDL_bool;
    fn SDL_HasAVX2() -> SDL_bool;
    fn SDL_HasNEON() -> SDL_bool;
    fn SDL_GetPowerInfo(*mut c_int, *mut c_int) -> c_int;
    fn SDL_GetBasePath() -> *mut c_char;
    fn SDL_GetPrefPath(*const c_char, *const c_char) -> *mut c_char;

    // Timer
    fn SDL_GetTicks() -> u32;
    fn SDL_Delay(u32);
    fn SDL_GetPerformanceCounter() -> u64;
    fn SDL_GetPerformanceFrequency() -> u64;

    // Shared objects
    fn SDL_LoadObject(*const c_char) -> *mut c_void;
    fn SDL_LoadFunction(*mut c_void, *const c_char) -> *mut c_void;
    fn SDL_UnloadObject(*mut c_void);

    // RWops
    fn SDL_RWFromFile(*const c_char, *const c_char) -> *mut SDL_RWops;
    fn SDL_RWFromMem(*mut c_void, c_int) -> *mut SDL_RWops;
    fn SDL_RWFromConstMem(*const c_void, c_int) -> *mut SDL_RWops;
    fn SDL_RWsize(*mut SDL_RWops) -> i64;
    fn SDL_RWseek(*mut SDL_RWops, i64, c_int) -> i64;
    fn SDL_RWtell(*mut SDL_RWops) -> i64;
    fn SDL_RWread(*mut SDL_RWops, *mut c_void, usize, usize) -> usize;
    fn SDL_RWwrite(*mut SDL_RWops, *const c_void, usize, usize) -> usize;
    fn SDL_RWclose(*mut SDL_RWops) -> c_int;

    // Video drivers and displays
    fn SDL_GetNumVideoDrivers() -> c_int;
    fn SDL_GetVideoDriver(c_int) -> *const c_char;
    fn SDL_GetCurrentVideoDriver() -> *const c_char;
    fn SDL_GetNumVideoDisplays() -> c_int;
    fn SDL_GetDisplayName(c_int) -> *const c_char;
    fn SDL_GetDisplayBounds(c_int, *mut SDL_Rect) -> c_int;
    fn SDL_GetDisplayUsableBounds(c_int, *mut SDL_Rect) -> c_int;
    fn SDL_GetDisplayDPI(c_int, *mut c_float, *mut c_float, *mut c_float) -> c_int;
    fn SDL_GetNumDisplayModes(c_int) -> c_int;
    fn SDL_GetDisplayMode(c_int, c_int, *mut SDL_DisplayMode) -> c_int;
    fn SDL_GetDesktopDisplayMode(c_int, *mut SDL_DisplayMode) -> c_int;
    fn SDL_GetCurrentDisplayMode(c_int, *mut SDL_DisplayMode) -> c_int;
    fn SDL_GetClosestDisplayMode(c_int, *const SDL_DisplayMode, *mut SDL_DisplayMode) -> *mut SDL_DisplayMode;

    // Window
    fn SDL_CreateWindow(*const c_char, c_int, c_int, c_int, c_int, u32) -> *mut SDL_Window;
    fn SDL_DestroyWindow(*mut SDL_Window);
    fn SDL_GetWindowID(*mut SDL_Window) -> u32;
    fn SDL_GetWindowFlags(*mut SDL_Window) -> u32;
    fn SDL_GetWindowPixelFormat(*mut SDL_Window) -> u32;
    fn SDL_GetWindowDisplayIndex(*mut SDL_Window) -> c_int;
    fn SDL_SetWindowTitle(*mut SDL_Window, *const c_char);
    fn SDL_GetWindowTitle(*mut SDL_Window) -> *const c_char;
    fn SDL_SetWindowIcon(*mut SDL_Window, *mut SDL_Surface);
    fn SDL_SetWindowPosition(*mut SDL_Window, c_int, c_int);
    fn SDL_GetWindowPosition(*mut SDL_Window, *mut c_int, *mut c_int);
    fn SDL_SetWindowSize(*mut SDL_Window, c_int, c_int);
    fn SDL_GetWindowSize(*mut SDL_Window, *mut c_int, *mut c_int);
    fn SDL_SetWindowMinimumSize(*mut SDL_Window, c_int, c_int);
    fn SDL_GetWindowMinimumSize(*mut SDL_Window, *mut c_int, *mut c_int);
    fn SDL_SetWindowMaximumSize(*mut SDL_Window, c_int, c_int);
    fn SDL_GetWindowMaximumSize(*mut SDL_Window, *mut c_int, *mut c_int);
    fn SDL_SetWindowBordered(*mut SDL_Window, SDL_bool);
    fn SDL_SetWindowResizable(*mut SDL_Window, SDL_bool);
    fn SDL_ShowWindow(*mut SDL_Window);
    fn SDL_HideWindow(*mut SDL_Window);
    fn SDL_RaiseWindow(*mut SDL_Window);
    fn SDL_MaximizeWindow(*mut SDL_Window);
    fn SDL_MinimizeWindow(*mut SDL_Window);
    fn SDL_RestoreWindow(*mut SDL_Window);
    fn SDL_SetWindowFullscreen(*mut SDL_Window, u32) -> c_int;
    fn SDL_GetWindowSurface(*mut SDL_Window) -> *mut SDL_Surface;
    fn SDL_UpdateWindowSurface(*mut SDL_Window) -> c_int;

    // Cursor
    fn SDL_CreateCursor(*const u8, *const u8, c_int, c_int, c_int, c_int) -> *mut SDL_Cursor;
    fn SDL_CreateColorCursor(*mut SDL_Surface, c_int, c_int) -> *mut SDL_Cursor;
    fn SDL_CreateSystemCursor(c_int) -> *mut SDL_Cursor;
    fn SDL_SetCursor(*mut SDL_Cursor);
    fn SDL_GetCursor() -> *mut SDL_Cursor;
    fn SDL_GetDefaultCursor() -> *mut SDL_Cursor;
    fn SDL_FreeCursor(*mut SDL_Cursor);
    fn SDL_ShowCursor(c_int) -> c_int;

    // Renderer
    fn SDL_CreateRenderer(*mut SDL_Window, c_int, u32) -> *mut SDL_Renderer;
    fn SDL_CreateSoftwareRenderer(*mut SDL_Surface) -> *mut SDL_Renderer;
    fn SDL_DestroyRenderer(*mut SDL_Renderer);
    fn SDL_SetRenderDrawColor(*mut SDL_Renderer, u8, u8, u8, u8) -> c_int;
    fn SDL_GetRenderDrawColor(*mut SDL_Renderer, *mut u8, *mut u8, *mut u8, *mut u8) -> c_int;
    fn SDL_RenderClear(*mut SDL_Renderer) -> c_int;
    fn SDL_RenderPresent(*mut SDL_Renderer);
    fn SDL_RenderFillRect(*mut SDL_Renderer, *const SDL_Rect) -> c_int;
    fn SDL_RenderDrawLine(*mut SDL_Renderer, c_int, c_int, c_int, c_int) -> c_int;
    fn SDL_RenderCopy(*mut SDL_Renderer, *mut SDL_Texture, *const SDL_Rect, *const SDL_Rect) -> c_int;
    fn SDL_GetRendererOutputSize(*mut SDL_Renderer, *mut c_int, *mut c_int) -> c_int;

    // Texture
    fn SDL_CreateTexture(*mut SDL_Renderer, u32, c_int, c_int, c_int) -> *mut SDL_Texture;
    fn SDL_CreateTextureFromSurface(*mut SDL_Renderer, *mut SDL_Surface) -> *mut SDL_Texture;
    fn SDL_DestroyTexture(*mut SDL_Texture);
    fn SDL_QueryTexture(*mut SDL_Texture, *mut u32, *mut c_int, *mut c_int, *mut c_int) -> c_int;
    fn SDL_SetTextureColorMod(*mut SDL_Texture, u8, u8, u8) -> c_int;
    fn SDL_GetTextureColorMod(*mut SDL_Texture, *mut u8, *mut u8, *mut u8) -> c_int;
    fn SDL_SetTextureAlphaMod(*mut SDL_Texture, u8) -> c_int;
    fn SDL_GetTextureAlphaMod(*mut SDL_Texture, *mut u8) -> c_int;
    fn SDL_SetTextureBlendMode(*mut SDL_Texture, c_int) -> c_int;
    fn SDL_GetTextureBlendMode(*mut SDL_Texture, *mut c_int) -> c_int;
    fn SDL_UpdateTexture(*mut SDL_Texture, *const SDL_Rect, *const c_void, c_int) -> c_int;

    // Surface
    fn SDL_CreateRGBSurfaceWithFormat(u32, c_int, c_int, c_int, u32) -> *mut SDL_Surface;
    fn SDL_FreeSurface(*mut SDL_Surface);
    fn SDL_LoadBMP_RW(*mut SDL_RWops, c_int) -> *mut SDL_Surface;
    fn SDL_SaveBMP_RW(*mut SDL_Surface, *mut SDL_RWops, c_int) -> c_int;
    fn SDL_FillRect(*mut SDL_Surface, *const SDL_Rect, u32) -> c_int;
    fn SDL_LockSurface(*mut SDL_Surface) -> c_int;
    fn SDL_UnlockSurface(*mut SDL_Surface);
    fn SDL_SetSurfacePalette(*mut SDL_Surface, *mut SDL_Palette) -> c_int;
    fn SDL_ConvertSurfaceFormat(*mut SDL_Surface, u32, u32) -> *mut SDL_Surface;

    // Palette and pixel format
    fn SDL_AllocPalette(c_int) -> *mut SDL_Palette;
    fn SDL_FreePalette(*mut SDL_Palette);
    fn SDL_SetPaletteColors(*mut SDL_Palette, *const SDL_Color, c_int, c_int) -> c_int;
    fn SDL_AllocFormat(u32) -> *mut SDL_PixelFormat;
    fn SDL_FreeFormat(*mut SDL_PixelFormat);
    fn SDL_MapRGBA(*const SDL_PixelFormat, u8, u8, u8, u8) -> u32;
    fn SDL_GetRGBA(u32, *const SDL_PixelFormat, *mut u8, *mut u8, *mut u8, *mut u8);
    fn SDL_GetPixelFormatName(u32) -> *const c_char;

    // Audio
    fn SDL_GetNumAudioDrivers() -> c_int;
    fn SDL_GetAudioDriver(c_int) -> *const c_char;
    fn SDL_GetCurrentAudioDriver() -> *const c_char;
    fn SDL_GetNumAudioDevices(c_int) -> c_int;
    fn SDL_GetAudioDeviceName(c_int, c_int) -> *const c_char;
    fn SDL_OpenAudioDevice(*const c_char, c_int, *const SDL_AudioSpec, *mut SDL_AudioSpec, c_int) -> SDL_AudioDeviceID;
    fn SDL_CloseAudioDevice(SDL_AudioDeviceID);
    fn SDL_GetAudioDeviceStatus(SDL_AudioDeviceID) -> c_int;
    fn SDL_PauseAudioDevice(SDL_AudioDeviceID, c_int);
    fn SDL_QueueAudio(SDL_AudioDeviceID, *const c_void, u32) -> c_int;
    fn SDL_DequeueAudio(SDL_AudioDeviceID, *mut c_void, u32) -> u32;
    fn SDL_GetQueuedAudioSize(SDL_AudioDeviceID) -> u32;
    fn SDL_ClearQueuedAudio(SDL_AudioDeviceID);
    fn SDL_LockAudioDevice(SDL_AudioDeviceID);
    fn SDL_UnlockAudioDevice(SDL_AudioDeviceID);
    fn SDL_LoadWAV_RW(*mut SDL_RWops, c_int, *mut SDL_AudioSpec, *mut *mut u8, *mut u32) -> *mut SDL_AudioSpec;
    fn SDL_FreeWAV(*mut u8);

    // Joystick
    fn SDL_NumJoysticks() -> c_int;
    fn SDL_JoystickNameForIndex(c_int) -> *const c_char;
    fn SDL_JoystickOpen(c_int) -> *mut SDL_Joystick;
    fn SDL_JoystickClose(*mut SDL_Joystick);
    fn SDL_JoystickName(*mut SDL_Joystick) -> *const c_char;
    fn SDL_JoystickInstanceID(*mut SDL_Joystick) -> i32;
    fn SDL_JoystickNumAxes(*mut SDL_Joystick) -> c_int;
    fn SDL_JoystickNumButtons(*mut SDL_Joystick) -> c_int;
    fn SDL_JoystickNumHats(*mut SDL_Joystick) -> c_int;
    fn SDL_JoystickGetAxis(*mut SDL_Joystick, c_int) -> i16;
    fn SDL_JoystickGetButton(*mut SDL_Joystick, c_int) -> u8;
    fn SDL_JoystickIsHaptic(*mut SDL_Joystick) -> c_int;

    // Game controller
    fn SDL_IsGameController(c_int) -> SDL_bool;
    fn SDL_GameControllerNameForIndex(c_int) -> *const c_char;
    fn SDL_GameControllerOpen(c_int) -> *mut SDL_GameController;
    fn SDL_GameControllerFromInstanceID(i32) -> *mut SDL_GameController;
    fn SDL_GameControllerClose(*mut SDL_GameController);
    fn SDL_GameControllerName(*mut SDL_GameController) -> *const c_char;
    fn SDL_GameControllerMapping(*mut SDL_GameController) -> *mut c_char;
    fn SDL_GameControllerAddMapping(*const c_char) -> c_int;
    fn SDL_GameControllerGetAttached(*mut SDL_GameController) -> SDL_bool;
    fn SDL_GameControllerGetJoystick(*mut SDL_GameController) -> *mut SDL_Joystick;
    fn SDL_GameControllerGetAxis(*mut SDL_GameController, c_int) -> i16;
    fn SDL_GameControllerGetButton(*mut SDL_GameController, c_int) -> u8;
    fn SDL_GameControllerGetStringForAxis(c_int) -> *const c_char;
    fn SDL_GameControllerGetStringForButton(c_int) -> *const c_char;
    fn SDL_GameControllerRumble(*mut SDL_GameController, u16, u16, u32) -> c_int;

    // Haptic
    fn SDL_NumHaptics() -> c_int;
    fn SDL_HapticName(c_int) -> *const c_char;
    fn SDL_HapticOpen(c_int) -> *mut SDL_Haptic;
    fn SDL_HapticClose(*mut SDL_Haptic);
    fn SDL_HapticNumAxes(*mut SDL_Haptic) -> c_int;
    fn SDL_HapticRumbleSupported(*mut SDL_Haptic) -> c_int;
    fn SDL_HapticRumbleInit(*mut SDL_Haptic) -> c_int;
    fn SDL_HapticRumblePlay(*mut SDL_Haptic, c_float, u32) -> c_int;
    fn SDL_HapticRumbleStop(*mut SDL_Haptic) -> c_int;
}
