//! Opaque types for objects owned by SDL2.
//!
//! These are only ever used behind raw pointers; their layout is private to
//! the runtime.

/// Macro to define an opaque runtime type.
macro_rules! define_opaque {
    ($($name:ident),* $(,)?) => {
        $(
            /// Opaque SDL2 object.
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
                _marker: core::marker::PhantomData<(*mut u8, core::marker::PhantomPinned)>,
            }
        )*
    };
}

define_opaque!(
    SDL_Window,
    SDL_Renderer,
    SDL_Texture,
    SDL_Cursor,
    SDL_Joystick,
    SDL_GameController,
    SDL_Haptic,
    SDL_RWops,
);

/// Audio device identifier; `0` is never a valid device.
pub type SDL_AudioDeviceID = u32;

/// Runtime boolean (`SDL_FALSE` / `SDL_TRUE`).
pub type SDL_bool = std::os::raw::c_int;

/// `SDL_FALSE`.
pub const SDL_FALSE: SDL_bool = 0;
/// `SDL_TRUE`.
pub const SDL_TRUE: SDL_bool = 1;

/// Convert a Rust bool to the runtime's boolean.
#[inline]
pub const fn sdl_bool(b: bool) -> SDL_bool {
    if b {
        SDL_TRUE
    } else {
        SDL_FALSE
    }
}
