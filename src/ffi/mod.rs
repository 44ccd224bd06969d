//! FFI bindings to SDL2.
//!
//! This module contains the low-level C types and the function table that is
//! resolved from the SDL2 shared library at run time. Users should prefer the
//! safe Rust wrappers in the parent modules.

#![allow(non_camel_case_types, non_snake_case)]

pub mod error;
pub mod handles;
pub mod loader;
pub mod raw;

pub use error::{check, check_resource, error_from_sdl, last_error, string_from_ptr, take_string, to_cstring};
pub use handles::*;
pub use loader::{api, is_available, load_with, LoaderOptions};
pub use raw::*;
