//! Locates and loads the SDL2 shared library.
//!
//! The library is opened once per process. Every wrapper obtains the
//! function table through [`api`], which fails with
//! [`Error::Unavailable`](crate::Error::Unavailable) when no SDL2 build
//! could be found.

use std::path::PathBuf;
use std::sync::OnceLock;

use super::raw::Api;
use crate::error::{Error, Result};

/// Environment variable holding an explicit path to the SDL2 library.
pub const LIBRARY_ENV: &str = "SDL2_WRAPPER_LIBRARY";

static API: OnceLock<std::result::Result<Api, String>> = OnceLock::new();
static LOADED_WITH: OnceLock<LoaderOptions> = OnceLock::new();

/// Options controlling where the runtime is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Explicit library path, tried before any default name.
    pub path: Option<PathBuf>,
    /// Whether to honour [`LIBRARY_ENV`] (default: true).
    pub use_env: bool,
    /// Skip the platform default names.
    pub no_defaults: bool,
}

impl LoaderOptions {
    /// Options used when the library is loaded implicitly.
    pub fn new() -> Self {
        Self {
            path: None,
            use_env: true,
            no_defaults: false,
        }
    }

    /// Load only from `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            use_env: false,
            no_defaults: true,
        }
    }

    /// The ordered list of names handed to the dynamic loader.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut names = Vec::new();

        if let Some(path) = &self.path {
            names.push(path.clone());
        }

        if self.use_env {
            if let Some(path) = std::env::var_os(LIBRARY_ENV).filter(|p| !p.is_empty()) {
                names.push(PathBuf::from(path));
            }
        }

        if !self.no_defaults {
            names.extend(default_names().iter().map(PathBuf::from));
        }

        names
    }
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Platform default library names, most specific first.
pub fn default_names() -> &'static [&'static str] {
    if cfg!(target_os = "windows") {
        &["SDL2.dll"]
    } else if cfg!(target_os = "macos") {
        &[
            "libSDL2-2.0.0.dylib",
            "libSDL2.dylib",
            "SDL2.framework/SDL2",
        ]
    } else {
        &["libSDL2-2.0.so.0", "libSDL2-2.0.so", "libSDL2.so"]
    }
}

fn load(options: &LoaderOptions) -> std::result::Result<Api, String> {
    let mut failures = Vec::new();

    for name in options.candidates() {
        // SAFETY: SDL2's library initialisers have no preconditions.
        let library = match unsafe { libloading::Library::new(&name) } {
            Ok(library) => library,
            Err(e) => {
                log::trace!("could not load {}: {}", name.display(), e);
                failures.push(format!("{}: {}", name.display(), e));
                continue;
            }
        };

        // SAFETY: the table only names functions with their SDL2 signatures.
        return match unsafe { Api::resolve(library) } {
            Ok(api) => {
                log::debug!("loaded SDL2 from {}", name.display());
                Ok(api)
            }
            Err(e) => {
                log::warn!("{} is not a usable SDL2 build: {}", name.display(), e);
                Err(format!("{}: {}", name.display(), e))
            }
        };
    }

    if failures.is_empty() {
        Err("no library candidates".to_string())
    } else {
        Err(failures.join("; "))
    }
}

/// Load the runtime with explicit options.
///
/// Must be called before anything else touches the runtime. Once loaded,
/// calling again with the same options returns the first result, and
/// calling with different options fails with
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument).
pub fn load_with(options: &LoaderOptions) -> Result<&'static Api> {
    let slot = load_once(options);
    match LOADED_WITH.get() {
        Some(first) if first != options => Err(Error::InvalidArgument(format!(
            "runtime already loaded with {:?}, cannot reload with {:?}",
            first, options
        ))),
        _ => to_result(slot),
    }
}

/// Get the function table, loading the runtime on first use.
pub fn api() -> Result<&'static Api> {
    if let Some(slot) = API.get() {
        return to_result(slot);
    }
    to_result(load_once(&LoaderOptions::new()))
}

fn load_once(options: &LoaderOptions) -> &'static std::result::Result<Api, String> {
    API.get_or_init(|| {
        let _ = LOADED_WITH.set(options.clone());
        load(options)
    })
}

/// Check if the runtime could be loaded.
pub fn is_available() -> bool {
    api().is_ok()
}

fn to_result(slot: &'static std::result::Result<Api, String>) -> Result<&'static Api> {
    match slot {
        Ok(api) => Ok(api),
        Err(message) => Err(Error::Unavailable(message.clone())),
    }
}
