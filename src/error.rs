//! Error types for the sdl crate.

use thiserror::Error;

/// Result type alias for sdl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sdl operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The SDL2 shared library could not be loaded.
    #[error("SDL2 runtime unavailable: {0}")]
    Unavailable(String),

    /// The loaded library lacks a required entry point.
    #[error("missing SDL2 symbol: {0}")]
    MissingSymbol(String),

    /// The runtime reported a failure; carries its last error message.
    #[error("SDL error: {0}")]
    Sdl(String),

    /// Handle is null or already released.
    #[error("invalid handle")]
    InvalidHandle,

    /// Function argument is invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Resource was already closed.
    #[error("already closed")]
    AlreadyClosed,

    /// Short read or write on a file stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the runtime library is missing.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::Unavailable(_) | Error::MissingSymbol(_))
    }

    /// Check if this error came from the runtime's error string.
    pub fn is_sdl(&self) -> bool {
        matches!(self, Error::Sdl(_))
    }

    /// Check if this is an invalid or closed handle error.
    pub fn is_closed(&self) -> bool {
        matches!(self, Error::InvalidHandle | Error::AlreadyClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Error::Unavailable("x".into()).is_unavailable());
        assert!(Error::MissingSymbol("SDL_Init".into()).is_unavailable());
        assert!(Error::Sdl("bad".into()).is_sdl());
        assert!(Error::AlreadyClosed.is_closed());
        assert!(!Error::Sdl("bad".into()).is_closed());
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::Sdl("No video mode".into()).to_string(), "SDL error: No video mode");
        assert_eq!(Error::InvalidHandle.to_string(), "invalid handle");
    }
}
