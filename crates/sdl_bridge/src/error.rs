//! Error types for the binding layer
//!
//! Native failures all collapse into [`Error::Sdl`], carrying the text of
//! `SDL_GetError()` at the moment the sentinel was observed. The remaining
//! variants describe failures that happen on the Rust side of the boundary
//! (loading, string marshaling, configuration).

use std::ffi::NulError;
use thiserror::Error;

use crate::config::ConfigError;

/// Binding errors
#[derive(Error, Debug)]
pub enum Error {
    /// A native call returned its failure sentinel
    #[error("SDL error: {0}")]
    Sdl(String),

    /// The shared library could not be opened
    #[error("failed to load native library `{library}`: {source}")]
    Load {
        /// Name or path that was tried last
        library: String,
        /// Loader error
        #[source]
        source: libloading::Error,
    },

    /// The library was opened but lacks an entry point
    #[error("native library is missing symbol `{symbol}`: {source}")]
    MissingSymbol {
        /// Symbol name
        symbol: &'static str,
        /// Loader error
        #[source]
        source: libloading::Error,
    },

    /// A Rust string could not be handed to C
    #[error("string contains an interior nul byte: {0}")]
    InvalidString(#[from] NulError),

    /// A length or count does not fit the native integer type
    #[error("{what} out of range for the native API: {value}")]
    OutOfRange {
        /// What was being converted
        what: &'static str,
        /// The offending value
        value: u64,
    },

    /// A resource is exclusively borrowed elsewhere
    #[error("{0} is already in use")]
    InUse(&'static str),

    /// A Vulkan call made through `ash` failed
    #[error("Vulkan error: {0}")]
    Vulkan(#[from] ash::vk::Result),

    /// Host file system failure outside SDL
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or was invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when the error came from the native library itself
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Sdl(_))
    }
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(io) => io,
            other => std::io::Error::new(std::io::ErrorKind::Other, other),
        }
    }
}

/// Narrow a Rust length to a C `int`
pub(crate) fn to_c_int(what: &'static str, value: usize) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::OutOfRange {
        what,
        value: value as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_nul_error_converts() {
        let err: Error = CString::new("bad\0title").unwrap_err().into();
        assert!(matches!(err, Error::InvalidString(_)));
        assert!(!err.is_native());
    }

    #[test]
    fn test_native_error_message() {
        let err = Error::Sdl("Parameter 'window' is invalid".to_string());
        assert!(err.is_native());
        assert_eq!(err.to_string(), "SDL error: Parameter 'window' is invalid");
    }

    #[test]
    fn test_in_use_message() {
        let err = Error::InUse("window surface");
        assert!(!err.is_native());
        assert_eq!(err.to_string(), "window surface is already in use");
    }

    #[test]
    fn test_to_c_int_bounds() {
        assert_eq!(to_c_int("count", 12).unwrap(), 12);
        let err = to_c_int("count", usize::MAX).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { what: "count", .. }));
    }
}
