//! Raw access to the native libraries
//!
//! SDL3 and SDL3_ttf are opened at runtime and every entry point the binding
//! uses is resolved up front into a table of function pointers, in the same
//! way `ash::Entry` resolves the Vulkan loader. A missing library or symbol
//! therefore surfaces as an [`Error`] from `Sdl::load` instead of a link
//! failure.
//!
//! Everything in this module is `unsafe` to call; the safe wrappers live in
//! the rest of the crate.

use std::ffi::{c_char, CStr, CString};
use std::path::Path;

use crate::error::{Error, Result};

/// Declares a table of native entry points and its resolver
macro_rules! native_api {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( fn $func:ident ( $($arg:ident : $ty:ty),* $(,)? ) $(-> $ret:ty)? ; )*
        }
    ) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        pub struct $name {
            $( pub $func: unsafe extern "C" fn($($arg: $ty),*) $(-> $ret)?, )*
            _library: libloading::Library,
        }

        #[allow(non_snake_case)]
        impl $name {
            /// Resolve every entry point from an opened library
            ///
            /// # Safety
            /// `library` must be the SDL build these signatures describe.
            pub(crate) unsafe fn resolve(library: libloading::Library) -> $crate::error::Result<Self> {
                $(
                    let $func = *library
                        .get::<unsafe extern "C" fn($($ty),*) $(-> $ret)?>(
                            concat!(stringify!($func), "\0").as_bytes(),
                        )
                        .map_err(|source| $crate::error::Error::MissingSymbol {
                            symbol: stringify!($func),
                            source,
                        })?;
                )*
                Ok(Self { $($func,)* _library: library })
            }
        }
    };
}

mod sdl;
#[cfg(feature = "ttf")]
mod ttf;
pub mod types;

pub use sdl::SdlApi;
#[cfg(feature = "ttf")]
pub use ttf::TtfApi;
pub use types::*;

/// Platform file names tried for SDL3 when no explicit path is configured
pub const SDL_LIBRARY_NAMES: &[&str] = if cfg!(target_os = "windows") {
    &["SDL3.dll"]
} else if cfg!(target_os = "macos") {
    &["libSDL3.0.dylib", "libSDL3.dylib", "SDL3.framework/SDL3"]
} else {
    &["libSDL3.so.0", "libSDL3.so"]
};

/// Platform file names tried for SDL3_ttf when no explicit path is configured
pub const TTF_LIBRARY_NAMES: &[&str] = if cfg!(target_os = "windows") {
    &["SDL3_ttf.dll"]
} else if cfg!(target_os = "macos") {
    &["libSDL3_ttf.0.dylib", "libSDL3_ttf.dylib", "SDL3_ttf.framework/SDL3_ttf"]
} else {
    &["libSDL3_ttf.so.0", "libSDL3_ttf.so"]
};

/// Open the first library that loads from `explicit` or the fallback names
pub(crate) fn open_library(explicit: Option<&Path>, fallbacks: &[&str]) -> Result<libloading::Library> {
    if let Some(path) = explicit {
        log::debug!("Opening native library {}", path.display());
        // SAFETY: loading SDL runs no initialisers with preconditions.
        return unsafe { libloading::Library::new(path) }.map_err(|source| Error::Load {
            library: path.display().to_string(),
            source,
        });
    }

    let mut last_error = None;
    for name in fallbacks {
        // SAFETY: as above.
        match unsafe { libloading::Library::new(name) } {
            Ok(library) => {
                log::debug!("Opened native library {name}");
                return Ok(library);
            }
            Err(source) => {
                log::trace!("Could not open {name}: {source}");
                last_error = Some((name, source));
            }
        }
    }

    match last_error {
        Some((name, source)) => Err(Error::Load {
            library: (*name).to_string(),
            source,
        }),
        None => Err(Error::OutOfRange {
            what: "library candidate list",
            value: 0,
        }),
    }
}

/// Copy a borrowed C string; null maps to an empty string
///
/// # Safety
/// `ptr` must be null or point to a nul-terminated string.
pub(crate) unsafe fn string_from_ptr(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

/// Like [`string_from_ptr`] but keeps null distinct
///
/// # Safety
/// `ptr` must be null or point to a nul-terminated string.
pub(crate) unsafe fn optional_string_from_ptr(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

/// Marshal a Rust string for a `const char *` parameter
pub(crate) fn c_string(value: &str) -> Result<CString> {
    Ok(CString::new(value)?)
}

/// Marshal an optional string; `None` becomes a null pointer at the call site
pub(crate) fn optional_c_string(value: Option<&str>) -> Result<Option<CString>> {
    value.map(c_string).transpose()
}

/// Pointer for an optional marshaled string
pub(crate) fn optional_ptr(value: &Option<CString>) -> *const c_char {
    value.as_ref().map_or(std::ptr::null(), |s| s.as_ptr())
}

/// Convert a path to a C string
pub(crate) fn path_c_string(path: &Path) -> Result<CString> {
    c_string(&path.to_string_lossy())
}

/// Pointer/length pair for APIs taking `(const char *, size_t)`
///
/// A zero length means "nul-terminated" to SDL_ttf, so an empty string must
/// still point at a terminator.
pub(crate) fn text_arg(text: &str) -> (*const c_char, usize) {
    if text.is_empty() {
        (c"".as_ptr(), 0)
    } else {
        (text.as_ptr().cast(), text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_from_null_is_empty() {
        assert_eq!(unsafe { string_from_ptr(std::ptr::null()) }, "");
        assert_eq!(unsafe { optional_string_from_ptr(std::ptr::null()) }, None);
    }

    #[test]
    fn test_string_from_ptr_copies() {
        let owned = CString::new("opengl").unwrap();
        assert_eq!(unsafe { string_from_ptr(owned.as_ptr()) }, "opengl");
        assert_eq!(
            unsafe { optional_string_from_ptr(owned.as_ptr()) }.as_deref(),
            Some("opengl")
        );
    }

    #[test]
    fn test_optional_c_string_null_when_absent() {
        let none = optional_c_string(None).unwrap();
        assert!(optional_ptr(&none).is_null());

        let some = optional_c_string(Some("software")).unwrap();
        assert!(!optional_ptr(&some).is_null());
    }

    #[test]
    fn test_empty_text_arg_points_at_terminator() {
        let (ptr, len) = text_arg("");
        assert_eq!(len, 0);
        assert_eq!(unsafe { *ptr }, 0);

        let word = String::from("héllo");
        let (ptr, len) = text_arg(&word);
        assert_eq!(len, 6);
        assert_eq!(ptr, word.as_ptr().cast::<c_char>());
    }

    #[test]
    fn test_missing_library_reports_load_error() {
        let err = open_library(Some(Path::new("/nonexistent/libSDL3-missing.so")), SDL_LIBRARY_NAMES)
            .unwrap_err();
        assert!(matches!(err, Error::Load { ref library, .. } if library.contains("libSDL3-missing")));
    }

    #[test]
    fn test_fallback_list_exhausted() {
        let err = open_library(None, &["definitely-not-a-real-sdl-build.so"]).unwrap_err();
        assert!(matches!(err, Error::Load { .. }));
    }
}
