//! The loaded library context
//!
//! [`Sdl`] owns the resolved SDL3 entry point table. It is cheap to clone and
//! every wrapper in the crate holds a clone, so the shared library stays
//! mapped for as long as any handle created from it is alive.

use std::ffi::{c_char, c_int, c_void};
use std::fmt;
use std::path::Path;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::config::SdlConfig;
use crate::error::{Error, Result};
use crate::sys::{self, SdlApi};

bitflags! {
    /// Subsystems passed to `SDL_Init`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct InitFlags: u32 {
        /// Audio; implies `EVENTS`
        const AUDIO = 0x0000_0010;
        /// Video; implies `EVENTS`, should be initialised on the main thread
        const VIDEO = 0x0000_0020;
        /// Joystick; implies `EVENTS`
        const JOYSTICK = 0x0000_0200;
        /// Haptic feedback
        const HAPTIC = 0x0000_1000;
        /// Gamepad; implies `JOYSTICK`
        const GAMEPAD = 0x0000_2000;
        /// Event queue
        const EVENTS = 0x0000_4000;
        /// Sensors; implies `EVENTS`
        const SENSOR = 0x0000_8000;
        /// Camera capture; implies `EVENTS`
        const CAMERA = 0x0001_0000;
    }
}

/// Library version decoded from SDL's packed `major * 1000000 + minor * 1000 + micro`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Patch level
    pub micro: u32,
}

impl Version {
    /// Decode a packed version number
    pub const fn from_packed(packed: i32) -> Self {
        let packed = if packed < 0 { 0 } else { packed as u32 };
        Self {
            major: packed / 1_000_000,
            minor: (packed / 1_000) % 1_000,
            micro: packed % 1_000,
        }
    }

    /// Encode back into the packed form
    pub const fn packed(self) -> i32 {
        (self.major * 1_000_000 + self.minor * 1_000 + self.micro) as i32
    }

    /// True when this version is at least `major.minor.micro`
    pub fn at_least(self, major: u32, minor: u32, micro: u32) -> bool {
        self >= Self { major, minor, micro }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

struct Shared {
    api: SdlApi,
    initialized: AtomicBool,
}

impl Drop for Shared {
    fn drop(&mut self) {
        if self.initialized.load(Ordering::Acquire) {
            log::debug!("Shutting down SDL");
            // SAFETY: every wrapper holds a clone of the context, so none remain.
            unsafe { (self.api.SDL_Quit)() };
        }
    }
}

/// Handle to the loaded SDL3 library
#[derive(Clone)]
pub struct Sdl {
    shared: Arc<Shared>,
}

impl fmt::Debug for Sdl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sdl")
            .field("version", &self.version())
            .field("initialized", &self.shared.initialized.load(Ordering::Relaxed))
            .finish()
    }
}

impl Sdl {
    /// Load SDL3 from the platform's default library names
    pub fn load() -> Result<Self> {
        Self::open(None)
    }

    /// Load SDL3 from an explicit path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(Some(path.as_ref()))
    }

    /// Load, configure and initialise SDL from a [`SdlConfig`]
    ///
    /// Metadata and hints are applied before the configured subsystems are
    /// initialised, since SDL reads most hints during initialisation.
    pub fn from_config(config: &SdlConfig) -> Result<Self> {
        config.validate()?;

        let sdl = match &config.sdl_library {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };

        if config.forward_native_log {
            sdl.route_native_log();
        }

        sdl.set_app_metadata(
            &config.app.name,
            Some(&config.app.version),
            config.app.identifier.as_deref(),
        )?;

        for (name, value) in &config.hints {
            sdl.set_hint(name, value)?;
        }

        if !config.subsystems.is_empty() {
            sdl.init(config.subsystems)?;
        }

        Ok(sdl)
    }

    fn open(path: Option<&Path>) -> Result<Self> {
        let library = sys::open_library(path, sys::SDL_LIBRARY_NAMES)?;
        // SAFETY: the library was found under an SDL3 name; the table matches the 3.2 ABI.
        let api = unsafe { SdlApi::resolve(library)? };

        let sdl = Self {
            shared: Arc::new(Shared {
                api,
                initialized: AtomicBool::new(false),
            }),
        };

        log::info!("Loaded SDL {} ({})", sdl.version(), sdl.revision());
        Ok(sdl)
    }

    /// Raw entry point table, for calls the safe layer does not cover
    pub fn api(&self) -> &SdlApi {
        &self.shared.api
    }

    // Error translation shared by every wrapper.

    pub(crate) fn error(&self) -> Error {
        Error::Sdl(
            self.get_error()
                .unwrap_or_else(|| "unknown SDL error".to_string()),
        )
    }

    pub(crate) fn check(&self, ok: bool) -> Result<()> {
        if ok {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    pub(crate) fn check_ptr<T>(&self, ptr: *mut T) -> Result<NonNull<T>> {
        NonNull::new(ptr).ok_or_else(|| self.error())
    }

    pub(crate) fn check_const_ptr<T>(&self, ptr: *const T) -> Result<NonNull<T>> {
        self.check_ptr(ptr.cast_mut())
    }

    pub(crate) fn check_id(&self, id: u32) -> Result<u32> {
        if id == 0 {
            Err(self.error())
        } else {
            Ok(id)
        }
    }

    /// Release memory SDL allocated on our behalf
    ///
    /// # Safety
    /// `ptr` must be null or come from an SDL allocation not yet freed.
    pub(crate) unsafe fn free<T>(&self, ptr: *mut T) {
        (self.api().SDL_free)(ptr.cast::<c_void>());
    }

    /// Copy an SDL-allocated array into a `Vec` and free it
    ///
    /// # Safety
    /// `ptr` must be null or an SDL allocation holding `count` elements.
    pub(crate) unsafe fn take_array<T: Copy>(&self, ptr: *mut T, count: c_int) -> Result<Vec<T>> {
        if ptr.is_null() {
            return Err(self.error());
        }
        let len = usize::try_from(count).unwrap_or(0);
        let values = std::slice::from_raw_parts(ptr, len).to_vec();
        self.free(ptr);
        Ok(values)
    }

    /// Copy an SDL-allocated array of pointers, dereferencing each, and free it
    ///
    /// # Safety
    /// As [`Self::take_array`], with every element pointing at a valid `T`.
    pub(crate) unsafe fn take_pointer_array<T: Copy>(&self, ptr: *mut *mut T, count: c_int) -> Result<Vec<T>> {
        if ptr.is_null() {
            return Err(self.error());
        }
        let len = usize::try_from(count).unwrap_or(0);
        let values = std::slice::from_raw_parts(ptr, len)
            .iter()
            .filter(|entry| !entry.is_null())
            .map(|entry| **entry)
            .collect();
        self.free(ptr);
        Ok(values)
    }

    /// Initialise subsystems; may be called repeatedly
    pub fn init(&self, flags: InitFlags) -> Result<()> {
        log::debug!("Initialising SDL subsystems {flags:?}");
        // SAFETY: plain call, no pointers.
        self.check(unsafe { (self.api().SDL_Init)(flags.bits()) })?;
        self.shared.initialized.store(true, Ordering::Release);
        Ok(())
    }

    /// Initialise additional subsystems (reference counted by SDL)
    pub fn init_subsystem(&self, flags: InitFlags) -> Result<()> {
        self.check(unsafe { (self.api().SDL_InitSubSystem)(flags.bits()) })?;
        self.shared.initialized.store(true, Ordering::Release);
        Ok(())
    }

    /// Release one reference on each subsystem
    pub fn quit_subsystem(&self, flags: InitFlags) {
        unsafe { (self.api().SDL_QuitSubSystem)(flags.bits()) };
    }

    /// Subsystems currently initialised among `flags`; empty `flags` asks for all
    pub fn was_init(&self, flags: InitFlags) -> InitFlags {
        InitFlags::from_bits_truncate(unsafe { (self.api().SDL_WasInit)(flags.bits()) })
    }

    /// Shut every subsystem down immediately
    ///
    /// The last clone of the context does this automatically once `init` has
    /// been called.
    ///
    /// # Safety
    /// No window, renderer, texture, camera or other video/camera handle
    /// created from this context may be used or dropped afterwards.
    pub unsafe fn quit(&self) {
        log::debug!("SDL_Quit requested");
        (self.api().SDL_Quit)();
        self.shared.initialized.store(false, Ordering::Release);
    }

    /// Describe the application to SDL; call before `init`
    pub fn set_app_metadata(&self, name: &str, version: Option<&str>, identifier: Option<&str>) -> Result<()> {
        let name = sys::c_string(name)?;
        let version = sys::optional_c_string(version)?;
        let identifier = sys::optional_c_string(identifier)?;
        self.check(unsafe {
            (self.api().SDL_SetAppMetadata)(
                name.as_ptr(),
                sys::optional_ptr(&version),
                sys::optional_ptr(&identifier),
            )
        })
    }

    /// Version of the loaded library
    pub fn version(&self) -> Version {
        Version::from_packed(unsafe { (self.api().SDL_GetVersion)() })
    }

    /// Source revision the loaded library was built from
    pub fn revision(&self) -> String {
        unsafe { sys::string_from_ptr((self.api().SDL_GetRevision)()) }
    }

    /// Last error message set on this thread, if any
    pub fn get_error(&self) -> Option<String> {
        let message = unsafe { sys::string_from_ptr((self.api().SDL_GetError)()) };
        if message.is_empty() {
            None
        } else {
            Some(message)
        }
    }

    /// Clear the thread's error message
    pub fn clear_error(&self) {
        unsafe { (self.api().SDL_ClearError)() };
    }

    /// Set a configuration hint
    pub fn set_hint(&self, name: &str, value: &str) -> Result<()> {
        let name = sys::c_string(name)?;
        let value = sys::c_string(value)?;
        self.check(unsafe { (self.api().SDL_SetHint)(name.as_ptr(), value.as_ptr()) })
    }

    /// Current value of a hint
    pub fn get_hint(&self, name: &str) -> Result<Option<String>> {
        let name = sys::c_string(name)?;
        Ok(unsafe { sys::optional_string_from_ptr((self.api().SDL_GetHint)(name.as_ptr())) })
    }

    /// Restore a hint to its default
    pub fn reset_hint(&self, name: &str) -> Result<()> {
        let name = sys::c_string(name)?;
        self.check(unsafe { (self.api().SDL_ResetHint)(name.as_ptr()) })
    }

    /// Read a whole file through SDL's I/O layer
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let path = sys::path_c_string(path.as_ref())?;
        let mut size = 0usize;
        let data = unsafe { (self.api().SDL_LoadFile)(path.as_ptr(), &mut size) };
        // SAFETY: SDL returned `size` bytes it allocated.
        unsafe { self.take_bytes(data, size) }
    }

    /// Write a whole file through SDL's I/O layer
    pub fn save_file(&self, path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
        let path = sys::path_c_string(path.as_ref())?;
        self.check(unsafe {
            (self.api().SDL_SaveFile)(path.as_ptr(), data.as_ptr().cast(), data.len())
        })
    }

    /// Copy and free an SDL-allocated byte buffer
    ///
    /// # Safety
    /// `data` must be null or an SDL allocation of at least `size` bytes.
    pub(crate) unsafe fn take_bytes(&self, data: *mut c_void, size: usize) -> Result<Vec<u8>> {
        if data.is_null() {
            return Err(self.error());
        }
        let bytes = std::slice::from_raw_parts(data.cast::<u8>(), size).to_vec();
        self.free(data);
        Ok(bytes)
    }

    /// Copy and free an SDL-allocated array of C strings
    ///
    /// # Safety
    /// `list` must be null or an SDL allocation of `count` string pointers.
    pub(crate) unsafe fn take_string_list(&self, list: *mut *mut c_char, count: c_int) -> Result<Vec<String>> {
        if list.is_null() {
            return Err(self.error());
        }
        let len = usize::try_from(count).unwrap_or(0);
        let strings = std::slice::from_raw_parts(list, len)
            .iter()
            .map(|entry| sys::string_from_ptr(*entry))
            .collect();
        self.free(list);
        Ok(strings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_decoding() {
        let version = Version::from_packed(3_002_010);
        assert_eq!(version, Version { major: 3, minor: 2, micro: 10 });
        assert_eq!(version.to_string(), "3.2.10");
        assert_eq!(version.packed(), 3_002_010);
    }

    #[test]
    fn test_version_ordering() {
        let version = Version::from_packed(3_002_004);
        assert!(version.at_least(3, 2, 0));
        assert!(version.at_least(3, 2, 4));
        assert!(!version.at_least(3, 3, 0));
        assert_eq!(Version::from_packed(-1), Version { major: 0, minor: 0, micro: 0 });
    }

    #[test]
    fn test_init_flag_values() {
        assert_eq!(InitFlags::VIDEO.bits(), 0x20);
        assert_eq!(InitFlags::CAMERA.bits(), 0x1_0000);
        assert_eq!((InitFlags::VIDEO | InitFlags::EVENTS).bits(), 0x4020);
        assert_eq!(InitFlags::from_bits_truncate(0x8000_0020), InitFlags::VIDEO);
    }

    #[test]
    fn test_load_missing_library_fails() {
        let err = Sdl::load_from("/nonexistent/libSDL3.so.0").unwrap_err();
        assert!(matches!(err, Error::Load { .. }));
    }

    #[test]
    fn test_from_config_validates_first() {
        let config = SdlConfig::new("").with_sdl_library("/nonexistent/libSDL3.so.0");
        let err = Sdl::from_config(&config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
