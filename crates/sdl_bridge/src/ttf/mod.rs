//! SDL3_ttf: fonts, shaped text and text engines
//!
//! The satellite library is loaded separately from SDL3 but shares its
//! error state and allocator, so every wrapper here reports failures
//! through the [`Sdl`] it was loaded against.

mod engine;
mod font;
mod text;

use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub use engine::{RendererTextEngine, SurfaceTextEngine, TextEngine};
pub use font::{Direction, Font, FontStyle, GlyphMetrics, Hinting, HorizontalAlignment};
pub use text::Text;

use crate::config::SdlConfig;
use crate::context::{Sdl, Version};
use crate::error::Result;
use crate::sys::{self, TtfApi};

struct Shared {
    sdl: Sdl,
    api: TtfApi,
    initialized: AtomicBool,
}

impl Drop for Shared {
    fn drop(&mut self) {
        if self.initialized.load(Ordering::Acquire) {
            log::debug!("Shutting down SDL_ttf");
            // SAFETY: fonts, engines and texts hold clones, so none remain.
            unsafe { (self.api.TTF_Quit)() };
        }
    }
}

/// Handle to the loaded SDL3_ttf library
#[derive(Clone)]
pub struct Ttf {
    shared: Arc<Shared>,
}

impl Ttf {
    /// Load SDL3_ttf from the platform's default library names
    pub fn load(sdl: &Sdl) -> Result<Self> {
        Self::open(sdl, None)
    }

    /// Load SDL3_ttf from an explicit path
    pub fn load_from(sdl: &Sdl, path: impl AsRef<Path>) -> Result<Self> {
        Self::open(sdl, Some(path.as_ref()))
    }

    /// Load using the configured library path and initialise
    pub fn from_config(sdl: &Sdl, config: &SdlConfig) -> Result<Self> {
        let ttf = Self::open(sdl, config.ttf_library.as_deref())?;
        ttf.init()?;
        Ok(ttf)
    }

    fn open(sdl: &Sdl, path: Option<&Path>) -> Result<Self> {
        let library = sys::open_library(path, sys::TTF_LIBRARY_NAMES)?;
        // SAFETY: the library was found under an SDL3_ttf name; the table matches the 3.2 ABI.
        let api = unsafe { TtfApi::resolve(library)? };
        let ttf = Self {
            shared: Arc::new(Shared {
                sdl: sdl.clone(),
                api,
                initialized: AtomicBool::new(false),
            }),
        };
        log::info!("Loaded SDL_ttf {}", ttf.version());
        Ok(ttf)
    }

    /// Raw entry point table
    pub fn api(&self) -> &TtfApi {
        &self.shared.api
    }

    /// The SDL context this library reports errors through
    pub fn sdl(&self) -> &Sdl {
        &self.shared.sdl
    }

    /// Initialise the library; reference counted natively
    pub fn init(&self) -> Result<()> {
        self.sdl().check(unsafe { (self.api().TTF_Init)() })?;
        self.shared.initialized.store(true, Ordering::Release);
        Ok(())
    }

    /// Native init reference count
    pub fn was_init(&self) -> i32 {
        unsafe { (self.api().TTF_WasInit)() }
    }

    /// Release one init reference now instead of when the last handle drops
    ///
    /// # Safety
    ///
    /// No font, engine or text may be used after the count reaches zero.
    pub unsafe fn quit(&self) {
        (self.api().TTF_Quit)();
        if self.was_init() == 0 {
            self.shared.initialized.store(false, Ordering::Release);
        }
    }

    /// Version of the loaded library
    pub fn version(&self) -> Version {
        Version::from_packed(unsafe { (self.api().TTF_Version)() })
    }
}

impl fmt::Debug for Ttf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ttf").field("version", &self.version()).finish()
    }
}

/// Pack a four-letter OpenType tag such as `"Latn"`, padding with spaces
pub fn tag(name: &str) -> u32 {
    let mut bytes = [b' '; 4];
    for (slot, byte) in bytes.iter_mut().zip(name.bytes()) {
        *slot = byte;
    }
    u32::from_be_bytes(bytes)
}

/// Unpack a tag made by [`tag`]
pub fn tag_to_string(tag: u32) -> String {
    String::from_utf8_lossy(&tag.to_be_bytes()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_packing() {
        assert_eq!(tag("Latn"), 0x4C61_746E);
        assert_eq!(tag_to_string(tag("Arab")), "Arab");
    }

    #[test]
    fn test_tag_padding_and_truncation() {
        assert_eq!(tag_to_string(tag("en")), "en  ");
        assert_eq!(tag("Latnx"), tag("Latn"));
        assert_eq!(tag(""), u32::from_be_bytes(*b"    "));
    }
}
