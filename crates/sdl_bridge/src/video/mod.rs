//! Video subsystem: drivers, displays and windows
//!
//! Everything in here must be used from the thread that initialised the
//! video subsystem, so none of these types are `Send`.

mod display;
mod handle;
pub(crate) mod window;

pub use display::{Display, DisplayMode, DisplayOrientation};
pub use handle::Platform;
pub use window::{Window, WindowFlags, WindowSurface, WINDOWPOS_CENTERED, WINDOWPOS_UNDEFINED};

use crate::context::Sdl;
use crate::error::Result;
use crate::sys;

impl Sdl {
    /// Names of the video drivers compiled into SDL, in priority order
    pub fn video_drivers(&self) -> Vec<String> {
        let count = unsafe { (self.api().SDL_GetNumVideoDrivers)() };
        (0..count)
            .map(|index| unsafe { sys::string_from_ptr((self.api().SDL_GetVideoDriver)(index)) })
            .collect()
    }

    /// Name of the initialised video driver
    pub fn current_video_driver(&self) -> Option<String> {
        unsafe { sys::optional_string_from_ptr((self.api().SDL_GetCurrentVideoDriver)()) }
    }

    /// Connected displays
    pub fn displays(&self) -> Result<Vec<Display>> {
        let mut count = 0;
        let ids = unsafe { (self.api().SDL_GetDisplays)(&mut count) };
        // SAFETY: SDL returned `count` display ids.
        let ids = unsafe { self.take_array(ids, count)? };
        Ok(ids.into_iter().map(|id| Display::new(self, id)).collect())
    }

    /// The primary display
    pub fn primary_display(&self) -> Result<Display> {
        let id = self.check_id(unsafe { (self.api().SDL_GetPrimaryDisplay)() })?;
        Ok(Display::new(self, id))
    }
}
