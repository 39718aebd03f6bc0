use std::fmt;

use crate::context::Sdl;
use crate::error::Result;
use crate::pixels::PixelFormat;
use crate::rect::Rect;
use crate::sys::{self, SDL_DisplayID, SDL_DisplayMode};

/// `SDL_DisplayOrientation`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayOrientation {
    /// Cannot be determined
    #[default]
    Unknown,
    /// Landscape, right side up
    Landscape,
    /// Landscape, upside down
    LandscapeFlipped,
    /// Portrait, right side up
    Portrait,
    /// Portrait, upside down
    PortraitFlipped,
}

impl DisplayOrientation {
    /// Decode a native value
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Landscape,
            2 => Self::LandscapeFlipped,
            3 => Self::Portrait,
            4 => Self::PortraitFlipped,
            _ => Self::Unknown,
        }
    }
}

/// A display mode, copied out of SDL
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMode {
    /// Display this mode belongs to
    pub display_id: SDL_DisplayID,
    /// Pixel format
    pub format: PixelFormat,
    /// Width in screen coordinates
    pub width: i32,
    /// Height in screen coordinates
    pub height: i32,
    /// Pixels per screen coordinate
    pub pixel_density: f32,
    /// Refresh rate in Hz, 0 if unknown
    pub refresh_rate: f32,
    /// Exact refresh rate numerator
    pub refresh_rate_numerator: i32,
    /// Exact refresh rate denominator
    pub refresh_rate_denominator: i32,
}

impl From<&SDL_DisplayMode> for DisplayMode {
    fn from(mode: &SDL_DisplayMode) -> Self {
        Self {
            display_id: mode.display_id,
            format: PixelFormat(mode.format),
            width: mode.w,
            height: mode.h,
            pixel_density: mode.pixel_density,
            refresh_rate: mode.refresh_rate,
            refresh_rate_numerator: mode.refresh_rate_numerator,
            refresh_rate_denominator: mode.refresh_rate_denominator,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@{}Hz", self.width, self.height, self.refresh_rate)
    }
}

/// A connected display
#[derive(Clone)]
pub struct Display {
    sdl: Sdl,
    id: SDL_DisplayID,
}

impl Display {
    pub(crate) fn new(sdl: &Sdl, id: SDL_DisplayID) -> Self {
        Self { sdl: sdl.clone(), id }
    }

    /// Native display id
    pub fn id(&self) -> SDL_DisplayID {
        self.id
    }

    /// Human-readable name
    pub fn name(&self) -> Result<String> {
        let name = unsafe { (self.sdl.api().SDL_GetDisplayName)(self.id) };
        let name = self.sdl.check_const_ptr(name)?;
        Ok(unsafe { sys::string_from_ptr(name.as_ptr()) })
    }

    /// Desktop area in global coordinates
    pub fn bounds(&self) -> Result<Rect> {
        let mut rect = Rect::default();
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_GetDisplayBounds)(self.id, &mut rect) })?;
        Ok(rect)
    }

    /// Bounds minus taskbars, docks and menu bars
    pub fn usable_bounds(&self) -> Result<Rect> {
        let mut rect = Rect::default();
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_GetDisplayUsableBounds)(self.id, &mut rect) })?;
        Ok(rect)
    }

    /// Content scale the user asked for (e.g. 1.5 for 150%)
    pub fn content_scale(&self) -> Result<f32> {
        let scale = unsafe { (self.sdl.api().SDL_GetDisplayContentScale)(self.id) };
        if scale == 0.0 {
            return Err(self.sdl.error());
        }
        Ok(scale)
    }

    /// Current orientation
    pub fn orientation(&self) -> DisplayOrientation {
        DisplayOrientation::from_raw(unsafe { (self.sdl.api().SDL_GetCurrentDisplayOrientation)(self.id) })
    }

    /// Mode of the desktop, independent of fullscreen windows
    pub fn desktop_mode(&self) -> Result<DisplayMode> {
        let mode = unsafe { (self.sdl.api().SDL_GetDesktopDisplayMode)(self.id) };
        let mode = self.sdl.check_const_ptr(mode)?;
        // SAFETY: SDL keeps the mode alive; it is copied immediately.
        Ok(DisplayMode::from(unsafe { mode.as_ref() }))
    }

    /// Mode currently in effect
    pub fn current_mode(&self) -> Result<DisplayMode> {
        let mode = unsafe { (self.sdl.api().SDL_GetCurrentDisplayMode)(self.id) };
        let mode = self.sdl.check_const_ptr(mode)?;
        Ok(DisplayMode::from(unsafe { mode.as_ref() }))
    }

    /// Fullscreen modes, best first
    pub fn fullscreen_modes(&self) -> Result<Vec<DisplayMode>> {
        let mut count = 0;
        let modes = unsafe { (self.sdl.api().SDL_GetFullscreenDisplayModes)(self.id, &mut count) };
        // SAFETY: one allocation holding `count` mode pointers.
        let modes = unsafe { self.sdl.take_pointer_array(modes, count)? };
        Ok(modes.iter().map(DisplayMode::from).collect())
    }
}

impl fmt::Debug for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Display").field("id", &self.id).finish()
    }
}

impl PartialEq for Display {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Display {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_decoding() {
        assert_eq!(DisplayOrientation::from_raw(0), DisplayOrientation::Unknown);
        assert_eq!(DisplayOrientation::from_raw(3), DisplayOrientation::Portrait);
        assert_eq!(DisplayOrientation::from_raw(9), DisplayOrientation::Unknown);
    }

    #[test]
    fn test_mode_conversion() {
        let raw = SDL_DisplayMode {
            display_id: 2,
            format: PixelFormat::XRGB8888.0,
            w: 1920,
            h: 1080,
            pixel_density: 1.0,
            refresh_rate: 59.94,
            refresh_rate_numerator: 60000,
            refresh_rate_denominator: 1001,
            internal: std::ptr::null_mut(),
        };
        let mode = DisplayMode::from(&raw);
        assert_eq!(mode.format, PixelFormat::XRGB8888);
        assert_eq!((mode.width, mode.height), (1920, 1080));
        assert_eq!(mode.to_string(), "1920x1080@59.94Hz");
    }
}
