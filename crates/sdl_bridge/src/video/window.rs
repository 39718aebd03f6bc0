use std::cell::Cell;
use std::ffi::c_int;
use std::fmt;
use std::ops::Deref;
use std::ptr::NonNull;
use std::rc::Rc;

use bitflags::bitflags;

use super::display::Display;
use crate::context::Sdl;
use crate::error::{to_c_int, Error, Result};
use crate::pixels::PixelFormat;
use crate::properties::Properties;
use crate::surface::{Surface, SurfaceLock, SurfaceRef, SurfaceTarget};
use crate::sys::{self, SDL_Window, SDL_WindowID};

bitflags! {
    /// `SDL_WindowFlags`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u64 {
        /// Fullscreen mode
        const FULLSCREEN = 0x0000_0001;
        /// Usable with an OpenGL context
        const OPENGL = 0x0000_0002;
        /// Fully covered by other windows
        const OCCLUDED = 0x0000_0004;
        /// Not visible
        const HIDDEN = 0x0000_0008;
        /// No decorations
        const BORDERLESS = 0x0000_0010;
        /// User can resize
        const RESIZABLE = 0x0000_0020;
        /// Minimized
        const MINIMIZED = 0x0000_0040;
        /// Maximized
        const MAXIMIZED = 0x0000_0080;
        /// Grabs mouse input
        const MOUSE_GRABBED = 0x0000_0100;
        /// Has input focus
        const INPUT_FOCUS = 0x0000_0200;
        /// Has mouse focus
        const MOUSE_FOCUS = 0x0000_0400;
        /// Not created by SDL
        const EXTERNAL = 0x0000_0800;
        /// Modal to its parent
        const MODAL = 0x0000_1000;
        /// Uses high pixel density back buffers where possible
        const HIGH_PIXEL_DENSITY = 0x0000_2000;
        /// Mouse is captured
        const MOUSE_CAPTURE = 0x0000_4000;
        /// Mouse is in relative mode
        const MOUSE_RELATIVE_MODE = 0x0000_8000;
        /// Stays above other windows
        const ALWAYS_ON_TOP = 0x0001_0000;
        /// Not shown in the taskbar
        const UTILITY = 0x0002_0000;
        /// Tooltip popup
        const TOOLTIP = 0x0004_0000;
        /// Menu popup
        const POPUP_MENU = 0x0008_0000;
        /// Grabs keyboard input
        const KEYBOARD_GRABBED = 0x0010_0000;
        /// Usable with a Vulkan instance
        const VULKAN = 0x1000_0000;
        /// Usable with a Metal view
        const METAL = 0x2000_0000;
        /// Transparent back buffer
        const TRANSPARENT = 0x4000_0000;
        /// Cannot take focus
        const NOT_FOCUSABLE = 0x8000_0000;
    }
}

/// Centre the window on its display
pub const WINDOWPOS_CENTERED: i32 = 0x2FFF_0000;
/// Let the window manager place the window
pub const WINDOWPOS_UNDEFINED: i32 = 0x1FFF_0000;

pub(crate) struct WindowInner {
    sdl: Sdl,
    raw: NonNull<SDL_Window>,
    // SDL destroys popups with their parent, so a popup pins it.
    _parent: Option<Rc<WindowInner>>,
    // Set while a `WindowSurface` is alive on any handle.
    surface_borrowed: Cell<bool>,
}

impl WindowInner {
    pub(crate) fn raw(&self) -> *mut SDL_Window {
        self.raw.as_ptr()
    }
}

impl Drop for WindowInner {
    fn drop(&mut self) {
        log::debug!("Destroying window {:p}", self.raw);
        unsafe { (self.sdl.api().SDL_DestroyWindow)(self.raw()) };
    }
}

/// An OS window
///
/// Renderers, GL contexts and Metal views created for a window keep it
/// alive; the native window is destroyed when the last of them drops.
#[derive(Clone)]
pub struct Window {
    inner: Rc<WindowInner>,
}

impl Window {
    /// Create a window; sizes are in screen coordinates
    pub fn new(sdl: &Sdl, title: &str, width: u32, height: u32, flags: WindowFlags) -> Result<Self> {
        let c_title = sys::c_string(title)?;
        let raw = unsafe {
            (sdl.api().SDL_CreateWindow)(
                c_title.as_ptr(),
                to_c_int("window width", width as usize)?,
                to_c_int("window height", height as usize)?,
                flags.bits(),
            )
        };
        let window = Self::wrap(sdl, sdl.check_ptr(raw)?, None);
        log::debug!("Created window \"{title}\" {width}x{height} {flags:?}");
        Ok(window)
    }

    /// Create a window from `SDL.window.create.*` properties
    pub fn with_properties(sdl: &Sdl, props: &Properties) -> Result<Self> {
        let raw = sdl.check_ptr(unsafe { (sdl.api().SDL_CreateWindowWithProperties)(props.id()) })?;
        Ok(Self::wrap(sdl, raw, None))
    }

    /// Create a tooltip or menu popup at an offset from this window
    ///
    /// `flags` must contain [`WindowFlags::TOOLTIP`] or [`WindowFlags::POPUP_MENU`].
    pub fn popup(&self, offset_x: i32, offset_y: i32, width: u32, height: u32, flags: WindowFlags) -> Result<Self> {
        let sdl = &self.inner.sdl;
        let raw = unsafe {
            (sdl.api().SDL_CreatePopupWindow)(
                self.raw(),
                offset_x,
                offset_y,
                to_c_int("window width", width as usize)?,
                to_c_int("window height", height as usize)?,
                flags.bits(),
            )
        };
        Ok(Self::wrap(sdl, sdl.check_ptr(raw)?, Some(Rc::clone(&self.inner))))
    }

    pub(crate) fn wrap(sdl: &Sdl, raw: NonNull<SDL_Window>, parent: Option<Rc<WindowInner>>) -> Self {
        Self {
            inner: Rc::new(WindowInner {
                sdl: sdl.clone(),
                raw,
                _parent: parent,
                surface_borrowed: Cell::new(false),
            }),
        }
    }

    pub(crate) fn shared(&self) -> Rc<WindowInner> {
        Rc::clone(&self.inner)
    }

    pub(crate) fn sdl(&self) -> &Sdl {
        &self.inner.sdl
    }

    /// Raw window pointer
    pub fn raw(&self) -> *mut SDL_Window {
        self.inner.raw()
    }

    /// Numeric id used in window events
    pub fn id(&self) -> Result<SDL_WindowID> {
        self.sdl().check_id(unsafe { (self.sdl().api().SDL_GetWindowID)(self.raw()) })
    }

    /// Current flags
    pub fn flags(&self) -> WindowFlags {
        WindowFlags::from_bits_retain(unsafe { (self.sdl().api().SDL_GetWindowFlags)(self.raw()) })
    }

    /// Window property group (platform handles live here)
    pub fn properties(&self) -> Result<Properties> {
        Properties::of_object(self.sdl(), unsafe { (self.sdl().api().SDL_GetWindowProperties)(self.raw()) })
    }

    /// Set the title
    pub fn set_title(&self, title: &str) -> Result<()> {
        let title = sys::c_string(title)?;
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetWindowTitle)(self.raw(), title.as_ptr()) })
    }

    /// Current title
    pub fn title(&self) -> String {
        unsafe { sys::string_from_ptr((self.sdl().api().SDL_GetWindowTitle)(self.raw())) }
    }

    /// Set the window icon
    pub fn set_icon(&self, icon: &Surface) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetWindowIcon)(self.raw(), icon.raw()) })
    }

    /// Request a position; accepts [`WINDOWPOS_CENTERED`] and [`WINDOWPOS_UNDEFINED`]
    pub fn set_position(&self, x: i32, y: i32) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetWindowPosition)(self.raw(), x, y) })
    }

    /// Position of the client area
    pub fn position(&self) -> Result<(i32, i32)> {
        self.pair(self.sdl().api().SDL_GetWindowPosition)
    }

    /// Request a client area size in screen coordinates
    pub fn set_size(&self, width: u32, height: u32) -> Result<()> {
        self.ensure_surface_released()?;
        let (w, h) = (to_c_int("window width", width as usize)?, to_c_int("window height", height as usize)?);
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetWindowSize)(self.raw(), w, h) })
    }

    /// Client area size in screen coordinates
    pub fn size(&self) -> Result<(u32, u32)> {
        self.unsigned_pair(self.sdl().api().SDL_GetWindowSize)
    }

    /// Client area size in pixels
    pub fn size_in_pixels(&self) -> Result<(u32, u32)> {
        self.unsigned_pair(self.sdl().api().SDL_GetWindowSizeInPixels)
    }

    /// Minimum client area size; 0 means no limit
    pub fn set_minimum_size(&self, width: u32, height: u32) -> Result<()> {
        let (w, h) = (to_c_int("window width", width as usize)?, to_c_int("window height", height as usize)?);
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetWindowMinimumSize)(self.raw(), w, h) })
    }

    /// Minimum client area size
    pub fn minimum_size(&self) -> Result<(u32, u32)> {
        self.unsigned_pair(self.sdl().api().SDL_GetWindowMinimumSize)
    }

    /// Maximum client area size; 0 means no limit
    pub fn set_maximum_size(&self, width: u32, height: u32) -> Result<()> {
        let (w, h) = (to_c_int("window width", width as usize)?, to_c_int("window height", height as usize)?);
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetWindowMaximumSize)(self.raw(), w, h) })
    }

    /// Maximum client area size
    pub fn maximum_size(&self) -> Result<(u32, u32)> {
        self.unsigned_pair(self.sdl().api().SDL_GetWindowMaximumSize)
    }

    fn pair(&self, get: unsafe extern "C" fn(*mut SDL_Window, *mut c_int, *mut c_int) -> bool) -> Result<(i32, i32)> {
        let (mut a, mut b) = (0, 0);
        self.sdl().check(unsafe { get(self.raw(), &mut a, &mut b) })?;
        Ok((a, b))
    }

    fn unsigned_pair(
        &self,
        get: unsafe extern "C" fn(*mut SDL_Window, *mut c_int, *mut c_int) -> bool,
    ) -> Result<(u32, u32)> {
        let (a, b) = self.pair(get)?;
        Ok((a.max(0) as u32, b.max(0) as u32))
    }

    /// Toggle decorations
    pub fn set_bordered(&self, bordered: bool) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetWindowBordered)(self.raw(), bordered) })
    }

    /// Toggle user resizing
    pub fn set_resizable(&self, resizable: bool) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetWindowResizable)(self.raw(), resizable) })
    }

    /// Keep above other windows
    pub fn set_always_on_top(&self, on_top: bool) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetWindowAlwaysOnTop)(self.raw(), on_top) })
    }

    /// Show the window
    pub fn show(&self) -> Result<()> {
        self.sdl().check(unsafe { (self.sdl().api().SDL_ShowWindow)(self.raw()) })
    }

    /// Hide the window
    pub fn hide(&self) -> Result<()> {
        self.sdl().check(unsafe { (self.sdl().api().SDL_HideWindow)(self.raw()) })
    }

    /// Bring above other windows and request focus
    pub fn raise(&self) -> Result<()> {
        self.sdl().check(unsafe { (self.sdl().api().SDL_RaiseWindow)(self.raw()) })
    }

    /// Maximize
    pub fn maximize(&self) -> Result<()> {
        self.ensure_surface_released()?;
        self.sdl().check(unsafe { (self.sdl().api().SDL_MaximizeWindow)(self.raw()) })
    }

    /// Minimize
    pub fn minimize(&self) -> Result<()> {
        self.ensure_surface_released()?;
        self.sdl().check(unsafe { (self.sdl().api().SDL_MinimizeWindow)(self.raw()) })
    }

    /// Undo maximize or minimize
    pub fn restore(&self) -> Result<()> {
        self.ensure_surface_released()?;
        self.sdl().check(unsafe { (self.sdl().api().SDL_RestoreWindow)(self.raw()) })
    }

    /// Enter or leave fullscreen
    pub fn set_fullscreen(&self, fullscreen: bool) -> Result<()> {
        self.ensure_surface_released()?;
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetWindowFullscreen)(self.raw(), fullscreen) })
    }

    /// Block until pending position/size/state requests are applied
    pub fn sync(&self) -> Result<()> {
        self.sdl().check(unsafe { (self.sdl().api().SDL_SyncWindow)(self.raw()) })
    }

    /// Pixels per screen coordinate
    pub fn pixel_density(&self) -> f32 {
        unsafe { (self.sdl().api().SDL_GetWindowPixelDensity)(self.raw()) }
    }

    /// Pixel density times the display's content scale
    pub fn display_scale(&self) -> f32 {
        unsafe { (self.sdl().api().SDL_GetWindowDisplayScale)(self.raw()) }
    }

    /// Pixel format of the window's back buffer
    pub fn pixel_format(&self) -> PixelFormat {
        PixelFormat(unsafe { (self.sdl().api().SDL_GetWindowPixelFormat)(self.raw()) })
    }

    /// Window opacity, 0.0 to 1.0
    pub fn set_opacity(&self, opacity: f32) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetWindowOpacity)(self.raw(), opacity) })
    }

    /// Window opacity
    pub fn opacity(&self) -> Result<f32> {
        let opacity = unsafe { (self.sdl().api().SDL_GetWindowOpacity)(self.raw()) };
        if opacity < 0.0 {
            return Err(self.sdl().error());
        }
        Ok(opacity)
    }

    /// Display the window is mostly on
    pub fn display(&self) -> Result<Display> {
        let id = self
            .sdl()
            .check_id(unsafe { (self.sdl().api().SDL_GetDisplayForWindow)(self.raw()) })?;
        Ok(Display::new(self.sdl(), id))
    }

    /// Software framebuffer for this window; cannot be combined with a renderer
    ///
    /// Only one window surface may be borrowed at a time across all handles
    /// to this window. Resizing and fullscreen changes are refused until it drops.
    pub fn surface(&mut self) -> Result<WindowSurface<'_>> {
        self.ensure_surface_released()?;
        let raw = self
            .sdl()
            .check_ptr(unsafe { (self.sdl().api().SDL_GetWindowSurface)(self.raw()) })?;
        self.inner.surface_borrowed.set(true);
        Ok(WindowSurface {
            // SAFETY: SDL only replaces the surface on a later `SDL_GetWindowSurface`,
            // which the borrow flag rules out until the guard drops.
            surface: unsafe { Surface::borrowed(self.sdl(), raw) },
            window: &self.inner,
        })
    }

    /// True while a [`WindowSurface`] from any handle is alive
    pub fn is_surface_borrowed(&self) -> bool {
        self.inner.surface_borrowed.get()
    }

    fn ensure_surface_released(&self) -> Result<()> {
        if self.is_surface_borrowed() {
            return Err(Error::InUse("window surface"));
        }
        Ok(())
    }

    /// Copy the window surface to the screen
    pub fn update_surface(&self) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_UpdateWindowSurface)(self.raw()) })
    }
}

/// Exclusive access to a window's framebuffer surface
pub struct WindowSurface<'a> {
    surface: SurfaceRef<'a>,
    window: &'a WindowInner,
}

impl WindowSurface<'_> {
    /// Lock for direct pixel access
    pub fn lock(&mut self) -> Result<SurfaceLock<'_>> {
        self.surface.lock()
    }
}

impl Deref for WindowSurface<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.surface
    }
}

impl SurfaceTarget for WindowSurface<'_> {
    fn as_target(&mut self) -> &Surface {
        self.surface.as_target()
    }
}

impl Drop for WindowSurface<'_> {
    fn drop(&mut self) {
        self.window.surface_borrowed.set(false);
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window").field("raw", &self.inner.raw).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_flag_values() {
        assert_eq!(WindowFlags::FULLSCREEN.bits(), 1);
        assert_eq!(WindowFlags::HIGH_PIXEL_DENSITY.bits(), 0x2000);
        assert_eq!(WindowFlags::KEYBOARD_GRABBED.bits(), 0x0010_0000);
        assert_eq!(WindowFlags::NOT_FOCUSABLE.bits(), 0x8000_0000);
    }

    #[test]
    fn test_unknown_flag_bits_are_kept() {
        let flags = WindowFlags::from_bits_retain(0x1_0000_0000 | 0x20);
        assert!(flags.contains(WindowFlags::RESIZABLE));
        assert_eq!(flags.bits() >> 32, 1);
    }
}
