use std::ffi::c_int;
use std::fmt;
use std::path::Path;
use std::ptr::NonNull;
use std::rc::Rc;

use super::ProcAddress;
use crate::context::Sdl;
use crate::error::Result;
use crate::sys::{self, SDL_GLContextState, SDL_Window};
use crate::video::window::WindowInner;
use crate::video::Window;

/// `SDL_GLAttr`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum GlAttr {
    /// Minimum red bits
    RedSize = 0,
    /// Minimum green bits
    GreenSize = 1,
    /// Minimum blue bits
    BlueSize = 2,
    /// Minimum alpha bits
    AlphaSize = 3,
    /// Minimum framebuffer bits
    BufferSize = 4,
    /// Double buffering
    DoubleBuffer = 5,
    /// Depth buffer bits
    DepthSize = 6,
    /// Stencil buffer bits
    StencilSize = 7,
    /// Accumulation red bits
    AccumRedSize = 8,
    /// Accumulation green bits
    AccumGreenSize = 9,
    /// Accumulation blue bits
    AccumBlueSize = 10,
    /// Accumulation alpha bits
    AccumAlphaSize = 11,
    /// Stereo rendering
    Stereo = 12,
    /// Multisample buffers
    MultisampleBuffers = 13,
    /// Samples per pixel
    MultisampleSamples = 14,
    /// Require hardware acceleration
    AcceleratedVisual = 15,
    /// Unused since SDL 2
    RetainedBacking = 16,
    /// Context major version
    ContextMajorVersion = 17,
    /// Context minor version
    ContextMinorVersion = 18,
    /// Context flags
    ContextFlags = 19,
    /// Context profile, see [`GlProfile`]
    ContextProfileMask = 20,
    /// Share objects with the current context
    ShareWithCurrentContext = 21,
    /// sRGB capable framebuffer
    FramebufferSrgbCapable = 22,
    /// Flush behaviour on context release
    ContextReleaseBehavior = 23,
    /// Reset notification strategy
    ContextResetNotification = 24,
    /// Disable error checking
    ContextNoError = 25,
    /// Floating point framebuffer
    FloatBuffers = 26,
    /// EGL platform
    EglPlatform = 27,
}

/// Values for [`GlAttr::ContextProfileMask`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum GlProfile {
    /// Core profile
    Core = 0x0001,
    /// Compatibility profile
    Compatibility = 0x0002,
    /// OpenGL ES
    Es = 0x0004,
}

impl Sdl {
    /// Load an OpenGL library, or the default one with `None`; call before creating GL windows
    pub fn gl_load_library(&self, path: Option<&Path>) -> Result<()> {
        let path = path.map(sys::path_c_string).transpose()?;
        self.check(unsafe { (self.api().SDL_GL_LoadLibrary)(sys::optional_ptr(&path)) })
    }

    /// Unload the library loaded by [`Self::gl_load_library`]
    pub fn gl_unload_library(&self) {
        unsafe { (self.api().SDL_GL_UnloadLibrary)() };
    }

    /// Look up a GL function; cast it to the right signature before calling
    pub fn gl_proc_address(&self, name: &str) -> Result<Option<ProcAddress>> {
        let name = sys::c_string(name)?;
        Ok(unsafe { (self.api().SDL_GL_GetProcAddress)(name.as_ptr()) })
    }

    /// True if the current context supports `extension`
    pub fn gl_extension_supported(&self, extension: &str) -> Result<bool> {
        let extension = sys::c_string(extension)?;
        Ok(unsafe { (self.api().SDL_GL_ExtensionSupported)(extension.as_ptr()) })
    }

    /// Reset every attribute to its default
    pub fn gl_reset_attributes(&self) {
        unsafe { (self.api().SDL_GL_ResetAttributes)() };
    }

    /// Request an attribute for windows and contexts created afterwards
    pub fn gl_set_attribute(&self, attr: GlAttr, value: i32) -> Result<()> {
        self.check(unsafe { (self.api().SDL_GL_SetAttribute)(attr as c_int, value) })
    }

    /// Actual value of an attribute for the current context
    pub fn gl_attribute(&self, attr: GlAttr) -> Result<i32> {
        let mut value = 0;
        self.check(unsafe { (self.api().SDL_GL_GetAttribute)(attr as c_int, &mut value) })?;
        Ok(value)
    }

    /// Request a core, compatibility or ES context
    pub fn gl_set_profile(&self, profile: GlProfile) -> Result<()> {
        self.gl_set_attribute(GlAttr::ContextProfileMask, profile as i32)
    }

    /// Window of the current context
    pub fn gl_current_window(&self) -> Option<NonNull<SDL_Window>> {
        NonNull::new(unsafe { (self.api().SDL_GL_GetCurrentWindow)() })
    }

    /// The current context, if any
    pub fn gl_current_context(&self) -> Option<NonNull<SDL_GLContextState>> {
        NonNull::new(unsafe { (self.api().SDL_GL_GetCurrentContext)() })
    }

    /// 0 immediate, 1 vsync, -1 adaptive vsync
    pub fn gl_set_swap_interval(&self, interval: i32) -> Result<()> {
        self.check(unsafe { (self.api().SDL_GL_SetSwapInterval)(interval) })
    }

    /// Current swap interval
    pub fn gl_swap_interval(&self) -> Result<i32> {
        let mut interval = 0;
        self.check(unsafe { (self.api().SDL_GL_GetSwapInterval)(&mut interval) })?;
        Ok(interval)
    }
}

impl Window {
    /// Swap the GL back buffer of this window
    pub fn gl_swap(&self) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_GL_SwapWindow)(self.raw()) })
    }
}

/// An OpenGL context, current on creation
///
/// Keeps its window alive.
pub struct GlContext {
    sdl: Sdl,
    raw: NonNull<SDL_GLContextState>,
    _window: Rc<WindowInner>,
}

impl GlContext {
    /// Create a context for a window created with [`crate::video::WindowFlags::OPENGL`]
    pub fn new(window: &Window) -> Result<Self> {
        let sdl = window.sdl().clone();
        let raw = sdl.check_ptr(unsafe { (sdl.api().SDL_GL_CreateContext)(window.raw()) })?;
        log::debug!("Created GL context {raw:p}");
        Ok(Self {
            sdl,
            raw,
            _window: window.shared(),
        })
    }

    /// Raw context handle
    pub fn raw(&self) -> *mut SDL_GLContextState {
        self.raw.as_ptr()
    }

    /// Make this context current on `window`
    pub fn make_current(&self, window: &Window) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_GL_MakeCurrent)(window.raw(), self.raw()) })
    }

    /// True if this context is current on the calling thread
    pub fn is_current(&self) -> bool {
        self.sdl.gl_current_context() == Some(self.raw)
    }
}

impl Drop for GlContext {
    fn drop(&mut self) {
        if !unsafe { (self.sdl.api().SDL_GL_DestroyContext)(self.raw()) } {
            log::warn!("Destroying GL context failed: {}", self.sdl.error());
        }
    }
}

impl fmt::Debug for GlContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlContext").field("raw", &self.raw).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_values() {
        assert_eq!(GlAttr::RedSize as i32, 0);
        assert_eq!(GlAttr::DoubleBuffer as i32, 5);
        assert_eq!(GlAttr::ContextMajorVersion as i32, 17);
        assert_eq!(GlAttr::ContextProfileMask as i32, 20);
        assert_eq!(GlAttr::EglPlatform as i32, 27);
    }

    #[test]
    fn test_profile_values() {
        assert_eq!(GlProfile::Core as i32, 1);
        assert_eq!(GlProfile::Compatibility as i32, 2);
        assert_eq!(GlProfile::Es as i32, 4);
    }
}
