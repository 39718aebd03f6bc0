use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;
use std::rc::Rc;

use crate::context::Sdl;
use crate::error::Result;
use crate::video::window::WindowInner;
use crate::video::Window;

/// An `NSView`/`UIView` with a `CAMetalLayer`, attached to a window
pub struct MetalView {
    sdl: Sdl,
    raw: NonNull<c_void>,
    _window: Rc<WindowInner>,
}

impl MetalView {
    /// Attach a Metal view to `window`
    pub fn new(window: &Window) -> Result<Self> {
        let sdl = window.sdl().clone();
        let raw = sdl.check_ptr(unsafe { (sdl.api().SDL_Metal_CreateView)(window.raw()) })?;
        Ok(Self {
            sdl,
            raw,
            _window: window.shared(),
        })
    }

    /// The view pointer
    pub fn raw(&self) -> NonNull<c_void> {
        self.raw
    }

    /// The view's `CAMetalLayer`
    pub fn layer(&self) -> Result<NonNull<c_void>> {
        self.sdl
            .check_ptr(unsafe { (self.sdl.api().SDL_Metal_GetLayer)(self.raw.as_ptr()) })
    }
}

impl Drop for MetalView {
    fn drop(&mut self) {
        unsafe { (self.sdl.api().SDL_Metal_DestroyView)(self.raw.as_ptr()) };
    }
}

impl fmt::Debug for MetalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetalView").field("raw", &self.raw).finish()
    }
}
