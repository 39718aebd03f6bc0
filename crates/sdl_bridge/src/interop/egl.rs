//! EGL queries for contexts SDL created through EGL

use std::ffi::c_void;
use std::ptr::NonNull;

use super::ProcAddress;
use crate::context::Sdl;
use crate::error::Result;
use crate::sys;
use crate::video::Window;

impl Sdl {
    /// Look up an EGL function
    pub fn egl_proc_address(&self, name: &str) -> Result<Option<ProcAddress>> {
        let name = sys::c_string(name)?;
        Ok(unsafe { (self.api().SDL_EGL_GetProcAddress)(name.as_ptr()) })
    }

    /// `EGLDisplay` of the current context
    pub fn egl_current_display(&self) -> Option<NonNull<c_void>> {
        NonNull::new(unsafe { (self.api().SDL_EGL_GetCurrentDisplay)() })
    }

    /// `EGLConfig` of the current context
    pub fn egl_current_config(&self) -> Option<NonNull<c_void>> {
        NonNull::new(unsafe { (self.api().SDL_EGL_GetCurrentConfig)() })
    }
}

impl Window {
    /// `EGLSurface` backing this window
    pub fn egl_surface(&self) -> Result<NonNull<c_void>> {
        self.sdl()
            .check_ptr(unsafe { (self.sdl().api().SDL_EGL_GetWindowSurface)(self.raw()) })
    }
}
