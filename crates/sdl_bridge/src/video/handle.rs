//! `raw-window-handle` support
//!
//! SDL publishes the native handles of every window in its property group.
//! Which properties exist depends on the video driver in use, so the driver
//! name picks the handle flavour.

use std::ffi::{c_int, c_ulong, c_void};
use std::num::NonZeroIsize;
use std::ptr::NonNull;

use raw_window_handle::{
    AppKitDisplayHandle, AppKitWindowHandle, DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle,
    RawDisplayHandle, RawWindowHandle, WaylandDisplayHandle, WaylandWindowHandle, Win32WindowHandle,
    WindowHandle, WindowsDisplayHandle, XlibDisplayHandle, XlibWindowHandle,
};

use super::window::Window;
use crate::properties::Properties;

const X11_DISPLAY: &str = "SDL.window.x11.display";
const X11_SCREEN: &str = "SDL.window.x11.screen";
const X11_WINDOW: &str = "SDL.window.x11.window";
const WAYLAND_DISPLAY: &str = "SDL.window.wayland.display";
const WAYLAND_SURFACE: &str = "SDL.window.wayland.surface";
const WIN32_HWND: &str = "SDL.window.win32.hwnd";
const WIN32_INSTANCE: &str = "SDL.window.win32.instance";
const COCOA_WINDOW: &str = "SDL.window.cocoa.window";

/// Windowing system behind the current video driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// X11 through Xlib
    X11,
    /// Wayland
    Wayland,
    /// Win32
    Windows,
    /// macOS AppKit
    Cocoa,
}

impl Platform {
    /// Map a video driver name as returned by `current_video_driver`
    pub fn from_driver(driver: &str) -> Option<Self> {
        match driver {
            "x11" => Some(Self::X11),
            "wayland" => Some(Self::Wayland),
            "windows" => Some(Self::Windows),
            "cocoa" => Some(Self::Cocoa),
            _ => None,
        }
    }
}

fn pointer(props: &Properties, name: &str) -> Result<NonNull<c_void>, HandleError> {
    props
        .get_pointer(name, std::ptr::null_mut())
        .ok()
        .and_then(NonNull::new)
        .ok_or(HandleError::Unavailable)
}

fn number(props: &Properties, name: &str) -> Result<i64, HandleError> {
    match props.get_number(name, 0) {
        Ok(0) | Err(_) => Err(HandleError::Unavailable),
        Ok(value) => Ok(value),
    }
}

impl Window {
    /// Windowing system this window lives on, if it is one `raw-window-handle` can describe
    pub fn platform(&self) -> Option<Platform> {
        Platform::from_driver(&self.sdl().current_video_driver()?)
    }

    fn handle_properties(&self) -> Result<(Platform, Properties), HandleError> {
        let platform = self.platform().ok_or(HandleError::NotSupported)?;
        let props = self.properties().map_err(|_| HandleError::Unavailable)?;
        Ok((platform, props))
    }

    fn raw_window(&self) -> Result<RawWindowHandle, HandleError> {
        let (platform, props) = self.handle_properties()?;
        let raw = match platform {
            Platform::X11 => {
                let window = number(&props, X11_WINDOW)?;
                RawWindowHandle::Xlib(XlibWindowHandle::new(window as c_ulong))
            }
            Platform::Wayland => RawWindowHandle::Wayland(WaylandWindowHandle::new(pointer(&props, WAYLAND_SURFACE)?)),
            Platform::Windows => {
                let hwnd = pointer(&props, WIN32_HWND)?;
                let mut handle = Win32WindowHandle::new(
                    NonZeroIsize::new(hwnd.as_ptr() as isize).ok_or(HandleError::Unavailable)?,
                );
                handle.hinstance = pointer(&props, WIN32_INSTANCE)
                    .ok()
                    .and_then(|instance| NonZeroIsize::new(instance.as_ptr() as isize));
                RawWindowHandle::Win32(handle)
            }
            Platform::Cocoa => {
                let ns_window = pointer(&props, COCOA_WINDOW)?;
                RawWindowHandle::AppKit(AppKitWindowHandle::new(appkit::content_view(ns_window)?))
            }
        };
        Ok(raw)
    }

    fn raw_display(&self) -> Result<RawDisplayHandle, HandleError> {
        let (platform, props) = self.handle_properties()?;
        let raw = match platform {
            Platform::X11 => {
                let screen = props.get_number(X11_SCREEN, 0).unwrap_or(0);
                RawDisplayHandle::Xlib(XlibDisplayHandle::new(
                    pointer(&props, X11_DISPLAY).ok(),
                    screen as c_int,
                ))
            }
            Platform::Wayland => RawDisplayHandle::Wayland(WaylandDisplayHandle::new(pointer(&props, WAYLAND_DISPLAY)?)),
            Platform::Windows => RawDisplayHandle::Windows(WindowsDisplayHandle::new()),
            Platform::Cocoa => RawDisplayHandle::AppKit(AppKitDisplayHandle::new()),
        };
        Ok(raw)
    }
}

impl HasWindowHandle for Window {
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        let raw = self.raw_window()?;
        // SAFETY: the native window outlives the borrow of `self`.
        Ok(unsafe { WindowHandle::borrow_raw(raw) })
    }
}

impl HasDisplayHandle for Window {
    fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        let raw = self.raw_display()?;
        // SAFETY: the display connection lives as long as the video subsystem.
        Ok(unsafe { DisplayHandle::borrow_raw(raw) })
    }
}

#[cfg(target_os = "macos")]
mod appkit {
    use std::ffi::{c_char, c_void};
    use std::ptr::NonNull;

    use raw_window_handle::HandleError;

    type SelRegisterName = unsafe extern "C" fn(*const c_char) -> *mut c_void;
    type MsgSend = unsafe extern "C" fn(*mut c_void, *mut c_void) -> *mut c_void;

    /// `[ns_window contentView]` through the Objective-C runtime
    pub(super) fn content_view(ns_window: NonNull<c_void>) -> Result<NonNull<c_void>, HandleError> {
        // SAFETY: libobjc is always present on macOS; the signatures match the runtime ABI.
        unsafe {
            let runtime = libloading::Library::new("/usr/lib/libobjc.A.dylib").map_err(|_| HandleError::Unavailable)?;
            let sel_register_name = runtime
                .get::<SelRegisterName>(b"sel_registerName\0")
                .map_err(|_| HandleError::Unavailable)?;
            let msg_send = runtime
                .get::<MsgSend>(b"objc_msgSend\0")
                .map_err(|_| HandleError::Unavailable)?;
            let selector = sel_register_name(c"contentView".as_ptr());
            NonNull::new(msg_send(ns_window.as_ptr(), selector)).ok_or(HandleError::Unavailable)
        }
    }
}

#[cfg(not(target_os = "macos"))]
mod appkit {
    use std::ffi::c_void;
    use std::ptr::NonNull;

    use raw_window_handle::HandleError;

    pub(super) fn content_view(_ns_window: NonNull<c_void>) -> Result<NonNull<c_void>, HandleError> {
        Err(HandleError::NotSupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_driver() {
        assert_eq!(Platform::from_driver("x11"), Some(Platform::X11));
        assert_eq!(Platform::from_driver("wayland"), Some(Platform::Wayland));
        assert_eq!(Platform::from_driver("windows"), Some(Platform::Windows));
        assert_eq!(Platform::from_driver("cocoa"), Some(Platform::Cocoa));
        assert_eq!(Platform::from_driver("offscreen"), None);
        assert_eq!(Platform::from_driver("dummy"), None);
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_appkit_unsupported_elsewhere() {
        let fake = NonNull::<c_void>::dangling();
        assert!(matches!(appkit::content_view(fake), Err(HandleError::NotSupported)));
    }
}
