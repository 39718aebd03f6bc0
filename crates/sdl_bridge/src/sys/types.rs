//! `#[repr(C)]` mirrors of the native structs and handle types
//!
//! Layouts follow the SDL 3.2 / SDL_ttf 3.2 headers. Value types that are
//! also part of the public API (points, rects, colors, vertices) live in
//! their own modules and are used here directly.

#![allow(non_camel_case_types, missing_docs)]

use std::ffi::{c_char, c_int, c_void};

macro_rules! opaque_handles {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _opaque: [u8; 0],
                _pinned: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
            }
        )*
    };
}

opaque_handles!(
    SDL_Window,
    SDL_Renderer,
    SDL_IOStream,
    SDL_AsyncIO,
    SDL_AsyncIOQueue,
    SDL_Storage,
    SDL_Camera,
    SDL_GLContextState,
    TTF_Font,
    TTF_TextEngine,
);

pub type SDL_PropertiesID = u32;
pub type SDL_DisplayID = u32;
pub type SDL_WindowID = u32;
pub type SDL_CameraID = u32;
pub type SDL_PixelFormat = u32;
pub type SDL_Colorspace = u32;
pub type SDL_BlendMode = u32;
pub type SDL_InitFlags = u32;
pub type SDL_WindowFlags = u64;
pub type SDL_SurfaceFlags = u32;
pub type SDL_GlobFlags = u32;
pub type SDL_Time = i64;
pub type SDL_GLContext = *mut SDL_GLContextState;
pub type SDL_MetalView = *mut c_void;
pub type SDL_EGLDisplay = *mut c_void;
pub type SDL_EGLConfig = *mut c_void;
pub type SDL_EGLSurface = *mut c_void;
pub type SDL_FunctionPointer = Option<unsafe extern "C" fn()>;

pub type SDL_EnumeratePropertiesCallback =
    Option<unsafe extern "C" fn(userdata: *mut c_void, props: SDL_PropertiesID, name: *const c_char)>;
pub type SDL_EnumerateDirectoryCallback = Option<
    unsafe extern "C" fn(userdata: *mut c_void, dirname: *const c_char, fname: *const c_char) -> c_int,
>;
pub type SDL_LogOutputFunction = Option<
    unsafe extern "C" fn(userdata: *mut c_void, category: c_int, priority: c_int, message: *const c_char),
>;

/// `SDL_Palette`
#[repr(C)]
pub struct SDL_Palette {
    pub ncolors: c_int,
    pub colors: *mut crate::pixels::Color,
    pub version: u32,
    pub refcount: c_int,
}

/// `SDL_PixelFormatDetails`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct SDL_PixelFormatDetails {
    pub format: SDL_PixelFormat,
    pub bits_per_pixel: u8,
    pub bytes_per_pixel: u8,
    pub padding: [u8; 2],
    pub r_mask: u32,
    pub g_mask: u32,
    pub b_mask: u32,
    pub a_mask: u32,
    pub r_bits: u8,
    pub g_bits: u8,
    pub b_bits: u8,
    pub a_bits: u8,
    pub r_shift: u8,
    pub g_shift: u8,
    pub b_shift: u8,
    pub a_shift: u8,
}

/// `SDL_Surface`; the public fields are read directly by the binding
#[repr(C)]
pub struct SDL_Surface {
    pub flags: SDL_SurfaceFlags,
    pub format: SDL_PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub pitch: c_int,
    pub pixels: *mut c_void,
    pub refcount: c_int,
    pub reserved: *mut c_void,
}

/// `SDL_Texture`; SDL 3 exposes these fields as read-only
#[repr(C)]
pub struct SDL_Texture {
    pub format: SDL_PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub refcount: c_int,
}

/// `SDL_DisplayMode`
#[repr(C)]
#[derive(Clone, Copy)]
pub struct SDL_DisplayMode {
    pub display_id: SDL_DisplayID,
    pub format: SDL_PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub pixel_density: f32,
    pub refresh_rate: f32,
    pub refresh_rate_numerator: c_int,
    pub refresh_rate_denominator: c_int,
    pub internal: *mut c_void,
}

/// `SDL_CameraSpec`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct SDL_CameraSpec {
    pub format: SDL_PixelFormat,
    pub colorspace: SDL_Colorspace,
    pub width: c_int,
    pub height: c_int,
    pub framerate_numerator: c_int,
    pub framerate_denominator: c_int,
}

/// `SDL_PathInfo`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct SDL_PathInfo {
    pub path_type: c_int,
    pub size: u64,
    pub create_time: SDL_Time,
    pub modify_time: SDL_Time,
    pub access_time: SDL_Time,
}

/// `SDL_AsyncIOOutcome`
#[repr(C)]
pub struct SDL_AsyncIOOutcome {
    pub asyncio: *mut SDL_AsyncIO,
    pub task_type: c_int,
    pub result: c_int,
    pub buffer: *mut c_void,
    pub offset: u64,
    pub bytes_requested: u64,
    pub bytes_transferred: u64,
    pub userdata: *mut c_void,
}

impl Default for SDL_AsyncIOOutcome {
    fn default() -> Self {
        Self {
            asyncio: std::ptr::null_mut(),
            task_type: 0,
            result: 0,
            buffer: std::ptr::null_mut(),
            offset: 0,
            bytes_requested: 0,
            bytes_transferred: 0,
            userdata: std::ptr::null_mut(),
        }
    }
}

/// `TTF_Text`; `text` is owned by SDL_ttf and valid until the next change
#[repr(C)]
pub struct TTF_Text {
    pub text: *mut c_char,
    pub num_lines: c_int,
    pub refcount: c_int,
    pub internal: *mut c_void,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_struct_layouts_match_headers() {
        assert_eq!(size_of::<SDL_PixelFormatDetails>(), 32);
        assert_eq!(size_of::<SDL_CameraSpec>(), 24);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_pointer_struct_layouts_64bit() {
        assert_eq!(size_of::<SDL_Surface>(), 48);
        assert_eq!(size_of::<SDL_DisplayMode>(), 40);
        assert_eq!(size_of::<SDL_AsyncIOOutcome>(), 56);
        assert_eq!(size_of::<SDL_Palette>(), 24);
        assert_eq!(size_of::<SDL_PathInfo>(), 40);
        assert_eq!(align_of::<SDL_PathInfo>(), 8);
    }
}
