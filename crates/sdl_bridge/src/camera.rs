//! Camera capture
//!
//! Frames arrive as surfaces owned by SDL. Each acquired frame must be
//! released before the camera can reuse its buffer, which [`CameraFrame`]
//! does on drop.

use std::ffi::c_int;
use std::fmt;
use std::ops::Deref;
use std::ptr::NonNull;

use crate::context::Sdl;
use crate::error::Result;
use crate::pixels::{Colorspace, PixelFormat};
use crate::properties::Properties;
use crate::surface::{Surface, SurfaceLock, SurfaceRef};
use crate::sys::{self, SDL_Camera, SDL_CameraID, SDL_CameraSpec};

/// Where a camera faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraPosition {
    /// Unknown or external
    Unknown,
    /// Facing the user
    FrontFacing,
    /// Facing away from the user
    BackFacing,
}

impl CameraPosition {
    fn from_raw(raw: c_int) -> Self {
        match raw {
            1 => Self::FrontFacing,
            2 => Self::BackFacing,
            _ => Self::Unknown,
        }
    }
}

/// User approval state for a camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// The user refused access
    Denied,
    /// Still waiting for the user
    Pending,
    /// Frames will flow
    Approved,
}

impl Permission {
    fn from_raw(raw: c_int) -> Self {
        match raw {
            r if r < 0 => Self::Denied,
            0 => Self::Pending,
            _ => Self::Approved,
        }
    }
}

/// Capture format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraSpec {
    /// Pixel format of frames
    pub format: PixelFormat,
    /// Colorspace of frames
    pub colorspace: Colorspace,
    /// Frame width
    pub width: i32,
    /// Frame height
    pub height: i32,
    /// Frame rate numerator
    pub framerate_numerator: i32,
    /// Frame rate denominator
    pub framerate_denominator: i32,
}

impl CameraSpec {
    /// Frames per second, 0 when the denominator is unset
    pub fn framerate(&self) -> f32 {
        if self.framerate_denominator == 0 {
            0.0
        } else {
            self.framerate_numerator as f32 / self.framerate_denominator as f32
        }
    }
}

impl From<SDL_CameraSpec> for CameraSpec {
    fn from(raw: SDL_CameraSpec) -> Self {
        Self {
            format: PixelFormat(raw.format),
            colorspace: Colorspace(raw.colorspace),
            width: raw.width,
            height: raw.height,
            framerate_numerator: raw.framerate_numerator,
            framerate_denominator: raw.framerate_denominator,
        }
    }
}

impl From<&CameraSpec> for SDL_CameraSpec {
    fn from(spec: &CameraSpec) -> Self {
        Self {
            format: spec.format.0,
            colorspace: spec.colorspace.0,
            width: spec.width,
            height: spec.height,
            framerate_numerator: spec.framerate_numerator,
            framerate_denominator: spec.framerate_denominator,
        }
    }
}

impl fmt::Display for CameraSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} {:?} @ {:.2}fps", self.width, self.height, self.format, self.framerate())
    }
}

/// Identifier of a connected camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId(pub SDL_CameraID);

impl CameraId {
    /// Human-readable device name
    pub fn name(self, sdl: &Sdl) -> Result<String> {
        let name = sdl.check_const_ptr(unsafe { (sdl.api().SDL_GetCameraName)(self.0) })?;
        Ok(unsafe { sys::string_from_ptr(name.as_ptr()) })
    }

    /// Which way the device faces
    pub fn position(self, sdl: &Sdl) -> CameraPosition {
        CameraPosition::from_raw(unsafe { (sdl.api().SDL_GetCameraPosition)(self.0) })
    }

    /// Formats the device can deliver natively
    pub fn supported_formats(self, sdl: &Sdl) -> Result<Vec<CameraSpec>> {
        let mut count = 0;
        let specs = unsafe { (sdl.api().SDL_GetCameraSupportedFormats)(self.0, &mut count) };
        // SAFETY: SDL returned a single allocation holding `count` spec pointers.
        let specs = unsafe { sdl.take_pointer_array(specs, count)? };
        Ok(specs.into_iter().map(CameraSpec::from).collect())
    }
}

impl Sdl {
    /// Camera drivers compiled into SDL
    pub fn camera_drivers(&self) -> Vec<String> {
        let count = unsafe { (self.api().SDL_GetNumCameraDrivers)() };
        (0..count)
            .map(|index| unsafe { sys::string_from_ptr((self.api().SDL_GetCameraDriver)(index)) })
            .collect()
    }

    /// Driver in use, once the camera subsystem is up
    pub fn current_camera_driver(&self) -> Option<String> {
        unsafe { sys::optional_string_from_ptr((self.api().SDL_GetCurrentCameraDriver)()) }
    }

    /// Connected cameras
    pub fn cameras(&self) -> Result<Vec<CameraId>> {
        let mut count = 0;
        let ids = unsafe { (self.api().SDL_GetCameras)(&mut count) };
        // SAFETY: SDL returned `count` camera ids.
        let ids = unsafe { self.take_array(ids, count)? };
        Ok(ids.into_iter().map(CameraId).collect())
    }
}

/// An open camera device
pub struct Camera {
    sdl: Sdl,
    raw: NonNull<SDL_Camera>,
}

impl Camera {
    /// Open a camera, letting SDL convert frames to `spec` when given
    pub fn open(sdl: &Sdl, id: CameraId, spec: Option<&CameraSpec>) -> Result<Self> {
        let spec = spec.map(SDL_CameraSpec::from);
        let spec_ptr = spec.as_ref().map_or(std::ptr::null(), |s| s as *const SDL_CameraSpec);
        let raw = sdl.check_ptr(unsafe { (sdl.api().SDL_OpenCamera)(id.0, spec_ptr) })?;
        log::debug!("Opened camera {}", id.0);
        Ok(Self { sdl: sdl.clone(), raw })
    }

    /// Raw camera pointer
    pub fn raw(&self) -> *mut SDL_Camera {
        self.raw.as_ptr()
    }

    /// Device id
    pub fn id(&self) -> Result<CameraId> {
        let id = self.sdl.check_id(unsafe { (self.sdl.api().SDL_GetCameraID)(self.raw()) })?;
        Ok(CameraId(id))
    }

    /// Whether the user has allowed access yet
    pub fn permission_state(&self) -> Permission {
        Permission::from_raw(unsafe { (self.sdl.api().SDL_GetCameraPermissionState)(self.raw()) })
    }

    /// Format frames are delivered in; fails until permission is granted
    pub fn format(&self) -> Result<CameraSpec> {
        let mut spec = SDL_CameraSpec::default();
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_GetCameraFormat)(self.raw(), &mut spec) })?;
        Ok(spec.into())
    }

    /// Camera property group
    pub fn properties(&self) -> Result<Properties> {
        Properties::of_object(&self.sdl, unsafe { (self.sdl.api().SDL_GetCameraProperties)(self.raw()) })
    }

    /// Take the next frame if one is ready
    pub fn acquire_frame(&self) -> Option<CameraFrame<'_>> {
        let mut timestamp_ns = 0u64;
        let frame = unsafe { (self.sdl.api().SDL_AcquireCameraFrame)(self.raw(), &mut timestamp_ns) };
        let frame = NonNull::new(frame)?;
        // SAFETY: the frame stays valid until released by the guard.
        let surface = unsafe { Surface::borrowed(&self.sdl, frame) };
        Some(CameraFrame {
            camera: self,
            surface,
            timestamp_ns,
        })
    }
}

impl Drop for Camera {
    fn drop(&mut self) {
        unsafe { (self.sdl.api().SDL_CloseCamera)(self.raw()) };
        log::debug!("Closed camera");
    }
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera").field("raw", &self.raw).finish()
    }
}

/// A captured frame, handed back to the camera on drop
pub struct CameraFrame<'a> {
    camera: &'a Camera,
    surface: SurfaceRef<'a>,
    timestamp_ns: u64,
}

impl CameraFrame<'_> {
    /// Capture time in nanoseconds, 0 if the driver does not report it
    pub fn timestamp_ns(&self) -> u64 {
        self.timestamp_ns
    }

    /// Lock the frame for direct access to its pixels
    pub fn lock(&mut self) -> Result<SurfaceLock<'_>> {
        self.surface.lock()
    }
}

impl Deref for CameraFrame<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.surface
    }
}

impl Drop for CameraFrame<'_> {
    fn drop(&mut self) {
        unsafe { (self.camera.sdl.api().SDL_ReleaseCameraFrame)(self.camera.raw(), self.surface.raw()) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_raw() {
        assert_eq!(CameraPosition::from_raw(0), CameraPosition::Unknown);
        assert_eq!(CameraPosition::from_raw(1), CameraPosition::FrontFacing);
        assert_eq!(CameraPosition::from_raw(2), CameraPosition::BackFacing);
        assert_eq!(CameraPosition::from_raw(9), CameraPosition::Unknown);
    }

    #[test]
    fn test_permission_from_raw() {
        assert_eq!(Permission::from_raw(-1), Permission::Denied);
        assert_eq!(Permission::from_raw(0), Permission::Pending);
        assert_eq!(Permission::from_raw(1), Permission::Approved);
    }

    #[test]
    fn test_spec_conversion() {
        let raw = SDL_CameraSpec {
            format: PixelFormat::RGBA8888.0,
            colorspace: 0,
            width: 640,
            height: 480,
            framerate_numerator: 30,
            framerate_denominator: 1,
        };
        let spec = CameraSpec::from(raw);
        assert_eq!(spec.format, PixelFormat::RGBA8888);
        assert_eq!((spec.width, spec.height), (640, 480));
        assert!((spec.framerate() - 30.0).abs() < f32::EPSILON);

        let back = SDL_CameraSpec::from(&spec);
        assert_eq!(back.width, 640);
        assert_eq!(back.framerate_denominator, 1);
    }

    #[test]
    fn test_framerate_without_denominator() {
        let spec = CameraSpec::from(SDL_CameraSpec::default());
        assert_eq!(spec.framerate(), 0.0);
    }
}
