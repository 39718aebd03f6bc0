//! Software surfaces (`SDL_Surface`)

use std::ffi::c_int;
use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ops::Deref;
use std::path::Path;
use std::ptr::NonNull;

use bitflags::bitflags;

use crate::context::Sdl;
use crate::error::{to_c_int, Error, Result};
use crate::iostream::IoStream;
use crate::pixels::{BlendMode, Color, Colorspace, FColor, FlipMode, Palette, PaletteView, PixelFormat, ScaleMode};
use crate::properties::Properties;
use crate::rect::{rect_ptr, Rect};
use crate::sys::{self, SDL_Surface};

bitflags! {
    /// `SDL_SurfaceFlags`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SurfaceFlags: u32 {
        /// Pixels were supplied by the caller
        const PREALLOCATED = 0x0000_0001;
        /// Must be locked before touching pixels
        const LOCK_NEEDED = 0x0000_0002;
        /// Currently locked
        const LOCKED = 0x0000_0004;
        /// Pixel rows are SIMD aligned
        const SIMD_ALIGNED = 0x0000_0008;
    }
}

fn buffer_size_error() -> Error {
    Error::OutOfRange {
        what: "pixel buffer size",
        value: u64::MAX,
    }
}

/// Smallest pitch that holds one row of `width` pixels of `format`
pub(crate) fn min_pitch(format: PixelFormat, width: usize) -> Result<usize> {
    let pitch = match format {
        PixelFormat::YV12 | PixelFormat::IYUV | PixelFormat::NV12 | PixelFormat::NV21 => Some(width),
        PixelFormat::P010 => width.checked_mul(2),
        PixelFormat::YUY2 | PixelFormat::UYVY | PixelFormat::YVYU => width.div_ceil(2).checked_mul(4),
        f if f.is_fourcc() || f == PixelFormat::UNKNOWN => {
            return Err(Error::OutOfRange {
                what: "pixel buffer format",
                value: u64::from(f.0),
            })
        }
        f if f.bits_per_pixel() < 8 => width
            .checked_mul(f.bits_per_pixel() as usize)
            .map(|bits| bits.div_ceil(8)),
        f => width.checked_mul(f.bytes_per_pixel() as usize),
    };
    pitch.ok_or_else(buffer_size_error)
}

/// Byte length of a `height`-row image with `pitch`, chroma planes included
pub(crate) fn required_len(format: PixelFormat, pitch: usize, height: usize) -> Result<usize> {
    let chroma_rows = height.div_ceil(2);
    let chroma = match format {
        PixelFormat::YV12 | PixelFormat::IYUV => pitch.div_ceil(2).checked_mul(chroma_rows * 2),
        PixelFormat::NV12 | PixelFormat::NV21 | PixelFormat::P010 => {
            pitch.div_ceil(2).checked_mul(2).and_then(|uv| uv.checked_mul(chroma_rows))
        }
        _ => Some(0),
    };
    pitch
        .checked_mul(height)
        .zip(chroma)
        .and_then(|(luma, chroma)| luma.checked_add(chroma))
        .ok_or_else(buffer_size_error)
}

/// Check that `len` bytes hold a `width` x `height` image of `format` at `pitch`
pub(crate) fn check_buffer(format: PixelFormat, width: u32, height: u32, len: usize, pitch: usize) -> Result<()> {
    if pitch < min_pitch(format, width as usize)? {
        return Err(Error::OutOfRange {
            what: "pixel buffer pitch",
            value: pitch as u64,
        });
    }
    if len < required_len(format, pitch, height as usize)? {
        return Err(Error::OutOfRange {
            what: "pixel buffer length",
            value: len as u64,
        });
    }
    Ok(())
}

/// A block of pixels in system memory, destroyed on drop
pub struct Surface {
    sdl: Sdl,
    raw: NonNull<SDL_Surface>,
}

// SAFETY: SDL surfaces are not tied to the thread that created them.
unsafe impl Send for Surface {}

impl Surface {
    /// Allocate a surface
    pub fn new(sdl: &Sdl, width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        let raw = unsafe {
            (sdl.api().SDL_CreateSurface)(
                to_c_int("surface width", width as usize)?,
                to_c_int("surface height", height as usize)?,
                format.0,
            )
        };
        let raw = sdl.check_ptr(raw)?;
        log::trace!("Created {width}x{height} surface");
        Ok(unsafe { Self::from_raw(sdl, raw) })
    }

    /// Wrap caller memory; the buffer stays borrowed for the surface's life
    pub fn from_pixels<'a>(
        sdl: &Sdl,
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: &'a mut [u8],
        pitch: usize,
    ) -> Result<BorrowedSurface<'a>> {
        check_buffer(format, width, height, pixels.len(), pitch)?;
        let raw = unsafe {
            (sdl.api().SDL_CreateSurfaceFrom)(
                to_c_int("surface width", width as usize)?,
                to_c_int("surface height", height as usize)?,
                format.0,
                pixels.as_mut_ptr().cast(),
                to_c_int("surface pitch", pitch)?,
            )
        };
        let raw = sdl.check_ptr(raw)?;
        Ok(BorrowedSurface {
            surface: unsafe { Self::from_raw(sdl, raw) },
            _pixels: PhantomData,
        })
    }

    /// Load a BMP file
    pub fn load_bmp(sdl: &Sdl, path: impl AsRef<Path>) -> Result<Self> {
        let path = sys::path_c_string(path.as_ref())?;
        let raw = sdl.check_ptr(unsafe { (sdl.api().SDL_LoadBMP)(path.as_ptr()) })?;
        Ok(unsafe { Self::from_raw(sdl, raw) })
    }

    /// Load a BMP image from the current position of a stream
    pub fn load_bmp_io(stream: &IoStream) -> Result<Self> {
        let sdl = stream.sdl().clone();
        let raw = sdl.check_ptr(unsafe { (sdl.api().SDL_LoadBMP_IO)(stream.raw(), false) })?;
        Ok(unsafe { Self::from_raw(&sdl, raw) })
    }

    /// Take ownership of a native surface
    ///
    /// # Safety
    /// `raw` must be a live surface whose reference the caller hands over.
    pub unsafe fn from_raw(sdl: &Sdl, raw: NonNull<SDL_Surface>) -> Self {
        Self { sdl: sdl.clone(), raw }
    }

    /// View a surface owned by someone else for `'a`
    ///
    /// # Safety
    /// `raw` must stay valid for `'a` and is not destroyed by the view.
    pub(crate) unsafe fn borrowed<'a>(sdl: &Sdl, raw: NonNull<SDL_Surface>) -> SurfaceRef<'a> {
        SurfaceRef {
            surface: ManuallyDrop::new(Self::from_raw(sdl, raw)),
            _owner: PhantomData,
        }
    }

    fn info(&self) -> &SDL_Surface {
        // SAFETY: the handle is live for as long as `self`.
        unsafe { self.raw.as_ref() }
    }

    /// Save as BMP
    pub fn save_bmp(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = sys::path_c_string(path.as_ref())?;
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_SaveBMP)(self.raw(), path.as_ptr()) })
    }

    /// Write as BMP into a stream
    pub fn save_bmp_io(&self, stream: &IoStream) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_SaveBMP_IO)(self.raw(), stream.raw(), false) })
    }

    /// Raw surface pointer
    pub fn raw(&self) -> *mut SDL_Surface {
        self.raw.as_ptr()
    }

    /// Owning context
    pub fn sdl(&self) -> &Sdl {
        &self.sdl
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.info().w as u32
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.info().h as u32
    }

    /// Bytes per row
    pub fn pitch(&self) -> usize {
        self.info().pitch as usize
    }

    /// Pixel format
    pub fn format(&self) -> PixelFormat {
        PixelFormat(self.info().format)
    }

    /// Surface flags
    pub fn flags(&self) -> SurfaceFlags {
        SurfaceFlags::from_bits_truncate(self.info().flags)
    }

    /// True if pixels may only be touched while locked
    pub fn must_lock(&self) -> bool {
        self.flags().contains(SurfaceFlags::LOCK_NEEDED)
    }

    /// Associated property group
    pub fn properties(&self) -> Result<Properties> {
        Properties::of_object(&self.sdl, unsafe { (self.sdl.api().SDL_GetSurfaceProperties)(self.raw()) })
    }

    /// Set the colorspace used when converting or blitting
    pub fn set_colorspace(&self, colorspace: Colorspace) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_SetSurfaceColorspace)(self.raw(), colorspace.0) })
    }

    /// Current colorspace
    pub fn colorspace(&self) -> Colorspace {
        Colorspace(unsafe { (self.sdl.api().SDL_GetSurfaceColorspace)(self.raw()) })
    }

    /// Create and attach a palette sized for an indexed format
    pub fn create_palette(&self) -> Result<PaletteView<'_>> {
        let raw = self
            .sdl
            .check_ptr(unsafe { (self.sdl.api().SDL_CreateSurfacePalette)(self.raw()) })?;
        Ok(unsafe { Palette::borrowed(&self.sdl, raw) })
    }

    /// Attach a palette; the surface takes its own reference
    pub fn set_palette(&self, palette: &Palette) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_SetSurfacePalette)(self.raw(), palette.raw()) })
    }

    /// Attached palette, if any
    pub fn palette(&self) -> Option<PaletteView<'_>> {
        let raw = NonNull::new(unsafe { (self.sdl.api().SDL_GetSurfacePalette)(self.raw()) })?;
        Some(unsafe { Palette::borrowed(&self.sdl, raw) })
    }

    /// Enable RLE acceleration for blits from this surface
    pub fn set_rle(&self, enabled: bool) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_SetSurfaceRLE)(self.raw(), enabled) })
    }

    /// True if RLE is enabled
    pub fn has_rle(&self) -> bool {
        unsafe { (self.sdl.api().SDL_SurfaceHasRLE)(self.raw()) }
    }

    /// Set or clear the transparent pixel value
    pub fn set_color_key(&self, key: Option<u32>) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_SetSurfaceColorKey)(self.raw(), key.is_some(), key.unwrap_or(0))
        })
    }

    /// True if a color key is set
    pub fn has_color_key(&self) -> bool {
        unsafe { (self.sdl.api().SDL_SurfaceHasColorKey)(self.raw()) }
    }

    /// Current color key, `None` when disabled
    pub fn color_key(&self) -> Option<u32> {
        let mut key = 0;
        unsafe { (self.sdl.api().SDL_GetSurfaceColorKey)(self.raw(), &mut key) }.then_some(key)
    }

    /// Multiply colors during blits
    pub fn set_color_mod(&self, r: u8, g: u8, b: u8) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_SetSurfaceColorMod)(self.raw(), r, g, b) })
    }

    /// Current color modulation
    pub fn color_mod(&self) -> Result<(u8, u8, u8)> {
        let (mut r, mut g, mut b) = (0, 0, 0);
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_GetSurfaceColorMod)(self.raw(), &mut r, &mut g, &mut b)
        })?;
        Ok((r, g, b))
    }

    /// Multiply alpha during blits
    pub fn set_alpha_mod(&self, alpha: u8) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_SetSurfaceAlphaMod)(self.raw(), alpha) })
    }

    /// Current alpha modulation
    pub fn alpha_mod(&self) -> Result<u8> {
        let mut alpha = 0;
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_GetSurfaceAlphaMod)(self.raw(), &mut alpha) })?;
        Ok(alpha)
    }

    /// Blend mode used by blits
    pub fn set_blend_mode(&self, mode: BlendMode) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_SetSurfaceBlendMode)(self.raw(), mode.0) })
    }

    /// Current blend mode
    pub fn blend_mode(&self) -> Result<BlendMode> {
        let mut mode = 0;
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_GetSurfaceBlendMode)(self.raw(), &mut mode) })?;
        Ok(BlendMode(mode))
    }

    /// Clip blits into this surface; `None` resets to the full surface.
    /// Returns false if the rectangle misses the surface entirely.
    pub fn set_clip_rect(&self, rect: Option<&Rect>) -> bool {
        unsafe { (self.sdl.api().SDL_SetSurfaceClipRect)(self.raw(), rect_ptr(rect)) }
    }

    /// Current clip rectangle
    pub fn clip_rect(&self) -> Result<Rect> {
        let mut rect = Rect::default();
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_GetSurfaceClipRect)(self.raw(), &mut rect) })?;
        Ok(rect)
    }

    /// Lock for direct pixel access
    pub fn lock(&mut self) -> Result<SurfaceLock<'_>> {
        // SAFETY: `&mut self` is held by the returned guard.
        unsafe { self.lock_exclusive() }
    }

    /// Lock through a shared reference
    ///
    /// # Safety
    /// The caller must hold an exclusive borrow of whatever owns this surface
    /// for the life of the guard.
    pub(crate) unsafe fn lock_exclusive(&self) -> Result<SurfaceLock<'_>> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_LockSurface)(self.raw()) })?;
        Ok(SurfaceLock { surface: self })
    }

    /// Give up ownership; the caller becomes responsible for destroying the surface
    pub fn into_raw(self) -> NonNull<SDL_Surface> {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never used or dropped again.
        drop(unsafe { std::ptr::read(&this.sdl) });
        this.raw
    }

    /// Read one pixel as RGBA
    pub fn read_pixel(&self, x: i32, y: i32) -> Result<Color> {
        let mut c = Color::default();
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_ReadSurfacePixel)(self.raw(), x, y, &mut c.r, &mut c.g, &mut c.b, &mut c.a)
        })?;
        Ok(c)
    }

    /// Write one pixel
    pub fn write_pixel(&self, x: i32, y: i32, color: Color) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_WriteSurfacePixel)(self.raw(), x, y, color.r, color.g, color.b, color.a)
        })
    }

    /// Opaque color to a pixel value for this surface
    pub fn map_rgb(&self, r: u8, g: u8, b: u8) -> u32 {
        self.map_rgba(Color::rgb(r, g, b))
    }

    /// Color to a pixel value for this surface, honoring its palette
    pub fn map_rgba(&self, color: Color) -> u32 {
        unsafe { (self.sdl.api().SDL_MapSurfaceRGBA)(self.raw(), color.r, color.g, color.b, color.a) }
    }

    /// Mirror in place
    pub fn flip(&self, flip: FlipMode) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_FlipSurface)(self.raw(), flip as c_int) })
    }

    /// Deep copy
    pub fn duplicate(&self) -> Result<Self> {
        let raw = self
            .sdl
            .check_ptr(unsafe { (self.sdl.api().SDL_DuplicateSurface)(self.raw()) })?;
        Ok(unsafe { Self::from_raw(&self.sdl, raw) })
    }

    /// Scaled copy
    pub fn scale(&self, width: u32, height: u32, mode: ScaleMode) -> Result<Self> {
        let raw = unsafe {
            (self.sdl.api().SDL_ScaleSurface)(
                self.raw(),
                to_c_int("surface width", width as usize)?,
                to_c_int("surface height", height as usize)?,
                mode as c_int,
            )
        };
        let raw = self.sdl.check_ptr(raw)?;
        Ok(unsafe { Self::from_raw(&self.sdl, raw) })
    }

    /// Copy converted to another format
    pub fn convert(&self, format: PixelFormat) -> Result<Self> {
        let raw = self
            .sdl
            .check_ptr(unsafe { (self.sdl.api().SDL_ConvertSurface)(self.raw(), format.0) })?;
        Ok(unsafe { Self::from_raw(&self.sdl, raw) })
    }

    /// Fill everything with a color, ignoring the clip rectangle
    pub fn clear(&self, color: FColor) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_ClearSurface)(self.raw(), color.r, color.g, color.b, color.a)
        })
    }

    /// Fill a rectangle (or the whole clip area) with a pixel value
    pub fn fill_rect(&self, rect: Option<&Rect>, pixel: u32) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_FillSurfaceRect)(self.raw(), rect_ptr(rect), pixel) })
    }

    /// Fill several rectangles
    pub fn fill_rects(&self, rects: &[Rect], pixel: u32) -> Result<()> {
        let count = to_c_int("rect count", rects.len())?;
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_FillSurfaceRects)(self.raw(), rects.as_ptr(), count, pixel)
        })
    }

    /// Copy pixels onto `dst`; only the position of `dst_rect` is used
    pub fn blit(&self, src_rect: Option<&Rect>, dst: &mut impl SurfaceTarget, dst_rect: Option<&Rect>) -> Result<()> {
        let dst = dst.as_target();
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_BlitSurface)(self.raw(), rect_ptr(src_rect), dst.raw(), rect_ptr(dst_rect))
        })
    }

    /// Copy pixels onto `dst`, scaling to `dst_rect`
    pub fn blit_scaled(
        &self,
        src_rect: Option<&Rect>,
        dst: &mut impl SurfaceTarget,
        dst_rect: Option<&Rect>,
        mode: ScaleMode,
    ) -> Result<()> {
        let dst = dst.as_target();
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_BlitSurfaceScaled)(
                self.raw(),
                rect_ptr(src_rect),
                dst.raw(),
                rect_ptr(dst_rect),
                mode as c_int,
            )
        })
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        unsafe { (self.sdl.api().SDL_DestroySurface)(self.raw()) };
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("format", &self.format())
            .finish()
    }
}

/// A surface that blits and text draws can write into
///
/// Implemented by every surface handle. The exclusive borrow keeps the
/// destination from aliasing a pixel lock or the blit source.
pub trait SurfaceTarget {
    /// Surface written through this borrow
    fn as_target(&mut self) -> &Surface;
}

impl SurfaceTarget for Surface {
    fn as_target(&mut self) -> &Surface {
        self
    }
}

/// A surface over caller-owned pixels
#[derive(Debug)]
pub struct BorrowedSurface<'a> {
    surface: Surface,
    _pixels: PhantomData<&'a mut [u8]>,
}

impl BorrowedSurface<'_> {
    /// Lock for direct pixel access
    pub fn lock(&mut self) -> Result<SurfaceLock<'_>> {
        // SAFETY: the guard holds `&mut self`.
        unsafe { self.surface.lock_exclusive() }
    }
}

impl Deref for BorrowedSurface<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.surface
    }
}

impl SurfaceTarget for BorrowedSurface<'_> {
    fn as_target(&mut self) -> &Surface {
        &self.surface
    }
}

/// A surface owned by another object (window, camera, texture lock), not destroyed here
pub struct SurfaceRef<'a> {
    surface: ManuallyDrop<Surface>,
    _owner: PhantomData<&'a mut ()>,
}

impl SurfaceRef<'_> {
    /// Lock for direct pixel access
    pub fn lock(&mut self) -> Result<SurfaceLock<'_>> {
        // SAFETY: the guard holds `&mut self`.
        unsafe { self.surface.lock_exclusive() }
    }
}

impl Deref for SurfaceRef<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.surface
    }
}

impl SurfaceTarget for SurfaceRef<'_> {
    fn as_target(&mut self) -> &Surface {
        &self.surface
    }
}

impl Drop for SurfaceRef<'_> {
    fn drop(&mut self) {
        // SAFETY: the view is not touched again; only the context handle is released.
        unsafe { ManuallyDrop::take(&mut self.surface) }.into_raw();
    }
}

/// Pixel access guard from [`Surface::lock`]
pub struct SurfaceLock<'a> {
    surface: &'a Surface,
}

impl SurfaceLock<'_> {
    /// Bytes per row
    pub fn pitch(&self) -> usize {
        self.surface.pitch()
    }

    /// All rows, `pitch * height` bytes
    pub fn pixels(&self) -> &[u8] {
        let info = self.surface.info();
        let len = self.pitch() * self.surface.height() as usize;
        if info.pixels.is_null() {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(info.pixels.cast::<u8>(), len) }
    }

    /// Mutable view of all rows
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        let len = self.pitch() * self.surface.height() as usize;
        let pixels = self.surface.info().pixels;
        if pixels.is_null() {
            return &mut [];
        }
        unsafe { std::slice::from_raw_parts_mut(pixels.cast::<u8>(), len) }
    }
}

impl Drop for SurfaceLock<'_> {
    fn drop(&mut self) {
        unsafe { (self.surface.sdl.api().SDL_UnlockSurface)(self.surface.raw()) };
    }
}

impl Sdl {
    /// Convert a block of pixels between formats
    pub fn convert_pixels(
        &self,
        width: u32,
        height: u32,
        src_format: PixelFormat,
        src: &[u8],
        src_pitch: usize,
        dst_format: PixelFormat,
        dst: &mut [u8],
        dst_pitch: usize,
    ) -> Result<()> {
        check_buffer(src_format, width, height, src.len(), src_pitch)?;
        check_buffer(dst_format, width, height, dst.len(), dst_pitch)?;
        self.check(unsafe {
            (self.api().SDL_ConvertPixels)(
                to_c_int("width", width as usize)?,
                to_c_int("height", height as usize)?,
                src_format.0,
                src.as_ptr().cast(),
                to_c_int("source pitch", src_pitch)?,
                dst_format.0,
                dst.as_mut_ptr().cast(),
                to_c_int("destination pitch", dst_pitch)?,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_flag_values() {
        assert_eq!(SurfaceFlags::PREALLOCATED.bits(), 1);
        assert_eq!(SurfaceFlags::LOCK_NEEDED.bits(), 2);
        assert_eq!(SurfaceFlags::SIMD_ALIGNED.bits(), 8);
        assert_eq!(SurfaceFlags::from_bits_truncate(0x13), SurfaceFlags::PREALLOCATED | SurfaceFlags::LOCK_NEEDED);
    }

    #[test]
    fn test_buffer_length_checks() {
        let rgba = PixelFormat::RGBA8888;
        assert!(check_buffer(rgba, 4, 4, 64, 16).is_ok());
        assert!(check_buffer(rgba, 4, 4, 65, 16).is_ok());
        assert!(matches!(
            check_buffer(rgba, 4, 4, 63, 16),
            Err(Error::OutOfRange { what: "pixel buffer length", value: 63 })
        ));
        assert!(required_len(rgba, usize::MAX, 2).is_err());
    }

    #[test]
    fn test_pitch_narrower_than_a_row_is_rejected() {
        assert!(matches!(
            check_buffer(PixelFormat::RGBA8888, 4, 1, 4, 1),
            Err(Error::OutOfRange { what: "pixel buffer pitch", value: 1 })
        ));
        assert!(check_buffer(PixelFormat::RGB24, 5, 2, 30, 15).is_ok());
        assert!(check_buffer(PixelFormat::RGB24, 5, 2, 30, 14).is_err());
    }

    #[test]
    fn test_sub_byte_formats_round_up() {
        assert_eq!(min_pitch(PixelFormat::INDEX1MSB, 9).unwrap(), 2);
        assert_eq!(min_pitch(PixelFormat::INDEX4LSB, 3).unwrap(), 2);
        assert_eq!(min_pitch(PixelFormat::INDEX8, 3).unwrap(), 3);
    }

    #[test]
    fn test_planar_formats_count_chroma() {
        // 4x4 NV12: 16 luma bytes plus 8 interleaved chroma bytes.
        assert_eq!(required_len(PixelFormat::NV12, 4, 4).unwrap(), 24);
        assert!(check_buffer(PixelFormat::NV12, 4, 4, 16, 4).is_err());
        assert!(check_buffer(PixelFormat::NV12, 4, 4, 24, 4).is_ok());

        // Odd sizes round the chroma planes up.
        assert_eq!(required_len(PixelFormat::IYUV, 5, 3).unwrap(), 15 + 2 * 3 * 2);
        assert_eq!(min_pitch(PixelFormat::YUY2, 3).unwrap(), 8);
        assert_eq!(min_pitch(PixelFormat::P010, 3).unwrap(), 6);
    }

    #[test]
    fn test_formats_without_a_raw_layout_are_rejected() {
        for format in [PixelFormat::MJPG, PixelFormat::EXTERNAL_OES, PixelFormat::UNKNOWN] {
            assert!(matches!(
                check_buffer(format, 4, 4, 1024, 64),
                Err(Error::OutOfRange { what: "pixel buffer format", .. })
            ));
        }
    }
}
