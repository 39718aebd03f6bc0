use std::ffi::{c_int, c_void};
use std::fmt;
use std::ops::Deref;
use std::ptr::NonNull;
use std::rc::Rc;

use super::renderer::{Renderer, RendererInner};
use super::TextureAccess;
use crate::context::Sdl;
use crate::error::{to_c_int, Error, Result};
use crate::pixels::{BlendMode, FColor, PixelFormat, ScaleMode};
use crate::properties::Properties;
use crate::rect::{rect_ptr, Rect};
use crate::surface::{check_buffer, Surface, SurfaceLock, SurfaceRef, SurfaceTarget};
use crate::sys::{SDL_Surface, SDL_Texture};

/// GPU-side image owned by a renderer
///
/// Holds a reference to its renderer, so the renderer outlives it.
pub struct Texture {
    renderer: Rc<RendererInner>,
    raw: NonNull<SDL_Texture>,
}

impl Texture {
    /// Create an uninitialised texture
    pub fn new(renderer: &Renderer, format: PixelFormat, access: TextureAccess, width: u32, height: u32) -> Result<Self> {
        let inner = renderer.shared();
        let raw = unsafe {
            (inner.sdl().api().SDL_CreateTexture)(
                inner.raw(),
                format.0,
                access as c_int,
                to_c_int("texture width", width as usize)?,
                to_c_int("texture height", height as usize)?,
            )
        };
        let texture = Self::created(inner, raw)?;
        log::trace!("Created {width}x{height} {format:?} texture ({access:?})");
        Ok(texture)
    }

    /// Upload a surface into a new static texture
    pub fn from_surface(renderer: &Renderer, surface: &Surface) -> Result<Self> {
        let inner = renderer.shared();
        let raw = unsafe { (inner.sdl().api().SDL_CreateTextureFromSurface)(inner.raw(), surface.raw()) };
        Self::created(inner, raw)
    }

    /// Create a texture from `SDL.texture.create.*` properties
    pub fn with_properties(renderer: &Renderer, props: &Properties) -> Result<Self> {
        let inner = renderer.shared();
        let raw = unsafe { (inner.sdl().api().SDL_CreateTextureWithProperties)(inner.raw(), props.id()) };
        Self::created(inner, raw)
    }

    fn created(renderer: Rc<RendererInner>, raw: *mut SDL_Texture) -> Result<Self> {
        let raw = renderer.sdl().check_ptr(raw)?;
        Ok(Self { renderer, raw })
    }

    fn sdl(&self) -> &Sdl {
        self.renderer.sdl()
    }

    fn info(&self) -> &SDL_Texture {
        // SAFETY: the read-only header stays valid while the texture lives.
        unsafe { self.raw.as_ref() }
    }

    /// Raw texture pointer
    pub fn raw(&self) -> *mut SDL_Texture {
        self.raw.as_ptr()
    }

    /// Pixel format
    pub fn format(&self) -> PixelFormat {
        PixelFormat(self.info().format)
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.info().w.max(0) as u32
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.info().h.max(0) as u32
    }

    /// Size as floats, ready for destination rectangles
    pub fn size(&self) -> Result<(f32, f32)> {
        let (mut w, mut h) = (0.0, 0.0);
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_GetTextureSize)(self.raw(), &mut w, &mut h) })?;
        Ok((w, h))
    }

    /// Texture property group
    pub fn properties(&self) -> Result<Properties> {
        Properties::of_object(self.sdl(), unsafe { (self.sdl().api().SDL_GetTextureProperties)(self.raw()) })
    }

    /// Multiply copies by this color
    pub fn set_color_mod(&self, r: u8, g: u8, b: u8) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetTextureColorMod)(self.raw(), r, g, b) })
    }

    /// Float color modulation; alpha is ignored
    pub fn set_color_mod_float(&self, color: FColor) -> Result<()> {
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_SetTextureColorModFloat)(self.raw(), color.r, color.g, color.b)
        })
    }

    /// Current color modulation
    pub fn color_mod(&self) -> Result<(u8, u8, u8)> {
        let (mut r, mut g, mut b) = (0, 0, 0);
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_GetTextureColorMod)(self.raw(), &mut r, &mut g, &mut b)
        })?;
        Ok((r, g, b))
    }

    /// Multiply copies by this alpha
    pub fn set_alpha_mod(&self, alpha: u8) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetTextureAlphaMod)(self.raw(), alpha) })
    }

    /// Float alpha modulation
    pub fn set_alpha_mod_float(&self, alpha: f32) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetTextureAlphaModFloat)(self.raw(), alpha) })
    }

    /// Current alpha modulation
    pub fn alpha_mod(&self) -> Result<u8> {
        let mut alpha = 0;
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_GetTextureAlphaMod)(self.raw(), &mut alpha) })?;
        Ok(alpha)
    }

    /// Blend mode used when copying
    pub fn set_blend_mode(&self, mode: BlendMode) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetTextureBlendMode)(self.raw(), mode.0) })
    }

    /// Current blend mode
    pub fn blend_mode(&self) -> Result<BlendMode> {
        let mut mode = 0;
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_GetTextureBlendMode)(self.raw(), &mut mode) })?;
        Ok(BlendMode(mode))
    }

    /// Filter used when the texture is scaled
    pub fn set_scale_mode(&self, mode: ScaleMode) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetTextureScaleMode)(self.raw(), mode as c_int) })
    }

    /// Current scale filter
    pub fn scale_mode(&self) -> Result<ScaleMode> {
        let mut mode = 0;
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_GetTextureScaleMode)(self.raw(), &mut mode) })?;
        ScaleMode::from_raw(mode).ok_or(Error::OutOfRange {
            what: "scale mode",
            value: mode as u64,
        })
    }

    /// Replace pixels of `rect` (or the whole texture) from a packed buffer
    ///
    /// `pixels` must hold every row of the area at `pitch`, including the
    /// chroma planes of planar YUV formats.
    pub fn update(&self, rect: Option<&Rect>, pixels: &[u8], pitch: usize) -> Result<()> {
        let (width, height) = update_extent(rect, self.width(), self.height());
        check_buffer(self.format(), width, height, pixels.len(), pitch)?;
        let pitch = to_c_int("texture pitch", pitch)?;
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_UpdateTexture)(self.raw(), rect_ptr(rect), pixels.as_ptr().cast(), pitch)
        })
    }

    /// Lock `rect` (or the whole texture) of a streaming texture for writing
    ///
    /// The locked bytes are write-only: their previous contents are undefined.
    pub fn lock(&mut self, rect: Option<&Rect>) -> Result<TextureLock<'_>> {
        let rows = rect.map_or(self.height() as usize, |r| r.h.max(0) as usize);
        let mut pixels: *mut c_void = std::ptr::null_mut();
        let mut pitch: c_int = 0;
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_LockTexture)(self.raw(), rect_ptr(rect), &mut pixels, &mut pitch)
        })?;
        let pitch = pitch.max(0) as usize;
        Ok(TextureLock {
            texture: self,
            pixels: pixels.cast::<u8>(),
            pitch,
            len: pitch * rows,
        })
    }

    /// Lock a streaming texture and expose the area as a surface
    pub fn lock_to_surface(&mut self, rect: Option<&Rect>) -> Result<TextureSurface<'_>> {
        let mut surface: *mut SDL_Surface = std::ptr::null_mut();
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_LockTextureToSurface)(self.raw(), rect_ptr(rect), &mut surface)
        })?;
        let raw = match NonNull::new(surface) {
            Some(raw) => raw,
            None => {
                unsafe { (self.sdl().api().SDL_UnlockTexture)(self.raw()) };
                return Err(Error::Sdl("texture lock returned no surface".to_string()));
            }
        };
        // SAFETY: SDL frees the surface on unlock, which happens when the guard drops.
        let surface = unsafe { Surface::borrowed(self.sdl(), raw) };
        Ok(TextureSurface {
            surface,
            texture: self.raw,
            sdl: self.sdl().clone(),
        })
    }
}

/// Size of the area an update reads from its buffer
fn update_extent(rect: Option<&Rect>, width: u32, height: u32) -> (u32, u32) {
    rect.map_or((width, height), |r| (r.w.max(0) as u32, r.h.max(0) as u32))
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe { (self.sdl().api().SDL_DestroyTexture)(self.raw()) };
    }
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("format", &self.format())
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Write access to a locked streaming texture; unlocks (and uploads) on drop
pub struct TextureLock<'a> {
    texture: &'a mut Texture,
    pixels: *mut u8,
    pitch: usize,
    len: usize,
}

impl TextureLock<'_> {
    /// Bytes per row
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// Locked pixel rows
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        // SAFETY: SDL mapped `pitch * rows` bytes for us until unlock.
        unsafe { std::slice::from_raw_parts_mut(self.pixels, self.len) }
    }
}

impl Drop for TextureLock<'_> {
    fn drop(&mut self) {
        let texture = &*self.texture;
        unsafe { (texture.sdl().api().SDL_UnlockTexture)(texture.raw()) };
    }
}

/// A locked streaming texture seen as a surface; unlocks on drop
pub struct TextureSurface<'a> {
    surface: SurfaceRef<'a>,
    texture: NonNull<SDL_Texture>,
    sdl: Sdl,
}

impl Deref for TextureSurface<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.surface
    }
}

impl TextureSurface<'_> {
    /// Lock the surface for direct pixel writes
    pub fn lock(&mut self) -> Result<SurfaceLock<'_>> {
        self.surface.lock()
    }
}

impl SurfaceTarget for TextureSurface<'_> {
    fn as_target(&mut self) -> &Surface {
        self.surface.as_target()
    }
}

impl Drop for TextureSurface<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.api().SDL_UnlockTexture)(self.texture.as_ptr()) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_extent() {
        assert_eq!(update_extent(None, 64, 32), (64, 32));
        assert_eq!(update_extent(Some(&Rect::new(8, 8, 16, 4)), 64, 32), (16, 4));
        assert_eq!(update_extent(Some(&Rect::new(0, 0, -5, 3)), 64, 32), (0, 3));
    }

    #[test]
    fn test_update_buffer_for_area_is_checked() {
        let (w, h) = update_extent(Some(&Rect::new(0, 0, 4, 4)), 64, 64);
        assert!(check_buffer(PixelFormat::ARGB8888, w, h, 64, 16).is_ok());
        assert!(check_buffer(PixelFormat::ARGB8888, w, h, 63, 16).is_err());
        assert!(check_buffer(PixelFormat::ARGB8888, w, h, 64, 8).is_err());
        // Streaming video textures need room for both chroma planes.
        assert!(check_buffer(PixelFormat::IYUV, w, h, 16, 4).is_err());
        assert!(check_buffer(PixelFormat::IYUV, w, h, 24, 4).is_ok());
    }
}
