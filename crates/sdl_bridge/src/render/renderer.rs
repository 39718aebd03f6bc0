use std::ffi::{c_int, c_void};
use std::fmt;
use std::ptr::NonNull;
use std::rc::Rc;

use super::texture::Texture;
use super::{LogicalPresentation, Vertex};
use crate::context::Sdl;
use crate::error::{to_c_int, Error, Result};
use crate::pixels::{BlendMode, Color, FColor, FlipMode};
use crate::properties::Properties;
use crate::rect::{frect_ptr, rect_ptr, FPoint, FRect, Rect};
use crate::surface::Surface;
use crate::sys::{self, SDL_Renderer, SDL_Window};
use crate::video::window::WindowInner;
use crate::video::{Window, WindowFlags};

const PROP_CREATE_WINDOW: &str = "SDL.renderer.create.window";

/// What the renderer draws into; dropped after the renderer itself
enum Output {
    Window { _window: Rc<WindowInner> },
    Surface(Surface),
}

pub(crate) struct RendererInner {
    sdl: Sdl,
    raw: NonNull<SDL_Renderer>,
    output: Output,
}

impl RendererInner {
    pub(crate) fn sdl(&self) -> &Sdl {
        &self.sdl
    }

    pub(crate) fn raw(&self) -> *mut SDL_Renderer {
        self.raw.as_ptr()
    }
}

impl Drop for RendererInner {
    fn drop(&mut self) {
        log::debug!("Destroying renderer {:p}", self.raw);
        unsafe { (self.sdl.api().SDL_DestroyRenderer)(self.raw()) };
    }
}

/// A 2D rendering context for a window or a surface
///
/// Cloning shares the same native renderer.
#[derive(Clone)]
pub struct Renderer {
    inner: Rc<RendererInner>,
}

impl Renderer {
    /// Create a renderer for `window`; `driver` picks a backend by name, `None` lets SDL choose
    pub fn new(window: &Window, driver: Option<&str>) -> Result<Self> {
        ensure_no_window_surface(window)?;
        let sdl = window.sdl();
        let driver = sys::optional_c_string(driver)?;
        let raw = unsafe { (sdl.api().SDL_CreateRenderer)(window.raw(), sys::optional_ptr(&driver)) };
        Self::created(sdl, raw, Output::Window { _window: window.shared() })
    }

    /// Create a renderer for `window` from `SDL.renderer.create.*` properties
    ///
    /// The window entry is filled in from `window`.
    pub fn with_properties(window: &Window, props: &Properties) -> Result<Self> {
        ensure_no_window_surface(window)?;
        let sdl = window.sdl();
        props.set_pointer(PROP_CREATE_WINDOW, window.raw().cast::<c_void>())?;
        let raw = unsafe { (sdl.api().SDL_CreateRendererWithProperties)(props.id()) };
        Self::created(sdl, raw, Output::Window { _window: window.shared() })
    }

    /// Create a software renderer drawing into `surface`
    ///
    /// The renderer takes the surface; read it back with [`Self::target_surface`].
    pub fn software(surface: Surface) -> Result<Self> {
        let sdl = surface.sdl().clone();
        let raw = unsafe { (sdl.api().SDL_CreateSoftwareRenderer)(surface.raw()) };
        Self::created(&sdl, raw, Output::Surface(surface))
    }

    /// Create a window and a renderer for it in one call
    pub fn create_window_and_renderer(
        sdl: &Sdl,
        title: &str,
        width: u32,
        height: u32,
        flags: WindowFlags,
    ) -> Result<(Window, Self)> {
        let title = sys::c_string(title)?;
        let mut window: *mut SDL_Window = std::ptr::null_mut();
        let mut renderer: *mut SDL_Renderer = std::ptr::null_mut();
        sdl.check(unsafe {
            (sdl.api().SDL_CreateWindowAndRenderer)(
                title.as_ptr(),
                to_c_int("window width", width as usize)?,
                to_c_int("window height", height as usize)?,
                flags.bits(),
                &mut window,
                &mut renderer,
            )
        })?;
        let window = Window::wrap(sdl, sdl.check_ptr(window)?, None);
        let renderer = Self::created(sdl, renderer, Output::Window { _window: window.shared() })?;
        Ok((window, renderer))
    }

    fn created(sdl: &Sdl, raw: *mut SDL_Renderer, output: Output) -> Result<Self> {
        let raw = sdl.check_ptr(raw)?;
        let renderer = Self {
            inner: Rc::new(RendererInner {
                sdl: sdl.clone(),
                raw,
                output,
            }),
        };
        log::debug!("Created renderer \"{}\"", renderer.name());
        Ok(renderer)
    }

    pub(crate) fn shared(&self) -> Rc<RendererInner> {
        Rc::clone(&self.inner)
    }

    fn sdl(&self) -> &Sdl {
        &self.inner.sdl
    }

    /// Raw renderer pointer
    pub fn raw(&self) -> *mut SDL_Renderer {
        self.inner.raw()
    }

    /// The surface a software renderer draws into
    pub fn target_surface(&self) -> Option<&Surface> {
        match &self.inner.output {
            Output::Surface(surface) => Some(surface),
            Output::Window { .. } => None,
        }
    }

    /// Backend name, e.g. `"opengl"` or `"software"`
    pub fn name(&self) -> String {
        unsafe { sys::string_from_ptr((self.sdl().api().SDL_GetRendererName)(self.raw())) }
    }

    /// Renderer property group
    pub fn properties(&self) -> Result<Properties> {
        Properties::of_object(self.sdl(), unsafe { (self.sdl().api().SDL_GetRendererProperties)(self.raw()) })
    }

    fn size(&self, get: unsafe extern "C" fn(*mut SDL_Renderer, *mut c_int, *mut c_int) -> bool) -> Result<(u32, u32)> {
        let (mut w, mut h) = (0, 0);
        self.sdl().check(unsafe { get(self.raw(), &mut w, &mut h) })?;
        Ok((w.max(0) as u32, h.max(0) as u32))
    }

    /// Output size in pixels
    pub fn output_size(&self) -> Result<(u32, u32)> {
        self.size(self.sdl().api().SDL_GetRenderOutputSize)
    }

    /// Size of the current target (a texture target if one is set)
    pub fn current_output_size(&self) -> Result<(u32, u32)> {
        self.size(self.sdl().api().SDL_GetCurrentRenderOutputSize)
    }

    /// 0 off, 1 every refresh, 2 every second refresh, [`super::VSYNC_ADAPTIVE`]
    pub fn set_vsync(&self, vsync: i32) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetRenderVSync)(self.raw(), vsync) })
    }

    /// Current vsync interval
    pub fn vsync(&self) -> Result<i32> {
        let mut vsync = 0;
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_GetRenderVSync)(self.raw(), &mut vsync) })?;
        Ok(vsync)
    }

    /// Color used by clear and the draw calls
    pub fn set_draw_color(&self, color: Color) -> Result<()> {
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_SetRenderDrawColor)(self.raw(), color.r, color.g, color.b, color.a)
        })
    }

    /// Float draw color
    pub fn set_draw_color_float(&self, color: FColor) -> Result<()> {
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_SetRenderDrawColorFloat)(self.raw(), color.r, color.g, color.b, color.a)
        })
    }

    /// Current draw color
    pub fn draw_color(&self) -> Result<Color> {
        let mut c = Color::default();
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_GetRenderDrawColor)(self.raw(), &mut c.r, &mut c.g, &mut c.b, &mut c.a)
        })?;
        Ok(c)
    }

    /// Multiplier applied to all colors, for HDR output
    pub fn set_color_scale(&self, scale: f32) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetRenderColorScale)(self.raw(), scale) })
    }

    /// Current color scale
    pub fn color_scale(&self) -> Result<f32> {
        let mut scale = 0.0;
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_GetRenderColorScale)(self.raw(), &mut scale) })?;
        Ok(scale)
    }

    /// Blend mode for the draw calls
    pub fn set_draw_blend_mode(&self, mode: BlendMode) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetRenderDrawBlendMode)(self.raw(), mode.0) })
    }

    /// Current draw blend mode
    pub fn draw_blend_mode(&self) -> Result<BlendMode> {
        let mut mode = 0;
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_GetRenderDrawBlendMode)(self.raw(), &mut mode) })?;
        Ok(BlendMode(mode))
    }

    /// Draw into `texture` (created with [`super::TextureAccess::Target`]), or back to the output with `None`
    pub fn set_target(&self, texture: Option<&Texture>) -> Result<()> {
        let texture = texture.map_or(std::ptr::null_mut(), Texture::raw);
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetRenderTarget)(self.raw(), texture) })
    }

    /// True while a texture is the render target
    pub fn has_target(&self) -> bool {
        !unsafe { (self.sdl().api().SDL_GetRenderTarget)(self.raw()) }.is_null()
    }

    /// Device independent resolution and how it maps onto the output
    pub fn set_logical_presentation(&self, width: u32, height: u32, mode: LogicalPresentation) -> Result<()> {
        let (w, h) = (to_c_int("logical width", width as usize)?, to_c_int("logical height", height as usize)?);
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_SetRenderLogicalPresentation)(self.raw(), w, h, mode as c_int)
        })
    }

    /// Current logical size and presentation mode
    pub fn logical_presentation(&self) -> Result<(u32, u32, LogicalPresentation)> {
        let (mut w, mut h, mut mode) = (0, 0, 0);
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_GetRenderLogicalPresentation)(self.raw(), &mut w, &mut h, &mut mode)
        })?;
        Ok((w.max(0) as u32, h.max(0) as u32, LogicalPresentation::from_raw(mode)))
    }

    /// Map a window point into render coordinates
    pub fn coordinates_from_window(&self, window_x: f32, window_y: f32) -> Result<FPoint> {
        let mut point = FPoint::default();
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_RenderCoordinatesFromWindow)(self.raw(), window_x, window_y, &mut point.x, &mut point.y)
        })?;
        Ok(point)
    }

    /// Map a render point into window coordinates
    pub fn coordinates_to_window(&self, x: f32, y: f32) -> Result<FPoint> {
        let mut point = FPoint::default();
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_RenderCoordinatesToWindow)(self.raw(), x, y, &mut point.x, &mut point.y)
        })?;
        Ok(point)
    }

    /// Restrict drawing to `rect`, or the whole target with `None`
    pub fn set_viewport(&self, rect: Option<&Rect>) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetRenderViewport)(self.raw(), rect_ptr(rect)) })
    }

    /// Current viewport
    pub fn viewport(&self) -> Result<Rect> {
        let mut rect = Rect::default();
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_GetRenderViewport)(self.raw(), &mut rect) })?;
        Ok(rect)
    }

    /// Clip drawing to `rect` (viewport relative), or disable clipping with `None`
    pub fn set_clip_rect(&self, rect: Option<&Rect>) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetRenderClipRect)(self.raw(), rect_ptr(rect)) })
    }

    /// Current clip rectangle; empty when clipping is off
    pub fn clip_rect(&self) -> Result<Rect> {
        let mut rect = Rect::default();
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_GetRenderClipRect)(self.raw(), &mut rect) })?;
        Ok(rect)
    }

    /// True if clipping is on
    pub fn clip_enabled(&self) -> bool {
        unsafe { (self.sdl().api().SDL_RenderClipEnabled)(self.raw()) }
    }

    /// Scale applied to all drawing
    pub fn set_scale(&self, scale_x: f32, scale_y: f32) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_SetRenderScale)(self.raw(), scale_x, scale_y) })
    }

    /// Current drawing scale
    pub fn scale(&self) -> Result<(f32, f32)> {
        let (mut x, mut y) = (0.0, 0.0);
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_GetRenderScale)(self.raw(), &mut x, &mut y) })?;
        Ok((x, y))
    }

    /// Fill the target with the draw color, ignoring viewport and clip
    pub fn clear(&self) -> Result<()> {
        self.sdl().check(unsafe { (self.sdl().api().SDL_RenderClear)(self.raw()) })
    }

    /// Draw a point
    pub fn draw_point(&self, point: FPoint) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_RenderPoint)(self.raw(), point.x, point.y) })
    }

    /// Draw several points
    pub fn draw_points(&self, points: &[FPoint]) -> Result<()> {
        let count = to_c_int("point count", points.len())?;
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_RenderPoints)(self.raw(), points.as_ptr(), count) })
    }

    /// Draw a line
    pub fn draw_line(&self, start: FPoint, end: FPoint) -> Result<()> {
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_RenderLine)(self.raw(), start.x, start.y, end.x, end.y)
        })
    }

    /// Draw a connected polyline
    pub fn draw_lines(&self, points: &[FPoint]) -> Result<()> {
        let count = to_c_int("point count", points.len())?;
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_RenderLines)(self.raw(), points.as_ptr(), count) })
    }

    /// Outline a rectangle; `None` outlines the whole target
    pub fn draw_rect(&self, rect: Option<&FRect>) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_RenderRect)(self.raw(), frect_ptr(rect)) })
    }

    /// Outline several rectangles
    pub fn draw_rects(&self, rects: &[FRect]) -> Result<()> {
        let count = to_c_int("rect count", rects.len())?;
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_RenderRects)(self.raw(), rects.as_ptr(), count) })
    }

    /// Fill a rectangle; `None` fills the whole target
    pub fn fill_rect(&self, rect: Option<&FRect>) -> Result<()> {
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_RenderFillRect)(self.raw(), frect_ptr(rect)) })
    }

    /// Fill several rectangles
    pub fn fill_rects(&self, rects: &[FRect]) -> Result<()> {
        let count = to_c_int("rect count", rects.len())?;
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_RenderFillRects)(self.raw(), rects.as_ptr(), count) })
    }

    /// Copy part of a texture (`src`, or all of it) to `dst` (or the whole target)
    pub fn render_texture(&self, texture: &Texture, src: Option<&FRect>, dst: Option<&FRect>) -> Result<()> {
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_RenderTexture)(self.raw(), texture.raw(), frect_ptr(src), frect_ptr(dst))
        })
    }

    /// Copy a texture rotated by `angle` degrees clockwise around `center` (default: `dst` centre)
    pub fn render_texture_rotated(
        &self,
        texture: &Texture,
        src: Option<&FRect>,
        dst: Option<&FRect>,
        angle: f64,
        center: Option<&FPoint>,
        flip: FlipMode,
    ) -> Result<()> {
        let center = center.map_or(std::ptr::null(), |c| c as *const FPoint);
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_RenderTextureRotated)(
                self.raw(),
                texture.raw(),
                frect_ptr(src),
                frect_ptr(dst),
                angle,
                center,
                flip as c_int,
            )
        })
    }

    /// Tile a texture over `dst`, scaling each tile by `scale`
    pub fn render_texture_tiled(
        &self,
        texture: &Texture,
        src: Option<&FRect>,
        scale: f32,
        dst: Option<&FRect>,
    ) -> Result<()> {
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_RenderTextureTiled)(self.raw(), texture.raw(), frect_ptr(src), scale, frect_ptr(dst))
        })
    }

    /// Nine-slice scaling: corners keep their size, edges and centre stretch
    #[allow(clippy::too_many_arguments)]
    pub fn render_texture_9grid(
        &self,
        texture: &Texture,
        src: Option<&FRect>,
        left_width: f32,
        right_width: f32,
        top_height: f32,
        bottom_height: f32,
        scale: f32,
        dst: Option<&FRect>,
    ) -> Result<()> {
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_RenderTexture9Grid)(
                self.raw(),
                texture.raw(),
                frect_ptr(src),
                left_width,
                right_width,
                top_height,
                bottom_height,
                scale,
                frect_ptr(dst),
            )
        })
    }

    /// Draw triangles; `indices` selects vertices in groups of three, `None` uses them in order
    pub fn render_geometry(&self, texture: Option<&Texture>, vertices: &[Vertex], indices: Option<&[i32]>) -> Result<()> {
        let texture = texture.map_or(std::ptr::null_mut(), Texture::raw);
        let num_vertices = to_c_int("vertex count", vertices.len())?;
        let (index_ptr, num_indices) = match indices {
            Some(indices) => {
                check_indices(indices, vertices.len())?;
                (indices.as_ptr(), to_c_int("index count", indices.len())?)
            }
            None => (std::ptr::null(), 0),
        };
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_RenderGeometry)(
                self.raw(),
                texture,
                vertices.as_ptr(),
                num_vertices,
                index_ptr,
                num_indices,
            )
        })
    }

    /// Draw ASCII text with the built-in 8x8 debug font
    pub fn debug_text(&self, x: f32, y: f32, text: &str) -> Result<()> {
        let text = sys::c_string(text)?;
        self.sdl()
            .check(unsafe { (self.sdl().api().SDL_RenderDebugText)(self.raw(), x, y, text.as_ptr()) })
    }

    /// Copy pixels back from the current target; slow, meant for screenshots
    pub fn read_pixels(&self, rect: Option<&Rect>) -> Result<Surface> {
        let raw = self
            .sdl()
            .check_ptr(unsafe { (self.sdl().api().SDL_RenderReadPixels)(self.raw(), rect_ptr(rect)) })?;
        Ok(unsafe { Surface::from_raw(self.sdl(), raw) })
    }

    /// Show everything drawn since the last present
    pub fn present(&self) -> Result<()> {
        self.sdl().check(unsafe { (self.sdl().api().SDL_RenderPresent)(self.raw()) })
    }

    /// Submit queued commands now, before mixing in raw graphics API calls
    pub fn flush(&self) -> Result<()> {
        self.sdl().check(unsafe { (self.sdl().api().SDL_FlushRenderer)(self.raw()) })
    }

    /// `CAMetalLayer` of a Metal renderer
    pub fn metal_layer(&self) -> Option<NonNull<c_void>> {
        NonNull::new(unsafe { (self.sdl().api().SDL_GetRenderMetalLayer)(self.raw()) })
    }

    /// Current `MTLRenderCommandEncoder` of a Metal renderer
    pub fn metal_command_encoder(&self) -> Option<NonNull<c_void>> {
        NonNull::new(unsafe { (self.sdl().api().SDL_GetRenderMetalCommandEncoder)(self.raw()) })
    }
}

fn ensure_no_window_surface(window: &Window) -> Result<()> {
    if window.is_surface_borrowed() {
        return Err(Error::InUse("window surface"));
    }
    Ok(())
}

/// Every index must select one of `vertex_count` vertices
fn check_indices(indices: &[i32], vertex_count: usize) -> Result<()> {
    match indices
        .iter()
        .find(|&&index| usize::try_from(index).map_or(true, |index| index >= vertex_count))
    {
        Some(&index) => Err(Error::OutOfRange {
            what: "vertex index",
            value: index as u64,
        }),
        None => Ok(()),
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer").field("raw", &self.inner.raw).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_within_vertices() {
        assert!(check_indices(&[0, 1, 2, 2, 1, 3], 4).is_ok());
        assert!(check_indices(&[], 0).is_ok());
    }

    #[test]
    fn test_index_past_the_end_is_rejected() {
        assert!(matches!(
            check_indices(&[0, 1, 3], 3),
            Err(Error::OutOfRange { what: "vertex index", value: 3 })
        ));
    }

    #[test]
    fn test_negative_index_is_rejected() {
        assert!(matches!(
            check_indices(&[0, -1, 2], 3),
            Err(Error::OutOfRange { what: "vertex index", .. })
        ));
    }
}
