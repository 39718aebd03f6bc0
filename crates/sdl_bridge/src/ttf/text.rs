use std::ffi::{c_int, CStr};
use std::fmt;
use std::ptr::NonNull;
use std::rc::Rc;

use super::engine::{RendererTextEngine, SurfaceTextEngine, TextEngine};
use super::font::{Direction, Font, FontInner};
use super::Ttf;
use crate::error::{to_c_int, Result};
use crate::pixels::{Color, FColor};
use crate::properties::Properties;
use crate::rect::Point;
use crate::surface::SurfaceTarget;
use crate::sys::{self, TTF_Text};

/// A shaped string bound to a font and a text engine
///
/// Keeps both alive. Changing the string, font or wrap width re-shapes
/// lazily on the next size query, update or draw.
pub struct Text<E: TextEngine> {
    raw: NonNull<TTF_Text>,
    font: Rc<FontInner>,
    engine: E,
}

impl<E: TextEngine> Text<E> {
    /// Create text with `engine` and `font`
    pub fn new(engine: &E, font: &Font, text: &str) -> Result<Self> {
        let font = font.shared();
        let (ptr, len) = sys::text_arg(text);
        let ttf = font.ttf();
        let raw = ttf
            .sdl()
            .check_ptr(unsafe { (ttf.api().TTF_CreateText)(engine.raw(), font.raw(), ptr, len) })?;
        Ok(Self {
            raw,
            font,
            engine: engine.clone(),
        })
    }

    fn ttf(&self) -> &Ttf {
        self.font.ttf()
    }

    fn check(&self, ok: bool) -> Result<()> {
        self.ttf().sdl().check(ok)
    }

    /// Raw text pointer
    pub fn raw(&self) -> *mut TTF_Text {
        self.raw.as_ptr()
    }

    /// Engine the text is drawn with
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Text property group
    pub fn properties(&self) -> Result<Properties> {
        Properties::of_object(self.ttf().sdl(), unsafe { (self.ttf().api().TTF_GetTextProperties)(self.raw()) })
    }

    /// Current string
    pub fn string(&self) -> String {
        // SAFETY: SDL_ttf keeps `text` nul-terminated (or null) between edits.
        let text = unsafe { self.raw.as_ref().text };
        if text.is_null() {
            String::new()
        } else {
            unsafe { CStr::from_ptr(text) }.to_string_lossy().into_owned()
        }
    }

    /// Number of laid out lines
    pub fn line_count(&self) -> i32 {
        unsafe { self.raw.as_ref().num_lines }
    }

    /// Replace the whole string
    pub fn set_string(&mut self, text: &str) -> Result<()> {
        let (ptr, len) = sys::text_arg(text);
        self.check(unsafe { (self.ttf().api().TTF_SetTextString)(self.raw(), ptr, len) })
    }

    /// Insert at a byte offset; -1 appends
    pub fn insert_string(&mut self, offset: i32, text: &str) -> Result<()> {
        let (ptr, len) = sys::text_arg(text);
        self.check(unsafe { (self.ttf().api().TTF_InsertTextString)(self.raw(), offset, ptr, len) })
    }

    /// Append to the end
    pub fn append_string(&mut self, text: &str) -> Result<()> {
        let (ptr, len) = sys::text_arg(text);
        self.check(unsafe { (self.ttf().api().TTF_AppendTextString)(self.raw(), ptr, len) })
    }

    /// Delete `length` bytes at `offset`; a length of -1 deletes to the end
    pub fn delete_string(&mut self, offset: i32, length: i32) -> Result<()> {
        self.check(unsafe { (self.ttf().api().TTF_DeleteTextString)(self.raw(), offset, length) })
    }

    /// Shape with another font
    pub fn set_font(&mut self, font: &Font) -> Result<()> {
        self.check(unsafe { (self.ttf().api().TTF_SetTextFont)(self.raw(), font.raw()) })?;
        self.font = font.shared();
        Ok(())
    }

    /// Draw with another engine of the same kind
    pub fn set_engine(&mut self, engine: &E) -> Result<()> {
        self.check(unsafe { (self.ttf().api().TTF_SetTextEngine)(self.raw(), engine.raw()) })?;
        self.engine = engine.clone();
        Ok(())
    }

    /// Text color
    pub fn set_color(&mut self, color: Color) -> Result<()> {
        self.check(unsafe {
            (self.ttf().api().TTF_SetTextColor)(self.raw(), color.r, color.g, color.b, color.a)
        })
    }

    /// Text color as floats
    pub fn set_color_float(&mut self, color: FColor) -> Result<()> {
        self.check(unsafe {
            (self.ttf().api().TTF_SetTextColorFloat)(self.raw(), color.r, color.g, color.b, color.a)
        })
    }

    /// Current color
    pub fn color(&self) -> Result<Color> {
        let mut c = Color::default();
        self.check(unsafe {
            (self.ttf().api().TTF_GetTextColor)(self.raw(), &mut c.r, &mut c.g, &mut c.b, &mut c.a)
        })?;
        Ok(c)
    }

    /// Offset added to every draw position
    pub fn set_position(&mut self, position: Point) -> Result<()> {
        self.check(unsafe { (self.ttf().api().TTF_SetTextPosition)(self.raw(), position.x, position.y) })
    }

    /// Current position offset
    pub fn position(&self) -> Result<Point> {
        let mut p = Point::default();
        self.check(unsafe { (self.ttf().api().TTF_GetTextPosition)(self.raw(), &mut p.x, &mut p.y) })?;
        Ok(p)
    }

    /// Wrap width in pixels, 0 wraps on newlines only
    pub fn set_wrap_width(&mut self, wrap_width: u32) -> Result<()> {
        let wrap_width = to_c_int("wrap width", wrap_width as usize)?;
        self.check(unsafe { (self.ttf().api().TTF_SetTextWrapWidth)(self.raw(), wrap_width) })
    }

    /// Current wrap width
    pub fn wrap_width(&self) -> Result<i32> {
        let mut width: c_int = 0;
        self.check(unsafe { (self.ttf().api().TTF_GetTextWrapWidth)(self.raw(), &mut width) })?;
        Ok(width)
    }

    /// Keep whitespace visible at wrap points
    pub fn set_wrap_whitespace_visible(&mut self, visible: bool) -> Result<()> {
        self.check(unsafe { (self.ttf().api().TTF_SetTextWrapWhitespaceVisible)(self.raw(), visible) })
    }

    /// True if wrap whitespace is visible
    pub fn wrap_whitespace_visible(&self) -> bool {
        unsafe { (self.ttf().api().TTF_TextWrapWhitespaceVisible)(self.raw()) }
    }

    /// Shaping direction for this text only
    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        self.check(unsafe { (self.ttf().api().TTF_SetTextDirection)(self.raw(), direction as c_int) })
    }

    /// Direction override, `None` when following the font
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_raw(unsafe { (self.ttf().api().TTF_GetTextDirection)(self.raw()) })
    }

    /// Script override, as a tag from [`super::tag`]
    pub fn set_script(&mut self, script: u32) -> Result<()> {
        self.check(unsafe { (self.ttf().api().TTF_SetTextScript)(self.raw(), script) })
    }

    /// Script tag, 0 when following the font
    pub fn script(&self) -> u32 {
        unsafe { (self.ttf().api().TTF_GetTextScript)(self.raw()) }
    }

    /// Laid out size in pixels
    pub fn size(&self) -> Result<(i32, i32)> {
        let (mut w, mut h) = (0, 0);
        self.check(unsafe { (self.ttf().api().TTF_GetTextSize)(self.raw(), &mut w, &mut h) })?;
        Ok((w, h))
    }

    /// Re-shape now instead of at the next draw
    pub fn update(&mut self) -> Result<()> {
        self.check(unsafe { (self.ttf().api().TTF_UpdateText)(self.raw()) })
    }
}

impl Text<SurfaceTextEngine> {
    /// Draw onto `target` with the top-left corner at (x, y)
    pub fn draw(&self, x: i32, y: i32, target: &mut impl SurfaceTarget) -> Result<()> {
        let surface = target.as_target();
        self.check(unsafe { (self.ttf().api().TTF_DrawSurfaceText)(self.raw(), x, y, surface.raw()) })
    }
}

impl Text<RendererTextEngine> {
    /// Draw with the engine's renderer at (x, y)
    pub fn draw(&self, x: f32, y: f32) -> Result<()> {
        self.check(unsafe { (self.ttf().api().TTF_DrawRendererText)(self.raw(), x, y) })
    }
}

impl<E: TextEngine> Drop for Text<E> {
    fn drop(&mut self) {
        unsafe { (self.ttf().api().TTF_DestroyText)(self.raw()) };
    }
}

impl<E: TextEngine> fmt::Debug for Text<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text").field("string", &self.string()).finish()
    }
}
