use std::ffi::c_int;
use std::fmt;
use std::path::Path;
use std::ptr::NonNull;
use std::rc::Rc;

use bitflags::bitflags;

use super::Ttf;
use crate::error::Result;
use crate::iostream::IoStream;
use crate::pixels::Color;
use crate::properties::Properties;
use crate::surface::Surface;
use crate::sys::{self, SDL_Surface, TTF_Font};

bitflags! {
    /// `TTF_FontStyleFlags`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FontStyle: u32 {
        /// Bold
        const BOLD = 0x01;
        /// Italic
        const ITALIC = 0x02;
        /// Underlined
        const UNDERLINE = 0x04;
        /// Struck through
        const STRIKETHROUGH = 0x08;
    }
}

/// Glyph hinting (`TTF_HintingFlags`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum Hinting {
    /// FreeType's default hinting
    #[default]
    Normal = 0,
    /// Lighter hinting for smoother glyphs
    Light = 1,
    /// Strong hinting for monochrome output
    Mono = 2,
    /// No hinting
    None = 3,
    /// Light hinting with subpixel positioning
    LightSubpixel = 4,
}

impl Hinting {
    fn from_raw(raw: c_int) -> Option<Self> {
        Some(match raw {
            0 => Self::Normal,
            1 => Self::Light,
            2 => Self::Mono,
            3 => Self::None,
            4 => Self::LightSubpixel,
            _ => return None,
        })
    }
}

/// Alignment of wrapped lines (`TTF_HorizontalAlignment`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum HorizontalAlignment {
    /// Flush left
    #[default]
    Left = 0,
    /// Centered
    Center = 1,
    /// Flush right
    Right = 2,
}

impl HorizontalAlignment {
    fn from_raw(raw: c_int) -> Option<Self> {
        Some(match raw {
            0 => Self::Left,
            1 => Self::Center,
            2 => Self::Right,
            _ => return None,
        })
    }
}

/// Text direction (`TTF_Direction`); values follow HarfBuzz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Direction {
    /// Left to right
    LeftToRight = 4,
    /// Right to left
    RightToLeft = 5,
    /// Top to bottom
    TopToBottom = 6,
    /// Bottom to top
    BottomToTop = 7,
}

impl Direction {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        Some(match raw {
            4 => Self::LeftToRight,
            5 => Self::RightToLeft,
            6 => Self::TopToBottom,
            7 => Self::BottomToTop,
            _ => return None,
        })
    }
}

/// Bounding box and advance of a single glyph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Left edge
    pub min_x: i32,
    /// Right edge
    pub max_x: i32,
    /// Bottom edge
    pub min_y: i32,
    /// Top edge
    pub max_y: i32,
    /// Horizontal advance
    pub advance: i32,
}

pub(crate) struct FontInner {
    ttf: Ttf,
    raw: NonNull<TTF_Font>,
    // Font data read lazily by FreeType; copies share it.
    _data: Option<Rc<[u8]>>,
}

impl FontInner {
    pub(crate) fn ttf(&self) -> &Ttf {
        &self.ttf
    }

    pub(crate) fn raw(&self) -> *mut TTF_Font {
        self.raw.as_ptr()
    }
}

impl Drop for FontInner {
    fn drop(&mut self) {
        unsafe { (self.ttf.api().TTF_CloseFont)(self.raw()) };
        log::trace!("Closed font {:p}", self.raw);
    }
}

/// A font face at a given size
///
/// Setters take `&self`: the native font is mutable state shared with any
/// [`super::Text`] created from it, which keeps the font alive.
pub struct Font {
    inner: Rc<FontInner>,
}

impl Font {
    /// Open a font file at `ptsize` points
    pub fn open(ttf: &Ttf, path: impl AsRef<Path>, ptsize: f32) -> Result<Self> {
        let path = sys::path_c_string(path.as_ref())?;
        let raw = unsafe { (ttf.api().TTF_OpenFont)(path.as_ptr(), ptsize) };
        Self::opened(ttf, raw, None)
    }

    /// Open a font from a stream; the font takes the stream and closes it
    pub fn from_io(ttf: &Ttf, stream: IoStream, ptsize: f32) -> Result<Self> {
        let stream = stream.into_raw();
        let raw = unsafe { (ttf.api().TTF_OpenFontIO)(stream.as_ptr(), true, ptsize) };
        Self::opened(ttf, raw, None)
    }

    /// Open a font from an in-memory file
    pub fn from_bytes(ttf: &Ttf, data: impl Into<Rc<[u8]>>, ptsize: f32) -> Result<Self> {
        let data = data.into();
        let sdl = ttf.sdl();
        let stream = sdl.check_ptr(unsafe { (sdl.api().SDL_IOFromConstMem)(data.as_ptr().cast(), data.len()) })?;
        let raw = unsafe { (ttf.api().TTF_OpenFontIO)(stream.as_ptr(), true, ptsize) };
        Self::opened(ttf, raw, Some(data))
    }

    /// Open from `SDL_ttf.font.create.*` properties
    pub fn with_properties(ttf: &Ttf, props: &Properties) -> Result<Self> {
        let raw = unsafe { (ttf.api().TTF_OpenFontWithProperties)(props.id()) };
        Self::opened(ttf, raw, None)
    }

    fn opened(ttf: &Ttf, raw: *mut TTF_Font, data: Option<Rc<[u8]>>) -> Result<Self> {
        let raw = ttf.sdl().check_ptr(raw)?;
        log::debug!("Opened font {raw:p}");
        Ok(Self {
            inner: Rc::new(FontInner {
                ttf: ttf.clone(),
                raw,
                _data: data,
            }),
        })
    }

    /// An independent font over the same face data
    pub fn copy(&self) -> Result<Self> {
        let raw = unsafe { (self.api().TTF_CopyFont)(self.raw()) };
        Self::opened(self.ttf(), raw, self.inner._data.clone())
    }

    pub(crate) fn shared(&self) -> Rc<FontInner> {
        Rc::clone(&self.inner)
    }

    fn ttf(&self) -> &Ttf {
        &self.inner.ttf
    }

    fn api(&self) -> &sys::TtfApi {
        self.inner.ttf.api()
    }

    fn check(&self, ok: bool) -> Result<()> {
        self.ttf().sdl().check(ok)
    }

    /// Raw font pointer
    pub fn raw(&self) -> *mut TTF_Font {
        self.inner.raw()
    }

    /// Font property group
    pub fn properties(&self) -> Result<Properties> {
        Properties::of_object(self.ttf().sdl(), unsafe { (self.api().TTF_GetFontProperties)(self.raw()) })
    }

    /// Counter bumped whenever a setting that affects glyphs changes
    pub fn generation(&self) -> u32 {
        unsafe { (self.api().TTF_GetFontGeneration)(self.raw()) }
    }

    /// Resize, clearing cached glyphs
    pub fn set_size(&self, ptsize: f32) -> Result<()> {
        self.check(unsafe { (self.api().TTF_SetFontSize)(self.raw(), ptsize) })
    }

    /// Resize for a given resolution
    pub fn set_size_dpi(&self, ptsize: f32, hdpi: i32, vdpi: i32) -> Result<()> {
        self.check(unsafe { (self.api().TTF_SetFontSizeDPI)(self.raw(), ptsize, hdpi, vdpi) })
    }

    /// Point size
    pub fn size(&self) -> f32 {
        unsafe { (self.api().TTF_GetFontSize)(self.raw()) }
    }

    /// Horizontal and vertical resolution
    pub fn dpi(&self) -> Result<(i32, i32)> {
        let (mut h, mut v) = (0, 0);
        self.check(unsafe { (self.api().TTF_GetFontDPI)(self.raw(), &mut h, &mut v) })?;
        Ok((h, v))
    }

    /// Set bold/italic/underline/strikethrough
    pub fn set_style(&self, style: FontStyle) {
        unsafe { (self.api().TTF_SetFontStyle)(self.raw(), style.bits()) };
    }

    /// Current style
    pub fn style(&self) -> FontStyle {
        FontStyle::from_bits_retain(unsafe { (self.api().TTF_GetFontStyle)(self.raw()) })
    }

    /// Outline thickness in pixels, 0 for none
    pub fn set_outline(&self, outline: i32) -> Result<()> {
        self.check(unsafe { (self.api().TTF_SetFontOutline)(self.raw(), outline) })
    }

    /// Outline thickness
    pub fn outline(&self) -> i32 {
        unsafe { (self.api().TTF_GetFontOutline)(self.raw()) }
    }

    /// Hinting mode
    pub fn set_hinting(&self, hinting: Hinting) {
        unsafe { (self.api().TTF_SetFontHinting)(self.raw(), hinting as c_int) };
    }

    /// Current hinting, `None` if the font reports an invalid mode
    pub fn hinting(&self) -> Option<Hinting> {
        Hinting::from_raw(unsafe { (self.api().TTF_GetFontHinting)(self.raw()) })
    }

    /// Render signed distance fields instead of coverage
    pub fn set_sdf(&self, enabled: bool) -> Result<()> {
        self.check(unsafe { (self.api().TTF_SetFontSDF)(self.raw(), enabled) })
    }

    /// True if SDF rendering is on
    pub fn sdf(&self) -> bool {
        unsafe { (self.api().TTF_GetFontSDF)(self.raw()) }
    }

    /// Alignment of wrapped lines
    pub fn set_wrap_alignment(&self, align: HorizontalAlignment) {
        unsafe { (self.api().TTF_SetFontWrapAlignment)(self.raw(), align as c_int) };
    }

    /// Current wrap alignment
    pub fn wrap_alignment(&self) -> Option<HorizontalAlignment> {
        HorizontalAlignment::from_raw(unsafe { (self.api().TTF_GetFontWrapAlignment)(self.raw()) })
    }

    /// Maximum glyph height
    pub fn height(&self) -> i32 {
        unsafe { (self.api().TTF_GetFontHeight)(self.raw()) }
    }

    /// Distance from baseline to the top
    pub fn ascent(&self) -> i32 {
        unsafe { (self.api().TTF_GetFontAscent)(self.raw()) }
    }

    /// Distance from baseline to the bottom, negative
    pub fn descent(&self) -> i32 {
        unsafe { (self.api().TTF_GetFontDescent)(self.raw()) }
    }

    /// Override the spacing between lines
    pub fn set_line_skip(&self, line_skip: i32) {
        unsafe { (self.api().TTF_SetFontLineSkip)(self.raw(), line_skip) };
    }

    /// Spacing between lines
    pub fn line_skip(&self) -> i32 {
        unsafe { (self.api().TTF_GetFontLineSkip)(self.raw()) }
    }

    /// Toggle kerning
    pub fn set_kerning(&self, enabled: bool) {
        unsafe { (self.api().TTF_SetFontKerning)(self.raw(), enabled) };
    }

    /// True if kerning is on
    pub fn kerning(&self) -> bool {
        unsafe { (self.api().TTF_GetFontKerning)(self.raw()) }
    }

    /// True for monospaced faces
    pub fn is_fixed_width(&self) -> bool {
        unsafe { (self.api().TTF_FontIsFixedWidth)(self.raw()) }
    }

    /// True for outline (non-bitmap) faces
    pub fn is_scalable(&self) -> bool {
        unsafe { (self.api().TTF_FontIsScalable)(self.raw()) }
    }

    /// Family name, e.g. "DejaVu Sans"
    pub fn family_name(&self) -> Option<String> {
        unsafe { sys::optional_string_from_ptr((self.api().TTF_GetFontFamilyName)(self.raw())) }
    }

    /// Style name, e.g. "Bold"
    pub fn style_name(&self) -> Option<String> {
        unsafe { sys::optional_string_from_ptr((self.api().TTF_GetFontStyleName)(self.raw())) }
    }

    /// Shaping direction
    pub fn set_direction(&self, direction: Direction) -> Result<()> {
        self.check(unsafe { (self.api().TTF_SetFontDirection)(self.raw(), direction as c_int) })
    }

    /// Current direction, `None` when unset
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_raw(unsafe { (self.api().TTF_GetFontDirection)(self.raw()) })
    }

    /// Shaping script, as a tag from [`super::tag`]
    pub fn set_script(&self, script: u32) -> Result<()> {
        self.check(unsafe { (self.api().TTF_SetFontScript)(self.raw(), script) })
    }

    /// Current script tag, 0 when unset
    pub fn script(&self) -> u32 {
        unsafe { (self.api().TTF_GetFontScript)(self.raw()) }
    }

    /// BCP 47 language used for shaping, `None` to reset
    pub fn set_language(&self, language: Option<&str>) -> Result<()> {
        let language = sys::optional_c_string(language)?;
        self.check(unsafe { (self.api().TTF_SetFontLanguage)(self.raw(), sys::optional_ptr(&language)) })
    }

    /// True if the face has a glyph for `ch`
    pub fn has_glyph(&self, ch: char) -> bool {
        unsafe { (self.api().TTF_FontHasGlyph)(self.raw(), u32::from(ch)) }
    }

    /// Metrics of the glyph for `ch`
    pub fn glyph_metrics(&self, ch: char) -> Result<GlyphMetrics> {
        let mut m = GlyphMetrics::default();
        self.check(unsafe {
            (self.api().TTF_GetGlyphMetrics)(
                self.raw(),
                u32::from(ch),
                &mut m.min_x,
                &mut m.max_x,
                &mut m.min_y,
                &mut m.max_y,
                &mut m.advance,
            )
        })?;
        Ok(m)
    }

    /// Kerning adjustment between two glyphs
    pub fn glyph_kerning(&self, previous: char, ch: char) -> Result<i32> {
        let mut kerning = 0;
        self.check(unsafe {
            (self.api().TTF_GetGlyphKerning)(self.raw(), u32::from(previous), u32::from(ch), &mut kerning)
        })?;
        Ok(kerning)
    }

    /// Size of `text` on a single line
    pub fn string_size(&self, text: &str) -> Result<(i32, i32)> {
        let (ptr, len) = sys::text_arg(text);
        let (mut w, mut h) = (0, 0);
        self.check(unsafe { (self.api().TTF_GetStringSize)(self.raw(), ptr, len, &mut w, &mut h) })?;
        Ok((w, h))
    }

    /// Size of `text` wrapped at `wrap_width` pixels (0 wraps on newlines only)
    pub fn string_size_wrapped(&self, text: &str, wrap_width: i32) -> Result<(i32, i32)> {
        let (ptr, len) = sys::text_arg(text);
        let (mut w, mut h) = (0, 0);
        self.check(unsafe {
            (self.api().TTF_GetStringSizeWrapped)(self.raw(), ptr, len, wrap_width, &mut w, &mut h)
        })?;
        Ok((w, h))
    }

    /// How much of `text` fits in `max_width`: (pixel width, byte length)
    pub fn measure_string(&self, text: &str, max_width: i32) -> Result<(i32, usize)> {
        let (ptr, len) = sys::text_arg(text);
        let (mut width, mut length) = (0, 0usize);
        self.check(unsafe {
            (self.api().TTF_MeasureString)(self.raw(), ptr, len, max_width, &mut width, &mut length)
        })?;
        Ok((width, length))
    }

    fn rendered(&self, raw: *mut SDL_Surface) -> Result<Surface> {
        let raw = self.ttf().sdl().check_ptr(raw)?;
        // SAFETY: SDL_ttf hands us a fresh surface.
        Ok(unsafe { Surface::from_raw(self.ttf().sdl(), raw) })
    }

    /// Fast 8-bit palettized rendering
    pub fn render_solid(&self, text: &str, fg: Color) -> Result<Surface> {
        let (ptr, len) = sys::text_arg(text);
        self.rendered(unsafe { (self.api().TTF_RenderText_Solid)(self.raw(), ptr, len, fg) })
    }

    /// Solid rendering wrapped at `wrap_width` pixels
    pub fn render_solid_wrapped(&self, text: &str, fg: Color, wrap_width: i32) -> Result<Surface> {
        let (ptr, len) = sys::text_arg(text);
        self.rendered(unsafe { (self.api().TTF_RenderText_Solid_Wrapped)(self.raw(), ptr, len, fg, wrap_width) })
    }

    /// Antialiased text over an opaque background
    pub fn render_shaded(&self, text: &str, fg: Color, bg: Color) -> Result<Surface> {
        let (ptr, len) = sys::text_arg(text);
        self.rendered(unsafe { (self.api().TTF_RenderText_Shaded)(self.raw(), ptr, len, fg, bg) })
    }

    /// Shaded rendering wrapped at `wrap_width` pixels
    pub fn render_shaded_wrapped(&self, text: &str, fg: Color, bg: Color, wrap_width: i32) -> Result<Surface> {
        let (ptr, len) = sys::text_arg(text);
        self.rendered(unsafe {
            (self.api().TTF_RenderText_Shaded_Wrapped)(self.raw(), ptr, len, fg, bg, wrap_width)
        })
    }

    /// Antialiased text with alpha, ready to blend
    pub fn render_blended(&self, text: &str, fg: Color) -> Result<Surface> {
        let (ptr, len) = sys::text_arg(text);
        self.rendered(unsafe { (self.api().TTF_RenderText_Blended)(self.raw(), ptr, len, fg) })
    }

    /// Blended rendering wrapped at `wrap_width` pixels
    pub fn render_blended_wrapped(&self, text: &str, fg: Color, wrap_width: i32) -> Result<Surface> {
        let (ptr, len) = sys::text_arg(text);
        self.rendered(unsafe {
            (self.api().TTF_RenderText_Blended_Wrapped)(self.raw(), ptr, len, fg, wrap_width)
        })
    }

    /// Subpixel (LCD) rendering over a background
    pub fn render_lcd(&self, text: &str, fg: Color, bg: Color) -> Result<Surface> {
        let (ptr, len) = sys::text_arg(text);
        self.rendered(unsafe { (self.api().TTF_RenderText_LCD)(self.raw(), ptr, len, fg, bg) })
    }

    /// LCD rendering wrapped at `wrap_width` pixels
    pub fn render_lcd_wrapped(&self, text: &str, fg: Color, bg: Color, wrap_width: i32) -> Result<Surface> {
        let (ptr, len) = sys::text_arg(text);
        self.rendered(unsafe {
            (self.api().TTF_RenderText_LCD_Wrapped)(self.raw(), ptr, len, fg, bg, wrap_width)
        })
    }

    /// A single blended glyph
    pub fn render_glyph(&self, ch: char, fg: Color) -> Result<Surface> {
        self.rendered(unsafe { (self.api().TTF_RenderGlyph_Blended)(self.raw(), u32::from(ch), fg) })
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.family_name())
            .field("size", &self.size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_bits() {
        let style = FontStyle::BOLD | FontStyle::UNDERLINE;
        assert_eq!(style.bits(), 0x05);
        assert_eq!(FontStyle::default(), FontStyle::empty());
    }

    #[test]
    fn test_hinting_round_trip() {
        for hinting in [Hinting::Normal, Hinting::Light, Hinting::Mono, Hinting::None, Hinting::LightSubpixel] {
            assert_eq!(Hinting::from_raw(hinting as c_int), Some(hinting));
        }
        assert_eq!(Hinting::from_raw(-1), None);
    }

    #[test]
    fn test_direction_values() {
        assert_eq!(Direction::LeftToRight as i32, 4);
        assert_eq!(Direction::from_raw(7), Some(Direction::BottomToTop));
        assert_eq!(Direction::from_raw(0), None);
    }

    #[test]
    fn test_alignment_from_raw() {
        assert_eq!(HorizontalAlignment::from_raw(1), Some(HorizontalAlignment::Center));
        assert_eq!(HorizontalAlignment::from_raw(-1), None);
    }
}
