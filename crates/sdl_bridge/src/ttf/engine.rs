use std::fmt;
use std::ptr::NonNull;
use std::rc::Rc;

use super::font::Font;
use super::text::Text;
use super::Ttf;
use crate::error::Result;
use crate::render::renderer::RendererInner;
use crate::render::Renderer;
use crate::sys::TTF_TextEngine;

mod sealed {
    use std::rc::Rc;

    pub trait Sealed {
        fn inner(&self) -> &Rc<super::EngineInner>;
    }
}

pub(crate) use sealed::Sealed;

pub struct EngineInner {
    ttf: Ttf,
    raw: NonNull<TTF_TextEngine>,
    // Set for renderer engines; the renderer must outlive the engine.
    renderer: Option<Rc<RendererInner>>,
}

impl EngineInner {
    pub(crate) fn raw(&self) -> *mut TTF_TextEngine {
        self.raw.as_ptr()
    }
}

impl Drop for EngineInner {
    fn drop(&mut self) {
        let api = self.ttf.api();
        if self.renderer.is_some() {
            unsafe { (api.TTF_DestroyRendererTextEngine)(self.raw()) };
        } else {
            unsafe { (api.TTF_DestroySurfaceTextEngine)(self.raw()) };
        }
        log::debug!("Destroyed text engine {:p}", self.raw);
    }
}

/// Something that lays out and draws [`Text`]
///
/// Engines are cheap handles; clones share the native engine.
pub trait TextEngine: Sealed + Clone + Sized {
    /// Raw engine pointer
    fn raw(&self) -> *mut TTF_TextEngine {
        self.inner().raw()
    }

    /// Shape `text` with `font` for this engine
    fn create_text(&self, font: &Font, text: &str) -> Result<Text<Self>> {
        Text::new(self, font, text)
    }
}

/// Draws text into surfaces on the CPU
#[derive(Clone)]
pub struct SurfaceTextEngine {
    inner: Rc<EngineInner>,
}

impl SurfaceTextEngine {
    /// Create an engine
    pub fn new(ttf: &Ttf) -> Result<Self> {
        let raw = ttf.sdl().check_ptr(unsafe { (ttf.api().TTF_CreateSurfaceTextEngine)() })?;
        log::debug!("Created surface text engine {raw:p}");
        Ok(Self {
            inner: Rc::new(EngineInner {
                ttf: ttf.clone(),
                raw,
                renderer: None,
            }),
        })
    }
}

impl Sealed for SurfaceTextEngine {
    fn inner(&self) -> &Rc<EngineInner> {
        &self.inner
    }
}

impl TextEngine for SurfaceTextEngine {}

/// Draws text with a renderer, caching glyphs in textures
///
/// Keeps its renderer alive.
#[derive(Clone)]
pub struct RendererTextEngine {
    inner: Rc<EngineInner>,
}

impl RendererTextEngine {
    /// Create an engine drawing through `renderer`
    pub fn new(ttf: &Ttf, renderer: &Renderer) -> Result<Self> {
        let raw = ttf
            .sdl()
            .check_ptr(unsafe { (ttf.api().TTF_CreateRendererTextEngine)(renderer.raw()) })?;
        log::debug!("Created renderer text engine {raw:p}");
        Ok(Self {
            inner: Rc::new(EngineInner {
                ttf: ttf.clone(),
                raw,
                renderer: Some(renderer.shared()),
            }),
        })
    }
}

impl Sealed for RendererTextEngine {
    fn inner(&self) -> &Rc<EngineInner> {
        &self.inner
    }
}

impl TextEngine for RendererTextEngine {}

impl fmt::Debug for SurfaceTextEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceTextEngine").field("raw", &self.inner.raw).finish()
    }
}

impl fmt::Debug for RendererTextEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererTextEngine").field("raw", &self.inner.raw).finish()
    }
}
