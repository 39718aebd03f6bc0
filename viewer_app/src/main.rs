//! Image viewer demo
//!
//! Opens a window, uploads an image through a surface into a texture and
//! draws a caption with a renderer text engine.
//!
//! ```text
//! sdl_viewer <image.png> [font.ttf]
//! ```
//!
//! Settings come from `viewer.toml` in the working directory when present.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use sdl_bridge::pixels::{BlendMode, Color, PixelFormat};
use sdl_bridge::rect::FRect;
use sdl_bridge::render::{LogicalPresentation, Renderer, Texture};
use sdl_bridge::surface::Surface;
use sdl_bridge::video::WindowFlags;
use sdl_bridge::{Config, Sdl, SdlConfig};
use sdl_bridge::ttf::{Font, RendererTextEngine, Text, Ttf};
use thiserror::Error;

const CONFIG_PATH: &str = "viewer.toml";
const WINDOW_WIDTH: u32 = 960;
const WINDOW_HEIGHT: u32 = 640;
const SHOW_FOR: Duration = Duration::from_secs(5);
const FRAME_TIME: Duration = Duration::from_millis(16);

#[derive(Error, Debug)]
enum ViewerError {
    #[error(transparent)]
    Sdl(#[from] sdl_bridge::Error),

    #[error("could not decode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("usage: sdl_viewer <image> [font]")]
    Usage,
}

/// Caption drawn under the image, if a font was given
struct Caption {
    text: Text<RendererTextEngine>,
    // Library handle kept for the lifetime of the text.
    _ttf: Ttf,
}

struct ViewerApp {
    renderer: Renderer,
    image: Texture,
    caption: Option<Caption>,
    start_time: Instant,
}

impl ViewerApp {
    fn new(sdl: &Sdl, image_path: &Path, font_path: Option<&Path>, config: &SdlConfig) -> Result<Self, ViewerError> {
        log::info!("Creating window...");
        let (window, renderer) = Renderer::create_window_and_renderer(
            sdl,
            &config.app.name,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            WindowFlags::RESIZABLE | WindowFlags::HIGH_PIXEL_DENSITY,
        )?;
        log::info!("Renderer: {}", renderer.name());
        renderer.set_vsync(1)?;
        renderer.set_logical_presentation(WINDOW_WIDTH, WINDOW_HEIGHT, LogicalPresentation::Letterbox)?;
        window.show()?;

        let image = load_texture(sdl, &renderer, image_path)?;
        log::info!("Loaded {} ({}x{})", image_path.display(), image.width(), image.height());

        let caption = match font_path {
            Some(path) => Some(load_caption(sdl, config, &renderer, path, image_path)?),
            None => None,
        };

        Ok(Self {
            renderer,
            image,
            caption,
            start_time: Instant::now(),
        })
    }

    fn run(&mut self) -> Result<(), ViewerError> {
        log::info!("Showing image for {}s", SHOW_FOR.as_secs());
        let mut frames = 0u32;
        while self.start_time.elapsed() < SHOW_FOR {
            let frame_start = Instant::now();
            self.render_frame()?;
            frames += 1;
            // Vsync usually paces us; sleep when it is unavailable.
            if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }
        log::info!("Presented {frames} frames");
        Ok(())
    }

    fn render_frame(&mut self) -> Result<(), ViewerError> {
        let fade = (self.start_time.elapsed().as_secs_f32() / 1.5).min(1.0);
        self.renderer.set_draw_color(Color::rgb(24, 24, 32))?;
        self.renderer.clear()?;

        self.image.set_alpha_mod_float(fade)?;
        let dst = fit(self.image.width(), self.image.height(), WINDOW_WIDTH, WINDOW_HEIGHT - 64);
        self.renderer.render_texture(&self.image, None, Some(&dst))?;

        match &self.caption {
            Some(caption) => {
                let (w, _) = caption.text.size()?;
                let x = (WINDOW_WIDTH as f32 - w as f32) / 2.0;
                caption.text.draw(x, (WINDOW_HEIGHT - 48) as f32)?;
            }
            None => {
                self.renderer.set_draw_color(Color::WHITE)?;
                self.renderer.debug_text(8.0, (WINDOW_HEIGHT - 16) as f32, "pass a .ttf path for a caption")?;
            }
        }

        self.renderer.present()?;
        Ok(())
    }
}

fn load_texture(sdl: &Sdl, renderer: &Renderer, path: &Path) -> Result<Texture, ViewerError> {
    let decoded = image::open(path).map_err(|source| ViewerError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut pixels = rgba.into_raw();
    let surface = Surface::from_pixels(sdl, width, height, PixelFormat::RGBA32, &mut pixels, width as usize * 4)?;
    let texture = Texture::from_surface(renderer, &surface)?;
    texture.set_blend_mode(BlendMode::BLEND)?;
    Ok(texture)
}

fn load_caption(
    sdl: &Sdl,
    config: &SdlConfig,
    renderer: &Renderer,
    font_path: &Path,
    image_path: &Path,
) -> Result<Caption, ViewerError> {
    let ttf = Ttf::from_config(sdl, config)?;
    let font = Font::open(&ttf, font_path, 28.0)?;
    log::info!("Font: {}", font.family_name().unwrap_or_default());

    let engine = RendererTextEngine::new(&ttf, renderer)?;
    let label = image_path
        .file_name()
        .map_or_else(|| image_path.display().to_string(), |name| name.to_string_lossy().into_owned());
    let mut text = Text::new(&engine, &font, &label)?;
    text.set_color(Color::rgb(230, 230, 230))?;
    Ok(Caption { text, _ttf: ttf })
}

/// Largest rectangle with the image's aspect ratio centred in the area
fn fit(width: u32, height: u32, area_width: u32, area_height: u32) -> FRect {
    let scale = (area_width as f32 / width.max(1) as f32).min(area_height as f32 / height.max(1) as f32);
    let (w, h) = (width as f32 * scale, height as f32 * scale);
    FRect::new((area_width as f32 - w) / 2.0, (area_height as f32 - h) / 2.0, w, h)
}

fn load_config() -> SdlConfig {
    if Path::new(CONFIG_PATH).exists() {
        match SdlConfig::load_from_file(CONFIG_PATH) {
            Ok(config) => return config,
            Err(e) => eprintln!("Ignoring {CONFIG_PATH}: {e}"),
        }
    }
    SdlConfig::new("SDL Viewer").with_identifier("org.sdlbridge.viewer")
}

fn main() {
    let config = load_config();
    sdl_bridge::logging::init_with_level(&config.log_level);

    if let Err(e) = run(&config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: &SdlConfig) -> Result<(), ViewerError> {
    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let image_path = args.next().ok_or(ViewerError::Usage)?;
    let font_path = args.next();

    let sdl = Sdl::from_config(config)?;
    log::info!("SDL {} on {}", sdl.version(), sdl.current_video_driver().unwrap_or_default());

    let mut app = ViewerApp::new(&sdl, &image_path, font_path.as_deref(), config)?;
    app.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_wide_image() {
        let rect = fit(200, 100, 400, 400);
        assert_relative_eq!(rect.w, 400.0);
        assert_relative_eq!(rect.h, 200.0);
        assert_relative_eq!(rect.y, 100.0);
    }

    #[test]
    fn test_fit_tall_image() {
        let rect = fit(100, 400, 400, 200);
        assert_relative_eq!(rect.h, 200.0);
        assert_relative_eq!(rect.w, 50.0);
        assert_relative_eq!(rect.x, 175.0);
    }
}
