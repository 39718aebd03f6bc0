//! # SDL Bridge
//!
//! Safe Rust bindings over the SDL3 C API and the SDL3_ttf satellite library.
//!
//! Both libraries are opened at runtime. Every wrapper owns exactly one
//! native handle, forwards each method to a single native entry point and
//! releases the handle on drop. Native failures surface as
//! [`Error::Sdl`] carrying the text of `SDL_GetError()`.
//!
//! ## Features
//!
//! - **Video**: displays, windows and raw window handles
//! - **Rendering**: 2D renderer, textures and geometry
//! - **Pixels**: pixel formats, colorspaces, palettes and surfaces
//! - **I/O**: streams, async I/O and storage containers
//! - **Interop**: OpenGL, EGL, Metal and Vulkan (through `ash`)
//! - **Camera**: device enumeration and frame capture
//! - **Text** (feature `ttf`): fonts, shaped text and text engines
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sdl_bridge::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let sdl = Sdl::load()?;
//!     sdl.init(InitFlags::VIDEO)?;
//!
//!     let window = Window::new(&sdl, "Hello", 640, 480, WindowFlags::RESIZABLE)?;
//!     let renderer = Renderer::new(&window, None)?;
//!
//!     renderer.set_draw_color(Color::rgb(30, 30, 40))?;
//!     renderer.clear()?;
//!     renderer.present()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::missing_errors_doc,
    clippy::missing_safety_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

pub mod sys;

pub mod config;
pub mod context;
pub mod error;
pub mod logging;

pub mod asyncio;
pub mod camera;
pub mod interop;
pub mod iostream;
pub mod pixels;
pub mod properties;
pub mod rect;
pub mod render;
pub mod storage;
pub mod surface;
pub mod video;

#[cfg(feature = "ttf")]
pub mod ttf;

pub use config::{Config, ConfigError, ConfigFormat, SdlConfig};
pub use context::{InitFlags, Sdl, Version};
pub use error::{Error, Result};

/// Common imports for binding users
pub mod prelude {
    pub use crate::{
        asyncio::{AsyncIo, AsyncIoQueue, AsyncOutcome},
        camera::{Camera, CameraId, CameraSpec},
        config::{Config, SdlConfig},
        context::{InitFlags, Sdl, Version},
        error::{Error, Result},
        iostream::{IoStream, Whence},
        pixels::{BlendMode, Color, Colorspace, FColor, FlipMode, PixelFormat, ScaleMode},
        properties::Properties,
        rect::{FPoint, FRect, Point, Rect},
        render::{Renderer, Texture, TextureAccess, Vertex},
        storage::Storage,
        surface::{Surface, SurfaceTarget},
        video::{Display, Window, WindowFlags},
    };

    #[cfg(feature = "ttf")]
    pub use crate::ttf::{Font, RendererTextEngine, SurfaceTextEngine, Text, TextEngine, Ttf};
}
