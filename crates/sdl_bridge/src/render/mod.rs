//! 2D accelerated rendering (`SDL_Renderer`, `SDL_Texture`)
//!
//! A [`Renderer`] owns a reference to whatever it draws into (a window or a
//! surface) and every [`Texture`] owns a reference to its renderer, so the
//! native destruction order always matches the creation order.

pub(crate) mod renderer;
mod texture;

use std::ffi::c_int;

use bytemuck::{Pod, Zeroable};

pub use renderer::Renderer;
pub use texture::{Texture, TextureLock, TextureSurface};

use crate::context::Sdl;
use crate::pixels::FColor;
use crate::rect::FPoint;
use crate::sys;

/// `SDL_Vertex`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in render coordinates
    pub position: FPoint,
    /// Vertex color
    pub color: FColor,
    /// Normalized texture coordinates
    pub tex_coord: FPoint,
}

impl Vertex {
    /// Build a vertex
    pub const fn new(position: FPoint, color: FColor, tex_coord: FPoint) -> Self {
        Self {
            position,
            color,
            tex_coord,
        }
    }
}

/// `SDL_TextureAccess`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum TextureAccess {
    /// Changes rarely, not lockable
    #[default]
    Static = 0,
    /// Changes frequently, lockable
    Streaming = 1,
    /// Can be used as a render target
    Target = 2,
}

impl TextureAccess {
    /// Decode a native value
    pub const fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(Self::Static),
            1 => Some(Self::Streaming),
            2 => Some(Self::Target),
            _ => None,
        }
    }
}

/// `SDL_RendererLogicalPresentation`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum LogicalPresentation {
    /// No logical size; draw in output pixels
    #[default]
    Disabled = 0,
    /// Stretch to fill the output
    Stretch = 1,
    /// Fit inside the output, keeping aspect ratio, with black bars
    Letterbox = 2,
    /// Fill the output, keeping aspect ratio, cropping the overflow
    Overscan = 3,
    /// Largest integer multiple that fits
    IntegerScale = 4,
}

impl LogicalPresentation {
    /// Decode a native value
    pub const fn from_raw(raw: c_int) -> Self {
        match raw {
            1 => Self::Stretch,
            2 => Self::Letterbox,
            3 => Self::Overscan,
            4 => Self::IntegerScale,
            _ => Self::Disabled,
        }
    }
}

/// Adaptive vsync for [`Renderer::set_vsync`]
pub const VSYNC_ADAPTIVE: i32 = -1;
/// Vsync off for [`Renderer::set_vsync`]
pub const VSYNC_DISABLED: i32 = 0;

impl Sdl {
    /// Names of the render drivers compiled into SDL
    pub fn render_drivers(&self) -> Vec<String> {
        let count = unsafe { (self.api().SDL_GetNumRenderDrivers)() };
        (0..count)
            .map(|index| unsafe { sys::string_from_ptr((self.api().SDL_GetRenderDriver)(index)) })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(size_of::<Vertex>(), 32);
        let vertices = [Vertex::new(FPoint::new(1.0, 2.0), FColor::new(1.0, 0.0, 0.0, 1.0), FPoint::default())];
        let floats: &[f32] = bytemuck::cast_slice(&vertices);
        assert_eq!(&floats[..6], &[1.0, 2.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_enum_decoding() {
        assert_eq!(TextureAccess::from_raw(1), Some(TextureAccess::Streaming));
        assert_eq!(TextureAccess::from_raw(7), None);
        assert_eq!(LogicalPresentation::from_raw(2), LogicalPresentation::Letterbox);
        assert_eq!(LogicalPresentation::from_raw(-3), LogicalPresentation::Disabled);
        assert_eq!(LogicalPresentation::IntegerScale as i32, 4);
    }
}
