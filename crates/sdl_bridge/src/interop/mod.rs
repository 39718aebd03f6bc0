//! Hooks for driving a window with a graphics API directly
//!
//! OpenGL and EGL go through SDL's loader; Vulkan calls are typed with `ash`;
//! Metal objects are handed out as raw Objective-C pointers.

mod egl;
mod gl;
mod metal;
mod vulkan;

pub use gl::{GlAttr, GlContext, GlProfile};
pub use metal::MetalView;
pub use vulkan::VulkanSurface;

/// A native function pointer as returned by the proc-address loaders
pub type ProcAddress = unsafe extern "C" fn();
