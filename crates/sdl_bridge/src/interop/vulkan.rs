//! Vulkan loader and surface plumbing
//!
//! SDL loads the Vulkan loader library and knows how to create a
//! `VkSurfaceKHR` for each windowing system. Everything else (instances,
//! devices, swapchains) stays with `ash`.

use std::ffi::{CStr, CString};
use std::fmt;
use std::path::Path;
use std::ptr;
use std::rc::Rc;

use ash::{extensions::khr, vk};

use crate::context::Sdl;
use crate::error::Result;
use crate::sys;
use crate::video::window::WindowInner;
use crate::video::Window;

impl Sdl {
    /// Load the Vulkan loader, or the platform default with `None`
    pub fn vulkan_load_library(&self, path: Option<&Path>) -> Result<()> {
        let path = path.map(sys::path_c_string).transpose()?;
        self.check(unsafe { (self.api().SDL_Vulkan_LoadLibrary)(sys::optional_ptr(&path)) })
    }

    /// Drop the loader reference taken by [`Self::vulkan_load_library`]
    pub fn vulkan_unload_library(&self) {
        unsafe { (self.api().SDL_Vulkan_UnloadLibrary)() };
    }

    /// `vkGetInstanceProcAddr` of the loaded Vulkan loader
    pub fn vulkan_get_instance_proc_addr(&self) -> Result<vk::PFN_vkGetInstanceProcAddr> {
        let function = unsafe { (self.api().SDL_Vulkan_GetVkGetInstanceProcAddr)() };
        match function {
            // SAFETY: SDL hands out vkGetInstanceProcAddr behind a generic pointer type.
            Some(function) => Ok(unsafe {
                std::mem::transmute::<unsafe extern "C" fn(), vk::PFN_vkGetInstanceProcAddr>(function)
            }),
            None => Err(self.error()),
        }
    }

    /// An `ash` entry backed by the loader SDL opened
    ///
    /// # Safety
    ///
    /// The entry must not be used after [`Self::vulkan_unload_library`].
    pub unsafe fn vulkan_entry(&self) -> Result<ash::Entry> {
        let get_instance_proc_addr = self.vulkan_get_instance_proc_addr()?;
        Ok(ash::Entry::from_static_fn(vk::StaticFn { get_instance_proc_addr }))
    }

    /// Instance extensions needed to create window surfaces
    pub fn vulkan_instance_extensions(&self) -> Result<Vec<CString>> {
        let mut count = 0u32;
        let names = unsafe { (self.api().SDL_Vulkan_GetInstanceExtensions)(&mut count) };
        if names.is_null() {
            return Err(self.error());
        }
        // SAFETY: the array belongs to SDL and stays valid while the loader is loaded; only copy it.
        let names = unsafe { std::slice::from_raw_parts(names, count as usize) };
        Ok(names
            .iter()
            .map(|&name| unsafe { CStr::from_ptr(name) }.to_owned())
            .collect())
    }

    /// Destroy a surface made by [`Window::vulkan_create_surface`]
    ///
    /// # Safety
    ///
    /// `surface` must come from `instance` and must not be in use.
    pub unsafe fn vulkan_destroy_surface(
        &self,
        instance: &ash::Instance,
        surface: vk::SurfaceKHR,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.api().SDL_Vulkan_DestroySurface)(instance.handle(), surface, allocation_ptr(allocator));
    }

    /// True if the queue family can present to SDL windows
    pub fn vulkan_presentation_support(
        &self,
        instance: &ash::Instance,
        physical_device: vk::PhysicalDevice,
        queue_family_index: u32,
    ) -> bool {
        unsafe {
            (self.api().SDL_Vulkan_GetPresentationSupport)(instance.handle(), physical_device, queue_family_index)
        }
    }
}

fn allocation_ptr(allocator: Option<&vk::AllocationCallbacks>) -> *const vk::AllocationCallbacks {
    allocator.map_or(ptr::null(), |a| a as *const _)
}

impl Window {
    /// Create a raw `VkSurfaceKHR` for a window created with [`crate::video::WindowFlags::VULKAN`]
    ///
    /// The caller destroys it with [`Sdl::vulkan_destroy_surface`] before the
    /// instance; [`VulkanSurface`] does this automatically.
    pub fn vulkan_create_surface(
        &self,
        instance: &ash::Instance,
        allocator: Option<&vk::AllocationCallbacks>,
    ) -> Result<vk::SurfaceKHR> {
        let mut surface = vk::SurfaceKHR::null();
        self.sdl().check(unsafe {
            (self.sdl().api().SDL_Vulkan_CreateSurface)(
                self.raw(),
                instance.handle(),
                allocation_ptr(allocator),
                &mut surface,
            )
        })?;
        Ok(surface)
    }
}

/// Owned presentation surface for a window
///
/// Keeps the window alive and destroys the surface on drop. The instance
/// must outlive it.
pub struct VulkanSurface {
    sdl: Sdl,
    instance: ash::Instance,
    surface_loader: khr::Surface,
    surface: vk::SurfaceKHR,
    _window: Rc<WindowInner>,
}

impl VulkanSurface {
    /// Create a surface for `window`
    pub fn new(window: &Window, entry: &ash::Entry, instance: &ash::Instance) -> Result<Self> {
        let surface = window.vulkan_create_surface(instance, None)?;
        log::debug!("Created Vulkan surface {surface:?}");
        Ok(Self {
            sdl: window.sdl().clone(),
            instance: instance.clone(),
            surface_loader: khr::Surface::new(entry, instance),
            surface,
            _window: window.shared(),
        })
    }

    /// The underlying surface handle
    pub fn handle(&self) -> vk::SurfaceKHR {
        self.surface
    }

    /// The `VK_KHR_surface` function table
    pub fn loader(&self) -> &khr::Surface {
        &self.surface_loader
    }

    /// The instance the surface belongs to
    pub fn instance(&self) -> &ash::Instance {
        &self.instance
    }

    /// Surface capabilities for a physical device
    pub fn capabilities(&self, physical_device: vk::PhysicalDevice) -> Result<vk::SurfaceCapabilitiesKHR> {
        Ok(unsafe {
            self.surface_loader
                .get_physical_device_surface_capabilities(physical_device, self.surface)?
        })
    }

    /// Supported formats for a physical device
    pub fn formats(&self, physical_device: vk::PhysicalDevice) -> Result<Vec<vk::SurfaceFormatKHR>> {
        Ok(unsafe {
            self.surface_loader
                .get_physical_device_surface_formats(physical_device, self.surface)?
        })
    }

    /// Supported present modes for a physical device
    pub fn present_modes(&self, physical_device: vk::PhysicalDevice) -> Result<Vec<vk::PresentModeKHR>> {
        Ok(unsafe {
            self.surface_loader
                .get_physical_device_surface_present_modes(physical_device, self.surface)?
        })
    }

    /// Whether a queue family can present to this surface
    pub fn supports_present(&self, physical_device: vk::PhysicalDevice, queue_family_index: u32) -> Result<bool> {
        Ok(unsafe {
            self.surface_loader
                .get_physical_device_surface_support(physical_device, queue_family_index, self.surface)?
        })
    }
}

impl Drop for VulkanSurface {
    fn drop(&mut self) {
        unsafe { self.sdl.vulkan_destroy_surface(&self.instance, self.surface, None) };
    }
}

impl fmt::Debug for VulkanSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VulkanSurface").field("surface", &self.surface).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_ptr() {
        assert!(allocation_ptr(None).is_null());
        let callbacks = vk::AllocationCallbacks::default();
        assert_eq!(allocation_ptr(Some(&callbacks)), &callbacks as *const _);
    }
}
