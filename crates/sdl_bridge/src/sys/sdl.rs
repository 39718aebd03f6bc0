//! SDL3 entry point table

use std::ffi::{c_char, c_int, c_void};

use ash::vk;

use super::types::*;
use crate::pixels::Color;
use crate::rect::{FPoint, FRect, Point, Rect};
use crate::render::Vertex;

native_api! {
    /// Function pointers resolved from the SDL3 shared library
    pub struct SdlApi {
        // init, version, memory, errors, hints, logging
        fn SDL_Init(flags: SDL_InitFlags) -> bool;
        fn SDL_InitSubSystem(flags: SDL_InitFlags) -> bool;
        fn SDL_QuitSubSystem(flags: SDL_InitFlags);
        fn SDL_WasInit(flags: SDL_InitFlags) -> SDL_InitFlags;
        fn SDL_Quit();
        fn SDL_SetAppMetadata(name: *const c_char, version: *const c_char, identifier: *const c_char) -> bool;
        fn SDL_GetVersion() -> c_int;
        fn SDL_GetRevision() -> *const c_char;
        fn SDL_free(mem: *mut c_void);
        fn SDL_GetError() -> *const c_char;
        fn SDL_ClearError() -> bool;
        fn SDL_SetHint(name: *const c_char, value: *const c_char) -> bool;
        fn SDL_GetHint(name: *const c_char) -> *const c_char;
        fn SDL_ResetHint(name: *const c_char) -> bool;
        fn SDL_SetLogPriorities(priority: c_int);
        fn SDL_SetLogOutputFunction(callback: SDL_LogOutputFunction, userdata: *mut c_void);

        // properties
        fn SDL_GetGlobalProperties() -> SDL_PropertiesID;
        fn SDL_CreateProperties() -> SDL_PropertiesID;
        fn SDL_CopyProperties(src: SDL_PropertiesID, dst: SDL_PropertiesID) -> bool;
        fn SDL_LockProperties(props: SDL_PropertiesID) -> bool;
        fn SDL_UnlockProperties(props: SDL_PropertiesID);
        fn SDL_SetPointerProperty(props: SDL_PropertiesID, name: *const c_char, value: *mut c_void) -> bool;
        fn SDL_SetStringProperty(props: SDL_PropertiesID, name: *const c_char, value: *const c_char) -> bool;
        fn SDL_SetNumberProperty(props: SDL_PropertiesID, name: *const c_char, value: i64) -> bool;
        fn SDL_SetFloatProperty(props: SDL_PropertiesID, name: *const c_char, value: f32) -> bool;
        fn SDL_SetBooleanProperty(props: SDL_PropertiesID, name: *const c_char, value: bool) -> bool;
        fn SDL_HasProperty(props: SDL_PropertiesID, name: *const c_char) -> bool;
        fn SDL_GetPropertyType(props: SDL_PropertiesID, name: *const c_char) -> c_int;
        fn SDL_GetPointerProperty(props: SDL_PropertiesID, name: *const c_char, default_value: *mut c_void) -> *mut c_void;
        fn SDL_GetStringProperty(props: SDL_PropertiesID, name: *const c_char, default_value: *const c_char) -> *const c_char;
        fn SDL_GetNumberProperty(props: SDL_PropertiesID, name: *const c_char, default_value: i64) -> i64;
        fn SDL_GetFloatProperty(props: SDL_PropertiesID, name: *const c_char, default_value: f32) -> f32;
        fn SDL_GetBooleanProperty(props: SDL_PropertiesID, name: *const c_char, default_value: bool) -> bool;
        fn SDL_ClearProperty(props: SDL_PropertiesID, name: *const c_char) -> bool;
        fn SDL_EnumerateProperties(props: SDL_PropertiesID, callback: SDL_EnumeratePropertiesCallback, userdata: *mut c_void) -> bool;
        fn SDL_DestroyProperties(props: SDL_PropertiesID);

        // rect
        fn SDL_HasRectIntersection(a: *const Rect, b: *const Rect) -> bool;
        fn SDL_GetRectIntersection(a: *const Rect, b: *const Rect, result: *mut Rect) -> bool;
        fn SDL_GetRectUnion(a: *const Rect, b: *const Rect, result: *mut Rect) -> bool;
        fn SDL_GetRectEnclosingPoints(points: *const Point, count: c_int, clip: *const Rect, result: *mut Rect) -> bool;
        fn SDL_GetRectAndLineIntersection(rect: *const Rect, x1: *mut c_int, y1: *mut c_int, x2: *mut c_int, y2: *mut c_int) -> bool;
        fn SDL_HasRectIntersectionFloat(a: *const FRect, b: *const FRect) -> bool;
        fn SDL_GetRectIntersectionFloat(a: *const FRect, b: *const FRect, result: *mut FRect) -> bool;
        fn SDL_GetRectUnionFloat(a: *const FRect, b: *const FRect, result: *mut FRect) -> bool;
        fn SDL_GetRectEnclosingPointsFloat(points: *const FPoint, count: c_int, clip: *const FRect, result: *mut FRect) -> bool;
        fn SDL_GetRectAndLineIntersectionFloat(rect: *const FRect, x1: *mut f32, y1: *mut f32, x2: *mut f32, y2: *mut f32) -> bool;

        // pixels
        fn SDL_GetPixelFormatName(format: SDL_PixelFormat) -> *const c_char;
        fn SDL_GetMasksForPixelFormat(format: SDL_PixelFormat, bpp: *mut c_int, r: *mut u32, g: *mut u32, b: *mut u32, a: *mut u32) -> bool;
        fn SDL_GetPixelFormatForMasks(bpp: c_int, r: u32, g: u32, b: u32, a: u32) -> SDL_PixelFormat;
        fn SDL_GetPixelFormatDetails(format: SDL_PixelFormat) -> *const SDL_PixelFormatDetails;
        fn SDL_CreatePalette(ncolors: c_int) -> *mut SDL_Palette;
        fn SDL_SetPaletteColors(palette: *mut SDL_Palette, colors: *const Color, first: c_int, ncolors: c_int) -> bool;
        fn SDL_DestroyPalette(palette: *mut SDL_Palette);
        fn SDL_MapRGB(details: *const SDL_PixelFormatDetails, palette: *const SDL_Palette, r: u8, g: u8, b: u8) -> u32;
        fn SDL_MapRGBA(details: *const SDL_PixelFormatDetails, palette: *const SDL_Palette, r: u8, g: u8, b: u8, a: u8) -> u32;
        fn SDL_GetRGBA(pixel: u32, details: *const SDL_PixelFormatDetails, palette: *const SDL_Palette, r: *mut u8, g: *mut u8, b: *mut u8, a: *mut u8);

        // surface
        fn SDL_CreateSurface(width: c_int, height: c_int, format: SDL_PixelFormat) -> *mut SDL_Surface;
        fn SDL_CreateSurfaceFrom(width: c_int, height: c_int, format: SDL_PixelFormat, pixels: *mut c_void, pitch: c_int) -> *mut SDL_Surface;
        fn SDL_DestroySurface(surface: *mut SDL_Surface);
        fn SDL_GetSurfaceProperties(surface: *mut SDL_Surface) -> SDL_PropertiesID;
        fn SDL_SetSurfaceColorspace(surface: *mut SDL_Surface, colorspace: SDL_Colorspace) -> bool;
        fn SDL_GetSurfaceColorspace(surface: *mut SDL_Surface) -> SDL_Colorspace;
        fn SDL_CreateSurfacePalette(surface: *mut SDL_Surface) -> *mut SDL_Palette;
        fn SDL_SetSurfacePalette(surface: *mut SDL_Surface, palette: *mut SDL_Palette) -> bool;
        fn SDL_GetSurfacePalette(surface: *mut SDL_Surface) -> *mut SDL_Palette;
        fn SDL_LockSurface(surface: *mut SDL_Surface) -> bool;
        fn SDL_UnlockSurface(surface: *mut SDL_Surface);
        fn SDL_LoadBMP_IO(src: *mut SDL_IOStream, closeio: bool) -> *mut SDL_Surface;
        fn SDL_LoadBMP(file: *const c_char) -> *mut SDL_Surface;
        fn SDL_SaveBMP_IO(surface: *mut SDL_Surface, dst: *mut SDL_IOStream, closeio: bool) -> bool;
        fn SDL_SaveBMP(surface: *mut SDL_Surface, file: *const c_char) -> bool;
        fn SDL_SetSurfaceRLE(surface: *mut SDL_Surface, enabled: bool) -> bool;
        fn SDL_SurfaceHasRLE(surface: *mut SDL_Surface) -> bool;
        fn SDL_SetSurfaceColorKey(surface: *mut SDL_Surface, enabled: bool, key: u32) -> bool;
        fn SDL_SurfaceHasColorKey(surface: *mut SDL_Surface) -> bool;
        fn SDL_GetSurfaceColorKey(surface: *mut SDL_Surface, key: *mut u32) -> bool;
        fn SDL_SetSurfaceColorMod(surface: *mut SDL_Surface, r: u8, g: u8, b: u8) -> bool;
        fn SDL_GetSurfaceColorMod(surface: *mut SDL_Surface, r: *mut u8, g: *mut u8, b: *mut u8) -> bool;
        fn SDL_SetSurfaceAlphaMod(surface: *mut SDL_Surface, alpha: u8) -> bool;
        fn SDL_GetSurfaceAlphaMod(surface: *mut SDL_Surface, alpha: *mut u8) -> bool;
        fn SDL_SetSurfaceBlendMode(surface: *mut SDL_Surface, mode: SDL_BlendMode) -> bool;
        fn SDL_GetSurfaceBlendMode(surface: *mut SDL_Surface, mode: *mut SDL_BlendMode) -> bool;
        fn SDL_SetSurfaceClipRect(surface: *mut SDL_Surface, rect: *const Rect) -> bool;
        fn SDL_GetSurfaceClipRect(surface: *mut SDL_Surface, rect: *mut Rect) -> bool;
        fn SDL_FlipSurface(surface: *mut SDL_Surface, flip: c_int) -> bool;
        fn SDL_DuplicateSurface(surface: *mut SDL_Surface) -> *mut SDL_Surface;
        fn SDL_ScaleSurface(surface: *mut SDL_Surface, width: c_int, height: c_int, scale_mode: c_int) -> *mut SDL_Surface;
        fn SDL_ConvertSurface(surface: *mut SDL_Surface, format: SDL_PixelFormat) -> *mut SDL_Surface;
        fn SDL_ConvertPixels(width: c_int, height: c_int, src_format: SDL_PixelFormat, src: *const c_void, src_pitch: c_int, dst_format: SDL_PixelFormat, dst: *mut c_void, dst_pitch: c_int) -> bool;
        fn SDL_ClearSurface(surface: *mut SDL_Surface, r: f32, g: f32, b: f32, a: f32) -> bool;
        fn SDL_FillSurfaceRect(dst: *mut SDL_Surface, rect: *const Rect, color: u32) -> bool;
        fn SDL_FillSurfaceRects(dst: *mut SDL_Surface, rects: *const Rect, count: c_int, color: u32) -> bool;
        fn SDL_BlitSurface(src: *mut SDL_Surface, srcrect: *const Rect, dst: *mut SDL_Surface, dstrect: *const Rect) -> bool;
        fn SDL_BlitSurfaceScaled(src: *mut SDL_Surface, srcrect: *const Rect, dst: *mut SDL_Surface, dstrect: *const Rect, scale_mode: c_int) -> bool;
        fn SDL_MapSurfaceRGBA(surface: *mut SDL_Surface, r: u8, g: u8, b: u8, a: u8) -> u32;
        fn SDL_ReadSurfacePixel(surface: *mut SDL_Surface, x: c_int, y: c_int, r: *mut u8, g: *mut u8, b: *mut u8, a: *mut u8) -> bool;
        fn SDL_WriteSurfacePixel(surface: *mut SDL_Surface, x: c_int, y: c_int, r: u8, g: u8, b: u8, a: u8) -> bool;

        // iostream
        fn SDL_IOFromFile(file: *const c_char, mode: *const c_char) -> *mut SDL_IOStream;
        fn SDL_IOFromMem(mem: *mut c_void, size: usize) -> *mut SDL_IOStream;
        fn SDL_IOFromConstMem(mem: *const c_void, size: usize) -> *mut SDL_IOStream;
        fn SDL_IOFromDynamicMem() -> *mut SDL_IOStream;
        fn SDL_CloseIO(context: *mut SDL_IOStream) -> bool;
        fn SDL_GetIOProperties(context: *mut SDL_IOStream) -> SDL_PropertiesID;
        fn SDL_GetIOStatus(context: *mut SDL_IOStream) -> c_int;
        fn SDL_GetIOSize(context: *mut SDL_IOStream) -> i64;
        fn SDL_SeekIO(context: *mut SDL_IOStream, offset: i64, whence: c_int) -> i64;
        fn SDL_TellIO(context: *mut SDL_IOStream) -> i64;
        fn SDL_ReadIO(context: *mut SDL_IOStream, ptr: *mut c_void, size: usize) -> usize;
        fn SDL_WriteIO(context: *mut SDL_IOStream, ptr: *const c_void, size: usize) -> usize;
        fn SDL_FlushIO(context: *mut SDL_IOStream) -> bool;
        fn SDL_LoadFile_IO(src: *mut SDL_IOStream, datasize: *mut usize, closeio: bool) -> *mut c_void;
        fn SDL_LoadFile(file: *const c_char, datasize: *mut usize) -> *mut c_void;
        fn SDL_SaveFile_IO(dst: *mut SDL_IOStream, data: *const c_void, datasize: usize, closeio: bool) -> bool;
        fn SDL_SaveFile(file: *const c_char, data: *const c_void, datasize: usize) -> bool;
        fn SDL_ReadU8(src: *mut SDL_IOStream, value: *mut u8) -> bool;
        fn SDL_ReadU16LE(src: *mut SDL_IOStream, value: *mut u16) -> bool;
        fn SDL_ReadU16BE(src: *mut SDL_IOStream, value: *mut u16) -> bool;
        fn SDL_ReadU32LE(src: *mut SDL_IOStream, value: *mut u32) -> bool;
        fn SDL_ReadU32BE(src: *mut SDL_IOStream, value: *mut u32) -> bool;
        fn SDL_ReadU64LE(src: *mut SDL_IOStream, value: *mut u64) -> bool;
        fn SDL_ReadU64BE(src: *mut SDL_IOStream, value: *mut u64) -> bool;
        fn SDL_ReadS16LE(src: *mut SDL_IOStream, value: *mut i16) -> bool;
        fn SDL_ReadS16BE(src: *mut SDL_IOStream, value: *mut i16) -> bool;
        fn SDL_ReadS32LE(src: *mut SDL_IOStream, value: *mut i32) -> bool;
        fn SDL_ReadS32BE(src: *mut SDL_IOStream, value: *mut i32) -> bool;
        fn SDL_ReadS64LE(src: *mut SDL_IOStream, value: *mut i64) -> bool;
        fn SDL_ReadS64BE(src: *mut SDL_IOStream, value: *mut i64) -> bool;
        fn SDL_WriteU8(dst: *mut SDL_IOStream, value: u8) -> bool;
        fn SDL_WriteU16LE(dst: *mut SDL_IOStream, value: u16) -> bool;
        fn SDL_WriteU16BE(dst: *mut SDL_IOStream, value: u16) -> bool;
        fn SDL_WriteU32LE(dst: *mut SDL_IOStream, value: u32) -> bool;
        fn SDL_WriteU32BE(dst: *mut SDL_IOStream, value: u32) -> bool;
        fn SDL_WriteU64LE(dst: *mut SDL_IOStream, value: u64) -> bool;
        fn SDL_WriteU64BE(dst: *mut SDL_IOStream, value: u64) -> bool;
        fn SDL_WriteS16LE(dst: *mut SDL_IOStream, value: i16) -> bool;
        fn SDL_WriteS16BE(dst: *mut SDL_IOStream, value: i16) -> bool;
        fn SDL_WriteS32LE(dst: *mut SDL_IOStream, value: i32) -> bool;
        fn SDL_WriteS32BE(dst: *mut SDL_IOStream, value: i32) -> bool;
        fn SDL_WriteS64LE(dst: *mut SDL_IOStream, value: i64) -> bool;
        fn SDL_WriteS64BE(dst: *mut SDL_IOStream, value: i64) -> bool;

        // async io
        fn SDL_AsyncIOFromFile(file: *const c_char, mode: *const c_char) -> *mut SDL_AsyncIO;
        fn SDL_GetAsyncIOSize(asyncio: *mut SDL_AsyncIO) -> i64;
        fn SDL_ReadAsyncIO(asyncio: *mut SDL_AsyncIO, ptr: *mut c_void, offset: u64, size: u64, queue: *mut SDL_AsyncIOQueue, userdata: *mut c_void) -> bool;
        fn SDL_WriteAsyncIO(asyncio: *mut SDL_AsyncIO, ptr: *mut c_void, offset: u64, size: u64, queue: *mut SDL_AsyncIOQueue, userdata: *mut c_void) -> bool;
        fn SDL_CloseAsyncIO(asyncio: *mut SDL_AsyncIO, flush: bool, queue: *mut SDL_AsyncIOQueue, userdata: *mut c_void) -> bool;
        fn SDL_CreateAsyncIOQueue() -> *mut SDL_AsyncIOQueue;
        fn SDL_DestroyAsyncIOQueue(queue: *mut SDL_AsyncIOQueue);
        fn SDL_GetAsyncIOResult(queue: *mut SDL_AsyncIOQueue, outcome: *mut SDL_AsyncIOOutcome) -> bool;
        fn SDL_WaitAsyncIOResult(queue: *mut SDL_AsyncIOQueue, outcome: *mut SDL_AsyncIOOutcome, timeout_ms: i32) -> bool;
        fn SDL_SignalAsyncIOQueue(queue: *mut SDL_AsyncIOQueue);
        fn SDL_LoadFileAsync(file: *const c_char, queue: *mut SDL_AsyncIOQueue, userdata: *mut c_void) -> bool;

        // storage
        fn SDL_OpenTitleStorage(override_path: *const c_char, props: SDL_PropertiesID) -> *mut SDL_Storage;
        fn SDL_OpenUserStorage(org: *const c_char, app: *const c_char, props: SDL_PropertiesID) -> *mut SDL_Storage;
        fn SDL_OpenFileStorage(path: *const c_char) -> *mut SDL_Storage;
        fn SDL_CloseStorage(storage: *mut SDL_Storage) -> bool;
        fn SDL_StorageReady(storage: *mut SDL_Storage) -> bool;
        fn SDL_GetStorageFileSize(storage: *mut SDL_Storage, path: *const c_char, length: *mut u64) -> bool;
        fn SDL_ReadStorageFile(storage: *mut SDL_Storage, path: *const c_char, destination: *mut c_void, length: u64) -> bool;
        fn SDL_WriteStorageFile(storage: *mut SDL_Storage, path: *const c_char, source: *const c_void, length: u64) -> bool;
        fn SDL_CreateStorageDirectory(storage: *mut SDL_Storage, path: *const c_char) -> bool;
        fn SDL_EnumerateStorageDirectory(storage: *mut SDL_Storage, path: *const c_char, callback: SDL_EnumerateDirectoryCallback, userdata: *mut c_void) -> bool;
        fn SDL_RemoveStoragePath(storage: *mut SDL_Storage, path: *const c_char) -> bool;
        fn SDL_RenameStoragePath(storage: *mut SDL_Storage, oldpath: *const c_char, newpath: *const c_char) -> bool;
        fn SDL_CopyStorageFile(storage: *mut SDL_Storage, oldpath: *const c_char, newpath: *const c_char) -> bool;
        fn SDL_GetStoragePathInfo(storage: *mut SDL_Storage, path: *const c_char, info: *mut SDL_PathInfo) -> bool;
        fn SDL_GetStorageSpaceRemaining(storage: *mut SDL_Storage) -> u64;
        fn SDL_GlobStorageDirectory(storage: *mut SDL_Storage, path: *const c_char, pattern: *const c_char, flags: SDL_GlobFlags, count: *mut c_int) -> *mut *mut c_char;

        // video: drivers and displays
        fn SDL_GetNumVideoDrivers() -> c_int;
        fn SDL_GetVideoDriver(index: c_int) -> *const c_char;
        fn SDL_GetCurrentVideoDriver() -> *const c_char;
        fn SDL_GetDisplays(count: *mut c_int) -> *mut SDL_DisplayID;
        fn SDL_GetPrimaryDisplay() -> SDL_DisplayID;
        fn SDL_GetDisplayName(display: SDL_DisplayID) -> *const c_char;
        fn SDL_GetDisplayBounds(display: SDL_DisplayID, rect: *mut Rect) -> bool;
        fn SDL_GetDisplayUsableBounds(display: SDL_DisplayID, rect: *mut Rect) -> bool;
        fn SDL_GetDisplayContentScale(display: SDL_DisplayID) -> f32;
        fn SDL_GetCurrentDisplayOrientation(display: SDL_DisplayID) -> c_int;
        fn SDL_GetFullscreenDisplayModes(display: SDL_DisplayID, count: *mut c_int) -> *mut *mut SDL_DisplayMode;
        fn SDL_GetDesktopDisplayMode(display: SDL_DisplayID) -> *const SDL_DisplayMode;
        fn SDL_GetCurrentDisplayMode(display: SDL_DisplayID) -> *const SDL_DisplayMode;
        fn SDL_GetDisplayForWindow(window: *mut SDL_Window) -> SDL_DisplayID;

        // video: windows
        fn SDL_CreateWindow(title: *const c_char, w: c_int, h: c_int, flags: SDL_WindowFlags) -> *mut SDL_Window;
        fn SDL_CreatePopupWindow(parent: *mut SDL_Window, offset_x: c_int, offset_y: c_int, w: c_int, h: c_int, flags: SDL_WindowFlags) -> *mut SDL_Window;
        fn SDL_CreateWindowWithProperties(props: SDL_PropertiesID) -> *mut SDL_Window;
        fn SDL_DestroyWindow(window: *mut SDL_Window);
        fn SDL_GetWindowID(window: *mut SDL_Window) -> SDL_WindowID;
        fn SDL_GetWindowProperties(window: *mut SDL_Window) -> SDL_PropertiesID;
        fn SDL_GetWindowFlags(window: *mut SDL_Window) -> SDL_WindowFlags;
        fn SDL_SetWindowTitle(window: *mut SDL_Window, title: *const c_char) -> bool;
        fn SDL_GetWindowTitle(window: *mut SDL_Window) -> *const c_char;
        fn SDL_SetWindowIcon(window: *mut SDL_Window, icon: *mut SDL_Surface) -> bool;
        fn SDL_SetWindowPosition(window: *mut SDL_Window, x: c_int, y: c_int) -> bool;
        fn SDL_GetWindowPosition(window: *mut SDL_Window, x: *mut c_int, y: *mut c_int) -> bool;
        fn SDL_SetWindowSize(window: *mut SDL_Window, w: c_int, h: c_int) -> bool;
        fn SDL_GetWindowSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int) -> bool;
        fn SDL_GetWindowSizeInPixels(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int) -> bool;
        fn SDL_SetWindowMinimumSize(window: *mut SDL_Window, min_w: c_int, min_h: c_int) -> bool;
        fn SDL_GetWindowMinimumSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int) -> bool;
        fn SDL_SetWindowMaximumSize(window: *mut SDL_Window, max_w: c_int, max_h: c_int) -> bool;
        fn SDL_GetWindowMaximumSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int) -> bool;
        fn SDL_SetWindowBordered(window: *mut SDL_Window, bordered: bool) -> bool;
        fn SDL_SetWindowResizable(window: *mut SDL_Window, resizable: bool) -> bool;
        fn SDL_SetWindowAlwaysOnTop(window: *mut SDL_Window, on_top: bool) -> bool;
        fn SDL_ShowWindow(window: *mut SDL_Window) -> bool;
        fn SDL_HideWindow(window: *mut SDL_Window) -> bool;
        fn SDL_RaiseWindow(window: *mut SDL_Window) -> bool;
        fn SDL_MaximizeWindow(window: *mut SDL_Window) -> bool;
        fn SDL_MinimizeWindow(window: *mut SDL_Window) -> bool;
        fn SDL_RestoreWindow(window: *mut SDL_Window) -> bool;
        fn SDL_SetWindowFullscreen(window: *mut SDL_Window, fullscreen: bool) -> bool;
        fn SDL_SyncWindow(window: *mut SDL_Window) -> bool;
        fn SDL_GetWindowPixelDensity(window: *mut SDL_Window) -> f32;
        fn SDL_GetWindowDisplayScale(window: *mut SDL_Window) -> f32;
        fn SDL_GetWindowPixelFormat(window: *mut SDL_Window) -> SDL_PixelFormat;
        fn SDL_SetWindowOpacity(window: *mut SDL_Window, opacity: f32) -> bool;
        fn SDL_GetWindowOpacity(window: *mut SDL_Window) -> f32;
        fn SDL_GetWindowSurface(window: *mut SDL_Window) -> *mut SDL_Surface;
        fn SDL_UpdateWindowSurface(window: *mut SDL_Window) -> bool;

        // OpenGL
        fn SDL_GL_LoadLibrary(path: *const c_char) -> bool;
        fn SDL_GL_GetProcAddress(proc_name: *const c_char) -> SDL_FunctionPointer;
        fn SDL_GL_UnloadLibrary();
        fn SDL_GL_ExtensionSupported(extension: *const c_char) -> bool;
        fn SDL_GL_ResetAttributes();
        fn SDL_GL_SetAttribute(attr: c_int, value: c_int) -> bool;
        fn SDL_GL_GetAttribute(attr: c_int, value: *mut c_int) -> bool;
        fn SDL_GL_CreateContext(window: *mut SDL_Window) -> SDL_GLContext;
        fn SDL_GL_MakeCurrent(window: *mut SDL_Window, context: SDL_GLContext) -> bool;
        fn SDL_GL_GetCurrentWindow() -> *mut SDL_Window;
        fn SDL_GL_GetCurrentContext() -> SDL_GLContext;
        fn SDL_GL_SetSwapInterval(interval: c_int) -> bool;
        fn SDL_GL_GetSwapInterval(interval: *mut c_int) -> bool;
        fn SDL_GL_SwapWindow(window: *mut SDL_Window) -> bool;
        fn SDL_GL_DestroyContext(context: SDL_GLContext) -> bool;

        // EGL
        fn SDL_EGL_GetProcAddress(proc_name: *const c_char) -> SDL_FunctionPointer;
        fn SDL_EGL_GetCurrentDisplay() -> SDL_EGLDisplay;
        fn SDL_EGL_GetCurrentConfig() -> SDL_EGLConfig;
        fn SDL_EGL_GetWindowSurface(window: *mut SDL_Window) -> SDL_EGLSurface;

        // Metal
        fn SDL_Metal_CreateView(window: *mut SDL_Window) -> SDL_MetalView;
        fn SDL_Metal_DestroyView(view: SDL_MetalView);
        fn SDL_Metal_GetLayer(view: SDL_MetalView) -> *mut c_void;

        // Vulkan
        fn SDL_Vulkan_LoadLibrary(path: *const c_char) -> bool;
        fn SDL_Vulkan_GetVkGetInstanceProcAddr() -> SDL_FunctionPointer;
        fn SDL_Vulkan_UnloadLibrary();
        fn SDL_Vulkan_GetInstanceExtensions(count: *mut u32) -> *const *const c_char;
        fn SDL_Vulkan_CreateSurface(window: *mut SDL_Window, instance: vk::Instance, allocator: *const vk::AllocationCallbacks, surface: *mut vk::SurfaceKHR) -> bool;
        fn SDL_Vulkan_DestroySurface(instance: vk::Instance, surface: vk::SurfaceKHR, allocator: *const vk::AllocationCallbacks);
        fn SDL_Vulkan_GetPresentationSupport(instance: vk::Instance, physical_device: vk::PhysicalDevice, queue_family_index: u32) -> bool;

        // render
        fn SDL_GetNumRenderDrivers() -> c_int;
        fn SDL_GetRenderDriver(index: c_int) -> *const c_char;
        fn SDL_CreateWindowAndRenderer(title: *const c_char, width: c_int, height: c_int, flags: SDL_WindowFlags, window: *mut *mut SDL_Window, renderer: *mut *mut SDL_Renderer) -> bool;
        fn SDL_CreateRenderer(window: *mut SDL_Window, name: *const c_char) -> *mut SDL_Renderer;
        fn SDL_CreateRendererWithProperties(props: SDL_PropertiesID) -> *mut SDL_Renderer;
        fn SDL_CreateSoftwareRenderer(surface: *mut SDL_Surface) -> *mut SDL_Renderer;
        fn SDL_DestroyRenderer(renderer: *mut SDL_Renderer);
        fn SDL_GetRendererName(renderer: *mut SDL_Renderer) -> *const c_char;
        fn SDL_GetRendererProperties(renderer: *mut SDL_Renderer) -> SDL_PropertiesID;
        fn SDL_GetRenderOutputSize(renderer: *mut SDL_Renderer, w: *mut c_int, h: *mut c_int) -> bool;
        fn SDL_GetCurrentRenderOutputSize(renderer: *mut SDL_Renderer, w: *mut c_int, h: *mut c_int) -> bool;
        fn SDL_SetRenderTarget(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture) -> bool;
        fn SDL_GetRenderTarget(renderer: *mut SDL_Renderer) -> *mut SDL_Texture;
        fn SDL_SetRenderLogicalPresentation(renderer: *mut SDL_Renderer, w: c_int, h: c_int, mode: c_int) -> bool;
        fn SDL_GetRenderLogicalPresentation(renderer: *mut SDL_Renderer, w: *mut c_int, h: *mut c_int, mode: *mut c_int) -> bool;
        fn SDL_RenderCoordinatesFromWindow(renderer: *mut SDL_Renderer, window_x: f32, window_y: f32, x: *mut f32, y: *mut f32) -> bool;
        fn SDL_RenderCoordinatesToWindow(renderer: *mut SDL_Renderer, x: f32, y: f32, window_x: *mut f32, window_y: *mut f32) -> bool;
        fn SDL_SetRenderViewport(renderer: *mut SDL_Renderer, rect: *const Rect) -> bool;
        fn SDL_GetRenderViewport(renderer: *mut SDL_Renderer, rect: *mut Rect) -> bool;
        fn SDL_SetRenderClipRect(renderer: *mut SDL_Renderer, rect: *const Rect) -> bool;
        fn SDL_GetRenderClipRect(renderer: *mut SDL_Renderer, rect: *mut Rect) -> bool;
        fn SDL_RenderClipEnabled(renderer: *mut SDL_Renderer) -> bool;
        fn SDL_SetRenderScale(renderer: *mut SDL_Renderer, scale_x: f32, scale_y: f32) -> bool;
        fn SDL_GetRenderScale(renderer: *mut SDL_Renderer, scale_x: *mut f32, scale_y: *mut f32) -> bool;
        fn SDL_SetRenderDrawColor(renderer: *mut SDL_Renderer, r: u8, g: u8, b: u8, a: u8) -> bool;
        fn SDL_SetRenderDrawColorFloat(renderer: *mut SDL_Renderer, r: f32, g: f32, b: f32, a: f32) -> bool;
        fn SDL_GetRenderDrawColor(renderer: *mut SDL_Renderer, r: *mut u8, g: *mut u8, b: *mut u8, a: *mut u8) -> bool;
        fn SDL_SetRenderColorScale(renderer: *mut SDL_Renderer, scale: f32) -> bool;
        fn SDL_GetRenderColorScale(renderer: *mut SDL_Renderer, scale: *mut f32) -> bool;
        fn SDL_SetRenderDrawBlendMode(renderer: *mut SDL_Renderer, mode: SDL_BlendMode) -> bool;
        fn SDL_GetRenderDrawBlendMode(renderer: *mut SDL_Renderer, mode: *mut SDL_BlendMode) -> bool;
        fn SDL_RenderClear(renderer: *mut SDL_Renderer) -> bool;
        fn SDL_RenderPoint(renderer: *mut SDL_Renderer, x: f32, y: f32) -> bool;
        fn SDL_RenderPoints(renderer: *mut SDL_Renderer, points: *const FPoint, count: c_int) -> bool;
        fn SDL_RenderLine(renderer: *mut SDL_Renderer, x1: f32, y1: f32, x2: f32, y2: f32) -> bool;
        fn SDL_RenderLines(renderer: *mut SDL_Renderer, points: *const FPoint, count: c_int) -> bool;
        fn SDL_RenderRect(renderer: *mut SDL_Renderer, rect: *const FRect) -> bool;
        fn SDL_RenderRects(renderer: *mut SDL_Renderer, rects: *const FRect, count: c_int) -> bool;
        fn SDL_RenderFillRect(renderer: *mut SDL_Renderer, rect: *const FRect) -> bool;
        fn SDL_RenderFillRects(renderer: *mut SDL_Renderer, rects: *const FRect, count: c_int) -> bool;
        fn SDL_RenderTexture(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture, srcrect: *const FRect, dstrect: *const FRect) -> bool;
        fn SDL_RenderTextureRotated(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture, srcrect: *const FRect, dstrect: *const FRect, angle: f64, center: *const FPoint, flip: c_int) -> bool;
        fn SDL_RenderTextureTiled(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture, srcrect: *const FRect, scale: f32, dstrect: *const FRect) -> bool;
        fn SDL_RenderTexture9Grid(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture, srcrect: *const FRect, left_width: f32, right_width: f32, top_height: f32, bottom_height: f32, scale: f32, dstrect: *const FRect) -> bool;
        fn SDL_RenderGeometry(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture, vertices: *const Vertex, num_vertices: c_int, indices: *const c_int, num_indices: c_int) -> bool;
        fn SDL_RenderReadPixels(renderer: *mut SDL_Renderer, rect: *const Rect) -> *mut SDL_Surface;
        fn SDL_RenderPresent(renderer: *mut SDL_Renderer) -> bool;
        fn SDL_FlushRenderer(renderer: *mut SDL_Renderer) -> bool;
        fn SDL_SetRenderVSync(renderer: *mut SDL_Renderer, vsync: c_int) -> bool;
        fn SDL_GetRenderVSync(renderer: *mut SDL_Renderer, vsync: *mut c_int) -> bool;
        fn SDL_RenderDebugText(renderer: *mut SDL_Renderer, x: f32, y: f32, text: *const c_char) -> bool;
        fn SDL_GetRenderMetalLayer(renderer: *mut SDL_Renderer) -> *mut c_void;
        fn SDL_GetRenderMetalCommandEncoder(renderer: *mut SDL_Renderer) -> *mut c_void;

        // textures
        fn SDL_CreateTexture(renderer: *mut SDL_Renderer, format: SDL_PixelFormat, access: c_int, w: c_int, h: c_int) -> *mut SDL_Texture;
        fn SDL_CreateTextureFromSurface(renderer: *mut SDL_Renderer, surface: *mut SDL_Surface) -> *mut SDL_Texture;
        fn SDL_CreateTextureWithProperties(renderer: *mut SDL_Renderer, props: SDL_PropertiesID) -> *mut SDL_Texture;
        fn SDL_DestroyTexture(texture: *mut SDL_Texture);
        fn SDL_GetTextureProperties(texture: *mut SDL_Texture) -> SDL_PropertiesID;
        fn SDL_GetTextureSize(texture: *mut SDL_Texture, w: *mut f32, h: *mut f32) -> bool;
        fn SDL_SetTextureColorMod(texture: *mut SDL_Texture, r: u8, g: u8, b: u8) -> bool;
        fn SDL_SetTextureColorModFloat(texture: *mut SDL_Texture, r: f32, g: f32, b: f32) -> bool;
        fn SDL_GetTextureColorMod(texture: *mut SDL_Texture, r: *mut u8, g: *mut u8, b: *mut u8) -> bool;
        fn SDL_SetTextureAlphaMod(texture: *mut SDL_Texture, alpha: u8) -> bool;
        fn SDL_SetTextureAlphaModFloat(texture: *mut SDL_Texture, alpha: f32) -> bool;
        fn SDL_GetTextureAlphaMod(texture: *mut SDL_Texture, alpha: *mut u8) -> bool;
        fn SDL_SetTextureBlendMode(texture: *mut SDL_Texture, mode: SDL_BlendMode) -> bool;
        fn SDL_GetTextureBlendMode(texture: *mut SDL_Texture, mode: *mut SDL_BlendMode) -> bool;
        fn SDL_SetTextureScaleMode(texture: *mut SDL_Texture, mode: c_int) -> bool;
        fn SDL_GetTextureScaleMode(texture: *mut SDL_Texture, mode: *mut c_int) -> bool;
        fn SDL_UpdateTexture(texture: *mut SDL_Texture, rect: *const Rect, pixels: *const c_void, pitch: c_int) -> bool;
        fn SDL_LockTexture(texture: *mut SDL_Texture, rect: *const Rect, pixels: *mut *mut c_void, pitch: *mut c_int) -> bool;
        fn SDL_LockTextureToSurface(texture: *mut SDL_Texture, rect: *const Rect, surface: *mut *mut SDL_Surface) -> bool;
        fn SDL_UnlockTexture(texture: *mut SDL_Texture);

        // camera
        fn SDL_GetNumCameraDrivers() -> c_int;
        fn SDL_GetCameraDriver(index: c_int) -> *const c_char;
        fn SDL_GetCurrentCameraDriver() -> *const c_char;
        fn SDL_GetCameras(count: *mut c_int) -> *mut SDL_CameraID;
        fn SDL_GetCameraSupportedFormats(instance_id: SDL_CameraID, count: *mut c_int) -> *mut *mut SDL_CameraSpec;
        fn SDL_GetCameraName(instance_id: SDL_CameraID) -> *const c_char;
        fn SDL_GetCameraPosition(instance_id: SDL_CameraID) -> c_int;
        fn SDL_OpenCamera(instance_id: SDL_CameraID, spec: *const SDL_CameraSpec) -> *mut SDL_Camera;
        fn SDL_GetCameraPermissionState(camera: *mut SDL_Camera) -> c_int;
        fn SDL_GetCameraID(camera: *mut SDL_Camera) -> SDL_CameraID;
        fn SDL_GetCameraProperties(camera: *mut SDL_Camera) -> SDL_PropertiesID;
        fn SDL_GetCameraFormat(camera: *mut SDL_Camera, spec: *mut SDL_CameraSpec) -> bool;
        fn SDL_AcquireCameraFrame(camera: *mut SDL_Camera, timestamp_ns: *mut u64) -> *mut SDL_Surface;
        fn SDL_ReleaseCameraFrame(camera: *mut SDL_Camera, frame: *mut SDL_Surface);
        fn SDL_CloseCamera(camera: *mut SDL_Camera);
    }
}
