//! Tests against the real SDL3 library
//!
//! These need `libSDL3` on the loader path. When it cannot be opened each
//! test returns early, so the suite stays green on machines without SDL.

use std::io::{Read, Write};
use std::time::Duration;

use sdl_bridge::prelude::*;
use sdl_bridge::properties::PropertyType;
use sdl_bridge::storage::PathType;

fn sdl() -> Option<Sdl> {
    match Sdl::load() {
        Ok(sdl) => Some(sdl),
        Err(err) => {
            eprintln!("skipping: {err}");
            None
        }
    }
}

#[test]
fn test_version_is_sdl3() {
    let Some(sdl) = sdl() else { return };
    let version = sdl.version();
    assert_eq!(version.major, 3);
    assert!(version.at_least(3, 2, 0));
}

#[test]
fn test_error_roundtrip() {
    let Some(sdl) = sdl() else { return };
    sdl.clear_error();
    assert_eq!(sdl.get_error(), None);

    // Opening a missing file must fail with a native message.
    let err = IoStream::from_file(&sdl, "/definitely/not/here.bin", "rb").unwrap_err();
    assert!(err.is_native());
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_dynamic_stream_write_seek_read() {
    let Some(sdl) = sdl() else { return };
    let mut stream = IoStream::dynamic(&sdl).unwrap();

    stream.write_all(b"hello bridge").unwrap();
    assert_eq!(stream.size().unwrap(), 12);

    stream.seek(6, Whence::Set).unwrap();
    let mut tail = String::new();
    stream.read_to_string(&mut tail).unwrap();
    assert_eq!(tail, "bridge");

    assert_eq!(stream.dynamic_memory().unwrap(), b"hello bridge");
    stream.close().unwrap();
}

#[test]
fn test_const_memory_stream_is_read_only() {
    let Some(sdl) = sdl() else { return };
    let data = [1u8, 2, 3, 4];
    let mut stream = IoStream::from_const_mem(&sdl, &data).unwrap();

    assert_eq!(stream.load_all().unwrap(), vec![1, 2, 3, 4]);
    assert!(stream.write(&[9]).is_err());
}

#[test]
fn test_surface_pixels() {
    let Some(sdl) = sdl() else { return };
    let surface = Surface::new(&sdl, 8, 4, PixelFormat::RGBA8888).unwrap();
    assert_eq!((surface.width(), surface.height()), (8, 4));
    assert_eq!(surface.format(), PixelFormat::RGBA8888);
    assert!(surface.pitch() >= 8 * 4);

    let teal = Color::rgb(0, 128, 128);
    surface.write_pixel(3, 2, teal).unwrap();
    assert_eq!(surface.read_pixel(3, 2).unwrap(), teal);
    assert!(surface.read_pixel(8, 0).is_err());
}

#[test]
fn test_surface_convert_and_fill() {
    let Some(sdl) = sdl() else { return };
    let surface = Surface::new(&sdl, 4, 4, PixelFormat::RGBA8888).unwrap();
    let red = surface.map_rgb(255, 0, 0);
    surface.fill_rect(None, red).unwrap();

    let converted = surface.convert(PixelFormat::ARGB8888).unwrap();
    assert_eq!(converted.format(), PixelFormat::ARGB8888);
    assert_eq!(converted.read_pixel(1, 1).unwrap(), Color::rgb(255, 0, 0));
}

#[test]
fn test_software_renderer_draws_into_surface() {
    let Some(sdl) = sdl() else { return };
    let surface = Surface::new(&sdl, 16, 16, PixelFormat::RGBA8888).unwrap();
    let renderer = Renderer::software(surface).unwrap();
    assert_eq!(renderer.output_size().unwrap(), (16, 16));

    renderer.set_draw_color(Color::rgb(0, 0, 255)).unwrap();
    renderer.clear().unwrap();
    renderer.set_draw_color(Color::rgb(255, 255, 0)).unwrap();
    renderer.fill_rect(Some(&FRect::new(0.0, 0.0, 4.0, 4.0))).unwrap();
    renderer.flush().unwrap();

    let target = renderer.target_surface().unwrap();
    assert_eq!(target.read_pixel(1, 1).unwrap(), Color::rgb(255, 255, 0));
    assert_eq!(target.read_pixel(10, 10).unwrap(), Color::rgb(0, 0, 255));
}

#[test]
fn test_texture_outlives_renderer_handle() {
    let Some(sdl) = sdl() else { return };
    let surface = Surface::new(&sdl, 8, 8, PixelFormat::RGBA8888).unwrap();
    let renderer = Renderer::software(surface).unwrap();
    let texture = Texture::new(&renderer, PixelFormat::RGBA8888, TextureAccess::Static, 2, 2).unwrap();

    drop(renderer);
    assert_eq!((texture.width(), texture.height()), (2, 2));
    texture.set_alpha_mod(128).unwrap();
    assert_eq!(texture.alpha_mod().unwrap(), 128);
}

#[test]
fn test_properties_values() {
    let Some(sdl) = sdl() else { return };
    let props = Properties::new(&sdl).unwrap();

    props.set_string("name", "bridge").unwrap();
    props.set_number("count", 42).unwrap();
    props.set_boolean("enabled", true).unwrap();

    assert_eq!(props.get_string("name", "").unwrap(), "bridge");
    assert_eq!(props.get_number("count", 0).unwrap(), 42);
    assert!(props.get_boolean("enabled", false).unwrap());
    assert_eq!(props.property_type("count").unwrap(), PropertyType::Number);

    let mut names = props.names().unwrap();
    names.sort();
    assert_eq!(names, ["count", "enabled", "name"]);

    props.clear("count").unwrap();
    assert!(!props.has("count").unwrap());
}

#[test]
fn test_memory_stream_reads_and_writes_through_borrow() {
    let Some(sdl) = sdl() else { return };
    let mut buffer = [0u8; 8];
    {
        let mut stream = IoStream::from_mem(&sdl, &mut buffer).unwrap();
        stream.write_u32_le(0xDEAD_BEEF).unwrap();
        stream.write_all(b"ok").unwrap();
        stream.seek(0, Whence::Set).unwrap();
        assert_eq!(stream.read_u32_le().unwrap(), 0xDEAD_BEEF);
        assert!(Surface::load_bmp_io(&stream).is_err());
    }
    assert_eq!(&buffer[..6], &[0xEF, 0xBE, 0xAD, 0xDE, b'o', b'k']);
}

#[test]
fn test_pixel_buffers_are_checked_before_native_calls() {
    let Some(sdl) = sdl() else { return };
    let mut pixels = vec![0u8; 4 * 4 * 4];

    let err = Surface::from_pixels(&sdl, 4, 4, PixelFormat::RGBA8888, &mut pixels, 1).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { what: "pixel buffer pitch", .. }));
    let err = Surface::from_pixels(&sdl, 4, 5, PixelFormat::RGBA8888, &mut pixels, 16).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { what: "pixel buffer length", .. }));

    let src = vec![0u8; 16];
    let mut dst = vec![0u8; 16];
    let err = sdl
        .convert_pixels(4, 4, PixelFormat::NV12, &src, 4, PixelFormat::RGBA8888, &mut dst, 16)
        .unwrap_err();
    assert!(matches!(err, Error::OutOfRange { .. }));
}

#[test]
fn test_convert_pixels_between_packed_formats() {
    let Some(sdl) = sdl() else { return };
    let src = [0x11u8, 0x22, 0x33, 0xFF];
    let mut dst = [0u8; 4];
    sdl.convert_pixels(1, 1, PixelFormat::RGBA32, &src, 4, PixelFormat::BGRA32, &mut dst, 4)
        .unwrap();
    assert_eq!(dst, [0x33, 0x22, 0x11, 0xFF]);
}

#[test]
fn test_texture_update_rejects_short_buffer() {
    let Some(sdl) = sdl() else { return };
    let surface = Surface::new(&sdl, 8, 8, PixelFormat::RGBA8888).unwrap();
    let renderer = Renderer::software(surface).unwrap();
    let texture = Texture::new(&renderer, PixelFormat::RGBA8888, TextureAccess::Static, 4, 4).unwrap();

    let pixels = vec![0xFFu8; 4 * 4 * 4];
    texture.update(None, &pixels, 16).unwrap();
    assert!(texture.update(None, &pixels[..60], 16).is_err());
    assert!(texture.update(None, &pixels, 8).is_err());
    texture.update(Some(&Rect::new(0, 0, 2, 2)), &pixels[..16], 8).unwrap();
}

#[test]
fn test_surface_lock_exposes_rows() {
    let Some(sdl) = sdl() else { return };
    let mut surface = Surface::new(&sdl, 2, 2, PixelFormat::RGBA32).unwrap();
    {
        let mut lock = surface.lock().unwrap();
        let pitch = lock.pitch();
        lock.pixels_mut()[pitch..pitch + 4].copy_from_slice(&[10, 20, 30, 255]);
    }
    assert_eq!(surface.read_pixel(0, 1).unwrap(), Color::rgba(10, 20, 30, 255));

    let mut target = Surface::new(&sdl, 2, 2, PixelFormat::RGBA32).unwrap();
    surface.blit(None, &mut target, None).unwrap();
    assert_eq!(target.read_pixel(0, 1).unwrap(), Color::rgba(10, 20, 30, 255));
}

#[test]
fn test_async_load_file() {
    let Some(sdl) = sdl() else { return };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.bin");
    std::fs::write(&path, b"queued bytes").unwrap();

    let queue = AsyncIoQueue::new(&sdl).unwrap();
    let task = queue.load_file_async(&path).unwrap();
    assert_eq!(queue.pending_tasks(), 1);

    let outcome = queue.wait_result(Some(Duration::from_secs(5))).unwrap();
    assert_eq!(outcome.task, Some(task));
    assert!(outcome.is_complete());
    assert_eq!(outcome.buffer, b"queued bytes");
    assert_eq!(queue.pending_tasks(), 0);
}

#[test]
fn test_async_read_from_file() {
    let Some(sdl) = sdl() else { return };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.bin");
    std::fs::write(&path, b"0123456789").unwrap();

    let queue = AsyncIoQueue::new(&sdl).unwrap();
    let file = AsyncIo::from_file(&sdl, &path, "r").unwrap();
    assert_eq!(file.size().unwrap(), 10);

    let task = file.read(4, 3, &queue).unwrap();
    let outcome = queue.wait_result(Some(Duration::from_secs(5))).unwrap();
    assert_eq!(outcome.task, Some(task));
    assert_eq!(outcome.buffer, b"456");

    file.close(false, &queue).unwrap();
    assert!(queue.wait_result(Some(Duration::from_secs(5))).unwrap().is_complete());
}

fn storage_root(dir: &tempfile::TempDir) -> String {
    format!("{}/", dir.path().display())
}

#[test]
fn test_title_storage_reads_override_path() {
    let Some(sdl) = sdl() else { return };
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("title.txt"), b"read only").unwrap();

    let storage = Storage::open_title(&sdl, Some(std::path::Path::new(&storage_root(&dir))), None).unwrap();
    assert!(storage.ready());
    assert_eq!(storage.file_size("title.txt").unwrap(), 9);
    assert_eq!(storage.read_file("title.txt").unwrap(), b"read only");
    assert!(storage.write_file("other.txt", b"nope").is_err());
}

#[test]
fn test_file_storage_round_trip() {
    let Some(sdl) = sdl() else { return };
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::open_file(&sdl, storage_root(&dir)).unwrap();
    assert!(storage.ready());

    storage.create_directory("saves").unwrap();
    storage.write_file("saves/slot1.dat", b"level 3").unwrap();
    assert_eq!(storage.read_file("saves/slot1.dat").unwrap(), b"level 3");
    assert_eq!(storage.path_info("saves").unwrap().path_type, PathType::Directory);

    storage.rename_path("saves/slot1.dat", "saves/slot2.dat").unwrap();
    assert_eq!(storage.list_directory(Some("saves")).unwrap(), ["slot2.dat"]);
    assert!(!storage.exists("saves/slot1.dat"));

    storage.remove_path("saves/slot2.dat").unwrap();
    assert!(storage.list_directory(Some("saves")).unwrap().is_empty());
    storage.close().unwrap();
}

#[cfg(feature = "ttf")]
#[test]
fn test_ttf_init_and_surface_engine() {
    let Some(sdl) = sdl() else { return };
    let ttf = match Ttf::load(&sdl) {
        Ok(ttf) => ttf,
        Err(err) => {
            eprintln!("skipping: {err}");
            return;
        }
    };
    assert_eq!(ttf.version().major, 3);

    let before = ttf.was_init();
    ttf.init().unwrap();
    assert_eq!(ttf.was_init(), before + 1);

    let engine = SurfaceTextEngine::new(&ttf).unwrap();
    assert!(!engine.raw().is_null());
}
