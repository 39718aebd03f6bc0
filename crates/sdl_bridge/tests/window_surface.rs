//! Window framebuffer access on the dummy video driver
//!
//! Kept in its own test binary: initialising video here shuts SDL down when
//! the context drops, which must not race the other native tests.

use sdl_bridge::prelude::*;

fn video() -> Option<Sdl> {
    let sdl = match Sdl::load() {
        Ok(sdl) => sdl,
        Err(err) => {
            eprintln!("skipping: {err}");
            return None;
        }
    };
    sdl.set_hint("SDL_VIDEO_DRIVER", "dummy").ok()?;
    if let Err(err) = sdl.init(InitFlags::VIDEO) {
        eprintln!("skipping: {err}");
        return None;
    }
    Some(sdl)
}

#[test]
fn test_window_surface_is_exclusive_across_handles() {
    let Some(sdl) = video() else { return };
    let mut window = Window::new(&sdl, "surface", 32, 16, WindowFlags::HIDDEN).unwrap();
    let other = window.clone();

    {
        let mut surface = window.surface().unwrap();
        assert!(other.is_surface_borrowed());

        let mut second = other.clone();
        assert!(matches!(second.surface(), Err(Error::InUse("window surface"))));
        assert!(matches!(other.set_size(64, 64), Err(Error::InUse(_))));
        assert!(matches!(other.set_fullscreen(true), Err(Error::InUse(_))));
        assert!(matches!(Renderer::new(&other, None), Err(Error::InUse(_))));

        let red = surface.map_rgb(255, 0, 0);
        surface.fill_rect(None, red).unwrap();
        {
            let lock = surface.lock().unwrap();
            assert!(!lock.pixels().is_empty());
        }
        assert_eq!(surface.read_pixel(3, 3).unwrap(), Color::rgb(255, 0, 0));
    }

    assert!(!other.is_surface_borrowed());
    other.set_size(64, 64).unwrap();

    let surface = window.surface().unwrap();
    assert!(surface.width() > 0);
    drop(surface);
    window.update_surface().unwrap();
}

#[test]
fn test_blit_into_window_surface() {
    let Some(sdl) = video() else { return };
    let mut window = Window::new(&sdl, "blit", 8, 8, WindowFlags::HIDDEN).unwrap();

    let source = Surface::new(&sdl, 2, 2, PixelFormat::XRGB8888).unwrap();
    source.fill_rect(None, source.map_rgb(0, 255, 0)).unwrap();

    let mut target = window.surface().unwrap();
    source.blit(None, &mut target, Some(&Rect::new(4, 4, 0, 0))).unwrap();
    assert_eq!(target.read_pixel(5, 5).unwrap(), Color::rgb(0, 255, 0));
}
