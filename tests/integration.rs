//! Native integration tests.
//!
//! These tests open windows, renderers and audio devices through SDL's
//! `dummy` drivers, so no display or sound card is needed.
//! Run with: SDL2_RUN_NATIVE_TESTS=1 cargo test

use std::env;
use std::sync::{Mutex, MutexGuard};

use sdl::{
    AllowedChanges, AudioDevice, AudioFormat, AudioSpec, AudioStatus, BlendMode, Color, Cursor, DisplayMode,
    GameController, GameControllerAxis, GameControllerButton, InitFlags, Palette, PixelFormat, PixelFormatEnum,
    Point, Rect, Renderer, RendererFlags, Subsystem, Surface, SystemCursor, TextureAccess, Wav, Window,
    WindowFlags, WindowOptions, WindowPosition,
};

// Subsystem init and quit are not thread safe
static NATIVE: Mutex<()> = Mutex::new(());

fn should_run_native_tests() -> bool {
    env::var("SDL2_RUN_NATIVE_TESTS").map(|v| v == "1").unwrap_or(false)
}

fn native() -> Option<MutexGuard<'static, ()>> {
    if !should_run_native_tests() {
        println!("Skipping native test (SDL2_RUN_NATIVE_TESTS not set)");
        return None;
    }

    if !sdl::is_available() {
        println!("Skipping: SDL2 runtime not found");
        return None;
    }

    let _ = env_logger::builder().is_test(true).try_init();
    env::set_var("SDL_VIDEODRIVER", "dummy");
    env::set_var("SDL_AUDIODRIVER", "dummy");

    Some(NATIVE.lock().unwrap_or_else(|e| e.into_inner()))
}

fn hidden_window(title: &str) -> Window {
    Window::new(&WindowOptions {
        title: title.to_string(),
        width: 320,
        height: 240,
        flags: WindowFlags::HIDDEN,
        ..Default::default()
    })
    .expect("Window::new should succeed")
}

#[test]
fn test_subsystem_guard() {
    let Some(_lock) = native() else { return };

    let before = sdl::was_init(InitFlags::VIDEO).unwrap();

    {
        let video = Subsystem::init(InitFlags::VIDEO).expect("video init should succeed");
        assert_eq!(video.flags(), InitFlags::VIDEO);
        assert!(sdl::was_init(InitFlags::VIDEO).unwrap().contains(InitFlags::VIDEO));
    }

    assert_eq!(sdl::was_init(InitFlags::VIDEO).unwrap(), before);
}

#[test]
fn test_subsystem_explicit_quit() {
    let Some(_lock) = native() else { return };

    let before = sdl::was_init(InitFlags::TIMER).unwrap();

    let mut timer = Subsystem::init(InitFlags::TIMER).unwrap();
    timer.quit();
    assert!(timer.flags().is_empty());
    assert_eq!(sdl::was_init(InitFlags::TIMER).unwrap(), before);

    // Dropping after quit releases nothing
    drop(timer);
    assert_eq!(sdl::was_init(InitFlags::TIMER).unwrap(), before);
}

#[test]
fn test_window_properties() {
    let Some(_lock) = native() else { return };
    let _video = Subsystem::init(InitFlags::VIDEO).unwrap();

    let window = hidden_window("first");
    assert!(window.id() > 0);
    assert_eq!(window.title(), "first");
    assert_eq!(window.size(), (320, 240));
    assert!(window.flags().contains(WindowFlags::HIDDEN));

    window.set_title("second").unwrap();
    assert_eq!(window.title(), "second");

    window.set_size(400, 300).unwrap();
    assert_eq!(window.size(), (400, 300));
    assert!(window.set_size(0, 300).is_err());

    window.set_minimum_size(100, 80).unwrap();
    assert_eq!(window.minimum_size(), (100, 80));

    window.set_position(WindowPosition::At(10), WindowPosition::At(20));
    assert_eq!(window.position(), Point::new(10, 20));

    assert!(window.set_title("bad\0title").is_err());
    assert!(window.set_fullscreen(WindowFlags::RESIZABLE).is_err());
}

#[test]
fn test_window_ids_are_distinct() {
    let Some(_lock) = native() else { return };
    let _video = Subsystem::init(InitFlags::VIDEO).unwrap();

    let a = hidden_window("a");
    let b = hidden_window("b");
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_window_surface() {
    let Some(_lock) = native() else { return };
    let _video = Subsystem::init(InitFlags::VIDEO).unwrap();

    let mut window = hidden_window("surface");
    {
        let surface = window.surface().expect("window surface should exist");
        assert_eq!((surface.width(), surface.height()), (320, 240));
        surface.fill_rect(None, Color::rgb(0, 0, 255)).unwrap();
    }
    window.update_surface().expect("update_surface should succeed");
}

#[test]
fn test_window_surface_after_resize() {
    let Some(_lock) = native() else { return };
    let _video = Subsystem::init(InitFlags::VIDEO).unwrap();

    let mut window = hidden_window("resize");
    {
        let surface = window.surface().unwrap();
        assert_eq!((surface.width(), surface.height()), (320, 240));
    }

    // Resizing frees the old framebuffer; a fresh view sees the new size.
    window.set_size(640, 480).unwrap();
    let surface = window.surface().expect("window surface should exist after resize");
    assert_eq!((surface.width(), surface.height()), (640, 480));
    surface.fill_rect(None, Color::WHITE).unwrap();
}

#[test]
fn test_renderer_and_texture() {
    let Some(_lock) = native() else { return };
    let _video = Subsystem::init(InitFlags::VIDEO).unwrap();

    let window = hidden_window("renderer");
    let renderer = Renderer::for_window(&window, None, RendererFlags::SOFTWARE).expect("renderer should succeed");
    assert_eq!(renderer.output_size().unwrap(), (320, 240));

    renderer.set_draw_color(Color::rgba(10, 20, 30, 40)).unwrap();
    assert_eq!(renderer.draw_color().unwrap(), Color::rgba(10, 20, 30, 40));
    renderer.clear().unwrap();

    let texture = renderer
        .create_texture(PixelFormatEnum::Argb8888, TextureAccess::Streaming, 4, 2)
        .expect("create_texture should succeed");

    let query = texture.query().unwrap();
    assert_eq!(query.format, Some(PixelFormatEnum::Argb8888));
    assert_eq!(query.access, TextureAccess::Streaming);
    assert_eq!((query.width, query.height), (4, 2));

    texture.update(None, &[0xFF; 32], 16).expect("update should succeed");
    assert!(texture.update(None, &[0xFF; 31], 16).is_err());
    // A pitch past the runtime's range must not wrap into a small one.
    assert!(matches!(
        texture.update(None, &[0xFF; 32], usize::MAX / 2),
        Err(sdl::Error::InvalidArgument(_))
    ));
    texture.update(Some(Rect::new(0, 0, 2, 1)), &[0; 8], 8).unwrap();

    texture.set_blend_mode(BlendMode::Blend).unwrap();
    assert_eq!(texture.blend_mode().unwrap(), BlendMode::Blend);
    texture.set_alpha_mod(128).unwrap();
    assert_eq!(texture.alpha_mod().unwrap(), 128);
    texture.set_color_mod(Color::rgb(1, 2, 3)).unwrap();
    assert_eq!(texture.color_mod().unwrap(), Color::rgb(1, 2, 3));

    renderer.copy(&texture, None, Some(Rect::new(10, 10, 40, 20))).unwrap();
    renderer.draw_line(Point::new(0, 0), Point::new(100, 100)).unwrap();
    renderer.fill_rect(Some(Rect::new(50, 50, 10, 10))).unwrap();
    renderer.present();
}

#[test]
fn test_software_renderer_draws_into_surface() {
    let Some(_lock) = native() else { return };

    let mut surface = Surface::new(8, 8, PixelFormatEnum::Argb8888).unwrap();
    {
        let renderer = Renderer::software(&surface).expect("software renderer should succeed");
        renderer.set_draw_color(Color::rgb(0xFF, 0, 0)).unwrap();
        renderer.clear().unwrap();
        renderer.present();
    }

    let red = surface.map_color(Color::rgb(0xFF, 0, 0));
    let first = surface
        .with_lock(|pixels| u32::from_ne_bytes([pixels[0], pixels[1], pixels[2], pixels[3]]))
        .unwrap();
    assert_eq!(first, red);
}

#[test]
fn test_texture_from_surface() {
    let Some(_lock) = native() else { return };

    let target = Surface::new(16, 16, PixelFormatEnum::Argb8888).unwrap();
    let renderer = Renderer::software(&target).unwrap();

    let image = Surface::new(5, 3, PixelFormatEnum::Rgb888).unwrap();
    image.fill_rect(None, Color::WHITE).unwrap();

    let texture = renderer.create_texture_from_surface(&image).unwrap();
    let query = texture.query().unwrap();
    assert_eq!((query.width, query.height), (5, 3));
    assert_eq!(query.access, TextureAccess::Static);
}

#[test]
fn test_surface_bmp_round_trip() {
    let Some(_lock) = native() else { return };

    let path = env::temp_dir().join(format!("sdl2-wrapper-{}.bmp", std::process::id()));
    let path_str = path.to_str().unwrap();

    let surface = Surface::new(6, 4, PixelFormatEnum::Rgb888).unwrap();
    surface.fill_rect(Some(Rect::new(0, 0, 3, 4)), Color::rgb(0, 0xFF, 0)).unwrap();
    surface.save_bmp(path_str).expect("save_bmp should succeed");

    let loaded = Surface::load_bmp(path_str).expect("load_bmp should succeed");
    assert_eq!((loaded.width(), loaded.height()), (6, 4));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_surface_convert_and_lock() {
    let Some(_lock) = native() else { return };

    let surface = Surface::new(2, 2, PixelFormatEnum::Rgb888).unwrap();
    surface.fill_rect(None, Color::rgb(0x12, 0x34, 0x56)).unwrap();

    let mut converted = surface.convert(PixelFormatEnum::Abgr8888).unwrap();
    assert_eq!(converted.format(), Some(PixelFormatEnum::Abgr8888));
    assert_eq!(converted.bits_per_pixel(), 32);

    let len = converted.with_lock(|pixels| pixels.len()).unwrap();
    assert_eq!(len, converted.pitch() as usize * 2);
}

#[test]
fn test_palette_and_indexed_surface() {
    let Some(_lock) = native() else { return };

    let palette = Palette::new(4).unwrap();
    assert_eq!(palette.len(), 4);

    let version = palette.version();
    let colors = [Color::rgb(1, 2, 3), Color::rgb(4, 5, 6)];
    palette.set_colors(&colors, 2).unwrap();
    assert_eq!(&palette.colors()[2..], &colors);
    assert_ne!(palette.version(), version);
    assert!(palette.set_colors(&colors, 3).is_err());
    // `first` near the top of usize must not wrap into range.
    assert!(matches!(
        palette.set_colors(&[Color::WHITE], usize::MAX),
        Err(sdl::Error::InvalidArgument(_))
    ));
    assert_eq!(&palette.colors()[2..], &colors);

    let surface = Surface::new(4, 4, PixelFormatEnum::Index8).unwrap();
    surface.set_palette(&palette).unwrap();
}

#[test]
fn test_pixel_format_mapping() {
    let Some(_lock) = native() else { return };

    let format = PixelFormat::new(PixelFormatEnum::Rgba8888).unwrap();
    assert_eq!(format.bits_per_pixel(), 32);
    assert_eq!(format.bytes_per_pixel(), 4);

    let masks = format.masks();
    assert_eq!(masks.r, 0xFF00_0000);
    assert_eq!(masks.a, 0x0000_00FF);

    let color = Color::rgba(0x11, 0x22, 0x33, 0x44);
    let pixel = format.map_rgba(color);
    assert_eq!(pixel, 0x1122_3344);
    assert_eq!(format.get_rgba(pixel), color);
}

#[test]
fn test_audio_queue() {
    let Some(_lock) = native() else { return };
    let _audio = Subsystem::init(InitFlags::AUDIO).unwrap();

    assert!(sdl::audio::drivers().unwrap().iter().any(|d| d == "dummy"));
    assert_eq!(sdl::audio::current_driver().unwrap().as_deref(), Some("dummy"));

    let desired = AudioSpec {
        frequency: 44_100,
        format: AudioFormat::S16_SYS,
        channels: 1,
        samples: 1024,
        ..Default::default()
    };
    let mut device = AudioDevice::open(None, &desired, AllowedChanges::empty(), false).expect("open should succeed");

    assert!(device.id() > 0);
    assert_eq!(device.spec().frequency, 44_100);
    assert_eq!(device.spec().format, AudioFormat::S16_SYS);
    assert_eq!(device.status(), AudioStatus::Paused);

    device.queue(&[0u8; 2048]).unwrap();
    assert!(device.queued_size() > 0);
    device.clear();
    assert_eq!(device.queued_size(), 0);

    {
        let _guard = device.lock().unwrap();
    }

    device.resume();
    assert_eq!(device.status(), AudioStatus::Playing);
    device.pause();
    assert_eq!(device.status(), AudioStatus::Paused);

    assert!(device.dequeue(&mut [0u8; 16]).is_err());

    device.close();
    assert_eq!(device.id(), 0);
    assert!(matches!(device.queue(&[0u8; 4]), Err(sdl::Error::AlreadyClosed)));
    assert_eq!(device.status(), AudioStatus::Stopped);
}

#[test]
fn test_joystick_and_haptic_enumeration() {
    let Some(_lock) = native() else { return };

    let Ok(_joystick) = Subsystem::init(InitFlags::JOYSTICK) else {
        println!("Skipping: joystick subsystem unavailable");
        return;
    };

    let count = sdl::joystick::count().unwrap();
    for i in 0..count {
        println!("joystick {}: {:?}", i, sdl::joystick::name_for_index(i));
    }
    assert!(sdl::Joystick::open(count + 1000).is_err());

    if let Ok(_haptic) = Subsystem::init(InitFlags::HAPTIC) {
        let count = sdl::haptic::count().unwrap();
        assert!(sdl::Haptic::open(count + 1000).is_err());
    }
}

#[test]
fn test_cursor_lifecycle() {
    let Some(_lock) = native() else { return };
    let _video = Subsystem::init(InitFlags::VIDEO).unwrap();

    let arrow = Cursor::new(&[0xFF; 8], &[0xFF; 8], 8, 8, 0, 0).expect("monochrome cursor should succeed");
    arrow.set_active();
    assert!(arrow.is_active());

    assert!(matches!(
        Cursor::new(&[0xFF; 7], &[0xFF; 8], 8, 8, 0, 0),
        Err(sdl::Error::InvalidArgument(_))
    ));
    assert!(matches!(
        Cursor::new(&[0xFF; 12], &[0xFF; 12], 12, 8, 0, 0),
        Err(sdl::Error::InvalidArgument(_))
    ));

    let image = Surface::new(16, 16, PixelFormatEnum::Argb8888).unwrap();
    image.fill_rect(None, Color::rgb(0xFF, 0, 0)).unwrap();
    let color = Cursor::from_surface(&image, 8, 8).expect("color cursor should succeed");
    drop(image);
    color.set_active();
    assert!(color.is_active());
    assert!(!arrow.is_active());
    assert!(Cursor::from_surface(&Surface::new(4, 4, PixelFormatEnum::Argb8888).unwrap(), 4, 0).is_err());

    // The dummy driver has no system cursors
    if let Err(e) = Cursor::system(SystemCursor::Hand) {
        assert!(e.is_sdl(), "unexpected error {:?}", e);
    }

    // Toggling reports the previous state
    assert!(sdl::cursor::show_cursor(false).unwrap());
    assert!(!sdl::cursor::is_cursor_shown().unwrap());
    assert!(!sdl::cursor::show_cursor(true).unwrap());
    assert!(sdl::cursor::is_cursor_shown().unwrap());
    sdl::cursor::set_default().unwrap();
}

#[test]
fn test_game_controller_mappings() {
    let Some(_lock) = native() else { return };

    let Ok(_controllers) = Subsystem::init(InitFlags::GAMECONTROLLER) else {
        println!("Skipping: game controller subsystem unavailable");
        return;
    };

    assert_eq!(GameControllerAxis::LeftX.name().unwrap(), "leftx");
    assert_eq!(GameControllerAxis::TriggerRight.name().unwrap(), "righttrigger");
    assert_eq!(GameControllerButton::A.name().unwrap(), "a");
    assert_eq!(GameControllerButton::DpadUp.name().unwrap(), "dpup");

    let mapping = "deadbeefdeadbeefdeadbeefdeadbeef,sdl2-wrapper test pad,a:b0,b:b1,leftx:a0,";
    sdl::game_controller::add_mapping(mapping).expect("add_mapping should succeed");
    assert!(!sdl::game_controller::add_mapping(mapping).unwrap(), "second add should update");
    assert!(sdl::game_controller::add_mapping("not a mapping").is_err());
    assert!(matches!(
        sdl::game_controller::add_mapping("a\0b"),
        Err(sdl::Error::InvalidArgument(_))
    ));

    let count = sdl::joystick::count().unwrap();
    for i in 0..count {
        if sdl::game_controller::is_game_controller(i).unwrap() {
            let pad = GameController::open(i).expect("open should succeed");
            assert!(pad.is_owning());
            let id = pad.instance_id().unwrap();
            let view = unsafe { GameController::from_instance_id(id) }.unwrap();
            assert!(!view.is_owning());
            assert_eq!(view.raw(), pad.raw());
        }
    }
    assert!(GameController::open(count + 1000).is_err());
    assert!(unsafe { GameController::from_instance_id(-1) }.is_err());
}

/// A PCM WAVE file: 16-bit mono at 8 kHz.
fn wave_bytes(samples: &[i16]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVEfmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&8000u32.to_le_bytes());
    out.extend_from_slice(&16000u32.to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for s in samples {
        out.extend_from_slice(&s.to_le_bytes());
    }
    out
}

#[test]
fn test_wav_decoding() {
    let Some(_lock) = native() else { return };

    let samples = [0i16, 1000, -1000, 32767, -32768, 0, 5, -5];
    let bytes = wave_bytes(&samples);

    let wav = Wav::from_bytes(&bytes).expect("from_bytes should succeed");
    assert_eq!(wav.spec().frequency, 8000);
    assert_eq!(wav.spec().channels, 1);
    assert_eq!(wav.spec().format, AudioFormat::S16Lsb);
    assert_eq!(wav.len(), 16);
    assert_eq!(wav.buffer(), &bytes[44..]);

    let path = env::temp_dir().join(format!("sdl2-wrapper-{}.wav", std::process::id()));
    std::fs::write(&path, &bytes).unwrap();
    let from_disk = Wav::load(path.to_str().unwrap()).expect("load should succeed");
    assert_eq!(from_disk.buffer(), wav.buffer());
    let _ = std::fs::remove_file(&path);

    assert!(Wav::from_bytes(b"RIFF but not a wave").is_err());
    assert!(Wav::load("/no/such/file.wav").is_err());
}

#[test]
fn test_video_drivers_and_displays() {
    let Some(_lock) = native() else { return };
    let _video = Subsystem::init(InitFlags::VIDEO).unwrap();

    assert!(sdl::display::video_drivers().unwrap().iter().any(|d| d == "dummy"));
    assert_eq!(sdl::display::current_video_driver().unwrap().as_deref(), Some("dummy"));

    let displays = sdl::display::displays().unwrap();
    assert!(!displays.is_empty());

    let display = displays[0];
    assert!(display.name().is_ok());
    let bounds = display.bounds().unwrap();
    assert!(bounds.w > 0 && bounds.h > 0);

    let current = display.current_mode().unwrap();
    assert!(current.width > 0 && current.height > 0);
    assert_eq!(display.desktop_mode().unwrap(), current);
    assert!(display.modes().unwrap().contains(&current));

    let closest = display.closest_mode(&DisplayMode::with_size(640, 480)).unwrap();
    assert!(closest.width >= 640 && closest.height >= 480);

    let missing = sdl::Display::new(displays.len() as u32 + 10);
    assert!(missing.bounds().is_err());
    assert!(missing.current_mode().is_err());
}

#[test]
#[cfg(target_os = "linux")]
fn test_shared_object() {
    let Some(_lock) = native() else { return };

    let object = sdl::SharedObject::load("libc.so.6").expect("load should succeed");
    assert!(!object.symbol("strlen").unwrap().is_null());
    assert!(object.symbol("sdl2_wrapper_no_such_symbol").is_err());

    let strlen: unsafe extern "C" fn(*const std::os::raw::c_char) -> usize =
        unsafe { object.function("strlen").unwrap() };
    assert_eq!(unsafe { strlen(c"hello".as_ptr()) }, 5);

    assert!(sdl::SharedObject::load("/no/such/library.so").is_err());
}
