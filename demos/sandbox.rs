//! Draws a few animated frames into a window and plays a short tone.
//!
//! Run with: cargo run --example sandbox
//! Set SDL_VIDEODRIVER=dummy and SDL_AUDIODRIVER=dummy to run headless.

use std::f32::consts::TAU;
use std::time::Duration;

use sdl::{
    AllowedChanges, AudioDevice, AudioFormat, AudioSpec, Color, InitFlags, PixelFormatEnum, Rect, Renderer,
    RendererFlags, Subsystem, TextureAccess, Window, WindowOptions,
};

const FRAMES: u32 = 120;
const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn main() -> sdl::Result<()> {
    env_logger::init();

    println!("SDL version: {}", sdl::linked_version()?);

    let _video = Subsystem::init(InitFlags::VIDEO)?;
    let window = Window::new(&WindowOptions {
        title: "sandbox".to_string(),
        width: WIDTH,
        height: HEIGHT,
        ..Default::default()
    })?;
    println!("Window {} on display {:?}", window.id(), window.display_index());

    let renderer = Renderer::for_window(&window, None, RendererFlags::empty())?;
    let checker = renderer.create_texture(PixelFormatEnum::Argb8888, TextureAccess::Static, 8, 8)?;
    checker.update(None, &checkerboard(8), 8 * 4)?;

    let tone = play_tone();
    if let Err(e) = &tone {
        println!("No audio: {}", e);
    }

    let start = sdl::timer::ticks()?;
    for frame in 0..FRAMES {
        let x = (frame * 4 % (WIDTH - 64)) as i32;

        renderer.set_draw_color(Color::rgb(24, 24, 32))?;
        renderer.clear()?;
        renderer.copy(&checker, None, Some(Rect::new(x, 200, 64, 64)))?;
        renderer.set_draw_color(Color::rgb(240, 200, 40))?;
        renderer.fill_rect(Some(Rect::new(0, HEIGHT as i32 - 20, (x + 64).max(0), 20)))?;
        renderer.present();

        sdl::timer::delay(Duration::from_millis(16))?;
    }

    let elapsed = sdl::timer::ticks()?.wrapping_sub(start);
    println!("{} frames in {} ms", FRAMES, elapsed);

    // The tone device, texture, renderer, window and video subsystem are
    // released in reverse order here
    Ok(())
}

fn checkerboard(size: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let v = if (x + y) % 2 == 0 { 0xFF } else { 0x40 };
            // ARGB8888, little endian in memory
            pixels.extend_from_slice(&[v, v, v, 0xFF]);
        }
    }
    pixels
}

fn play_tone() -> sdl::Result<(Subsystem, AudioDevice)> {
    let audio = Subsystem::init(InitFlags::AUDIO)?;
    println!("Audio driver: {:?}", sdl::audio::current_driver()?);

    let desired = AudioSpec {
        frequency: 48_000,
        format: AudioFormat::F32Lsb,
        channels: 1,
        ..Default::default()
    };
    let device = AudioDevice::open(None, &desired, AllowedChanges::empty(), false)?;

    let rate = device.spec().frequency as f32;
    let samples: Vec<u8> = (0..device.spec().frequency as usize)
        .map(|i| (i as f32 * 440.0 * TAU / rate).sin() * 0.2)
        .flat_map(f32::to_le_bytes)
        .collect();

    device.queue(&samples)?;
    device.resume();

    Ok((audio, device))
}
