//! SDL2 User Interface
//!
//! This module implements the SDL2 window that shows the live pattern.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::pattern::{Frame, PatternGenerator};
use crate::timing::{H_VISIBLE, V_VISIBLE, VgaTiming};

/// Raster dimensions as SDL expects them
pub const SCREEN_WIDTH: u32 = H_VISIBLE as u32;
pub const SCREEN_HEIGHT: u32 = V_VISIBLE as u32;

/// SDL2 UI wrapper
pub struct Ui {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    texture_creator: TextureCreator<WindowContext>,
    config: DisplayConfig,
}

/// Viewer key actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Quit,
    Reset,
    TogglePause,
}

impl Ui {
    /// Create a new UI instance
    pub fn new(config: DisplayConfig) -> Result<Self> {
        config.validate()?;

        let sdl_context = sdl2::init().map_err(Error::sdl)?;
        let video_subsystem = sdl_context.video().map_err(Error::sdl)?;

        let window = video_subsystem
            .window(
                "xmas-vga",
                SCREEN_WIDTH * config.scale,
                SCREEN_HEIGHT * config.scale,
            )
            .position_centered()
            .build()
            .map_err(Error::sdl)?;

        let canvas = window
            .into_canvas()
            .software()
            .build()
            .map_err(Error::sdl)?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(Error::sdl)?;

        info!(scale = config.scale, "window opened");

        Ok(Self {
            canvas,
            event_pump,
            texture_creator,
            config,
        })
    }

    /// Run the generator with UI
    pub fn run(&mut self, generator: &mut PatternGenerator) -> Result<()> {
        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, SCREEN_WIDTH, SCREEN_HEIGHT)
            .map_err(Error::sdl)?;

        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(self.config.target_fps));
        let mut timing = VgaTiming::new();
        let mut frame = Frame::new();
        let mut paused = false;

        'running: loop {
            let frame_start = Instant::now();

            // Handle events
            for event in self.event_pump.poll_iter() {
                let action = match event {
                    Event::Quit { .. } => Some(Action::Quit),
                    Event::KeyDown {
                        keycode: Some(key), ..
                    } => keycode_to_action(key),
                    _ => None,
                };
                match action {
                    Some(Action::Quit) => break 'running,
                    Some(Action::Reset) => {
                        generator.reset();
                        timing.reset();
                    }
                    Some(Action::TogglePause) => {
                        paused = !paused;
                        debug!(paused, "pause toggled");
                    }
                    None => {}
                }
            }

            if !paused {
                generator.run_frame(&mut timing, &mut frame);
            }

            // Update texture with the frame buffer
            let bytes: Vec<u8> = frame
                .pixels
                .iter()
                .flat_map(|argb| argb.to_ne_bytes())
                .collect();
            texture
                .update(None, &bytes, SCREEN_WIDTH as usize * 4)
                .map_err(Error::sdl)?;

            // Render
            self.canvas.clear();
            self.canvas.copy(&texture, None, None).map_err(Error::sdl)?;
            self.canvas.present();

            // Frame timing
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                std::thread::sleep(frame_duration - elapsed);
            } else {
                debug!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    "frame overran the refresh interval"
                );
            }
        }

        Ok(())
    }
}

/// Convert SDL2 keycode to a viewer action
fn keycode_to_action(keycode: Keycode) -> Option<Action> {
    match keycode {
        Keycode::Escape => Some(Action::Quit),
        Keycode::R => Some(Action::Reset),
        Keycode::Space => Some(Action::TogglePause),
        _ => None,
    }
}
