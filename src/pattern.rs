//! Pattern Generator
//!
//! This module ties the pixel pipeline to a timing source. It owns the
//! animation clock, evaluates one pixel per tick and produces the packed pin
//! word, and can render whole frames into an ARGB buffer for the viewer.

use std::path::Path;

use tracing::{debug, info};

use crate::clock::{AnimationClock, AnimationPhase};
use crate::common::{Byte, Word, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::compositor::{compose, layer, Color, Layer, PixelInputs};
use crate::error::{Error, Result};
use crate::output::pack;
use crate::shapes::ShapeFlags;
use crate::text::{locate, CellHit};
use crate::timing::{TimingSignals, VgaTiming, TICKS_PER_FRAME};

/// One rendered frame (640x480, ARGB)
#[derive(Debug, Clone)]
pub struct Frame {
    pub pixels: Vec<u32>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Create a black frame
    pub fn new() -> Self {
        Self {
            pixels: vec![Color::BLACK.to_argb(); SCREEN_WIDTH * SCREEN_HEIGHT],
        }
    }

    /// ARGB value at (`x`, `y`), `None` outside the raster
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return None;
        }
        self.pixels.get(y * SCREEN_WIDTH + x).copied()
    }

    fn set_pixel(&mut self, x: usize, y: usize, argb: u32) {
        if x < SCREEN_WIDTH && y < SCREEN_HEIGHT {
            self.pixels[y * SCREEN_WIDTH + x] = argb;
        }
    }

    /// Save the frame as a PNG
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        use image::{Rgb, RgbImage};

        let mut img = RgbImage::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
        for (i, argb) in self.pixels.iter().enumerate() {
            let x = (i % SCREEN_WIDTH) as u32;
            let y = (i / SCREEN_WIDTH) as u32;
            let [_, r, g, b] = argb.to_be_bytes();
            img.put_pixel(x, y, Rgb([r, g, b]));
        }

        img.save(path.as_ref())?;
        info!(path = %path.as_ref().display(), "saved frame");
        Ok(())
    }
}

/// Everything the pipeline decides about a single coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub x: Word,
    pub y: Word,
    pub flags: ShapeFlags,
    pub cell: Option<CellHit>,
    pub font_bit: bool,
    pub blink_phase: u8,
    pub layer: Layer,
    pub color: Color,
    pub word: Byte,
}

/// Run the pipeline for one visible coordinate
pub fn probe(x: Word, y: Word, blink_phase: u8) -> Result<Probe> {
    if usize::from(x) >= SCREEN_WIDTH || usize::from(y) >= SCREEN_HEIGHT {
        return Err(Error::OutOfRaster { x, y });
    }
    if blink_phase > 3 {
        return Err(Error::InvalidPhase(blink_phase));
    }

    let signals = TimingSignals::at(x, y);
    let inputs = PixelInputs::sample(x, y, blink_phase, signals.active);
    let color = compose(&inputs);

    Ok(Probe {
        x,
        y,
        flags: inputs.flags,
        cell: locate(x, y),
        font_bit: inputs.font_bit,
        blink_phase,
        layer: layer(&inputs),
        color,
        word: pack(color, signals.hsync, signals.vsync),
    })
}

/// Test-pattern generator
#[derive(Debug, Clone, Default)]
pub struct PatternGenerator {
    clock: AnimationClock,
    /// Total pixel clock ticks since reset
    pub ticks: u64,
}

impl PatternGenerator {
    /// Create a generator in the reset state
    pub fn new() -> Self {
        Self::default()
    }

    /// Synchronous reset
    pub fn reset(&mut self) {
        self.clock.reset();
        self.ticks = 0;
        debug!("pattern generator reset");
    }

    /// Animation counter state
    pub fn phase(&self) -> AnimationPhase {
        self.clock.phase()
    }

    /// Jump to a given animation state
    pub fn set_phase(&mut self, phase: AnimationPhase) {
        self.clock.set_phase(phase);
    }

    /// Current blink phase
    pub fn blink_phase(&self) -> u8 {
        self.clock.blink_phase()
    }

    /// Evaluate one pixel clock tick, returning the color and pin word
    pub fn step(&mut self, signals: &TimingSignals) -> (Color, Byte) {
        self.ticks += 1;
        if self.clock.observe_vsync(signals.vsync_pulse()) {
            debug!(phase = self.clock.phase().raw(), "frame boundary");
        }

        let inputs = PixelInputs::sample(
            signals.x,
            signals.y,
            self.clock.blink_phase(),
            signals.active,
        );
        let color = compose(&inputs);
        (color, pack(color, signals.hsync, signals.vsync))
    }

    /// Evaluate one tick and return the packed pin word
    pub fn tick(&mut self, signals: &TimingSignals) -> Byte {
        self.step(signals).1
    }

    /// Evaluate one tick with an active-low synchronous reset input
    ///
    /// While `reset_n` is low the generator is held in its reset state
    /// (counter and tick count at zero) and the pixel is still composited
    /// from the cleared state.
    pub fn tick_with_reset(&mut self, signals: &TimingSignals, reset_n: bool) -> Byte {
        if !reset_n {
            self.reset();
            let inputs = PixelInputs::sample(signals.x, signals.y, 0, signals.active);
            return pack(compose(&inputs), signals.hsync, signals.vsync);
        }
        self.tick(signals)
    }

    /// Drive `timing` for one full frame and capture the visible pixels
    pub fn run_frame(&mut self, timing: &mut VgaTiming, frame: &mut Frame) {
        for _ in 0..TICKS_PER_FRAME {
            let signals = timing.tick();
            let (color, _) = self.step(&signals);
            if signals.active {
                frame.set_pixel(
                    usize::from(signals.x),
                    usize::from(signals.y),
                    color.to_argb(),
                );
            }
        }
    }

    /// Render `count` frames from reset and return the last one
    ///
    /// A count of zero renders nothing and returns a black frame.
    pub fn render_frames(&mut self, count: u32) -> Frame {
        let mut timing = VgaTiming::new();
        let mut frame = Frame::new();
        for _ in 0..count {
            self.run_frame(&mut timing, &mut frame);
        }
        debug!(
            frames = count,
            phase = self.clock.phase().raw(),
            "render complete"
        );
        frame
    }
}
