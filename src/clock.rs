//! Animation Clock
//!
//! This module implements the frame-synchronized blink counter.
//!
//! The counter is 10 bits wide and advances once per vertical sync pulse.
//! Only its top two bits are visible as the blink phase, so the phase changes
//! every 256 frames and the full cycle repeats every 1024 frames.

use crate::common::Word;

/// Width of the phase counter in bits
pub const PHASE_BITS: u8 = 10;

/// Counter modulus
const PHASE_MASK: Word = (1 << PHASE_BITS) - 1;

/// 10-bit cyclic animation counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationPhase(Word);

impl AnimationPhase {
    /// Counter value after reset
    pub const RESET: Self = Self(0);

    /// Build a phase from a raw counter value (wrapped to 10 bits)
    pub fn from_raw(value: Word) -> Self {
        Self(value & PHASE_MASK)
    }

    /// Build the first counter value that shows the given blink phase
    pub fn from_blink_phase(phase: u8) -> Self {
        Self::from_raw(Word::from(phase & 0x03) << (PHASE_BITS - 2))
    }

    /// Raw counter value
    pub fn raw(self) -> Word {
        self.0
    }

    /// Advance by one frame, wrapping 1023 -> 0
    #[must_use]
    pub fn advance(self) -> Self {
        Self((self.0 + 1) & PHASE_MASK)
    }

    /// Blink phase (counter bits 9:8)
    pub fn blink_phase(self) -> u8 {
        (self.0 >> (PHASE_BITS - 2)) as u8 & 0x03
    }
}

/// Owner of the animation counter
///
/// Tracks the previous vsync level so that a pulse lasting several lines
/// advances the counter exactly once.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    phase: AnimationPhase,
    /// Whether the previous tick was inside a vsync pulse
    in_vsync: bool,
}

impl AnimationClock {
    /// Create a clock in the reset state
    pub fn new() -> Self {
        Self::default()
    }

    /// Synchronous reset
    pub fn reset(&mut self) {
        self.phase = AnimationPhase::RESET;
        self.in_vsync = false;
    }

    /// Current counter state
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Force the counter to a given state
    pub fn set_phase(&mut self, phase: AnimationPhase) {
        self.phase = phase;
    }

    /// Current blink phase
    pub fn blink_phase(&self) -> u8 {
        self.phase.blink_phase()
    }

    /// Frame boundary: advance the counter by one
    pub fn on_vsync_edge(&mut self) {
        self.phase = self.phase.advance();
    }

    /// Feed the vsync pulse state for one tick
    ///
    /// Returns `true` on the tick where a new pulse begins.
    pub fn observe_vsync(&mut self, pulse: bool) -> bool {
        let edge = pulse && !self.in_vsync;
        self.in_vsync = pulse;
        if edge {
            self.on_vsync_edge();
        }
        edge
    }
}
