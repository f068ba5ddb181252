//! VGA Timing
//!
//! Reference 640x480 @ 60 Hz sync generator (25.175 MHz pixel clock).
//!
//! Horizontal (pixels): 640 visible, 16 front porch, 96 sync, 48 back porch
//! Vertical (lines):    480 visible, 10 front porch,  2 sync, 33 back porch
//!
//! Both sync outputs are active-low pin levels.

use crate::common::Word;

/// Horizontal visible pixels
pub const H_VISIBLE: Word = 640;
/// First column of the hsync pulse
pub const H_SYNC_START: Word = H_VISIBLE + 16;
/// First column after the hsync pulse
pub const H_SYNC_END: Word = H_SYNC_START + 96;
/// Columns per line
pub const H_TOTAL: Word = H_SYNC_END + 48;

/// Vertical visible lines
pub const V_VISIBLE: Word = 480;
/// First line of the vsync pulse
pub const V_SYNC_START: Word = V_VISIBLE + 10;
/// First line after the vsync pulse
pub const V_SYNC_END: Word = V_SYNC_START + 2;
/// Lines per frame
pub const V_TOTAL: Word = V_SYNC_END + 33;

/// Pixel clock ticks per frame
pub const TICKS_PER_FRAME: u32 = H_TOTAL as u32 * V_TOTAL as u32;

/// Outputs of the sync generator for one pixel clock tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSignals {
    /// Beam column
    pub x: Word,
    /// Beam line
    pub y: Word,
    /// Beam is inside the visible window
    pub active: bool,
    /// HSYNC pin level (low during the pulse)
    pub hsync: bool,
    /// VSYNC pin level (low during the pulse)
    pub vsync: bool,
}

impl TimingSignals {
    /// Signals for an arbitrary beam position
    pub fn at(x: Word, y: Word) -> Self {
        Self {
            x,
            y,
            active: x < H_VISIBLE && y < V_VISIBLE,
            hsync: !(H_SYNC_START..H_SYNC_END).contains(&x),
            vsync: !(V_SYNC_START..V_SYNC_END).contains(&y),
        }
    }

    /// Whether a vsync pulse is in progress
    pub fn vsync_pulse(&self) -> bool {
        !self.vsync
    }

    /// Whether an hsync pulse is in progress
    pub fn hsync_pulse(&self) -> bool {
        !self.hsync
    }
}

/// Free-running beam counters
#[derive(Debug, Clone, Default)]
pub struct VgaTiming {
    x: Word,
    y: Word,
    /// Completed frames since reset
    pub frame: u64,
}

impl VgaTiming {
    /// Create a generator at the top-left corner
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the beam to (0, 0)
    pub fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
        self.frame = 0;
    }

    /// Current beam position
    pub fn position(&self) -> (Word, Word) {
        (self.x, self.y)
    }

    /// Emit the signals for the current position and advance one pixel
    pub fn tick(&mut self) -> TimingSignals {
        let signals = TimingSignals::at(self.x, self.y);

        self.x += 1;
        if self.x >= H_TOTAL {
            self.x = 0;
            self.y += 1;
            if self.y >= V_TOTAL {
                self.y = 0;
                self.frame += 1;
            }
        }

        signals
    }
}

impl Iterator for VgaTiming {
    type Item = TimingSignals;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.tick())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        assert_eq!(H_TOTAL, 800);
        assert_eq!(V_TOTAL, 525);
        assert_eq!(TICKS_PER_FRAME, 420_000);
    }

    #[test]
    fn test_active_window() {
        assert!(TimingSignals::at(0, 0).active);
        assert!(TimingSignals::at(639, 479).active);
        assert!(!TimingSignals::at(640, 0).active);
        assert!(!TimingSignals::at(0, 480).active);
    }

    #[test]
    fn test_sync_pulses() {
        assert!(TimingSignals::at(655, 0).hsync);
        assert!(!TimingSignals::at(655, 0).hsync_pulse());
        assert!(TimingSignals::at(656, 0).hsync_pulse());
        assert!(TimingSignals::at(751, 0).hsync_pulse());
        assert!(TimingSignals::at(752, 0).hsync);

        assert!(TimingSignals::at(0, 489).vsync);
        assert!(TimingSignals::at(0, 490).vsync_pulse());
        assert!(TimingSignals::at(0, 491).vsync_pulse());
        assert!(TimingSignals::at(0, 492).vsync);
    }

    #[test]
    fn test_tick_wraps_line_and_frame() {
        let mut timing = VgaTiming::new();
        for _ in 0..H_TOTAL {
            timing.tick();
        }
        assert_eq!(timing.position(), (0, 1));

        for _ in H_TOTAL as u32..TICKS_PER_FRAME {
            timing.tick();
        }
        assert_eq!(timing.position(), (0, 0));
        assert_eq!(timing.frame, 1);
    }

    #[test]
    fn test_one_vsync_pulse_per_frame() {
        let timing = VgaTiming::new();
        let mut pulses = 0;
        let mut previous = false;
        for signals in timing.take(TICKS_PER_FRAME as usize) {
            let pulse = signals.vsync_pulse();
            if pulse && !previous {
                pulses += 1;
            }
            previous = pulse;
        }
        assert_eq!(pulses, 1);
    }

    #[test]
    fn test_reset() {
        let mut timing = VgaTiming::new();
        for _ in 0..1234 {
            timing.tick();
        }
        timing.reset();
        assert_eq!(timing.position(), (0, 0));
        assert_eq!(timing.frame, 0);
    }
}
