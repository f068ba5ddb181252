//! Output Packing
//!
//! Assembles the color and sync levels into the 8-bit pin word.
//!
//! Bit layout (7 -> 0):
//! - 7: HSYNC
//! - 6: B[0]
//! - 5: G[0]
//! - 4: R[0]
//! - 3: VSYNC
//! - 2: B[1]
//! - 1: G[1]
//! - 0: R[1]

use crate::common::{bit, bit_set, Byte};
use crate::compositor::Color;

/// Decoded pin word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinWord {
    pub color: Color,
    pub hsync: bool,
    pub vsync: bool,
}

/// Pack a color and sync levels into the pin word
pub fn pack(color: Color, hsync: bool, vsync: bool) -> Byte {
    let mut word: Byte = 0;
    bit_set(&mut word, 7, hsync);
    bit_set(&mut word, 6, bit(color.b, 0));
    bit_set(&mut word, 5, bit(color.g, 0));
    bit_set(&mut word, 4, bit(color.r, 0));
    bit_set(&mut word, 3, vsync);
    bit_set(&mut word, 2, bit(color.b, 1));
    bit_set(&mut word, 1, bit(color.g, 1));
    bit_set(&mut word, 0, bit(color.r, 1));
    word
}

/// Split a pin word back into color and sync levels
pub fn unpack(word: Byte) -> PinWord {
    let channel = |hi: u8, lo: u8| (bit(word, hi) as u8) << 1 | bit(word, lo) as u8;
    PinWord {
        color: Color::new(channel(0, 4), channel(1, 5), channel(2, 6)),
        hsync: bit(word, 7),
        vsync: bit(word, 3),
    }
}

impl From<Byte> for PinWord {
    fn from(word: Byte) -> Self {
        unpack(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_with_syncs() {
        assert_eq!(pack(Color::BLACK, false, false), 0x00);
        assert_eq!(pack(Color::BLACK, true, false), 0x80);
        assert_eq!(pack(Color::BLACK, false, true), 0x08);
        assert_eq!(pack(Color::BLACK, true, true), 0x88);
    }

    #[test]
    fn test_white() {
        assert_eq!(pack(Color::WHITE, false, false), 0b0111_0111);
    }

    #[test]
    fn test_channel_bit_positions() {
        // R = 0b01: low bit in the upper nibble
        assert_eq!(pack(Color::new(1, 0, 0), false, false), 0b0001_0000);
        // R = 0b10: high bit in the lower nibble
        assert_eq!(pack(Color::new(2, 0, 0), false, false), 0b0000_0001);
        assert_eq!(pack(Color::new(0, 1, 0), false, false), 0b0010_0000);
        assert_eq!(pack(Color::new(0, 2, 0), false, false), 0b0000_0010);
        assert_eq!(pack(Color::new(0, 0, 1), false, false), 0b0100_0000);
        assert_eq!(pack(Color::new(0, 0, 2), false, false), 0b0000_0100);
    }

    #[test]
    fn test_brown() {
        // R=2, G=1: R[1] -> bit 0, G[0] -> bit 5
        assert_eq!(pack(Color::BROWN, true, true), 0b1010_1001);
    }

    #[test]
    fn test_unpack() {
        let word = unpack(0b1010_1001);
        assert_eq!(word.color, Color::BROWN);
        assert!(word.hsync);
        assert!(word.vsync);

        let word = PinWord::from(pack(Color::ORANGE, false, true));
        assert_eq!(word.color, Color::ORANGE);
        assert!(!word.hsync);
        assert!(word.vsync);
    }
}
