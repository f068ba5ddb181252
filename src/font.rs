//! Bitmap Font
//!
//! 8x8 glyphs for the characters used by the banner text. Each glyph is
//! eight rows of one byte; bit 7 of a row is the leftmost pixel.
//! Characters without an entry (space included) render blank.

use crate::common::{bit, Byte};

/// Glyph dimensions in font pixels
pub const GLYPH_SIZE: usize = 8;

/// An 8x8 monochrome bitmap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Glyph(pub [Byte; GLYPH_SIZE]);

impl Glyph {
    /// The all-zero glyph
    pub const BLANK: Self = Self([0; GLYPH_SIZE]);

    /// Row bits for `y` (0 = top); rows past the bitmap are blank
    pub fn row(&self, y: usize) -> Byte {
        self.0.get(y).copied().unwrap_or(0)
    }

    /// Whether the font pixel at (`x`, `y`) is lit
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < GLYPH_SIZE && bit(self.row(y), (7 - x) as u8)
    }
}

/// Glyph table, ordered by character code
const GLYPHS: [(char, Glyph); 15] = [
    ('!', Glyph([0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00, 0x00])),
    ('A', Glyph([0x38, 0x44, 0x82, 0x82, 0xFE, 0x82, 0x82, 0x00])),
    ('E', Glyph([0xFE, 0x80, 0x80, 0xFC, 0x80, 0x80, 0xFE, 0x00])),
    ('G', Glyph([0x7C, 0x82, 0x80, 0x8E, 0x82, 0x82, 0x7C, 0x00])),
    ('I', Glyph([0x7C, 0x10, 0x10, 0x10, 0x10, 0x7C, 0x00, 0x00])),
    ('K', Glyph([0x84, 0x88, 0x90, 0xE0, 0x90, 0x88, 0x84, 0x00])),
    ('L', Glyph([0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xFE, 0x00])),
    ('M', Glyph([0x81, 0xC3, 0xA5, 0x99, 0x81, 0x81, 0x81, 0x00])),
    ('N', Glyph([0x82, 0xC2, 0xA2, 0x92, 0x8A, 0x86, 0x82, 0x00])),
    ('O', Glyph([0x7C, 0x82, 0x82, 0x82, 0x82, 0x82, 0x7C, 0x00])),
    ('P', Glyph([0xFC, 0x82, 0x82, 0xFC, 0x80, 0x80, 0x80, 0x00])),
    ('R', Glyph([0xFC, 0x82, 0x82, 0xFC, 0x90, 0x88, 0x84, 0x00])),
    ('S', Glyph([0x7C, 0x82, 0x80, 0x7C, 0x02, 0x82, 0x7C, 0x00])),
    ('X', Glyph([0x82, 0x44, 0x28, 0x10, 0x28, 0x44, 0x82, 0x00])),
    ('Y', Glyph([0x82, 0x82, 0x44, 0x28, 0x10, 0x10, 0x10, 0x00])),
];

/// Look up the glyph for a character
pub fn glyph(ch: char) -> Glyph {
    GLYPHS
        .binary_search_by_key(&ch, |&(c, _)| c)
        .map(|i| GLYPHS[i].1)
        .unwrap_or(Glyph::BLANK)
}
