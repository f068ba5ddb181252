//! Common types and utilities for the pattern generator
//!
//! This module defines the raster dimensions and provides the bit
//! manipulation helpers shared by the classifier, font and packer.

/// 8-bit unsigned integer (packed pin word, glyph row)
pub type Byte = u8;

/// 16-bit unsigned integer (beam coordinates)
pub type Word = u16;

/// Visible raster width in pixels
pub const SCREEN_WIDTH: usize = 640;

/// Visible raster height in pixels
pub const SCREEN_HEIGHT: usize = 480;

/// Horizontal centerline of the pattern
pub const CENTER_X: Word = 320;

/// Check if a specific bit is set in a byte value
///
/// # Arguments
/// * `value` - The byte value to check
/// * `n` - The bit position (0-7)
///
/// # Returns
/// `true` if the bit at position `n` is set, `false` otherwise
#[inline]
pub fn bit(value: Byte, n: u8) -> bool {
    (value & (1 << n)) != 0
}

/// Check if a specific bit is set in a word value
#[inline]
pub fn word_bit(value: Word, n: u8) -> bool {
    (value & (1 << n)) != 0
}

/// Set or clear a specific bit in a byte value
///
/// # Arguments
/// * `value` - Mutable reference to the byte value
/// * `n` - The bit position (0-7)
/// * `on` - `true` to set the bit, `false` to clear it
#[inline]
pub fn bit_set(value: &mut Byte, n: u8, on: bool) {
    if on {
        *value |= 1 << n;
    } else {
        *value &= !(1 << n);
    }
}

/// Check if a value is within a half-open range `[low, high)`
#[inline]
pub fn within(value: Word, low: Word, high: Word) -> bool {
    value >= low && value < high
}

/// Distance of `x` from the vertical centerline
#[inline]
pub fn distance_from_center(x: Word) -> Word {
    x.abs_diff(CENTER_X)
}
