//! Color Compositor
//!
//! Merges shape flags, the font bit and the blink phase into the final pixel
//! color. Categories are checked in a fixed order and the first match wins:
//! blanking, star, text, tree body, trunk, background.

use crate::common::{word_bit, Word};
use crate::shapes::{classify, ShapeFlags};
use crate::text::font_bit;

/// 2-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(3, 3, 3);
    pub const RED: Self = Self::new(3, 0, 0);
    pub const DARK_RED: Self = Self::new(2, 0, 0);
    pub const YELLOW: Self = Self::new(3, 3, 0);
    pub const ORANGE: Self = Self::new(3, 1, 0);
    pub const GREEN: Self = Self::new(0, 3, 0);
    pub const BLUE: Self = Self::new(0, 0, 3);
    pub const BROWN: Self = Self::new(2, 1, 0);

    /// Build a color, masking each channel to 2 bits
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r & 0x03,
            g: g & 0x03,
            b: b & 0x03,
        }
    }

    /// Expand to a 32-bit ARGB pixel (each level scaled by 0x55)
    pub fn to_argb(self) -> u32 {
        let expand = |c: u8| u32::from(c & 0x03) * 0x55;
        0xFF00_0000 | expand(self.r) << 16 | expand(self.g) << 8 | expand(self.b)
    }
}

/// Star palette indexed by blink phase
const STAR_COLORS: [Color; 4] = [Color::DARK_RED, Color::RED, Color::YELLOW, Color::ORANGE];

/// Everything the compositor looks at for one pixel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelInputs {
    pub x: Word,
    pub flags: ShapeFlags,
    pub font_bit: bool,
    pub blink_phase: u8,
    pub active: bool,
}

impl PixelInputs {
    /// Run the classifier and text layout for a beam position
    pub fn sample(x: Word, y: Word, blink_phase: u8, active: bool) -> Self {
        Self {
            x,
            flags: classify(x, y),
            font_bit: font_bit(x, y),
            blink_phase,
            active,
        }
    }
}

/// Which rule produced a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Blank,
    Star,
    Text,
    Tree,
    Light,
    Trunk,
    Background,
}

/// Pick the winning layer for a pixel
pub fn layer(inputs: &PixelInputs) -> Layer {
    let flags = &inputs.flags;

    if !inputs.active {
        return Layer::Blank;
    }
    if flags.is_star {
        return Layer::Star;
    }
    if inputs.font_bit {
        return Layer::Text;
    }
    if flags.is_tree_body {
        return if flags.is_light_stripe {
            Layer::Light
        } else {
            Layer::Tree
        };
    }
    if flags.is_trunk {
        Layer::Trunk
    } else {
        Layer::Background
    }
}

/// Final color for a pixel
pub fn compose(inputs: &PixelInputs) -> Color {
    match layer(inputs) {
        Layer::Blank | Layer::Background => Color::BLACK,
        Layer::Star => STAR_COLORS[usize::from(inputs.blink_phase & 0x03)],
        Layer::Text => Color::WHITE,
        // String lights alternate every 8 columns
        Layer::Light if word_bit(inputs.x, 3) => Color::RED,
        Layer::Light => Color::BLUE,
        Layer::Tree => Color::GREEN,
        Layer::Trunk => Color::BROWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_flags(flags: ShapeFlags) -> PixelInputs {
        PixelInputs {
            flags,
            active: true,
            ..PixelInputs::default()
        }
    }

    #[test]
    fn test_inactive_is_black() {
        let inputs = PixelInputs {
            flags: ShapeFlags {
                is_tree_body: true,
                is_trunk: true,
                is_star: true,
                is_light_stripe: true,
            },
            font_bit: true,
            blink_phase: 2,
            active: false,
            x: 8,
        };
        assert_eq!(compose(&inputs), Color::BLACK);
        assert_eq!(layer(&inputs), Layer::Blank);
    }

    #[test]
    fn test_star_palette() {
        let mut inputs = with_flags(ShapeFlags {
            is_star: true,
            ..ShapeFlags::default()
        });
        let expected = [Color::DARK_RED, Color::RED, Color::YELLOW, Color::ORANGE];
        for (phase, color) in expected.iter().enumerate() {
            inputs.blink_phase = phase as u8;
            assert_eq!(compose(&inputs), *color);
        }
    }

    #[test]
    fn test_star_beats_text() {
        let mut inputs = with_flags(ShapeFlags {
            is_star: true,
            is_tree_body: true,
            ..ShapeFlags::default()
        });
        inputs.font_bit = true;
        inputs.blink_phase = 1;
        assert_eq!(compose(&inputs), Color::RED);
    }

    #[test]
    fn test_text_beats_tree() {
        let mut inputs = with_flags(ShapeFlags {
            is_tree_body: true,
            is_light_stripe: true,
            ..ShapeFlags::default()
        });
        inputs.font_bit = true;
        assert_eq!(compose(&inputs), Color::WHITE);
    }

    #[test]
    fn test_tree_and_lights() {
        let mut inputs = with_flags(ShapeFlags {
            is_tree_body: true,
            ..ShapeFlags::default()
        });
        assert_eq!(compose(&inputs), Color::GREEN);

        inputs.flags.is_light_stripe = true;
        inputs.x = 8;
        assert_eq!(compose(&inputs), Color::RED);
        inputs.x = 15;
        assert_eq!(compose(&inputs), Color::RED);
        inputs.x = 16;
        assert_eq!(compose(&inputs), Color::BLUE);
    }

    #[test]
    fn test_layer_order() {
        let all = ShapeFlags {
            is_tree_body: true,
            is_trunk: true,
            is_star: true,
            is_light_stripe: true,
        };
        let mut inputs = with_flags(all);
        inputs.font_bit = true;
        assert_eq!(layer(&inputs), Layer::Star);

        inputs.flags.is_star = false;
        assert_eq!(layer(&inputs), Layer::Text);

        inputs.font_bit = false;
        assert_eq!(layer(&inputs), Layer::Light);

        inputs.flags.is_light_stripe = false;
        assert_eq!(layer(&inputs), Layer::Tree);

        inputs.flags.is_tree_body = false;
        assert_eq!(layer(&inputs), Layer::Trunk);

        inputs.flags.is_trunk = false;
        assert_eq!(layer(&inputs), Layer::Background);
    }

    #[test]
    fn test_tree_beats_trunk() {
        let inputs = with_flags(ShapeFlags {
            is_tree_body: true,
            is_trunk: true,
            ..ShapeFlags::default()
        });
        assert_eq!(compose(&inputs), Color::GREEN);
    }

    #[test]
    fn test_trunk_and_background() {
        let trunk = with_flags(ShapeFlags {
            is_trunk: true,
            is_light_stripe: true,
            ..ShapeFlags::default()
        });
        assert_eq!(compose(&trunk), Color::BROWN);

        // Stripe alone does not color the background
        let stripe = with_flags(ShapeFlags {
            is_light_stripe: true,
            ..ShapeFlags::default()
        });
        assert_eq!(compose(&stripe), Color::BLACK);
        assert_eq!(layer(&stripe), Layer::Background);
    }

    #[test]
    fn test_star_scenario() {
        let inputs = PixelInputs::sample(320, 90, 2, true);
        assert!(inputs.flags.is_star);
        assert_eq!(compose(&inputs), Color::new(3, 3, 0));
    }

    #[test]
    fn test_first_text_pixel_is_white() {
        let inputs = PixelInputs::sample(220, 475, 0, true);
        assert!(inputs.font_bit);
        assert_eq!(compose(&inputs), Color::WHITE);
    }

    #[test]
    fn test_to_argb() {
        assert_eq!(Color::BLACK.to_argb(), 0xFF00_0000);
        assert_eq!(Color::WHITE.to_argb(), 0xFFFF_FFFF);
        assert_eq!(Color::BROWN.to_argb(), 0xFFAA_5500);
    }

    #[test]
    fn test_new_masks_channels() {
        assert_eq!(Color::new(7, 4, 5), Color::new(3, 0, 1));
    }

    proptest! {
        #[test]
        fn inactive_always_black(x in 0u16..800, y in 0u16..525, phase in 0u8..4) {
            let inputs = PixelInputs::sample(x, y, phase, false);
            prop_assert_eq!(compose(&inputs), Color::BLACK);
        }

        #[test]
        fn compose_is_pure(x in 0u16..640, y in 0u16..480, phase in 0u8..4) {
            let a = PixelInputs::sample(x, y, phase, true);
            let b = PixelInputs::sample(x, y, phase, true);
            prop_assert_eq!(a, b);
            prop_assert_eq!(compose(&a), compose(&b));
        }

        #[test]
        fn channels_stay_two_bit(x in 0u16..640, y in 0u16..480, phase in 0u8..4) {
            let c = compose(&PixelInputs::sample(x, y, phase, true));
            prop_assert!(c.r <= 3 && c.g <= 3 && c.b <= 3);
        }
    }
}
