//! Shape Classifier
//!
//! Pure geometric predicates over the beam position. Every flag is computed
//! independently; priority between overlapping shapes is the compositor's job.
//!
//! Geometry (all half-open unless noted):
//! - Tree body: rows 100..400, half-width `(y - 100) / 2`
//! - Trunk: rows 400..450, half-width 20
//! - Star: rows 86..115 (exclusive 85), half-width 10
//! - Light stripe: `y[3] ^ y[5]`

use crate::common::{distance_from_center, within, word_bit, Word};

/// Apex row of the tree
pub const TREE_TOP: Word = 100;
/// First row below the tree body
pub const TREE_BOTTOM: Word = 400;

/// First row below the trunk
pub const TRUNK_BOTTOM: Word = 450;
/// Trunk half-width
pub const TRUNK_HALF_WIDTH: Word = 20;

/// Star rows lie strictly between these two values
pub const STAR_WINDOW: (Word, Word) = (85, 115);
/// Star half-width
pub const STAR_HALF_WIDTH: Word = 10;

/// Per-pixel shape membership
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeFlags {
    pub is_tree_body: bool,
    pub is_trunk: bool,
    pub is_star: bool,
    pub is_light_stripe: bool,
}

/// Classify a beam position
pub fn classify(x: Word, y: Word) -> ShapeFlags {
    let rel_x = distance_from_center(x);

    ShapeFlags {
        is_tree_body: is_tree_body(rel_x, y),
        is_trunk: within(y, TREE_BOTTOM, TRUNK_BOTTOM) && rel_x < TRUNK_HALF_WIDTH,
        is_star: y > STAR_WINDOW.0 && y < STAR_WINDOW.1 && rel_x < STAR_HALF_WIDTH,
        is_light_stripe: word_bit(y, 3) ^ word_bit(y, 5),
    }
}

/// Triangle widening by one pixel every two rows below the apex
fn is_tree_body(rel_x: Word, y: Word) -> bool {
    within(y, TREE_TOP, TREE_BOTTOM) && rel_x < (y - TREE_TOP) / 2
}
