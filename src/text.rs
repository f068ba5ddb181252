//! Text Layout
//!
//! Places the two banner lines on the raster and resolves the font bit for a
//! beam position. Each character occupies a 20x16 cell: a 16x16 block holding
//! the glyph drawn at 2x, followed by a 4 pixel gap.

use crate::common::{within, Word, CENTER_X};
use crate::font::glyph;

/// Character cell width (glyph block + gap)
pub const CELL_WIDTH: Word = 20;
/// Character cell height
pub const CELL_HEIGHT: Word = 16;
/// Width of the glyph block inside a cell
pub const BLOCK_WIDTH: Word = 16;
/// Glyph pixel scale factor
pub const SCALE: Word = 2;
/// Vertical gap between lines
pub const LINE_GAP: Word = 5;
/// Top row of the first line
pub const FIRST_LINE_TOP: Word = 475;

/// One fixed line of banner text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLine {
    pub text: &'static str,
    /// Top row of the line band
    pub top: Word,
}

impl TextLine {
    /// Number of character cells
    pub fn len(&self) -> Word {
        self.text.len() as Word
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Line width in pixels
    pub fn width(&self) -> Word {
        self.len() * CELL_WIDTH
    }

    /// Leftmost column, centering the line on the raster
    pub fn left(&self) -> Word {
        CENTER_X - self.width() / 2
    }

    /// Whether (`x`, `y`) lies inside this line's band
    pub fn contains(&self, x: Word, y: Word) -> bool {
        within(y, self.top, self.top + CELL_HEIGHT)
            && within(x, self.left(), self.left() + self.width())
    }

    /// Character at cell `index`
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.text.as_bytes().get(index).map(|&b| b as char)
    }
}

/// The banner lines, top to bottom
pub const LINES: [TextLine; 2] = [
    TextLine {
        text: "MERRY XMAS",
        top: FIRST_LINE_TOP,
    },
    TextLine {
        text: "MALIGAYANG PASKO!",
        top: FIRST_LINE_TOP + CELL_HEIGHT + LINE_GAP,
    },
];

/// Position of a pixel inside a character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellHit {
    /// Index into `LINES`
    pub line: usize,
    /// Character index within the line
    pub char_index: usize,
    /// Column within the cell (0..20)
    pub block_x: Word,
    /// Row within the cell (0..16)
    pub block_y: Word,
}

impl CellHit {
    /// Whether the pixel falls in the gap after the glyph block
    pub fn in_gap(&self) -> bool {
        self.block_x >= BLOCK_WIDTH
    }

    /// Glyph column (0..8), `None` inside the gap
    pub fn char_x(&self) -> Option<usize> {
        (!self.in_gap()).then(|| (self.block_x / SCALE) as usize)
    }

    /// Glyph row (0..8)
    pub fn char_y(&self) -> usize {
        (self.block_y / SCALE) as usize
    }

    /// Character drawn in this cell
    pub fn character(&self) -> Option<char> {
        LINES.get(self.line)?.char_at(self.char_index)
    }
}

/// Resolve which character cell, if any, covers (`x`, `y`)
pub fn locate(x: Word, y: Word) -> Option<CellHit> {
    LINES
        .iter()
        .enumerate()
        .find(|(_, line)| line.contains(x, y))
        .map(|(index, line)| {
            let rel_x = x - line.left();
            let rel_y = y - line.top;
            CellHit {
                line: index,
                char_index: (rel_x / CELL_WIDTH) as usize,
                block_x: rel_x % CELL_WIDTH,
                block_y: rel_y,
            }
        })
}

/// Font bit for a beam position
pub fn font_bit(x: Word, y: Word) -> bool {
    let Some(hit) = locate(x, y) else {
        return false;
    };
    let Some(char_x) = hit.char_x() else {
        return false;
    };
    hit.character()
        .map(|ch| glyph(ch).pixel(char_x, hit.char_y()))
        .unwrap_or(false)
}
