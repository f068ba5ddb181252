//! Error types for the host shell
//!
//! The pixel pipeline itself cannot fail; these cover the window, image
//! export and command-line input.

use thiserror::Error;

use crate::common::Word;

#[derive(Debug, Error)]
pub enum Error {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("coordinate ({x}, {y}) is outside the 640x480 raster")]
    OutOfRaster { x: Word, y: Word },

    #[error("blink phase {0} is out of range (expected 0-3)")]
    InvalidPhase(u8),

    #[error("window scale {0} is out of range (expected 1-4)")]
    InvalidScale(u32),

    #[error("target frame rate must be at least 1 fps")]
    InvalidFps(u32),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an SDL failure
    pub fn sdl(err: impl ToString) -> Self {
        Error::Sdl(err.to_string())
    }
}
