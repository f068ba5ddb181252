//! Christmas VGA Test Pattern Library
//!
//! This library computes, one pixel clock tick at a time, the color of a
//! fixed 640x480 test pattern: a blinking star on a lit tree with a trunk and
//! two lines of bitmap text, packed into a 2-bit-per-channel pin word.

pub mod common;
pub mod clock;
pub mod shapes;
pub mod font;
pub mod text;
pub mod compositor;
pub mod output;
pub mod timing;
pub mod pattern;
pub mod config;
pub mod error;
pub mod ui;
