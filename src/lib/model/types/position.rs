//! Module implementing the `Position` type.

use std::fmt;


/// Anchor point of a text block on the canvas, in pixels.
///
/// This is the top-left corner of the block's bounding box.
/// Coordinates may be fractional and even negative
/// (when a block is wider than the canvas).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Position{x, y}
    }

    /// Return this position shifted by given whole-pixel offset.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Position::new(self.x + dx as f32, self.y + dy as f32)
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Position::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({:.1}, {:.1})", self.x, self.y)
    }
}
