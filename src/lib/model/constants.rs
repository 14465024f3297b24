//! Module defining constants relevant to the data model.

use super::types::Color;


/// Maximum width and height of the canvas.
/// Larger backgrounds are scaled down to fit this square.
pub const MAX_CANVAS_SIZE: u32 = 500;

/// Default quality of the generated JPEG images (in %).
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Color of the caption text.
pub const TEXT_COLOR: Color = Color(0xff, 0xff, 0xff);
/// Color of the text outline.
/// This should be the inversion of TEXT_COLOR.
pub const OUTLINE_COLOR: Color = Color(0x0, 0x0, 0x0);

/// Canvas height is divided by this to obtain the largest font size.
pub const MAX_FONT_SIZE_DIVISOR: u32 = 5;
/// Canvas height is divided by this to obtain the smallest font size
/// that is still acceptable for a one-line caption.
pub const MIN_FONT_SIZE_DIVISOR: u32 = 12;
/// Horizontal room (in total, for both sides) left between text and canvas edges.
pub const TEXT_HORIZONTAL_PADDING: u32 = 20;

/// Blank space between lines of a multi-line caption, in pixels.
pub const LINE_SPACING: f32 = 4.0;

/// Font size is divided by this to obtain the outline thickness.
pub const OUTLINE_DIVISOR: u32 = 25;

/// Block height is multiplied by this to find how far above the bottom edge
/// the bottom caption starts.
pub const BOTTOM_OFFSET_FACTOR: f32 = 7.0 / 6.0;
