//! Module with renderer configuration.

use crate::model::constants::{DEFAULT_JPEG_QUALITY, MAX_CANVAS_SIZE};


/// Structure holding configuration for the `MemeRenderer`.
///
/// This is shared with `RenderTask`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Quality of the generated JPEG images (in %).
    pub jpeg_quality: u8,
    /// Limit on either dimension of the canvas.
    pub max_canvas_size: u32,
}

impl Default for Config {
    /// Initialize Config with default values.
    fn default() -> Self {
        Config {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            max_canvas_size: MAX_CANVAS_SIZE,
        }
    }
}


/// Options of a single render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render top & bottom captions with the same font size
    /// (the smaller of the two that were fitted).
    pub match_font_size: bool,
}

impl RenderOptions {
    #[inline]
    pub fn match_font_size(mut self, value: bool) -> Self {
        self.match_font_size = value; self
    }
}
