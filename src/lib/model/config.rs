//! Module implementing the per-render layout constraints.

use super::constants::{MAX_CANVAS_SIZE, MAX_FONT_SIZE_DIVISOR, MIN_FONT_SIZE_DIVISOR,
                       TEXT_HORIZONTAL_PADDING};


/// Constraints governing the layout of captions on a single canvas.
///
/// A render starts with just the canvas bound and the `match_font_size` flag
/// (`RenderConfig::new`), which determine the canvas size (`canvas_size`).
/// The remaining constraints are then derived from that size (`for_canvas`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Limit on either dimension of the canvas.
    pub max_canvas_size: u32,
    /// Largest font size any caption may use.
    pub max_font_size: u32,
    /// Smallest font size a caption may use while still fitting in one line.
    pub min_font_size: u32,
    /// Maximum pixel width of any single line of text.
    pub max_text_width: u32,
    /// Whether top & bottom captions should be rendered with the same font size.
    pub match_font_size: bool,
}

impl RenderConfig {
    #[inline]
    pub fn new(max_canvas_size: u32, match_font_size: bool) -> Self {
        RenderConfig{
            max_canvas_size,
            max_font_size: 0,
            min_font_size: 0,
            max_text_width: 0,
            match_font_size,
        }
    }

    /// Dimensions of the canvas for a background image of given size:
    /// scaled down to fit within `max_canvas_size`, preserving aspect ratio.
    ///
    /// Images that already fit are never enlarged.
    pub fn canvas_size(&self, width: u32, height: u32) -> (u32, u32) {
        let max_size = self.max_canvas_size;
        if width <= max_size && height <= max_size {
            return (width, height);
        }
        let ratio = (max_size as f64 / width as f64).min(max_size as f64 / height as f64);
        let scale = |dim: u32| ((dim as f64 * ratio).round() as u32).clamp(1, max_size);
        (scale(width), scale(height))
    }

    /// Derive the text constraints for a canvas of given (already bounded) dimensions.
    pub fn for_canvas(self, width: u32, height: u32) -> Self {
        RenderConfig{
            max_font_size: height / MAX_FONT_SIZE_DIVISOR,
            min_font_size: height / MIN_FONT_SIZE_DIVISOR,
            max_text_width: width.saturating_sub(TEXT_HORIZONTAL_PADDING),
            ..self
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::new(MAX_CANVAS_SIZE, false)
    }
}


#[cfg(test)]
mod tests {
    use super::RenderConfig;

    #[test]
    fn square_canvas() {
        let config = RenderConfig::default().for_canvas(500, 500);
        assert_eq!(500, config.max_canvas_size);
        assert_eq!(100, config.max_font_size);
        assert_eq!(41, config.min_font_size);
        assert_eq!(480, config.max_text_width);
        assert!(!config.match_font_size);
    }

    #[test]
    fn wide_canvas() {
        let config = RenderConfig::new(500, true).for_canvas(500, 281);
        assert_eq!(56, config.max_font_size);
        assert_eq!(23, config.min_font_size);
        assert_eq!(480, config.max_text_width);
        assert!(config.match_font_size);
    }

    #[test]
    fn tiny_canvas() {
        let config = RenderConfig::default().for_canvas(8, 4);
        assert_eq!(0, config.max_font_size);
        assert_eq!(0, config.min_font_size);
        assert_eq!(0, config.max_text_width);
    }

    #[test]
    fn canvas_size_shrinks() {
        let config = RenderConfig::default();
        assert_eq!((500, 500), config.canvas_size(1000, 1000));
        assert_eq!((500, 250), config.canvas_size(1000, 500));
        assert_eq!((500, 281), config.canvas_size(1600, 900));
        assert_eq!((25, 500), config.canvas_size(100, 2000));
        assert_eq!((1, 500), config.canvas_size(3, 10000));
    }

    #[test]
    fn canvas_size_never_enlarges() {
        let config = RenderConfig::default();
        assert_eq!((500, 500), config.canvas_size(500, 500));
        assert_eq!((400, 300), config.canvas_size(400, 300));
        assert_eq!((1, 1), config.canvas_size(1, 1));
    }

    #[test]
    fn canvas_size_follows_bound() {
        let config = RenderConfig::new(128, false);
        assert_eq!((128, 64), config.canvas_size(512, 256));
        assert_eq!((100, 50), config.canvas_size(100, 50));
    }
}
