//! Module defining the text measurement & painting capabilities.
//!
//! Fitting and layout only ever talk to these traits, so they can be exercised
//! with `HeuristicMeasurer` instead of a real font rasterizer.

use image::RgbaImage;

use crate::model::{Color, Position};


/// Something that knows how large a line of text is going to be.
pub trait TextMeasurer {
    /// Returns `(width, height)` in pixels of a single line of `text`
    /// rendered at given font size.
    fn measure(&self, text: &str, size: u32) -> (f32, f32);

    /// Height of a line of text at given font size,
    /// independent of the characters it contains.
    fn line_height(&self, size: u32) -> f32;

    /// Whether every character of the text can be rendered.
    fn has_glyphs(&self, _text: &str) -> bool {
        true
    }
}

/// Something that can also draw a line of text onto a canvas.
pub trait TextPainter: TextMeasurer {
    /// Draw a single line of text with its bounding box
    /// starting at `origin` (top-left corner).
    ///
    /// Parts of the text outside of the canvas are clipped.
    fn paint_line(&self, canvas: &mut RgbaImage,
                  text: &str, origin: Position, size: u32, color: Color);
}


/// Deterministic measurer that treats every character as a box
/// of the same width (a fraction of the font size) and height (the font size).
///
/// Painting fills those boxes with solid color.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicMeasurer {
    char_width: f32,
}

impl HeuristicMeasurer {
    /// Create a measurer where a character is `char_width` ems wide.
    #[inline]
    pub fn new(char_width: f32) -> Self {
        HeuristicMeasurer{char_width}
    }
}

impl Default for HeuristicMeasurer {
    /// Use average glyph width of ~0.6em.
    fn default() -> Self {
        HeuristicMeasurer::new(0.6)
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, text: &str, size: u32) -> (f32, f32) {
        let width = self.char_width * size as f32 * text.chars().count() as f32;
        (width, size as f32)
    }

    fn line_height(&self, size: u32) -> f32 {
        size as f32
    }
}

impl TextPainter for HeuristicMeasurer {
    fn paint_line(&self, canvas: &mut RgbaImage,
                  text: &str, origin: Position, size: u32, color: Color) {
        let (width, height) = self.measure(text, size);
        let min_x = origin.x.round().max(0.0) as u32;
        let min_y = origin.y.round().max(0.0) as u32;
        let max_x = ((origin.x + width).round().max(0.0) as u32).min(canvas.width());
        let max_y = ((origin.y + height).round().max(0.0) as u32).min(canvas.height());
        for y in min_y..max_y {
            for x in min_x..max_x {
                canvas.put_pixel(x, y, color.to_rgba(0xff));
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use image::RgbaImage;
    use crate::model::{Color, Position};
    use super::{HeuristicMeasurer, TextMeasurer, TextPainter};

    #[test]
    fn width_grows_with_length_and_size() {
        let measurer = HeuristicMeasurer::new(0.5);
        assert_eq!((20.0, 10.0), measurer.measure("abcd", 10));
        assert_eq!((40.0, 20.0), measurer.measure("abcd", 20));
        assert_eq!((0.0, 20.0), measurer.measure("", 20));
    }

    #[test]
    fn paint_is_clipped_to_canvas() {
        let measurer = HeuristicMeasurer::new(1.0);
        let mut canvas = RgbaImage::new(10, 10);
        measurer.paint_line(&mut canvas, "abc", Position::new(-2.0, 5.0), 4, Color::white());

        assert_eq!(Color::white().to_rgba(0xff), *canvas.get_pixel(0, 5));
        assert_eq!(Color::white().to_rgba(0xff), *canvas.get_pixel(9, 8));
        assert_eq!(0, canvas.get_pixel(0, 4)[3]);
        assert_eq!(0, canvas.get_pixel(0, 9)[3]);
    }
}
