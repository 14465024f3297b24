//! Module implementing text measurement & rendering with an actual font.

use image::{Pixel, RgbaImage};
use rusttype::{point, Scale};

use crate::model::{Color, Position};
use crate::resources::Typeface;
use super::measure::{TextMeasurer, TextPainter};


impl TextMeasurer for Typeface {
    fn measure(&self, text: &str, size: u32) -> (f32, f32) {
        // Width is the final X position of the "caret"
        // after laying out all the glyphs, starting from X=0.
        let scale = Scale::uniform(size as f32);
        let width = self.layout(text, scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        (width, self.line_height(size))
    }

    fn line_height(&self, size: u32) -> f32 {
        let v_metrics = self.v_metrics(Scale::uniform(size as f32));
        v_metrics.ascent - v_metrics.descent  // descent is usually negative
    }

    fn has_glyphs(&self, text: &str) -> bool {
        self.check(text)
    }
}

impl TextPainter for Typeface {
    fn paint_line(&self, canvas: &mut RgbaImage,
                  text: &str, origin: Position, size: u32, color: Color) {
        let scale = Scale::uniform(size as f32);
        let v_metrics = self.v_metrics(scale);

        let (width, height) = (canvas.width() as i32, canvas.height() as i32);
        let start = point(origin.x, origin.y + v_metrics.ascent);
        for glyph in self.layout(text, scale, start) {
            if let Some(bbox) = glyph.pixel_bounding_box() {
                glyph.draw(|x, y, v| {
                    let x = bbox.min.x + x as i32;
                    let y = bbox.min.y + y as i32;
                    if x >= 0 && x < width && y >= 0 && y < height {
                        let alpha = (v * 255.0) as u8;
                        canvas.get_pixel_mut(x as u32, y as u32).blend(&color.to_rgba(alpha));
                    }
                });
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use spectral::prelude::*;
    use crate::model::{Color, Position};
    use crate::resources::{bundled_font_path, Typeface};
    use crate::text::fit;
    use crate::text::measure::{TextMeasurer, TextPainter};

    fn typeface() -> Typeface {
        Typeface::from_file(bundled_font_path()).unwrap()
    }

    #[test]
    fn width_grows_with_size() {
        let typeface = typeface();
        let (small, _) = typeface.measure("TOP TEXT", 20);
        let (large, _) = typeface.measure("TOP TEXT", 40);
        assert_that!(small).is_greater_than(0.0f32);
        assert_that!(large).is_greater_than(small);
    }

    #[test]
    fn width_grows_with_text() {
        let typeface = typeface();
        let (short, _) = typeface.measure("TOP", 30);
        let (long, _) = typeface.measure("TOP TEXT", 30);
        assert_that!(long).is_greater_than(short);
        assert_eq!(0.0, typeface.measure("", 30).0);
    }

    #[test]
    fn line_height_is_independent_of_text() {
        let typeface = typeface();
        assert_eq!(typeface.measure("a", 30).1, typeface.measure("Wg", 30).1);
        assert_that!(typeface.line_height(30)).is_greater_than(0.0f32);
    }

    #[test]
    fn paint_leaves_ink() {
        let typeface = typeface();
        let mut canvas = RgbaImage::from_pixel(120, 50, Rgba([0, 0, 0, 0xff]));
        typeface.paint_line(&mut canvas, "TOP", Position::new(5.0, 5.0), 30, Color::white());
        assert!(canvas.pixels().any(|p| p[0] > 0x80));
    }

    #[test]
    fn paint_outside_is_clipped() {
        let typeface = typeface();
        let background = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 0xff]));

        let mut canvas = background.clone();
        typeface.paint_line(&mut canvas, "TOP TEXT", Position::new(500.0, 500.0), 40,
                            Color::white());
        typeface.paint_line(&mut canvas, "TOP TEXT", Position::new(-500.0, -500.0), 40,
                            Color::white());
        assert_eq!(background, canvas);

        // Partially visible text still leaves ink within the canvas.
        typeface.paint_line(&mut canvas, "TOP TEXT", Position::new(-5.0, -5.0), 40,
                            Color::white());
        assert!(canvas.pixels().any(|p| p[0] > 0x80));
    }

    #[test]
    fn fitted_lines_fit_canvas_width() {
        let typeface = typeface();
        let captions = [
            "TOP TEXT",
            "ONE DOES NOT SIMPLY WRITE A MEME GENERATOR",
            "Supercalifragilisticexpialidocious-and-then-some",
            "WHY NOT ZOIDBERG?",
            "",
        ];
        for caption in captions.iter() {
            let result = fit(&typeface, caption, 100, 41, 480);
            assert_that!(result.font_size).is_greater_than_or_equal_to(1u32);
            assert_that!(result.line_count()).is_less_than_or_equal_to(2usize);
            for line in &result.lines {
                let (width, _) = typeface.measure(line, result.font_size);
                assert!(width <= 480.0 || result.font_size == 1,
                    "line {:?} of {:?} is {}px wide at size {}",
                    line, caption, width, result.font_size);
            }
        }
    }
}
