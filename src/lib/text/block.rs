//! Module implementing multi-line blocks of text and their outlined drawing.

use std::fmt;

use image::RgbaImage;

use crate::model::{Color, Position};
use crate::model::constants::{LINE_SPACING, OUTLINE_COLOR, OUTLINE_DIVISOR, TEXT_COLOR};
use super::measure::{TextMeasurer, TextPainter};


/// Block of text lines measured at a particular font size.
///
/// Lines are drawn one below another, each centered horizontally
/// within the width of the widest one.
pub struct TextBlock<'t> {
    lines: Vec<(&'t str, f32)>,
    font_size: u32,
    width: f32,
    line_height: f32,
}

impl<'t> TextBlock<'t> {
    /// Measure the (possibly multi-line) text at given font size.
    pub fn measure<M>(measurer: &M, text: &'t str, font_size: u32) -> Self
        where M: TextMeasurer + ?Sized
    {
        let lines: Vec<_> = text.split('\n')
            .map(|line| (line, measurer.measure(line, font_size).0))
            .collect();
        let width = lines.iter().map(|&(_, w)| w).fold(0.0, f32::max);
        let line_height = measurer.line_height(font_size);
        TextBlock{lines, font_size, width, line_height}
    }
}

impl<'t> TextBlock<'t> {
    #[inline]
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Width of the widest line.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Total height of the block, including the spacing between lines.
    #[inline]
    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_spacing() - LINE_SPACING
    }

    /// `(width, height)` of the block.
    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width(), self.height())
    }

    /// Vertical distance between the tops of consecutive lines.
    #[inline]
    fn line_spacing(&self) -> f32 {
        self.line_height + LINE_SPACING
    }
}

impl<'t> TextBlock<'t> {
    /// Draw the block in a single color with its top-left corner at `position`.
    pub fn draw<P>(&self, painter: &P, canvas: &mut RgbaImage, position: Position, color: Color)
        where P: TextPainter + ?Sized
    {
        for (i, &(line, line_width)) in self.lines.iter().enumerate() {
            let origin = Position::new(
                position.x + (self.width - line_width) / 2.0,
                position.y + i as f32 * self.line_spacing());
            painter.paint_line(canvas, line, origin, self.font_size, color);
        }
    }
}

impl<'t> fmt::Debug for TextBlock<'t> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("TextBlock")
            .field("lines", &self.lines.iter().map(|&(l, _)| l).collect::<Vec<_>>())
            .field("font_size", &self.font_size)
            .field("size", &self.size())
            .finish()
    }
}


/// Thickness of the outline drawn around text of given font size.
#[inline]
pub fn outline_range(font_size: u32) -> i32 {
    (font_size / OUTLINE_DIVISOR).max(1) as i32
}

/// Draw white text with a black outline.
///
/// The outline is made by drawing the text in black
/// at every offset within `outline_range` pixels (in both directions),
/// and then the white text goes on top at the original position.
pub fn draw_outlined<P>(painter: &P, canvas: &mut RgbaImage,
                        position: Position, text: &str, font_size: u32)
    where P: TextPainter + ?Sized
{
    let block = TextBlock::measure(painter, text, font_size);
    let range = outline_range(font_size);
    trace!("Drawing {:?} at {} with outline of {}px", block, position, range);

    for dx in -range..=range {
        for dy in -range..=range {
            block.draw(painter, canvas, position.offset(dx, dy), OUTLINE_COLOR);
        }
    }
    block.draw(painter, canvas, position, TEXT_COLOR);
}
