//! Defines the output of a rendering operation.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::model::{Position, Side};
use crate::text::FitResult;


/// How a single caption ended up laid out on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionLayout {
    /// Which caption this is.
    pub side: Side,
    /// Result of fitting the caption on its own.
    pub fit: FitResult,
    /// Font size the caption was actually rendered with.
    ///
    /// This differs from `fit.font_size` only if font sizes were matched.
    pub font_size: u32,
    /// Top-left corner of the caption's text block.
    pub position: Position,
    /// `(width, height)` of the caption's text block.
    pub size: (f32, f32),
}

impl CaptionLayout {
    /// The line-broken text of the caption.
    #[inline]
    pub fn text(&self) -> String {
        self.fit.text()
    }
}


/// Output of the rendering process.
///
/// By the time it's returned, the image has already been written to `path()`.
#[derive(Clone, Debug)]
#[must_use = "unused render output which must be used"]
pub struct RenderOutput {
    path: PathBuf,
    format: ImageFormat,
    width: u32,
    height: u32,
    byte_count: usize,
    top: CaptionLayout,
    bottom: CaptionLayout,
}

impl RenderOutput {
    #[inline]
    pub(super) fn new(path: PathBuf, format: ImageFormat, (width, height): (u32, u32),
                      byte_count: usize, top: CaptionLayout, bottom: CaptionLayout) -> Self {
        RenderOutput{path, format, width, height, byte_count, top, bottom}
    }
}

impl RenderOutput {
    /// Path the image has been written to.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Image format of the output.
    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// `(width, height)` of the rendered image.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Size of the encoded image, in bytes.
    #[inline]
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// Layout of the caption at given side.
    #[inline]
    pub fn caption(&self, side: Side) -> &CaptionLayout {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
        }
    }
}
