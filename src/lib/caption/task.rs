//! Module implementing the actual rendering task.
//! Most if not all captioning logic lives here.

use std::collections::HashMap;
use std::path::Path;

use image::{ColorType, DynamicImage, GenericImageView, ImageEncoder, ImageFormat, RgbaImage};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;

use crate::model::{Position, RenderConfig, Side};
use crate::model::constants::BOTTOM_OFFSET_FACTOR;
use crate::text::{self, FitResult, TextBlock, TextPainter};
use crate::util::fs::write_atomic;
use super::background::Background;
use super::error::RenderError;
use super::output::{CaptionLayout, RenderOutput};
use super::renderer::{Inner, RenderOptions};


/// Image format used when the destination doesn't say otherwise.
pub const DEFAULT_OUTPUT_FORMAT: ImageFormat = ImageFormat::Jpeg;

lazy_static! {
    /// Map of destination file extensions to the image formats they're written in.
    pub static ref OUTPUT_FORMAT_EXTENSIONS: HashMap<&'static str, ImageFormat> = hashmap!{
        "jpeg" => ImageFormat::Jpeg,
        "jpg" => ImageFormat::Jpeg,
        "png" => ImageFormat::Png,
    };
}


/// Represents a single rendering task and contains all the relevant logic.
///
/// The task is synchronous and owns the canvas for its whole duration,
/// so separate tasks can run in parallel without any coordination.
pub(super) struct RenderTask<'r, P: TextPainter> {
    top: &'r str,
    bottom: &'r str,
    options: RenderOptions,
    renderer: &'r Inner<P>,
}

impl<'r, P: TextPainter> RenderTask<'r, P> {
    #[inline]
    pub fn new(top: &'r str, bottom: &'r str,
               options: RenderOptions, renderer: &'r Inner<P>) -> Self {
        RenderTask{top, bottom, options, renderer}
    }
}

impl<'r, P: TextPainter> RenderTask<'r, P> {
    /// Perform the rendering task.
    pub fn perform(self, background: Background,
                   destination: &Path) -> Result<RenderOutput, RenderError> {
        debug!("Rendering top={:?} bottom={:?} on {:?}", self.top, self.bottom, background);

        let config = RenderConfig::new(
            self.renderer.config.max_canvas_size, self.options.match_font_size);
        let img = resize_background(background.load()?, &config);
        let mut canvas = img.to_rgba8();
        let (width, height) = canvas.dimensions();

        let config = config.for_canvas(width, height);
        trace!("Layout constraints: {:?}", config);

        let painter = &self.renderer.painter;
        let top_fit = self.fit(self.top, &config);
        let bottom_fit = self.fit(self.bottom, &config);
        let (top_size, bottom_size) = resolve_font_sizes(&top_fit, &bottom_fit, &config);

        let top = {
            let block = TextBlock::measure(painter, &top_fit.text(), top_size).size();
            let position = top_position(width, block);
            CaptionLayout{side: Side::Top, fit: top_fit, font_size: top_size, position, size: block}
        };
        let bottom = {
            let block = TextBlock::measure(painter, &bottom_fit.text(), bottom_size).size();
            let position = bottom_position(width, height, block);
            CaptionLayout{side: Side::Bottom, fit: bottom_fit, font_size: bottom_size, position, size: block}
        };

        self.draw_caption(&mut canvas, &top);
        self.draw_caption(&mut canvas, &bottom);

        let format = output_format(destination);
        let bytes = self.encode_result(canvas, format)?;

        info!("generating: {}", destination.display());
        write_atomic(destination, &bytes).map_err(|e| {
            error!("Failed to write image to {}: {}", destination.display(), e);
            RenderError::Write{path: destination.to_owned(), source: e}
        })?;

        Ok(RenderOutput::new(
            destination.to_owned(), format, (width, height), bytes.len(), top, bottom))
    }

    /// Fit a single caption within the canvas.
    fn fit(&self, caption: &str, config: &RenderConfig) -> FitResult {
        let painter = &self.renderer.painter;
        if !painter.has_glyphs(caption) {
            debug!("Some characters of caption {:?} will not be rendered", caption);
        }
        text::fit(painter, caption,
                  config.max_font_size, config.min_font_size, config.max_text_width)
    }

    /// Draw a single caption, outline & all.
    fn draw_caption(&self, canvas: &mut RgbaImage, layout: &CaptionLayout) {
        if layout.fit.lines.iter().all(|l| l.is_empty()) {
            debug!("Empty {} caption, skipping.", layout.side);
            return;
        }
        debug!("Rendering {} text {:?} at {} with font size {}",
            layout.side, layout.text(), layout.position, layout.font_size);
        text::draw_outlined(&self.renderer.painter, canvas,
                            layout.position, &layout.text(), layout.font_size);
    }

    /// Encode final result as bytes of the appropriate image format.
    fn encode_result(&self, canvas: RgbaImage,
                     format: ImageFormat) -> Result<Vec<u8>, RenderError> {
        let (width, height) = canvas.dimensions();
        debug!("Encoding final image as {:?}...", format);

        let mut result = vec![];
        match format {
            ImageFormat::Png => {
                trace!("Writing PNG image");
                PngEncoder::new(&mut result)
                    .write_image(canvas.as_raw(), width, height, ColorType::Rgba8)
                    .map_err(RenderError::Encode)?;
            }
            _ => {
                let quality = self.renderer.config.jpeg_quality;
                trace!("Writing JPEG with quality {}", quality);
                let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();
                JpegEncoder::new_with_quality(&mut result, quality)
                    .encode(rgb.as_raw(), width, height, ColorType::Rgb8)
                    .map_err(RenderError::Encode)?;
            }
        }
        Ok(result)
    }
}


/// Resize the background image so that it fits within the canvas size limit.
fn resize_background(img: DynamicImage, config: &RenderConfig) -> DynamicImage {
    let (orig_width, orig_height) = img.dimensions();
    let (width, height) = config.canvas_size(orig_width, orig_height);

    if (width, height) != (orig_width, orig_height) {
        debug!("Resizing background image from {}x{} to {}x{}",
            orig_width, orig_height, width, height);
        img.resize_exact(width, height, FilterType::Lanczos3)
    } else {
        debug!("Using original background image size of {}x{}", orig_width, orig_height);
        img
    }
}

/// Font sizes that the top & bottom captions should be rendered with.
pub(super) fn resolve_font_sizes(top: &FitResult, bottom: &FitResult,
                                 config: &RenderConfig) -> (u32, u32) {
    if config.match_font_size {
        let size = top.font_size.min(bottom.font_size);
        trace!("Matching font sizes of both captions at {}", size);
        (size, size)
    } else {
        (top.font_size, bottom.font_size)
    }
}

/// Position of the top caption: centered horizontally, at the top edge.
pub(super) fn top_position(canvas_width: u32, (block_width, _): (f32, f32)) -> Position {
    Position::new(canvas_width as f32 / 2.0 - block_width / 2.0, 0.0)
}

/// Position of the bottom caption: centered horizontally,
/// with some extra margin below it.
pub(super) fn bottom_position(canvas_width: u32, canvas_height: u32,
                              (block_width, block_height): (f32, f32)) -> Position {
    Position::new(canvas_width as f32 / 2.0 - block_width / 2.0,
                  canvas_height as f32 - block_height * BOTTOM_OFFSET_FACTOR)
}

/// Image format for the file at given path, based on its extension.
///
/// Unsupported extensions get the default format, with a warning.
pub(super) fn output_format(path: &Path) -> ImageFormat {
    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().trim().to_lowercase(),
        None => return DEFAULT_OUTPUT_FORMAT,
    };
    match OUTPUT_FORMAT_EXTENSIONS.get(ext.as_str()) {
        Some(&format) => format,
        None => {
            warn!("Unsupported output extension `.{}` of {}, writing it as {:?} anyway",
                ext, path.display(), DEFAULT_OUTPUT_FORMAT);
            DEFAULT_OUTPUT_FORMAT
        }
    }
}


#[cfg(test)]
mod tests {
    use std::path::Path;
    use image::ImageFormat;
    use crate::model::{Position, RenderConfig};
    use crate::text::FitResult;
    use super::{bottom_position, output_format, resolve_font_sizes, top_position};

    #[test]
    fn font_sizes_matched_only_if_asked() {
        let top = FitResult{font_size: 100, lines: vec!["WHY".into()]};
        let bottom = FitResult{font_size: 37, lines: vec!["NOT".into(), "ZOIDBERG".into()]};

        let config = RenderConfig::new(500, false).for_canvas(500, 500);
        assert_eq!((100, 37), resolve_font_sizes(&top, &bottom, &config));
        let config = RenderConfig::new(500, true).for_canvas(500, 500);
        assert_eq!((37, 37), resolve_font_sizes(&top, &bottom, &config));
    }

    #[test]
    fn top_caption_centered_at_top() {
        assert_eq!(Position::new(76.0, 0.0), top_position(500, (348.0, 87.0)));
        // Blocks wider than the canvas stick out on both sides.
        assert_eq!(Position::new(-10.0, 0.0), top_position(100, (120.0, 10.0)));
    }

    #[test]
    fn bottom_caption_above_bottom_edge() {
        let position = bottom_position(500, 500, (300.0, 120.0));
        assert_eq!(100.0, position.x);
        assert!((position.y - 360.0).abs() < 1e-3);
    }

    #[test]
    fn output_format_by_extension() {
        assert_eq!(ImageFormat::Jpeg, output_format(Path::new("out/meme.jpg")));
        assert_eq!(ImageFormat::Jpeg, output_format(Path::new("meme.JPEG")));
        assert_eq!(ImageFormat::Png, output_format(Path::new("meme.png")));
        assert_eq!(ImageFormat::Jpeg, output_format(Path::new("meme")));
        assert_eq!(ImageFormat::Jpeg, output_format(Path::new("meme.bmp")));
        assert_eq!(ImageFormat::Jpeg, output_format(Path::new("meme.gif")));
        assert_eq!(ImageFormat::Png, output_format(Path::new("meme.Png")));
    }
}
