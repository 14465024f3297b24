//! Module implementing the builder for `MemeRenderer`.

use std::path::Path;

use thiserror::Error;

use crate::resources::{FontError, Typeface};
use crate::text::TextPainter;
use super::config::Config;
use super::MemeRenderer;


/// Builder for `MemeRenderer`.
///
/// Errors in the setup are collected and reported by `build`.
#[derive(Debug)]
#[must_use = "unused builder which must be used"]
pub struct Builder<P = Typeface>
    where P: TextPainter
{
    errors: Vec<Error>,
    painter: Option<P>,
    jpeg_quality: Option<u8>,
    max_canvas_size: Option<u32>,
}

impl<P: TextPainter> Builder<P> {
    /// Create a new `Builder`.
    #[inline]
    pub fn new() -> Self {
        Builder::default()
    }
}
impl<P: TextPainter> Default for Builder<P> {
    fn default() -> Self {
        Builder{
            errors: vec![],
            painter: None,
            jpeg_quality: None,
            max_canvas_size: None,
        }
    }
}

// Setters.
impl Builder<Typeface> {
    /// Load the typeface that the captions will be rendered with from given file.
    pub fn font_file<F: AsRef<Path>>(self, path: F) -> Self {
        match Typeface::from_file(path) {
            Ok(typeface) => self.typeface(typeface),
            Err(e) => self.err(Error::Font(e)),
        }
    }

    /// Set the typeface that the captions will be rendered with.
    #[inline]
    pub fn typeface(self, typeface: Typeface) -> Self {
        self.painter(typeface)
    }
}
impl<P: TextPainter> Builder<P> {
    /// Set a custom painter for caption text.
    #[inline]
    pub fn painter(mut self, painter: P) -> Self {
        self.painter = Some(painter); self
    }

    /// Set the quality percentage of JPEG images generated by the `MemeRenderer`.
    #[inline]
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality); self
    }

    /// Set the limit on width & height of the rendered images.
    #[inline]
    pub fn max_canvas_size(mut self, size: u32) -> Self {
        self.max_canvas_size = Some(size); self
    }
}

// Validation & building.
impl<P: TextPainter> Builder<P> {
    /// Build the `MemeRenderer`.
    pub fn build(mut self) -> Result<MemeRenderer<P>, Error> {
        if let Some(error) = self.errors.drain(..).next() {
            return Err(error);
        }
        let config = self.build_config()?;
        let painter = self.painter.ok_or(Error::NoTypeface)?;
        Ok(MemeRenderer::from_inner(super::Inner{config, painter}))
    }

    #[doc(hidden)]
    fn build_config(&self) -> Result<Config, Error> {
        let mut config = Config::default();
        if let Some(quality) = self.jpeg_quality {
            if quality == 0 || quality > 100 {
                return Err(Error::JpegQuality(quality));
            }
            config.jpeg_quality = quality;
        }
        if let Some(size) = self.max_canvas_size {
            if size == 0 {
                return Err(Error::CanvasSize);
            }
            config.max_canvas_size = size;
        }
        Ok(config)
    }

    #[doc(hidden)]
    fn err(mut self, error: Error) -> Self {
        self.errors.push(error); self
    }
}


/// Error that resulted from misconfiguration of the `MemeRenderer` via its `Builder`.
#[derive(Debug, Error)]
pub enum Error {
    /// No typeface (or other text painter) set up.
    #[error("no typeface configured")]
    NoTypeface,
    /// Typeface couldn't be loaded.
    #[error("cannot load typeface: {0}")]
    Font(#[source] FontError),
    /// JPEG quality is not a valid percentage.
    #[error("invalid JPEG quality {0}%, expected between 1 and 100")]
    JpegQuality(u8),
    /// Canvas size limit is zero.
    #[error("maximum canvas size must be positive")]
    CanvasSize,
}
