//! Module which defines the image macro renderer.

mod builder;
mod config;

pub use self::builder::{Builder, Error as BuildError};
pub use self::config::{Config, RenderOptions};


use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::resources::{FontError, Typeface};
use crate::text::TextPainter;
use super::background::Background;
use super::error::RenderError;
use super::output::RenderOutput;
use super::task::RenderTask;


/// Renderer of two-line image macros.
///
/// The renderer is thread-safe (`Sync`), so the same one can be used
/// to render many image macros in parallel, as long as they go to different files.
///
/// *Note*: `MemeRenderer` implements `Clone`
/// by merely cloning a shared reference to the underlying object.
pub struct MemeRenderer<P = Typeface>
    where P: TextPainter
{
    inner: Arc<Inner<P>>,
}

/// Shared state of the renderer that render tasks have access to.
#[derive(Debug)]
pub(super) struct Inner<P: TextPainter> {
    pub config: Config,
    pub painter: P,
}

impl<P: TextPainter> MemeRenderer<P> {
    #[inline]
    fn from_inner(inner: Inner<P>) -> Self {
        MemeRenderer{inner: Arc::new(inner)}
    }
}

impl<P: TextPainter> Clone for MemeRenderer<P> {
    fn clone(&self) -> Self {
        MemeRenderer{inner: self.inner.clone()}
    }
}

impl<P: TextPainter + fmt::Debug> fmt::Debug for MemeRenderer<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("MemeRenderer")
            .field("config", &self.inner.config)
            .field("painter", &self.inner.painter)
            .finish()
    }
}

// Constructors.
impl MemeRenderer<Typeface> {
    /// Create a renderer which captions images with given typeface
    /// and the default configuration.
    ///
    /// For other ways of creating `MemeRenderer`, see the `Builder`.
    #[inline]
    pub fn new(typeface: Typeface) -> Self {
        MemeRenderer::with_painter(typeface)
    }

    /// Create a renderer which uses the typeface loaded from given font file.
    #[inline]
    pub fn from_font_file<F: AsRef<Path>>(path: F) -> Result<Self, FontError> {
        Ok(MemeRenderer::new(Typeface::from_file(path)?))
    }

    /// Begin building a renderer with non-default configuration.
    #[inline]
    pub fn builder() -> Builder<Typeface> {
        Builder::new()
    }
}
impl<P: TextPainter> MemeRenderer<P> {
    /// Create a renderer which uses a custom text painter.
    #[inline]
    pub fn with_painter(painter: P) -> Self {
        MemeRenderer::from_inner(Inner{config: Config::default(), painter})
    }
}

// Rendering image macros.
impl<P: TextPainter> MemeRenderer<P> {
    /// Render an image macro by captioning the background with top & bottom text,
    /// and write it to `destination`.
    ///
    /// Missing parent directories of `destination` are created.
    /// The image is written as PNG if the destination has a `.png` extension,
    /// and JPEG otherwise.
    #[inline]
    pub fn render<B, D>(&self, top: &str, bottom: &str,
                        background: B, destination: D) -> Result<RenderOutput, RenderError>
        where B: Into<Background>, D: AsRef<Path>
    {
        self.render_with(top, bottom, background, destination, RenderOptions::default())
    }

    /// Render an image macro like `render` does, but with custom render options.
    pub fn render_with<B, D>(&self, top: &str, bottom: &str,
                             background: B, destination: D,
                             options: RenderOptions) -> Result<RenderOutput, RenderError>
        where B: Into<Background>, D: AsRef<Path>
    {
        RenderTask::new(top, bottom, options, &self.inner)
            .perform(background.into(), destination.as_ref())
    }
}

// Accessors.
impl<P: TextPainter> MemeRenderer<P> {
    /// Read the renderer's configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// The text painter (usually a `Typeface`) used by the renderer.
    #[inline]
    pub fn painter(&self) -> &P {
        &self.inner.painter
    }
}
