//! Module implementing image captioning.

mod background;
mod error;
mod output;
mod renderer;
mod task;



pub use self::background::Background;
pub use self::error::RenderError;
pub use self::output::{CaptionLayout, RenderOutput};
pub use self::renderer::{Builder as RendererBuilder,
                         BuildError as RendererBuildError,
                         Config as RendererConfig,
                         MemeRenderer,
                         RenderOptions};
pub use self::task::{DEFAULT_OUTPUT_FORMAT, OUTPUT_FORMAT_EXTENSIONS};


use std::path::Path;


/// Render an image macro in one go, loading the typeface from given font file.
///
/// Prefer creating a `MemeRenderer` when rendering more than one image,
/// so that the font is only loaded once.
pub fn render_meme<F, B, D>(font_file: F, top: &str, bottom: &str,
                            background: B, destination: D,
                            match_font_size: bool) -> Result<RenderOutput, RenderError>
    where F: AsRef<Path>, B: Into<Background>, D: AsRef<Path>
{
    let renderer = MemeRenderer::from_font_file(font_file)?;
    let options = RenderOptions::default().match_font_size(match_font_size);
    renderer.render_with(top, bottom, background, destination, options)
}
