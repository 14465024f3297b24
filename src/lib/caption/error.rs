//! Rendering error.

use std::io;
use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

use crate::resources::FontError;


/// Error that may occur while rendering an image macro.
///
/// None of these are retried; a failed render doesn't leave any file behind.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The background image couldn't be loaded or decoded.
    #[error("cannot load background image: {0}")]
    Decode(#[source] ImageError),
    /// The typeface couldn't be loaded.
    #[error("cannot load typeface: {0}")]
    Font(#[from] FontError),
    /// The finished canvas couldn't be encoded.
    #[error("failed to encode the final image: {0}")]
    Encode(#[source] ImageError),
    /// The encoded image couldn't be written to its destination.
    #[error("cannot write image to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}
