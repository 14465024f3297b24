//! Module defining the background images that get captioned.

use std::fmt;
use std::path::{Path, PathBuf};

use image::{self, DynamicImage, GenericImageView, ImageError};
use image::error::{ParameterError, ParameterErrorKind};

use super::error::RenderError;


/// Background image of an image macro, in one of the forms it can be supplied.
pub enum Background {
    /// Image file in any of the supported raster formats.
    Path(PathBuf),
    /// Content of such file.
    Bytes(Vec<u8>),
    /// Image that's already been decoded.
    Image(DynamicImage),
}

impl Background {
    /// Decode the background into an image.
    ///
    /// Images without any pixels are rejected.
    pub(super) fn load(self) -> Result<DynamicImage, RenderError> {
        let img = match self {
            Background::Path(path) => {
                trace!("Opening image {}", path.display());
                image::open(&path).map_err(|e| {
                    error!("Failed to open background image {}: {}", path.display(), e);
                    RenderError::Decode(e)
                })?
            }
            Background::Bytes(bytes) => {
                trace!("Decoding image from {} byte(s)", bytes.len());
                image::load_from_memory(&bytes).map_err(RenderError::Decode)?
            }
            Background::Image(img) => img,
        };
        let (width, height) = img.dimensions();
        trace!("Original size of the background image: {}x{}", width, height);
        if width == 0 || height == 0 {
            error!("Background image is empty ({}x{})", width, height);
            return Err(RenderError::Decode(ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::Generic(format!("empty image of size {}x{}", width, height))))));
        }
        Ok(img)
    }
}

impl<'p> From<&'p Path> for Background {
    fn from(path: &'p Path) -> Self {
        Background::Path(path.to_owned())
    }
}
impl From<PathBuf> for Background {
    fn from(path: PathBuf) -> Self {
        Background::Path(path)
    }
}
impl<'p> From<&'p PathBuf> for Background {
    fn from(path: &'p PathBuf) -> Self {
        Background::Path(path.clone())
    }
}
impl<'s> From<&'s str> for Background {
    /// Treat the string as path to the image file.
    fn from(path: &'s str) -> Self {
        Background::Path(path.into())
    }
}
impl From<Vec<u8>> for Background {
    fn from(bytes: Vec<u8>) -> Self {
        Background::Bytes(bytes)
    }
}
impl From<DynamicImage> for Background {
    fn from(img: DynamicImage) -> Self {
        Background::Image(img)
    }
}

impl fmt::Debug for Background {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Background::Path(ref path) => write!(fmt, "Background::Path({:?})", path),
            Background::Bytes(ref bytes) => write!(fmt, "Background::Bytes(<{} bytes>)", bytes.len()),
            Background::Image(ref img) => {
                let (width, height) = img.dimensions();
                write!(fmt, "Background::Image({}x{})", width, height)
            }
        }
    }
}
