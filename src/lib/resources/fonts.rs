//! Module for loading the typeface used to caption image macros.

use std::fmt;
use std::fs;
use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use rusttype::{self, GlyphId};
use thiserror::Error;


/// The single typeface that captions are rendered with.
///
/// It is used for both the outline and the fill of the text.
pub struct Typeface {
    font: rusttype::Font<'static>,
    name: String,
}

impl Typeface {
    /// Load a typeface from a TrueType/OpenType file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FontError> {
        let path = path.as_ref();
        trace!("Loading font file {}...", path.display());
        let bytes = fs::read(path).map_err(|e| FontError::Io{path: path.to_owned(), source: e})?;

        let name = path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_bytes(name, bytes)
    }

    /// Load a typeface from the raw bytes of a font file.
    pub fn from_bytes<N: Into<String>>(name: N, bytes: Vec<u8>) -> Result<Self, FontError> {
        let name = name.into();
        let font = rusttype::Font::try_from_vec(bytes).ok_or_else(|| {
            error!("Data for `{}` font is not a valid font", name);
            FontError::Invalid(name.clone())
        })?;
        debug!("Font `{}` loaded successfully ({} glyph(s))", name, font.glyph_count());
        Ok(Typeface{font, name})
    }
}

impl Typeface {
    /// Name the typeface was loaded under.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the typeface has all the glyphs for given text,
    /// logging a warning about any that are missing.
    ///
    /// Returns whether all the glyphs are present.
    pub fn check(&self, text: &str) -> bool {
        let mut missing: Vec<u32> = text.chars()
            .filter(|&ch| !ch.is_control())
            .filter(|&ch| self.font.glyph(ch).id() == GlyphId(0))
            .map(|ch| ch as u32)
            .collect();
        missing.sort_unstable();
        missing.dedup();

        if !missing.is_empty() {
            warn!("Font `{}` is missing glyphs for {} codepoint(s): {}",
                self.name, missing.len(),
                missing.iter().map(|c| format!("{:#x}", c)).collect::<Vec<_>>().join(", "));
        }
        missing.is_empty()
    }
}

impl Deref for Typeface {
    type Target = rusttype::Font<'static>;
    fn deref(&self) -> &Self::Target {
        &self.font
    }
}

impl fmt::Debug for Typeface {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Typeface({:?})", self.name)
    }
}


/// Error that may occur while loading the typeface.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file couldn't be read.
    #[error("cannot read font file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// The font data couldn't be parsed.
    #[error("`{0}` is not a valid TrueType/OpenType font")]
    Invalid(String),
}
