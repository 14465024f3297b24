//! Module handling the resources used for captioning.

mod fonts;

pub use self::fonts::{FontError, Typeface};

#[cfg(test)]
pub(crate) use self::fonts::tests::bundled_font_path;
