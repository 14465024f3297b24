//! Module implementing the `Color` type.

use image::Rgba;


/// RGB color of the caption text or its outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    #[inline]
    pub fn white() -> Self {
        Color(0xff, 0xff, 0xff)
    }

    /// Color with given coverage, as blended onto the canvas by glyph rasterizers.
    #[inline]
    pub fn to_rgba(self, alpha: u8) -> Rgba<u8> {
        let Color(r, g, b) = self;
        Rgba([r, g, b, alpha])
    }
}


#[cfg(test)]
mod tests {
    use image::Rgba;
    use super::Color;

    #[test]
    fn rgba_carries_coverage() {
        assert_eq!(Rgba([0xff, 0xff, 0xff, 0x80]), Color::white().to_rgba(0x80));
        assert_eq!(Rgba([0x12, 0x34, 0x56, 0]), Color(0x12, 0x34, 0x56).to_rgba(0));
    }
}
