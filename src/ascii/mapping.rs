//! Brightness to glyph mapping for the ASCII renderer.

/// Average two luminance values with truncating division.
///
/// Rounding is intentionally not applied: the result is biased toward the
/// darker value and must stay that way for output compatibility.
#[inline]
pub fn average_luminance(top: u8, bottom: u8) -> u8 {
    ((top as u16 + bottom as u16) / 2) as u8
}

/// Map a luminance value to an index into a table of `levels` glyphs.
///
/// Uses `lum * (levels - 1) / 255` with truncating division, so 0 maps to
/// the first glyph and 255 to the last.
#[inline]
pub fn glyph_index(lum: u8, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    (lum as usize * (levels - 1)) / 255
}

/// Pick the glyph for a luminance value.
///
/// An empty charset yields a space.
#[inline]
pub fn map_to_char(lum: u8, charset: &[char]) -> char {
    if charset.is_empty() {
        return ' ';
    }
    charset[glyph_index(lum, charset.len())]
}
