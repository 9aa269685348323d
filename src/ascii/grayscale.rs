//! RGB to luminance conversion using the ITU-R BT.601 weights.

/// Compute the luminance of an RGB pixel.
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// Integer math with coefficients scaled by 1000 (299 + 587 + 114 = 1000)
/// gives the exact truncated value, so white maps to 255 and black to 0.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (r as u32, g as u32, b as u32);
    ((299 * r + 587 * g + 114 * b) / 1000) as u8
}
