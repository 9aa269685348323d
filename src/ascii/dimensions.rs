//! Target pixel size for a requested output width.

use super::render::Mode;

/// Calculate the pixel size an image must be resized to before rendering.
///
/// The width is `columns * cell_width`. The height preserves the source
/// aspect ratio, is raised to at least one cell, and is snapped down to a
/// whole number of cells so no source row is dropped by the renderer.
///
/// # Arguments
/// * `mode` - Output encoding, which fixes the cell geometry
/// * `columns` - Desired output width in characters
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
///
/// # Returns
/// A tuple of (pixel_width, pixel_height), or `(0, 0)` for an empty source.
///
/// # Example
/// ```ignore
/// // 80 braille columns over a 640x480 photo
/// let (w, h) = target_pixel_size(Mode::Braille, 80, 640, 480);
/// assert_eq!((w, h), (160, 120));
/// ```
pub fn target_pixel_size(mode: Mode, columns: u32, img_width: u32, img_height: u32) -> (u32, u32) {
    if img_width == 0 || img_height == 0 {
        return (0, 0);
    }

    let (cell_w, cell_h) = mode.cell_size();
    let (cell_w, cell_h) = (cell_w as u32, cell_h as u32);

    let width = columns.saturating_mul(cell_w).max(1);

    let height = (width as f64 * img_height as f64 / img_width as f64) as u32;
    let height = height.max(cell_h);
    let height = (height / cell_h) * cell_h;

    (width, height.max(cell_h))
}
