//! Braille dot-matrix rendering.
//!
//! Each braille character covers a 2x4 block of pixels, giving 8 dots per
//! terminal cell. This is the densest of the three encodings.

use super::error::RenderError;
use super::grid::PixelGrid;

/// Braille base character (U+2800, empty braille pattern).
pub const BRAILLE_BASE: char = '\u{2800}';

/// Luminance above which a dot is raised.
pub const BRAILLE_THRESHOLD: u8 = 127;

/// Cell width in source pixels.
pub const CELL_WIDTH: usize = 2;

/// Cell height in source pixels.
pub const CELL_HEIGHT: usize = 4;

/// Build the dot mask for a block of 8 luminance values.
///
/// Bit `i` is taken from `block[i]`, where the block is read row by row:
/// ```text
/// [0] [1]
/// [2] [3]
/// [4] [5]
/// [6] [7]
/// ```
/// This ordering is fixed by the renderer and differs from the Unicode
/// dot numbering.
pub fn dot_mask(block: [u8; 8]) -> u8 {
    let mut mask = 0u8;
    for (i, lum) in block.into_iter().enumerate() {
        if lum > BRAILLE_THRESHOLD {
            mask |= 1 << i;
        }
    }
    mask
}

/// Convert a dot mask to its braille character (U+2800 to U+28FF).
pub fn mask_to_braille(mask: u8) -> char {
    char::from_u32(BRAILLE_BASE as u32 + mask as u32).unwrap_or(BRAILLE_BASE)
}

/// Render a grid as braille characters.
///
/// Fails with [`RenderError::InsufficientImageSize`] when the grid is empty
/// or shorter than 4 rows, and with [`RenderError::ImageTooSmall`] when no
/// complete 2x4 cell fits. Trailing columns and rows that do not fill a
/// cell are dropped.
pub fn render(grid: &PixelGrid) -> Result<String, RenderError> {
    let (width, height) = (grid.width(), grid.height());

    if width == 0 || height < CELL_HEIGHT {
        return Err(RenderError::InsufficientImageSize {
            mode: "braille",
            width,
            height,
            min_height: CELL_HEIGHT,
        });
    }

    let cols = width / CELL_WIDTH;
    let rows = height / CELL_HEIGHT;
    if cols == 0 || rows == 0 {
        return Err(RenderError::ImageTooSmall { width, height });
    }

    // Braille glyphs are 3 bytes in UTF-8, plus one newline per row
    let mut out = String::with_capacity(rows * (cols * 3 + 1));

    for row in 0..rows {
        let y = row * CELL_HEIGHT;
        for col in 0..cols {
            let x = col * CELL_WIDTH;
            let block = [
                grid.at(x, y).lum,
                grid.at(x + 1, y).lum,
                grid.at(x, y + 1).lum,
                grid.at(x + 1, y + 1).lum,
                grid.at(x, y + 2).lum,
                grid.at(x + 1, y + 2).lum,
                grid.at(x, y + 3).lum,
                grid.at(x + 1, y + 3).lum,
            ];
            out.push(mask_to_braille(dot_mask(block)));
        }
        out.push('\n');
    }

    Ok(out)
}
