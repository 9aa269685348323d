//! Rendering engine that turns a pixel grid into terminal text.
//!
//! Every renderer consumes a [`PixelGrid`] that is already at the final
//! resolution and collapses fixed-size cells of pixels into characters:
//!
//! 1. **ASCII** - 1x2 cells, averaged luminance picks a glyph from a
//!    density ramp, optionally tinted with the 256-color palette
//! 2. **ANSI** - 1x2 cells drawn as `▀` with truecolor foreground (top)
//!    and background (bottom)
//! 3. **Braille** - 2x4 cells, each pixel above the threshold raises a dot
//!
//! # Character Sets
//!
//! The ASCII renderer picks glyphs from a [`CharSet`]:
//! - `Simple` - 10-level density ramp
//! - `Detailed` - 70-level density ramp (default)

pub mod braille;
mod charset;
mod color;
mod dimensions;
mod error;
mod grayscale;
mod grid;
mod mapping;
mod render;

pub use charset::{CharSet, DETAILED_CHARSET, SIMPLE_CHARSET};
pub use color::{push_bg_truecolor, push_fg256, push_fg_truecolor, rgb_to_ansi256, RESET};
pub use dimensions::target_pixel_size;
pub use error::RenderError;
pub use grayscale::luminance;
pub use grid::{GridError, PixelGrid, Sample};
pub use mapping::{average_luminance, glyph_index, map_to_char};
pub use render::{render_ansi, render_ascii, AsciiRenderer, Mode, Renderer, HALF_BLOCK};

pub use braille::render as render_braille;
pub use braille::{BRAILLE_BASE, BRAILLE_THRESHOLD};
