//! Renderer variants and the shared `render` entry point.

use super::braille;
use super::charset::CharSet;
use super::color::{push_bg_truecolor, push_fg256, push_fg_truecolor, RESET};
use super::error::RenderError;
use super::grid::PixelGrid;
use super::mapping::{average_luminance, map_to_char};

/// Upper half block, foreground paints the top pixel, background the bottom.
pub const HALF_BLOCK: char = '▀';

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Shading glyphs from a density ramp (1x2 cells)
    Ascii,
    /// Truecolor half blocks (1x2 cells)
    Ansi,
    /// Braille dot patterns (2x4 cells)
    #[default]
    Braille,
}

impl Mode {
    /// Cell geometry as `(width, height)` in source pixels.
    pub fn cell_size(&self) -> (usize, usize) {
        match self {
            Mode::Ascii | Mode::Ansi => (1, 2),
            Mode::Braille => (braille::CELL_WIDTH, braille::CELL_HEIGHT),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Ascii => "ascii",
            Mode::Ansi => "ansi",
            Mode::Braille => "braille",
        }
    }

    /// Look up a mode by the name returned from [`Mode::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ascii" => Some(Mode::Ascii),
            "ansi" => Some(Mode::Ansi),
            "braille" => Some(Mode::Braille),
            _ => None,
        }
    }
}

/// Options for the ASCII renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AsciiRenderer {
    pub charset: CharSet,
    /// Prefix each glyph with a 256-color foreground from the top pixel
    pub color: bool,
}

/// A configured renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Renderer {
    Ascii(AsciiRenderer),
    Ansi,
    #[default]
    Braille,
}

impl Renderer {
    /// Build the renderer for `mode`. ASCII options are ignored by the
    /// other modes.
    pub fn new(mode: Mode, ascii: AsciiRenderer) -> Self {
        match mode {
            Mode::Ascii => Renderer::Ascii(ascii),
            Mode::Ansi => Renderer::Ansi,
            Mode::Braille => Renderer::Braille,
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Renderer::Ascii(_) => Mode::Ascii,
            Renderer::Ansi => Mode::Ansi,
            Renderer::Braille => Mode::Braille,
        }
    }

    /// Render the whole grid to text, one newline-terminated line per row
    /// of cells.
    pub fn render(&self, grid: &PixelGrid) -> Result<String, RenderError> {
        log::debug!(
            "Rendering {}x{} grid in {} mode",
            grid.width(),
            grid.height(),
            self.mode().name()
        );
        match self {
            Renderer::Ascii(opts) => render_ascii(grid, opts),
            Renderer::Ansi => render_ansi(grid),
            Renderer::Braille => braille::render(grid),
        }
    }
}

/// Check the common 1x2 precondition.
fn check_half_cell(grid: &PixelGrid, mode: Mode) -> Result<(), RenderError> {
    let (_, cell_h) = mode.cell_size();
    if grid.width() == 0 || grid.height() < cell_h {
        return Err(RenderError::InsufficientImageSize {
            mode: mode.name(),
            width: grid.width(),
            height: grid.height(),
            min_height: cell_h,
        });
    }
    Ok(())
}

/// Render shading glyphs, two stacked pixels per character.
pub fn render_ascii(grid: &PixelGrid, opts: &AsciiRenderer) -> Result<String, RenderError> {
    check_half_cell(grid, Mode::Ascii)?;

    let charset = opts.charset.chars();
    let (width, rows) = (grid.width(), grid.height() / 2);

    // A glyph is one byte; a 256-color prefix adds up to 11 more
    let per_cell = if opts.color { 12 } else { 1 };
    let mut out = String::with_capacity(rows * (width * per_cell + RESET.len() + 1));

    for row in 0..rows {
        let y = row * 2;
        for x in 0..width {
            let top = grid.at(x, y);
            let bottom = grid.at(x, y + 1);

            if opts.color {
                push_fg256(&mut out, top.r, top.g, top.b);
            }
            out.push(map_to_char(average_luminance(top.lum, bottom.lum), charset));
        }
        if opts.color {
            out.push_str(RESET);
        }
        out.push('\n');
    }

    Ok(out)
}

/// Render truecolor half blocks, top pixel as foreground and bottom pixel
/// as background.
pub fn render_ansi(grid: &PixelGrid) -> Result<String, RenderError> {
    check_half_cell(grid, Mode::Ansi)?;

    let (width, rows) = (grid.width(), grid.height() / 2);

    // Two 19-byte color sequences plus the 3-byte glyph, at most
    let mut out = String::with_capacity(rows * (width * 41 + RESET.len() + 1));

    for row in 0..rows {
        let y = row * 2;
        for x in 0..width {
            let top = grid.at(x, y);
            let bottom = grid.at(x, y + 1);

            push_fg_truecolor(&mut out, top.r, top.g, top.b);
            push_bg_truecolor(&mut out, bottom.r, bottom.g, bottom.b);
            out.push(HALF_BLOCK);
        }
        out.push_str(RESET);
        out.push('\n');
    }

    Ok(out)
}
