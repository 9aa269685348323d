//! CLI enum types for mode and character set options.

use clap::ValueEnum;

use crate::ascii;

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Shading glyphs, two pixels per character
    Ascii,
    /// Truecolor half blocks, two pixels per character
    Ansi,
    /// Braille dots, eight pixels per character
    Braille,
}

impl From<OutputMode> for ascii::Mode {
    fn from(m: OutputMode) -> Self {
        match m {
            OutputMode::Ascii => ascii::Mode::Ascii,
            OutputMode::Ansi => ascii::Mode::Ansi,
            OutputMode::Braille => ascii::Mode::Braille,
        }
    }
}

/// ASCII glyph table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CharacterSet {
    Simple,
    Detailed,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Simple => ascii::CharSet::Simple,
            CharacterSet::Detailed => ascii::CharSet::Detailed,
        }
    }
}
