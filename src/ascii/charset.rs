//! Glyph tables for ASCII shading.

/// Coarse ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
pub const SIMPLE_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Fine ASCII density ramp (70 levels).
/// Characters ordered from darkest (space) to brightest ($).
#[rustfmt::skip]
pub const DETAILED_CHARSET: &[char] = &[
    ' ', '.', '\'', '`', '^', '"', ',', ':', ';', 'I',
    'l', '!', 'i', '>', '<', '~', '+', '_', '-', '?',
    ']', '[', '}', '{', '1', ')', '(', '|', '\\', '/',
    't', 'f', 'j', 'r', 'x', 'n', 'u', 'v', 'c', 'z',
    'X', 'Y', 'U', 'J', 'C', 'L', 'Q', '0', 'O', 'Z',
    'm', 'w', 'q', 'p', 'd', 'b', 'k', 'h', 'a', 'o',
    '*', '#', 'M', 'W', '&', '8', '%', 'B', '@', '$',
];

/// Glyph table selection for the ASCII renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Coarse 10-level ramp
    Simple,
    /// Fine 70-level ramp
    #[default]
    Detailed,
}

impl CharSet {
    /// Get the character slice for this charset.
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Simple => SIMPLE_CHARSET,
            CharSet::Detailed => DETAILED_CHARSET,
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Simple => "simple",
            CharSet::Detailed => "detailed",
        }
    }

    /// Look up a charset by the name returned from [`CharSet::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "simple" => Some(CharSet::Simple),
            "detailed" => Some(CharSet::Detailed),
            _ => None,
        }
    }
}
