//! Terminal color escape sequences.
//!
//! The 256-color palette and truecolor paths are kept separate: one emits a
//! palette index, the other a raw RGB triple, and they are never mixed.

use std::fmt::Write;

/// Reset all SGR attributes.
pub const RESET: &str = "\x1b[0m";

/// Width of one bucket when reducing a channel to the 6-level color cube.
const CUBE_STEP: u8 = 51;

/// Quantize an RGB color into the 6x6x6 cube of the 256-color palette.
///
/// Each channel is bucketed as `c / 51` (0-5) and combined as
/// `16 + 36*r + 6*g + b`.
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    let (r6, g6, b6) = (r / CUBE_STEP, g / CUBE_STEP, b / CUBE_STEP);
    16 + 36 * r6 + 6 * g6 + b6
}

/// Append a 256-color foreground sequence (`ESC[38;5;Nm`).
pub fn push_fg256(out: &mut String, r: u8, g: u8, b: u8) {
    // Writing into a String cannot fail
    let _ = write!(out, "\x1b[38;5;{}m", rgb_to_ansi256(r, g, b));
}

/// Append a truecolor foreground sequence (`ESC[38;2;R;G;Bm`).
pub fn push_fg_truecolor(out: &mut String, r: u8, g: u8, b: u8) {
    let _ = write!(out, "\x1b[38;2;{};{};{}m", r, g, b);
}

/// Append a truecolor background sequence (`ESC[48;2;R;G;Bm`).
pub fn push_bg_truecolor(out: &mut String, r: u8, g: u8, b: u8) {
    let _ = write!(out, "\x1b[48;2;{};{};{}m", r, g, b);
}
