//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharacterSet, OutputMode};

/// Parse and validate the output width (> 0 characters)
fn parse_width(s: &str) -> Result<u32, String> {
    let width: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid width", s))?;
    if width == 0 {
        return Err("Width must be greater than 0".to_string());
    }
    Ok(width)
}

/// Render images as ASCII, ANSI half-block or Braille text
#[derive(Parser, Debug)]
#[command(name = "glyphcast")]
#[command(version, about = "Render images as terminal text art", long_about = None)]
#[command(after_help = "EXAMPLES:
    glyphcast photo.png                      # braille, 200 columns
    glyphcast --mode ansi --width 80 cat.jpg
    glyphcast -m ascii --charset simple --color logo.gif
    cat photo.png | glyphcast -m braille -o art.txt -")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file to render, or - for stdin (default: stdin)
    pub input: Option<PathBuf>,

    /// Output mode (default: braille, or the config file value)
    #[arg(long, short)]
    pub mode: Option<OutputMode>,

    /// Output width in character cells (default: 200)
    #[arg(long, short, value_parser = parse_width)]
    pub width: Option<u32>,

    /// Output file, or - for stdout (default: stdout)
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// ASCII glyph table (ascii mode only)
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Tint ASCII glyphs with the 256-color palette (ascii mode only)
    #[arg(long)]
    pub color: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
