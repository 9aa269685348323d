//! glyphcast library crate.
//!
//! Converts raster images into ASCII, ANSI half-block or Braille text. The
//! rendering engine lives in [`ascii`]; the other modules load images, read
//! configuration and write output around it.

pub mod app;
pub mod ascii;
pub mod cli;
pub mod config;
pub mod loader;
pub mod output;
