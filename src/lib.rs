//! asciify library crate.
//!
//! Converts raster images into colored ASCII art for the terminal.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod pixels;
pub mod terminal;
