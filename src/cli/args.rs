//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{check_character_ratio, check_dimension, check_edge_threshold, RenderConfig};

/// Render an image as colored ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Render images as colored ASCII art", long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to image file
    #[arg(required = true)]
    pub image: Option<PathBuf>,

    /// Maximum width in characters (default: terminal width or 64)
    #[arg(short = 'W', long, value_parser = parse_dimension)]
    pub max_width: Option<u16>,

    /// Maximum height in characters (default: terminal height or 48)
    #[arg(short = 'H', long, value_parser = parse_dimension)]
    pub max_height: Option<u16>,

    /// Height-to-width ratio of a character cell (default: 2.0)
    #[arg(short = 'r', long, value_parser = parse_ratio)]
    pub character_ratio: Option<f64>,

    /// Edge detection threshold, 0.0 - 4.0 (default: 4.0, disabled)
    #[arg(short = 'e', long, value_parser = parse_edge_threshold)]
    pub edge_threshold: Option<f64>,

    /// Use the 3-bit retro palette (8 colors) instead of 24-bit color
    #[arg(long)]
    pub retro_colors: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
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
    /// Show effective settings
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// Settings given explicitly on the command line.
    pub fn overrides(&self) -> RenderConfig {
        RenderConfig {
            max_width: self.max_width,
            max_height: self.max_height,
            character_ratio: self.character_ratio,
            edge_threshold: self.edge_threshold,
            retro_colors: self.retro_colors.then_some(true),
        }
    }
}

/// Parse a positive character count.
fn parse_dimension(s: &str) -> Result<u16, String> {
    let n: u16 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid size (1-{})", s, u16::MAX))?;
    check_dimension(n)
}

/// Parse a positive, finite character ratio.
fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    check_character_ratio(ratio)
}

/// Parse and validate edge threshold (0.0-4.0)
fn parse_edge_threshold(s: &str) -> Result<f64, String> {
    let threshold: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    check_edge_threshold(threshold)
}
