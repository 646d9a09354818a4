//! Colored ASCII rendering of a resized image.
//!
//! Every pixel of the input becomes one character cell. The glyph comes from
//! brightness, or from the gradient direction where the Sobel magnitude
//! reaches the edge threshold. The color comes from the pixel's hue and
//! saturation at full value, optionally snapped to an 8-color palette.
//!
//! Output is one line per image row. Each cell is written as a 24-bit
//! foreground escape (`ESC[38;2;R;G;Bm`) followed by its glyph, and a
//! single reset (`ESC[0m`) follows the last line.

use std::io::Write;

use super::charset::{ascii_char, edge_char, gradient_angle};
use super::color::{grayscale_from_hsv, retro_rgb, rgb_to_hsv, truecolor_rgb, CellColor};
use super::edges::{sobel, Gradients};
use super::grayscale::luminance;
use crate::pixels::{PixelBuffer, PixelError};

/// Edge threshold at or above which edge detection is skipped.
///
/// Sobel magnitudes over `[0, 1]` samples stay below 4, so this value can
/// never trigger an edge.
pub const EDGES_DISABLED: f64 = 4.0;

/// Reset all terminal attributes.
pub const RESET: &str = "\x1b[0m";

/// Color mapping applied to each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Full 24-bit hue and saturation
    #[default]
    TrueColor,
    /// 3-bit palette: black, white and six hues
    Retro,
}

impl Palette {
    pub fn from_retro(use_retro_colors: bool) -> Self {
        if use_retro_colors {
            Palette::Retro
        } else {
            Palette::TrueColor
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Palette::TrueColor => "truecolor",
            Palette::Retro => "retro",
        }
    }
}

/// Rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Minimum gradient magnitude for an edge glyph
    pub edge_threshold: f64,
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            edge_threshold: EDGES_DISABLED,
            palette: Palette::TrueColor,
        }
    }
}

impl RenderOptions {
    pub fn edges_enabled(&self) -> bool {
        self.edge_threshold < EDGES_DISABLED
    }
}

/// A single output character with its foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: CellColor,
}

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Pixel(#[from] PixelError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Compute the glyph and color of every pixel, in row-major order.
pub fn map_cells(image: &PixelBuffer, options: &RenderOptions) -> Result<Vec<Cell>, PixelError> {
    let gray = luminance(image)?;
    let gradients = if options.edges_enabled() {
        sobel(&gray)?
    } else {
        Gradients::zeros(gray.width(), gray.height())?
    };
    let threshold_sq = options.edge_threshold * options.edge_threshold;

    let mut cells = Vec::with_capacity(image.width() * image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let pixel = image.get(x, y)?;
            let (brightness, color) = shade(pixel, options.palette);

            let (gx, gy) = gradients.at(x, y)?;
            let glyph = if gx * gx + gy * gy >= threshold_sq {
                edge_char(gradient_angle(gx, gy))
            } else {
                ascii_char(brightness)
            };

            cells.push(Cell { glyph, color });
        }
    }
    Ok(cells)
}

/// Brightness and display color for one pixel.
fn shade(pixel: &[f64], palette: Palette) -> (f64, CellColor) {
    if pixel.len() <= 2 {
        return (pixel[0], CellColor::gray(pixel[0]));
    }

    let hsv = rgb_to_hsv(pixel[0], pixel[1], pixel[2]);
    let color = match palette {
        Palette::TrueColor => truecolor_rgb(&hsv),
        Palette::Retro => retro_rgb(&hsv),
    };
    (grayscale_from_hsv(&hsv), color)
}

/// Render an image as colored text.
pub fn render<W: Write>(
    image: &PixelBuffer,
    options: &RenderOptions,
    out: &mut W,
) -> Result<(), RenderError> {
    log::debug!(
        "Rendering {}x{} cells, palette {}, edges {}",
        image.width(),
        image.height(),
        options.palette.name(),
        if options.edges_enabled() { "on" } else { "off" }
    );

    let cells = map_cells(image, options)?;
    for row in cells.chunks(image.width()) {
        for cell in row {
            let CellColor { r, g, b } = cell.color;
            write!(out, "\x1b[38;2;{};{};{}m{}", r, g, b, cell.glyph)?;
        }
        writeln!(out)?;
    }
    write!(out, "{}", RESET)?;
    out.flush()?;
    Ok(())
}

/// Render an image into a `String`.
pub fn render_to_string(image: &PixelBuffer, options: &RenderOptions) -> Result<String, RenderError> {
    let mut out = Vec::new();
    render(image, options, &mut out)?;
    Ok(String::from_utf8(out)?)
}
