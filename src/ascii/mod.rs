//! Image to colored ASCII conversion.
//!
//! The pipeline turns a decoded [`PixelBuffer`](crate::pixels::PixelBuffer)
//! into terminal text:
//!
//! 1. **Resizing** - Block-average down to the character grid
//! 2. **Luminance** - RGB to brightness using BT.709
//! 3. **Edge detection** - Sobel gradients over the luminance
//! 4. **Color and glyph selection** - HSV-based colors, brightness ramp or edge glyphs
//! 5. **Emission** - 24-bit ANSI foreground escapes per cell

mod charset;
mod color;
mod dimensions;
mod downsample;
mod edges;
mod grayscale;
mod render;

pub use charset::{ascii_char, edge_char, gradient_angle, GLYPH_RAMP};
pub use color::{
    grayscale_from_hsv, hsv_to_rgb, retro_rgb, rgb_to_hsv, truecolor_rgb, CellColor, Hsv,
};
pub use dimensions::{fit_dimensions, DEFAULT_CHAR_ASPECT_RATIO};
pub use downsample::{downsample, resize};
pub use edges::{convolve, sobel, Gradients, Kernel, SOBEL_X, SOBEL_Y};
pub use grayscale::{luminance, to_grayscale, LUMA_WEIGHTS};
pub use render::{
    map_cells, render, render_to_string, Cell, Palette, RenderError, RenderOptions,
    EDGES_DISABLED, RESET,
};
