//! Sobel edge detection over luminance buffers.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::pixels::{PixelBuffer, PixelError};

/// A 3x3 convolution kernel in row-major order, centre at index 4.
pub type Kernel = [f64; 9];

/// Horizontal gradient kernel.
/// ```text
/// [-1  0  1]
/// [-2  0  2]
/// [-1  0  1]
/// ```
pub const SOBEL_X: Kernel = [-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0];

/// Vertical gradient kernel. Positive where the image gets brighter upwards.
/// ```text
/// [ 1  2  1]
/// [ 0  0  0]
/// [-1 -2 -1]
/// ```
pub const SOBEL_Y: Kernel = [1.0, 2.0, 1.0, 0.0, 0.0, 0.0, -1.0, -2.0, -1.0];

/// Horizontal and vertical gradients aligned with a luminance buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub gx: PixelBuffer,
    pub gy: PixelBuffer,
}

impl Gradients {
    /// All-zero gradients, used when edge detection is disabled.
    pub fn zeros(width: usize, height: usize) -> Result<Self, PixelError> {
        Ok(Self {
            gx: PixelBuffer::zeros(width, height, 1)?,
            gy: PixelBuffer::zeros(width, height, 1)?,
        })
    }

    /// Gradient `(gx, gy)` at a pixel.
    pub fn at(&self, x: usize, y: usize) -> Result<(f64, f64), PixelError> {
        Ok((self.gx.get(x, y)?[0], self.gy.get(x, y)?[0]))
    }
}

/// Convolve every channel with a 3x3 kernel.
///
/// Only interior pixels are computed; the 1-pixel border of the output is
/// left at zero. Taps falling outside the image contribute nothing.
///
/// # Errors
/// [`PixelError::KernelSize`] if `kernel` does not have exactly 9 entries.
pub fn convolve(source: &PixelBuffer, kernel: &[f64]) -> Result<PixelBuffer, PixelError> {
    if kernel.len() != 9 {
        return Err(PixelError::KernelSize(kernel.len()));
    }

    let width = source.width();
    let height = source.height();
    let channels = source.channels();
    let row_len = width * channels;
    let mut data = vec![0.0; row_len * height];

    #[cfg(feature = "parallel")]
    let rows = data.par_chunks_mut(row_len);
    #[cfg(not(feature = "parallel"))]
    let rows = data.chunks_mut(row_len);

    rows.enumerate()
        .filter(|(y, _)| *y >= 1 && *y + 1 < height)
        .for_each(|(y, row)| {
            for x in 1..width.saturating_sub(1) {
                for c in 0..channels {
                    row[x * channels + c] = convolve_at(source, kernel, x, y, c);
                }
            }
        });

    PixelBuffer::new(width, height, channels, data)
}

fn convolve_at(source: &PixelBuffer, kernel: &[f64], x: usize, y: usize, c: usize) -> f64 {
    let mut sum = 0.0;
    for dj in 0..3 {
        for di in 0..3 {
            let (Some(sx), Some(sy)) = ((x + di).checked_sub(1), (y + dj).checked_sub(1)) else {
                continue;
            };
            if let Some(px) = source.pixel(sx, sy) {
                sum += kernel[di + dj * 3] * px[c];
            }
        }
    }
    sum
}

/// Compute horizontal and vertical Sobel gradients.
pub fn sobel(luminance: &PixelBuffer) -> Result<Gradients, PixelError> {
    Ok(Gradients {
        gx: convolve(luminance, &SOBEL_X)?,
        gy: convolve(luminance, &SOBEL_Y)?,
    })
}
