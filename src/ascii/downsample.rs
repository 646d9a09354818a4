//! Block-average downsampling of pixel buffers to character grids.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::dimensions::fit_dimensions;
use crate::pixels::{sample_count, PixelBuffer, PixelError};

/// Resize an image to fit a `max_width` x `max_height` character grid.
///
/// Output dimensions come from [`fit_dimensions`]; each output cell is the
/// average of the source rectangle it covers (see [`downsample`]).
///
/// # Example
/// ```
/// use asciify::ascii::resize;
/// use asciify::pixels::PixelBuffer;
///
/// let red = PixelBuffer::new(2, 2, 3, [1.0, 0.0, 0.0].repeat(4)).unwrap();
/// let cell = resize(&red, 1, 1, 2.0).unwrap();
/// assert_eq!(cell.get(0, 0).unwrap(), &[1.0, 0.0, 0.0]);
/// ```
pub fn resize(
    source: &PixelBuffer,
    max_width: usize,
    max_height: usize,
    char_ratio: f64,
) -> Result<PixelBuffer, PixelError> {
    let (width, height) = fit_dimensions(
        source.width(),
        source.height(),
        max_width,
        max_height,
        char_ratio,
    )?;
    log::debug!(
        "Resizing {}x{} to {}x{} (max {}x{}, ratio {})",
        source.width(),
        source.height(),
        width,
        height,
        max_width,
        max_height,
        char_ratio
    );
    downsample(source, width, height)
}

/// Downsample to exactly `width` x `height` by block averaging.
///
/// Cell `(i, j)` covers source columns `i*W/width .. (i+1)*W/width` and rows
/// `j*H/height .. (j+1)*H/height` (integer division). When the output is
/// larger than the source some rectangles are empty and those cells are zero.
pub fn downsample(
    source: &PixelBuffer,
    width: usize,
    height: usize,
) -> Result<PixelBuffer, PixelError> {
    if width == 0 || height == 0 {
        return Err(PixelError::EmptyTarget);
    }

    let channels = source.channels();
    let src_w = source.width();
    let src_h = source.height();
    let mut data = vec![0.0; sample_count(width, height, channels)?];
    let row_len = width * channels;

    #[cfg(feature = "parallel")]
    let rows = data.par_chunks_mut(row_len);
    #[cfg(not(feature = "parallel"))]
    let rows = data.chunks_mut(row_len);

    rows.enumerate().for_each(|(j, row)| {
        let (y1, y2) = block_span(j, src_h, height);
        for (i, cell) in row.chunks_exact_mut(channels).enumerate() {
            let (x1, x2) = block_span(i, src_w, width);
            cell.copy_from_slice(&source.average_region(x1, x2, y1, y2));
        }
    });

    PixelBuffer::new(width, height, channels, data)
}

/// Source range `[i*src/out, (i+1)*src/out)` covered by output index `i`.
fn block_span(i: usize, src: usize, out: usize) -> (usize, usize) {
    let (i, src, out) = (i as u128, src as u128, out as u128);
    ((i * src / out) as usize, ((i + 1) * src / out) as usize)
}
