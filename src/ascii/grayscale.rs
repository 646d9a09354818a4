//! RGB to luminance conversion using ITU-R BT.709 weights.

use crate::pixels::{PixelBuffer, PixelError};

/// BT.709 luma coefficients for R, G and B.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Convert an RGB(A) buffer to a single-channel luminance buffer.
///
/// The luminance formula is: Y = 0.2126*R + 0.7152*G + 0.0722*B.
/// Channels beyond the third are ignored.
///
/// # Errors
/// [`PixelError::NotEnoughChannels`] if the source has fewer than 3 channels.
pub fn to_grayscale(source: &PixelBuffer) -> Result<PixelBuffer, PixelError> {
    if source.channels() < 3 {
        return Err(PixelError::NotEnoughChannels(source.channels()));
    }

    let gray = source
        .samples()
        .chunks_exact(source.channels())
        .map(|px| LUMA_WEIGHTS[0] * px[0] + LUMA_WEIGHTS[1] * px[1] + LUMA_WEIGHTS[2] * px[2])
        .collect();

    PixelBuffer::new(source.width(), source.height(), 1, gray)
}

/// Luminance for any channel count.
///
/// Buffers with 3 or more channels go through [`to_grayscale`]; one- and
/// two-channel buffers are already gray, so their first channel is used.
pub fn luminance(source: &PixelBuffer) -> Result<PixelBuffer, PixelError> {
    if source.channels() >= 3 {
        return to_grayscale(source);
    }

    let gray = source
        .samples()
        .chunks_exact(source.channels())
        .map(|px| px[0])
        .collect();

    PixelBuffer::new(source.width(), source.height(), 1, gray)
}
