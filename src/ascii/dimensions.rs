//! Output dimension calculation for aspect-ratio-correct rendering.

use crate::pixels::PixelError;

/// Default terminal character aspect ratio.
/// Terminal characters are typically ~2x taller than wide.
pub const DEFAULT_CHAR_ASPECT_RATIO: f64 = 2.0;

/// Calculate the character grid that best fits an image.
///
/// The width is tried first: the grid takes the full `max_width` and the
/// height follows from the image aspect divided by `char_ratio`. If that
/// height overflows `max_height`, the height is pinned instead and the width
/// is derived from it. Both results are truncated and clamped to at least 1.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `max_width` - Maximum output width in characters
/// * `max_height` - Maximum output height in characters
/// * `char_ratio` - Character cell height/width ratio
///
/// # Returns
/// A tuple of `(width, height)` in characters.
pub fn fit_dimensions(
    img_width: usize,
    img_height: usize,
    max_width: usize,
    max_height: usize,
    char_ratio: f64,
) -> Result<(usize, usize), PixelError> {
    if !(char_ratio.is_finite() && char_ratio > 0.0) {
        return Err(PixelError::InvalidRatio(char_ratio));
    }
    if max_width == 0 || max_height == 0 {
        return Err(PixelError::EmptyTarget);
    }
    if img_width == 0 || img_height == 0 {
        return Err(PixelError::EmptyImage);
    }

    let proposed_height =
        (img_height as f64 * max_width as f64) / (char_ratio * img_width as f64);
    let proposed_height = proposed_height as usize;

    let (width, height) = if proposed_height <= max_height {
        (max_width, proposed_height)
    } else {
        let width = (char_ratio * img_width as f64 * max_height as f64) / img_height as f64;
        // Clamp to max width in case of rounding
        ((width as usize).min(max_width), max_height)
    };

    Ok((width.max(1), height.max(1)))
}
