//! Image file decoding into normalised pixel buffers.

use std::path::Path;

use image::DynamicImage;

use super::buffer::PixelBuffer;
use super::error::PixelError;

/// Errors that can occur while decoding an image.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),

    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(u8),

    #[error(transparent)]
    Pixel(#[from] PixelError),
}

/// Load an image file, keeping its native channel count.
pub fn load(path: &Path) -> Result<PixelBuffer, DecodeError> {
    let img = image::open(path)?;
    from_dynamic(&img)
}

/// Convert a decoded image to an 8-bit-per-channel buffer scaled to `[0, 1]`.
///
/// Luma, luma+alpha, RGB and RGBA keep 1, 2, 3 and 4 channels respectively.
pub fn from_dynamic(img: &DynamicImage) -> Result<PixelBuffer, DecodeError> {
    let channels = img.color().channel_count();
    let (width, height, raw) = match channels {
        1 => {
            let buf = img.to_luma8();
            let (w, h) = buf.dimensions();
            (w, h, buf.into_raw())
        }
        2 => {
            let buf = img.to_luma_alpha8();
            let (w, h) = buf.dimensions();
            (w, h, buf.into_raw())
        }
        3 => {
            let buf = img.to_rgb8();
            let (w, h) = buf.dimensions();
            (w, h, buf.into_raw())
        }
        4 => {
            let buf = img.to_rgba8();
            let (w, h) = buf.dimensions();
            (w, h, buf.into_raw())
        }
        other => return Err(DecodeError::UnsupportedChannels(other)),
    };

    let samples = raw.into_iter().map(|v| f64::from(v) / 255.0).collect();
    let buffer = PixelBuffer::new(width as usize, height as usize, channels as usize, samples)?;
    log::debug!(
        "Decoded {}x{} image with {} channel(s)",
        buffer.width(),
        buffer.height(),
        buffer.channels()
    );
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, RgbaImage};

    #[test]
    fn test_rgb_samples_normalised() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 51]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));

        let buf = from_dynamic(&DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 1);
        assert_eq!(buf.channels(), 3);
        assert_eq!(buf.get(0, 0).unwrap(), &[1.0, 0.0, 0.2]);
        assert_eq!(buf.get(1, 0).unwrap(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_gray_keeps_single_channel() {
        let img = GrayImage::from_pixel(3, 2, Luma([255]));
        let buf = from_dynamic(&DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!(buf.channels(), 1);
        assert_eq!(buf.samples(), &[1.0; 6]);
    }

    #[test]
    fn test_rgba_keeps_alpha() {
        let img = RgbaImage::new(1, 1);
        let buf = from_dynamic(&DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(buf.channels(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/definitely-missing.png")).unwrap_err();
        assert!(matches!(err, DecodeError::Image(_)));
    }
}
