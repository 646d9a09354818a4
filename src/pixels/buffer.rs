//! Dense floating-point pixel storage.

use super::error::PixelError;

/// A row-major, channel-interleaved grid of `f64` samples.
///
/// Samples are expected to lie in `[0, 1]` but this is not enforced.
/// The only way to mutate a buffer after construction is [`PixelBuffer::set`].
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: usize,
    samples: Vec<f64>,
}

impl PixelBuffer {
    /// Wrap existing samples.
    ///
    /// Fails if any dimension is zero or if `samples.len()` is not
    /// `width * height * channels`.
    pub fn new(
        width: usize,
        height: usize,
        channels: usize,
        samples: Vec<f64>,
    ) -> Result<Self, PixelError> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(PixelError::EmptyImage);
        }
        let expected = sample_count(width, height, channels)?;
        if samples.len() != expected {
            return Err(PixelError::SampleCount {
                expected,
                got: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    /// An all-zero buffer.
    pub fn zeros(width: usize, height: usize, channels: usize) -> Result<Self, PixelError> {
        let len = sample_count(width, height, channels)?;
        Self::new(width, height, channels, vec![0.0; len])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// All samples in row-major, channel-interleaved order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * self.channels)
    }

    /// Channel values of pixel `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[f64]> {
        self.offset(x, y)
            .map(|start| &self.samples[start..start + self.channels])
    }

    /// Channel values of pixel `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<&[f64], PixelError> {
        self.pixel(x, y).ok_or(PixelError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Overwrite the channels of pixel `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, values: &[f64]) -> Result<(), PixelError> {
        if values.len() != self.channels {
            return Err(PixelError::ChannelMismatch {
                expected: self.channels,
                got: values.len(),
            });
        }
        let start = self.offset(x, y).ok_or(PixelError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.samples[start..start + self.channels].copy_from_slice(values);
        Ok(())
    }

    /// Mean channel values over `x1 <= x < x2`, `y1 <= y < y2`.
    ///
    /// Bounds are clamped to the buffer. An empty region yields zeros.
    pub fn average_region(&self, x1: usize, x2: usize, y1: usize, y2: usize) -> Vec<f64> {
        let mut average = vec![0.0; self.channels];

        let x1 = x1.min(self.width);
        let x2 = x2.min(self.width);
        let y1 = y1.min(self.height);
        let y2 = y2.min(self.height);

        if x2 <= x1 || y2 <= y1 {
            return average;
        }

        for y in y1..y2 {
            let row_start = (y * self.width + x1) * self.channels;
            let row_end = (y * self.width + x2) * self.channels;
            for pixel in self.samples[row_start..row_end].chunks_exact(self.channels) {
                for (acc, &value) in average.iter_mut().zip(pixel) {
                    *acc += value;
                }
            }
        }

        let count = ((x2 - x1) * (y2 - y1)) as f64;
        for acc in &mut average {
            *acc /= count;
        }
        average
    }
}

/// `width * height * channels`, or an error if it overflows.
pub(crate) fn sample_count(
    width: usize,
    height: usize,
    channels: usize,
) -> Result<usize, PixelError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(PixelError::TooLarge {
            width,
            height,
            channels,
        })
}
