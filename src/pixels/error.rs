//! Error types for pixel buffer operations.

/// Broad category of a [`PixelError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A pixel coordinate was outside the buffer.
    OutOfRange,
    /// An argument had the wrong shape or value.
    InvalidArgument,
}

/// Errors raised by buffer access and image transforms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PixelError {
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("pixel has {got} channels, image has {expected}")]
    ChannelMismatch { expected: usize, got: usize },

    #[error("kernel must be 3x3 (9 elements), got {0}")]
    KernelSize(usize),

    #[error("image must have at least 3 channels for grayscale conversion, got {0}")]
    NotEnoughChannels(usize),

    #[error("expected {expected} samples, got {got}")]
    SampleCount { expected: usize, got: usize },

    #[error("image dimensions and channel count must be non-zero")]
    EmptyImage,

    #[error("character ratio must be positive and finite, got {0}")]
    InvalidRatio(f64),

    #[error("target width and height must be at least 1")]
    EmptyTarget,

    #[error("{width}x{height}x{channels} image is too large")]
    TooLarge {
        width: usize,
        height: usize,
        channels: usize,
    },
}

impl PixelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PixelError::OutOfRange { .. } => ErrorKind::OutOfRange,
            _ => ErrorKind::InvalidArgument,
        }
    }
}
