//! Floating-point pixel buffers and image decoding.

mod buffer;
pub mod decode;
mod error;

pub use buffer::PixelBuffer;
pub(crate) use buffer::sample_count;
pub use decode::DecodeError;
pub use error::{ErrorKind, PixelError};
