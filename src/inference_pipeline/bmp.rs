//! Bitmap decoding module
//!
//! This module turns uncompressed 8-bit grayscale and 24-bit color bitmaps
//! into a canonical top-down, RGB-ordered pixel buffer.

mod reader;
mod header;
mod bmp_decoder;
pub mod types;

#[cfg(test)]
mod tests;

pub use reader::ImageDecoder;
pub use bmp_decoder::{decode, decode_file, BmpDecoder};
pub use header::{BmpHeader, BMP_HEADER_SIZE};
pub use types::{ChannelCount, RawImage};
