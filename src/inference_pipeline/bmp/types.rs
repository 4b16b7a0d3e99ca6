//! Decoded image types

use std::fmt;

/// Number of interleaved 8-bit channels per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelCount {
    /// Single luminance channel
    Gray,
    /// Red, green, blue
    Rgb,
}

impl ChannelCount {
    /// Maps a bits-per-pixel header value to a channel count.
    ///
    /// The depth is divided by 8 with integer division, so only depths whose
    /// quotient is exactly 1 or 3 are accepted.
    pub fn from_bits_per_pixel(bits_per_pixel: u16) -> Option<Self> {
        match bits_per_pixel / 8 {
            1 => Some(Self::Gray),
            3 => Some(Self::Rgb),
            _ => None,
        }
    }

    pub fn count(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
        }
    }
}

impl fmt::Display for ChannelCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Canonical decoded image: rows top-down, channels in RGB order, no row padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    width: usize,
    height: usize,
    channels: ChannelCount,
    pixels: Vec<u8>,
}

impl RawImage {
    /// Builds an image, returning `None` when the buffer length does not match
    /// `width * height * channels`.
    pub fn new(width: usize, height: usize, channels: ChannelCount, pixels: Vec<u8>) -> Option<Self> {
        let expected = width
            .checked_mul(height)?
            .checked_mul(channels.count())?;
        if pixels.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> ChannelCount {
        self.channels
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}
