//! Tensor shape types

use std::fmt;
use std::str::FromStr;

use crate::inference_pipeline::bmp::types::RawImage;

/// NHWC shape of a uint8 image tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TensorShape {
    pub batch: usize,
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl TensorShape {
    pub fn new(height: usize, width: usize, channels: usize) -> Self {
        Self {
            batch: 1,
            height,
            width,
            channels,
        }
    }

    /// Shape an engine must declare to accept `image` unchanged.
    pub fn for_image(image: &RawImage) -> Self {
        Self::new(image.height(), image.width(), image.channels().count())
    }

    /// Number of bytes in the tensor, `None` if it does not fit in `usize`.
    pub fn element_count(&self) -> Option<usize> {
        self.batch
            .checked_mul(self.height)?
            .checked_mul(self.width)?
            .checked_mul(self.channels)
    }
}

impl fmt::Display for TensorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.batch, self.height, self.width, self.channels
        )
    }
}

/// Parses `HEIGHTxWIDTHxCHANNELS`, e.g. `224x224x3`.
impl FromStr for TensorShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dims = s
            .split('x')
            .map(|d| d.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid dimension in '{}': {}", s, e))?;

        match dims.as_slice() {
            &[height, width, channels] => Ok(Self::new(height, width, channels)),
            _ => Err(format!(
                "expected HEIGHTxWIDTHxCHANNELS, got '{}'",
                s
            )),
        }
    }
}
