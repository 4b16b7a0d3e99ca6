//! Score types

/// Raw 8-bit output samples with their affine calibration.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedBuffer {
    /// Unsigned 8-bit samples in output order
    pub data: Vec<u8>,
    /// Multiplier applied after removing the zero point
    pub scale: f32,
    /// Sample value that maps to 0.0
    pub zero_point: i32,
}

impl QuantizedBuffer {
    pub fn new(data: Vec<u8>, scale: f32, zero_point: i32) -> Self {
        Self {
            data,
            scale,
            zero_point,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A retained score paired with its position in the unfiltered input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedScore {
    pub index: usize,
    pub value: f32,
}
