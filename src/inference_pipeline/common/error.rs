use thiserror::Error;

use crate::inference_pipeline::engine::TensorShape;

/// Failure while decoding a bitmap stream. No partial image is ever returned.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Bitmap stream ended before the expected data was read")]
    Truncated,

    #[error("Missing 'BM' signature")]
    BadSignature,

    #[error("Unsupported bits per pixel: {0} (expected 8 or 24)")]
    UnsupportedChannelCount(u16),

    #[error("Unsupported compression method: {0}")]
    UnsupportedCompression(u32),

    #[error("Invalid image width: {0}")]
    InvalidWidth(i32),

    #[error("Unable to skip forward in bitmap stream")]
    SeekFailed,

    #[error("Image dimensions too large: width={0}, height={1}")]
    DimensionsTooLarge(usize, usize),

    #[error("IO error while decoding: {0}")]
    Io(#[source] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] DecodeError),

    #[error("Cannot read labels from {0}")]
    Labels(String),

    #[error("No connected TPU found")]
    NoDevice,

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Input tensor shape {expected} does not match input image {actual}")]
    ShapeMismatch {
        expected: TensorShape,
        actual: TensorShape,
    },

    #[error("Inference failed: {0}")]
    InferenceError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
