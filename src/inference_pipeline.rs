//! Image classification pipeline module
//!
//! This module provides bitmap decoding, quantized score ranking, and the
//! orchestration that connects them through an inference engine handle.

pub mod bmp;
pub mod scores;
pub mod labels;
pub mod engine;
pub mod device;
pub mod classification;
pub mod common;

pub use common::{
    ClassifyError,
    DecodeError,
    Result,
};

pub use bmp::{
    BmpDecoder,
    ChannelCount,
    ImageDecoder,
    RawImage,
};

pub use scores::{
    dequantize,
    rank,
    QuantizedBuffer,
    RankedScore,
};

pub use labels::LabelMap;

pub use engine::{
    InferenceEngine,
    RecordedOutputEngine,
    TensorShape,
};

pub use device::{
    Device,
    DeviceEnumerator,
    DeviceKind,
    SysfsDeviceEnumerator,
};

pub use classification::{
    ClassificationConfig,
    ClassificationConfigBuilder,
    ClassificationPipeline,
};
