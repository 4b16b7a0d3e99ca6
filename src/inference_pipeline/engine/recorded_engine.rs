//! Engine that replays a captured output tensor.
//!
//! Useful for exercising the full pipeline on hosts without an accelerator
//! runtime: the output bytes come from a file dumped by a real run, the input
//! shape and calibration are supplied by the caller.

use std::path::Path;

use tracing::debug;

use crate::inference_pipeline::common::error::{ClassifyError, Result};
use crate::inference_pipeline::engine::inference_engine::InferenceEngine;
use crate::inference_pipeline::engine::types::TensorShape;
use crate::inference_pipeline::scores::types::QuantizedBuffer;

pub struct RecordedOutputEngine {
    input_shape: TensorShape,
    output: QuantizedBuffer,
}

impl RecordedOutputEngine {
    pub fn new(input_shape: TensorShape, output: QuantizedBuffer) -> Self {
        Self {
            input_shape,
            output,
        }
    }

    pub fn from_file<P: AsRef<Path>>(
        path: P,
        input_shape: TensorShape,
        scale: f32,
        zero_point: i32,
    ) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| {
            ClassifyError::InputReadError(format!("{}: {}", path.display(), e))
        })?;
        debug!("Loaded recorded output tensor, {} bytes", data.len());
        Ok(Self::new(input_shape, QuantizedBuffer::new(data, scale, zero_point)))
    }
}

impl InferenceEngine for RecordedOutputEngine {
    fn input_shape(&self) -> TensorShape {
        self.input_shape
    }

    fn invoke(&mut self, input: &[u8]) -> Result<QuantizedBuffer> {
        let expected = self.input_shape.element_count().ok_or_else(|| {
            ClassifyError::InferenceError(format!(
                "tensor {} is too large to address",
                self.input_shape
            ))
        })?;
        if input.len() != expected {
            return Err(ClassifyError::InferenceError(format!(
                "input holds {} bytes, tensor {} needs {}",
                input.len(),
                self.input_shape,
                expected
            )));
        }
        Ok(self.output.clone())
    }
}
