use crate::inference_pipeline::common::error::Result;
use crate::inference_pipeline::engine::types::TensorShape;
use crate::inference_pipeline::scores::types::QuantizedBuffer;

pub trait InferenceEngine {
    /// Shape of the single uint8 input tensor, `[1, height, width, channels]`.
    fn input_shape(&self) -> TensorShape;

    /// Runs inference on a canonical pixel buffer and returns the quantized output tensor.
    fn invoke(&mut self, input: &[u8]) -> Result<QuantizedBuffer>;
}
