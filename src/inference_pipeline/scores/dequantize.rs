use tracing::debug;

use crate::inference_pipeline::scores::types::QuantizedBuffer;

/// Maps every sample to `scale * (sample - zero_point)`, preserving order and length.
///
/// The difference is taken in `i64` so any `zero_point` is accepted.
pub fn dequantize(buffer: &QuantizedBuffer) -> Vec<f32> {
    debug!(
        samples = buffer.len(),
        scale = buffer.scale,
        zero_point = buffer.zero_point,
        "Dequantizing output"
    );

    buffer
        .data
        .iter()
        .map(|&sample| buffer.scale * (i64::from(sample) - i64::from(buffer.zero_point)) as f32)
        .collect()
}
