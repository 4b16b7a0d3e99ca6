use crate::inference_pipeline::bmp::types::RawImage;
use crate::inference_pipeline::common::error::Result;

pub trait ImageDecoder {
    fn decode_image(&self, data: &[u8]) -> Result<RawImage>;
}
