pub mod inference_pipeline;
pub mod logger;
