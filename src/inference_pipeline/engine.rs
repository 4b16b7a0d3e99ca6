//! Inference engine module
//!
//! The inference runtime is an external collaborator. This module defines the
//! handle the pipeline talks to and an engine that replays a captured output
//! tensor.

mod inference_engine;
mod recorded_engine;
pub mod types;

pub use inference_engine::InferenceEngine;
pub use recorded_engine::RecordedOutputEngine;
pub use types::TensorShape;
