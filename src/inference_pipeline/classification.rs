//! Classification orchestration module
//!
//! Wires a decoder, an inference engine and the score ranker into a single
//! image-in, ranking-out pipeline.

mod pipeline;
mod render;
pub mod types;


pub use pipeline::ClassificationPipeline;
pub use render::{render_result, render_results};
pub use types::{ClassificationConfig, ClassificationConfigBuilder};
