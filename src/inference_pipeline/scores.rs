//! Score ranking module
//!
//! Converts a quantized output tensor into calibrated scores and ranks them.

mod dequantize;
mod rank;
pub mod types;


pub use dequantize::dequantize;
pub use rank::{rank, truncate_top_k};
pub use types::{QuantizedBuffer, RankedScore};
