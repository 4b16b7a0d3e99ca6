//! Common utilities module
//!
//! This module contains the error types shared across the inference pipeline.

pub mod error;

pub use error::{ClassifyError, DecodeError, Result};
