use std::path::PathBuf;

use clap::{Parser, Subcommand};

use edgetpu_classify_rs::inference_pipeline::TensorShape;

/// Decode bitmaps for an image classifier and rank its quantized output.
#[derive(Parser, Debug)]
#[command(name = "edgetpu-classify", version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List attached accelerator devices
    Devices {
        /// Filesystem root to scan instead of `/`
        #[arg(long, default_value = "/")]
        root: PathBuf,

        /// Fail when no device is attached
        #[arg(long)]
        require: bool,
    },

    /// Decode a bitmap and print `<width> <height> <channels>`
    Decode {
        /// Uncompressed 8-bit grayscale or 24-bit color bitmap
        image: PathBuf,
    },

    /// Classify a bitmap against a recorded quantized output tensor
    Classify {
        /// Label file, one label per line, optionally prefixed by its index
        #[arg(short, long)]
        labels: PathBuf,

        /// Uncompressed 8-bit grayscale or 24-bit color bitmap
        #[arg(short, long)]
        image: PathBuf,

        /// Minimum score to report (inclusive)
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        threshold: f32,

        /// Raw uint8 output tensor captured from the model
        #[arg(long)]
        output_tensor: PathBuf,

        /// Model input shape as HEIGHTxWIDTHxCHANNELS, e.g. 224x224x3
        #[arg(long)]
        input_shape: TensorShape,

        /// Output tensor quantization scale
        #[arg(long)]
        scale: f32,

        /// Output tensor quantization zero point
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        zero_point: i32,

        /// Report at most this many results
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },
}
