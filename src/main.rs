mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use edgetpu_classify_rs::inference_pipeline::{
    bmp::decode_file,
    classification::render_results,
    device::{first_device, render_device_list},
    ClassificationConfig, ClassificationPipeline, DeviceEnumerator, LabelMap,
    RecordedOutputEngine, SysfsDeviceEnumerator,
};
use edgetpu_classify_rs::logger;
use tracing::info;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Command::Devices { root, require } => {
            let enumerator = SysfsDeviceEnumerator::with_root(root);
            if require {
                first_device(&enumerator)?;
            }
            let devices = enumerator
                .list_devices()
                .context("Cannot enumerate devices")?;
            for line in render_device_list(&devices) {
                println!("{}", line);
            }
        }

        Command::Decode { image } => {
            let decoded = decode_file(&image)
                .with_context(|| format!("Cannot read image from {}", image.display()))?;
            println!(
                "{} {} {}",
                decoded.width(),
                decoded.height(),
                decoded.channels()
            );
        }

        Command::Classify {
            labels,
            image,
            threshold,
            output_tensor,
            input_shape,
            scale,
            zero_point,
            top_k,
        } => {
            let labels = LabelMap::from_file(&labels)
                .with_context(|| format!("Cannot read labels from {}", labels.display()))?;

            let engine = RecordedOutputEngine::from_file(&output_tensor, input_shape, scale, zero_point)
                .with_context(|| format!("Cannot read output tensor from {}", output_tensor.display()))?;

            let config = ClassificationConfig::builder()
                .threshold(threshold)
                .top_k(top_k)
                .build();
            let mut pipeline = ClassificationPipeline::new(engine, config);
            info!(
                threshold = pipeline.config().threshold,
                input_shape = %input_shape,
                "Classification pipeline initialized"
            );

            let results = pipeline
                .classify_file(&image)
                .with_context(|| format!("Cannot classify {}", image.display()))?;

            for line in render_results(&results, &labels) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
