use std::path::Path;

use tracing::{info, instrument, warn};

use crate::inference_pipeline::{
    bmp::{BmpDecoder, ImageDecoder, RawImage},
    classification::types::ClassificationConfig,
    common::error::{ClassifyError, Result},
    engine::{InferenceEngine, TensorShape},
    scores::{dequantize, rank, truncate_top_k, RankedScore},
};

pub struct ClassificationPipeline<D: ImageDecoder, E: InferenceEngine> {
    decoder: D,
    engine: E,
    config: ClassificationConfig,
}

impl<E: InferenceEngine> ClassificationPipeline<BmpDecoder, E> {
    pub fn new(engine: E, config: ClassificationConfig) -> Self {
        Self {
            decoder: BmpDecoder,
            engine,
            config,
        }
    }
}

impl<D: ImageDecoder, E: InferenceEngine> ClassificationPipeline<D, E> {
    pub fn with_custom(decoder: D, engine: E, config: ClassificationConfig) -> Self {
        Self {
            decoder,
            engine,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ClassifyError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    fn validate_shape(&self, image: &RawImage) -> Result<()> {
        if !self.config.validate_shape {
            return Ok(());
        }

        let expected = self.engine.input_shape();
        let actual = TensorShape::for_image(image);
        if expected != actual {
            warn!(%expected, %actual, "Input tensor shape does not match input image");
            return Err(ClassifyError::ShapeMismatch { expected, actual });
        }

        Ok(())
    }

    /// Decodes `image_data`, runs the engine and ranks its output.
    #[instrument(skip(self, image_data), fields(input_size = image_data.len()))]
    pub fn classify(&mut self, image_data: &[u8]) -> Result<Vec<RankedScore>> {
        info!("Starting classification");

        let image = {
            let _span = tracing::info_span!("decode_image").entered();
            self.decoder.decode_image(image_data)?
        };

        self.classify_image(&image)
    }

    /// Runs the engine on an already decoded image and ranks its output.
    pub fn classify_image(&mut self, image: &RawImage) -> Result<Vec<RankedScore>> {
        {
            let _span = tracing::info_span!("validate_input",
                width = image.width(),
                height = image.height(),
                channels = image.channels().count()
            ).entered();
            self.validate_dimensions(image.width(), image.height())?;
            self.validate_shape(image)?;
        }

        let output = {
            let _span = tracing::info_span!("invoke").entered();
            self.engine.invoke(image.pixels())?
        };

        let results = {
            let _span = tracing::info_span!("rank", threshold = self.config.threshold).entered();
            let ranking = rank(&dequantize(&output), self.config.threshold);
            match self.config.top_k {
                Some(k) => truncate_top_k(ranking, k),
                None => ranking,
            }
        };

        info!(results = results.len(), "Classification complete");
        Ok(results)
    }

    #[instrument(skip(self, image_path))]
    pub fn classify_file<P: AsRef<Path>>(&mut self, image_path: P) -> Result<Vec<RankedScore>> {
        let image_path = image_path.as_ref();

        info!(image = %image_path.display(), "Classifying file");

        let image_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(image_path).map_err(|e| {
                ClassifyError::InputReadError(format!("{}: {}", image_path.display(), e))
            })?
        };

        self.classify(&image_data)
    }

    pub fn config(&self) -> &ClassificationConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ClassificationConfig) {
        self.config = config;
    }
}
