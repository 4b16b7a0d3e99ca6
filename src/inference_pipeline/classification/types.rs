//! Classification configuration types

/// Configuration for a classification run
#[derive(Debug, Clone)]
pub struct ClassificationConfig {
    /// Inclusive lower bound a score must reach to be reported
    pub threshold: f32,
    /// Maximum number of results to report; `None` reports every score above the threshold
    pub top_k: Option<usize>,
    /// Whether to reject images with a zero width or height
    pub validate_dimensions: bool,
    /// Whether to check the decoded image against the engine's input tensor shape
    pub validate_shape: bool,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            top_k: None,
            validate_dimensions: true,
            validate_shape: true,
        }
    }
}

impl ClassificationConfig {
    pub fn builder() -> ClassificationConfigBuilder {
        ClassificationConfigBuilder::default()
    }
}

/// Builder for ClassificationConfig
#[derive(Default)]
pub struct ClassificationConfigBuilder {
    threshold: Option<f32>,
    top_k: Option<Option<usize>>,
    validate_dimensions: Option<bool>,
    validate_shape: Option<bool>,
}

impl ClassificationConfigBuilder {
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn top_k(mut self, top_k: Option<usize>) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn validate_shape(mut self, validate: bool) -> Self {
        self.validate_shape = Some(validate);
        self
    }

    pub fn build(self) -> ClassificationConfig {
        let default = ClassificationConfig::default();
        ClassificationConfig {
            threshold: self.threshold.unwrap_or(default.threshold),
            top_k: self.top_k.unwrap_or(default.top_k),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            validate_shape: self.validate_shape.unwrap_or(default.validate_shape),
        }
    }
}
