use super::orchestrator::DocumentPipeline;
use crate::error::PipelineError;
use danfe_layout::LayoutConfig;
use danfe_symbols::ErrorCorrection;
use std::fs;
use std::io;
use std::path::Path;

/// A builder for creating a `DocumentPipeline`.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: LayoutConfig,
}

impl PipelineBuilder {
    /// Creates a builder with the A4 defaults.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the whole layout configuration.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the layout configuration from a JSON file. Fields absent from the
    /// file keep their defaults.
    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read layout configuration from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.with_config_json(&source)
    }

    pub fn with_config_json(mut self, json: &str) -> Result<Self, PipelineError> {
        self.config = serde_json::from_str(json)
            .map_err(|e| PipelineError::Config(format!("Invalid layout configuration: {e}")))?;
        Ok(self)
    }

    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.config.page_width = width;
        self.config.page_height = height;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.config.margin = margin;
        self
    }

    /// Sets how many line items are drawn per page.
    pub fn with_max_rows_per_page(mut self, rows: usize) -> Self {
        self.config.max_rows_per_page = rows;
        self
    }

    pub fn with_verification_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.verification_base_url = url.into();
        self
    }

    pub fn with_error_correction(mut self, level: ErrorCorrection) -> Self {
        self.config.qr_error_correction = level;
        self
    }

    /// Validates the configuration and creates the `DocumentPipeline`.
    pub fn build(self) -> Result<DocumentPipeline, PipelineError> {
        self.config.validate()?;
        log::debug!(
            "Pipeline configured: {}x{} pt, margin {}, {} rows per page",
            self.config.page_width,
            self.config.page_height,
            self.config.margin,
            self.config.max_rows_per_page
        );
        Ok(DocumentPipeline::new(self.config))
    }
}
