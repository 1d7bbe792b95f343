use danfe_layout::LayoutError;
use danfe_render_core::RenderError;
use thiserror::Error;

/// Everything that can stop a DANFE from being produced.
///
/// Missing or malformed invoice data is not an error: it is printed as a
/// placeholder and reported as a [`DataGap`](danfe_invoice::DataGap).
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(String),
}
