//! Document generation pipeline.
//!
//! - [`PipelineBuilder`]: fluent builder that validates the layout
//!   configuration
//! - [`DocumentPipeline`]: lays out records and renders them to PDF, either
//!   synchronously, on a tokio blocking thread or as a rayon batch

mod builder;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use orchestrator::DocumentPipeline;
