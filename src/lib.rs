//! DANFE generation: an NF-e invoice record in, a paginated PDF out.
//!
//! ```ignore
//! use danfe::{InvoiceRecord, PipelineBuilder};
//!
//! let record = InvoiceRecord::from_json(&std::fs::read_to_string("nfe.json")?)?;
//! let pipeline = PipelineBuilder::new().with_max_rows_per_page(25).build()?;
//! pipeline.generate_to_file(&record, "danfe.pdf")?;
//! ```
//!
//! Layout is pure and deterministic: [`DocumentPipeline::layout`] returns the
//! pages of draw commands, which the PDF backend then writes.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{DocumentPipeline, PipelineBuilder};

pub use danfe_invoice::{AccessKey, DataGap, GapKind, InvoiceRecord};
pub use danfe_layout::{LayoutConfig, LayoutError};
pub use danfe_render_core::RenderError;
pub use danfe_symbols::ErrorCorrection;
pub use danfe_types::{DrawCommand, Page};
