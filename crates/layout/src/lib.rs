//! Layout of a DANFE: fixed-height section renderers threaded through a
//! [`DrawCursor`](danfe_types::DrawCursor), and the assembler that places
//! them on pages.
//!
//! Nothing in this crate performs I/O or touches a PDF library. The output is
//! a list of [`Page`](danfe_types::Page)s for a render backend.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

pub mod algorithms;
pub mod assembler;
pub mod config;
pub mod sections;
pub mod symbol;
pub mod text;

pub use assembler::{AssemblyState, DocumentAssembler, PAGE_TOTAL_TOKEN, layout_document};
pub use config::LayoutConfig;
pub use sections::{RenderContext, SECTION_MARGIN, SectionKind, SectionOutput};
