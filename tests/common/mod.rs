#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use danfe::{DocumentPipeline, InvoiceRecord, PipelineBuilder, PipelineError};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of one page, 1-based.
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn default_pipeline() -> DocumentPipeline {
    PipelineBuilder::new()
        .build()
        .expect("default configuration is valid")
}

/// Generate a PDF for `record` with the default configuration
pub fn generate_pdf(record: &InvoiceRecord) -> Result<GeneratedPdf, PipelineError> {
    generate_pdf_with(&default_pipeline(), record)
}

pub fn generate_pdf_with(
    pipeline: &DocumentPipeline,
    record: &InvoiceRecord,
) -> Result<GeneratedPdf, PipelineError> {
    let bytes = pipeline.generate_to_vec(record)?;
    GeneratedPdf::from_bytes(bytes).map_err(|e| PipelineError::Task(e.to_string()))
}
