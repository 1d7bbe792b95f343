use crate::error::PipelineError;
use danfe_invoice::InvoiceRecord;
use danfe_layout::{LayoutConfig, layout_document};
use danfe_render_core::DocumentRenderer;
use danfe_render_lopdf::LopdfRenderer;
use danfe_types::Page;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;
use std::sync::Arc;
use tokio::task;

/// Lays out invoice records and renders them to PDF.
///
/// The pipeline holds only its validated configuration, so it is cheap to
/// clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct DocumentPipeline {
    config: Arc<LayoutConfig>,
}

fn render_pages<W>(pages: &[Page], writer: W) -> Result<W, PipelineError>
where
    W: Write + Seek + Send,
{
    let renderer: Box<LopdfRenderer<W>> = Box::new(LopdfRenderer::new());
    Ok(renderer.render_document(pages, writer)?)
}

impl DocumentPipeline {
    pub(super) fn new(config: LayoutConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out `record` without rendering it. Never fails: data gaps are
    /// logged and printed as placeholders.
    pub fn layout(&self, record: &InvoiceRecord) -> Vec<Page> {
        let pages = layout_document(record, &self.config);
        debug!(
            "Laid out NF-e {} on {} page(s)",
            record.numero.as_deref().unwrap_or("?"),
            pages.len()
        );
        pages
    }

    /// Generates the DANFE of `record` into `writer` and hands the writer back.
    pub fn generate<W>(&self, record: &InvoiceRecord, writer: W) -> Result<W, PipelineError>
    where
        W: Write + Seek + Send,
    {
        let pages = self.layout(record);
        render_pages(&pages, writer)
    }

    pub fn generate_to_vec(&self, record: &InvoiceRecord) -> Result<Vec<u8>, PipelineError> {
        Ok(self.generate(record, Cursor::new(Vec::new()))?.into_inner())
    }

    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        record: &InvoiceRecord,
        path: P,
    ) -> Result<(), PipelineError> {
        let path = path.as_ref();
        let writer = BufWriter::new(File::create(path)?);
        let mut writer = self.generate(record, writer)?;
        writer.flush()?;
        info!("Wrote DANFE to {}", path.display());
        Ok(())
    }

    /// Layout runs on the calling task; the PDF backend runs on tokio's
    /// blocking pool. Dropping the future abandons the result.
    pub async fn generate_async<W>(
        &self,
        record: &InvoiceRecord,
        writer: W,
    ) -> Result<W, PipelineError>
    where
        W: Write + Seek + Send + 'static,
    {
        let pages = self.layout(record);
        task::spawn_blocking(move || render_pages(&pages, writer))
            .await
            .map_err(|e| PipelineError::Task(e.to_string()))?
    }

    /// Renders every record in parallel on the rayon pool. Results come back
    /// in input order, one per record; a failure does not affect the others.
    #[cfg(feature = "rayon-executor")]
    pub fn generate_batch(&self, records: &[InvoiceRecord]) -> Vec<Result<Vec<u8>, PipelineError>> {
        use rayon::prelude::*;

        info!("Generating {} DANFE(s) in parallel", records.len());
        records
            .par_iter()
            .map(|record| self.generate_to_vec(record))
            .collect()
    }
}
