use crate::content::encode_page;
use crate::writer::StreamingPdfWriter;
use danfe_render_core::utils::font_for;
use danfe_render_core::{DocumentRenderer, RenderError};
use danfe_types::{FontWeight, Page};
use lopdf::{Dictionary, Object, dictionary};
use std::io::{Seek, Write};

const PDF_VERSION: &str = "1.7";

/// A PDF renderer using the `lopdf` library. Each page is written to the
/// output as soon as it is rendered.
pub struct LopdfRenderer<W: Write + Seek + Send> {
    writer: Option<StreamingPdfWriter<W>>,
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    pub fn new() -> Self {
        Self { writer: None }
    }

    /// Number of pages written so far.
    pub fn page_count(&self) -> usize {
        self.writer.as_ref().map_or(0, StreamingPdfWriter::page_count)
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or(RenderError::State("Document not started"))
    }

    fn write_encoded(&mut self, page: &Page, encoded: Vec<u8>) -> Result<(), RenderError> {
        let writer = self.writer_mut()?;
        let content_id = writer.write_content_stream(encoded)?;
        writer.write_page(content_id, page.width, page.height)?;
        log::debug!("Wrote page {} ({} commands)", writer.page_count(), page.commands.len());
        Ok(())
    }
}

impl<W: Write + Seek + Send> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

fn font_dictionary() -> Dictionary {
    let mut font_dict = Dictionary::new();
    for weight in [FontWeight::Regular, FontWeight::Bold] {
        let (internal_name, base_font) = font_for(weight);
        let single_font_dict = dictionary! {
            "Type" => "Font", "Subtype" => "Type1", "BaseFont" => base_font, "Encoding" => "WinAnsiEncoding",
        };
        font_dict.set(internal_name.as_bytes(), Object::Dictionary(single_font_dict));
    }
    font_dict
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError> {
        if self.writer.is_some() {
            return Err(RenderError::State("Document already started"));
        }
        self.writer = Some(StreamingPdfWriter::new(writer, PDF_VERSION, font_dictionary())?);
        Ok(())
    }

    fn render_page(&mut self, page: &Page) -> Result<(), RenderError> {
        // Fail before encoding when the document was never started.
        self.writer_mut()?;
        let encoded = encode_page(page)?;
        self.write_encoded(page, encoded)
    }

    fn finish(self: Box<Self>) -> Result<W, RenderError> {
        let mut renderer = *self;
        match renderer.writer.take() {
            Some(internal_writer) => Ok(internal_writer.finish()?),
            None => Err(RenderError::State(
                "Document was never started with begin_document",
            )),
        }
    }

    /// With `parallel-render`, content streams are encoded on the rayon pool
    /// and then written in page order.
    #[cfg(feature = "parallel-render")]
    fn render_document(mut self: Box<Self>, pages: &[Page], writer: W) -> Result<W, RenderError> {
        use rayon::prelude::*;

        self.begin_document(writer)?;
        let encoded: Vec<Vec<u8>> = pages
            .par_iter()
            .map(encode_page)
            .collect::<Result<_, _>>()?;
        for (page, bytes) in pages.iter().zip(encoded) {
            self.write_encoded(page, bytes)?;
        }
        self.finish()
    }
}
