use crate::error::RenderError;
use danfe_types::Page;
use std::io::{Seek, Write};

/// A backend that turns laid-out pages into a binary document.
///
/// Calls must follow `begin_document`, any number of `render_page`, then
/// `finish`, which hands the writer back.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError>;

    fn render_page(&mut self, page: &Page) -> Result<(), RenderError>;

    fn finish(self: Box<Self>) -> Result<W, RenderError>;

    /// Renders `pages` in order into `writer`.
    fn render_document(mut self: Box<Self>, pages: &[Page], writer: W) -> Result<W, RenderError> {
        self.begin_document(writer)?;
        for page in pages {
            self.render_page(page)?;
        }
        self.finish()
    }
}
