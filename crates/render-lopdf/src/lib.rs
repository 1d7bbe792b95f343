//! Streaming PDF backend using lopdf.
//!
//! Pages are translated into PDF content streams and written as soon as
//! they are rendered; only the page tree and catalog wait for `finish`.
//! Text uses the standard Helvetica faces with WinAnsi encoding, so no font
//! files are embedded.

mod content;
mod renderer;
mod writer;

pub use content::{PageContext, encode_page};
pub use renderer::LopdfRenderer;
pub use writer::StreamingPdfWriter;
