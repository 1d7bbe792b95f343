//! Foundation types shared by the DANFE crates.
//!
//! Nothing here depends on an invoice or on a PDF library: these are the
//! values that flow between the layout phase and a render backend.

pub mod command;
pub mod cursor;
pub mod geometry;

pub use command::{BarModule, DrawCommand, FontWeight, ModuleMatrix, Page, SymbolKind};
pub use cursor::DrawCursor;
pub use geometry::{Rect, Size};
