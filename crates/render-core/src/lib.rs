//! Render backend abstractions.
//!
//! This crate provides what every backend shares:
//! - the `DocumentRenderer` trait that turns pages of draw commands into bytes
//! - the `RenderError` type
//! - coordinate and font helpers

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentRenderer;
