//! Machine-readable symbols embedded in a DANFE: the Code 128 subset C
//! barcode of the access key and the QR verification code.
//!
//! Both encoders return backend-agnostic data (`BarModule` runs and a
//! `ModuleMatrix`) that any renderer can draw.

pub mod code128;
pub mod error;
pub mod qr;

pub use code128::{Code128, decode, encode, encode_digits, sanitize};
pub use error::{DecodeError, EncodingError};
pub use qr::{ErrorCorrection, encode_matrix, verification_payload};
