//! QR matrices for the verification link printed in the issuer block.
//!
//! The QR algorithm itself comes from the `qrcode` crate; this module only
//! builds the payload and converts the result into a [`ModuleMatrix`].

use crate::error::EncodingError;
use danfe_types::ModuleMatrix;
use qrcode::{Color, EcLevel, QrCode};
use serde::{Deserialize, Serialize};

/// QR error-correction level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

/// The public verification link of an access key: `<base_url>?chave=<key>`.
pub fn verification_payload(base_url: &str, key: &str) -> String {
    format!("{base_url}?chave={key}")
}

/// Encodes `payload` as a QR matrix at the given error-correction level.
pub fn encode_matrix(payload: &str, level: ErrorCorrection) -> Result<ModuleMatrix, EncodingError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), level.into())?;
    let dark = code
        .to_colors()
        .into_iter()
        .map(|color| color == Color::Dark)
        .collect();
    Ok(ModuleMatrix::new(code.width(), dark))
}
