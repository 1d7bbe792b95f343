use qrcode::types::QrError;
use thiserror::Error;

/// A symbol could not be produced from its payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Invalid character {character:?} at position {position}: subset C encodes digits only")]
    InvalidDigits { position: usize, character: char },

    #[error("Subset C encodes digit pairs, got {0} digit(s)")]
    OddLength(usize),

    #[error("QR matrix generation failed: {0}")]
    Matrix(QrError),
}

impl From<QrError> for EncodingError {
    fn from(err: QrError) -> Self {
        EncodingError::Matrix(err)
    }
}

/// A module sequence is not a valid Code 128 subset C symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Module sequence too short: {0} element(s)")]
    Truncated(usize),

    #[error("Element {0} breaks the bar/space alternation")]
    BrokenAlternation(usize),

    #[error("Symbol {index} does not match any Code 128 pattern")]
    UnknownPattern { index: usize },

    #[error("Expected start C (105), found {0}")]
    WrongStart(u8),

    #[error("Missing stop pattern")]
    MissingStop,

    #[error("Symbol value {0} is not a digit pair")]
    NotDigitPair(u8),

    #[error("Checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },
}
