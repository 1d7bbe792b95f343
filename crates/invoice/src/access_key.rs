use danfe_format::digits_only;
use serde::Deserialize;
use std::fmt;

/// Number of digits in an NF-e access key.
pub const ACCESS_KEY_LEN: usize = 44;

/// How the key of a record was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Valid,
    Missing,
    Malformed,
}

/// The 44-digit access key ("chave de acesso") of an invoice.
///
/// Construction never fails. Separators are ignored; a value that is not
/// exactly 44 digits is replaced by 44 zeros and its status records why.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub struct AccessKey {
    digits: String,
    status: KeyStatus,
}

impl AccessKey {
    pub fn new(raw: &str) -> Self {
        let digits = digits_only(raw);
        if digits.len() == ACCESS_KEY_LEN {
            return Self {
                digits,
                status: KeyStatus::Valid,
            };
        }
        let status = if raw.trim().is_empty() {
            KeyStatus::Missing
        } else {
            KeyStatus::Malformed
        };
        Self {
            digits: "0".repeat(ACCESS_KEY_LEN),
            status,
        }
    }

    /// The all-zero key used when none was supplied.
    pub fn placeholder() -> Self {
        Self::new("")
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn status(&self) -> KeyStatus {
        self.status
    }

    pub fn is_substituted(&self) -> bool {
        self.status != KeyStatus::Valid
    }
}

impl Default for AccessKey {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl From<Option<String>> for AccessKey {
    fn from(raw: Option<String>) -> Self {
        Self::new(raw.as_deref().unwrap_or_default())
    }
}

impl From<&str> for AccessKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for AccessKey {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits)
    }
}
