//! Formatting utilities for DANFE fields.
//!
//! Every function here is total: for any input, including missing, empty and
//! malformed values, it returns a printable string and never panics. This is
//! where placeholder substitution lives, so section renderers can print record
//! fields without checking them first.

pub mod date;
pub mod document;
pub mod money;

pub use date::{format_date, format_date_time, format_time};
pub use document::{
    digits_only, format_access_key, format_fiscal_id, format_invoice_number, format_party_document,
    format_postal_code, format_series, or_placeholder,
};
pub use money::{
    MonetaryValue, ZERO_CURRENCY, format_currency, format_currency_grouped, format_decimal,
    format_quantity, parse_decimal,
};

/// Printed in place of any missing or unusable identifier ("não informado").
pub const PLACEHOLDER: &str = "N/I";

/// The trimmed value, or `None` when it is missing or only whitespace.
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
