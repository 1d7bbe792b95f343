//! Masks for identifiers: CNPJ/CPF, CEP, invoice number, series and the
//! 44-digit access key.

use crate::{PLACEHOLDER, non_blank};
use itertools::Itertools;

/// Keeps only the ASCII digits of `raw`.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Formats a CNPJ as `XX.XXX.XXX/XXXX-XX`.
///
/// Non-digits are ignored. Anything that is not exactly 14 digits, including
/// a missing value, yields the `N/I` placeholder.
pub fn format_fiscal_id(raw: Option<&str>) -> String {
    let d = digits_only(raw.unwrap_or_default());
    if d.len() != 14 {
        return PLACEHOLDER.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &d[0..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..14]
    )
}

/// Formats the document of a party, which may be a CPF (11 digits) or a CNPJ.
pub fn format_party_document(raw: Option<&str>) -> String {
    let d = digits_only(raw.unwrap_or_default());
    if d.len() == 11 {
        return format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11]);
    }
    format_fiscal_id(raw)
}

/// Formats a CEP as `XXXXX-XXX`.
///
/// A value with another number of digits is printed as its bare digits; an
/// empty one becomes `N/I`.
pub fn format_postal_code(raw: Option<&str>) -> String {
    let d = digits_only(raw.unwrap_or_default());
    match d.len() {
        0 => PLACEHOLDER.to_string(),
        8 => format!("{}-{}", &d[0..5], &d[5..8]),
        _ => d,
    }
}

/// Splits an access key into space-separated groups of four characters.
pub fn format_access_key(key: &str) -> String {
    key.chars()
        .chunks(4)
        .into_iter()
        .map(|group| group.collect::<String>())
        .join(" ")
}

/// Formats the invoice number as nine zero-padded digits grouped by three
/// (`000.001.134`).
pub fn format_invoice_number(raw: Option<&str>) -> String {
    let d = digits_only(raw.unwrap_or_default());
    if d.is_empty() {
        return PLACEHOLDER.to_string();
    }
    group_from_right(&format!("{d:0>9}"), '.')
}

/// Pads the series to three digits; a missing series prints as `001`.
pub fn format_series(raw: Option<&str>) -> String {
    let d = digits_only(raw.unwrap_or_default());
    if d.is_empty() {
        return "001".to_string();
    }
    format!("{d:0>3}")
}

/// Trimmed text, or `N/I` when the value is missing or blank.
pub fn or_placeholder(raw: Option<&str>) -> String {
    non_blank(raw).unwrap_or(PLACEHOLDER).to_string()
}

/// Inserts `separator` every three characters counting from the right.
pub(crate) fn group_from_right(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
