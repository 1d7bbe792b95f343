//! Monetary and quantity formatting with the Brazilian decimal comma.

use crate::document::group_from_right;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Printed for any amount that is missing or cannot be read as a number.
pub const ZERO_CURRENCY: &str = "0,00";

/// A value that may carry a monetary amount.
///
/// Implemented for decimals, floats, integers, numeric-like strings and
/// `Option`s of those, so callers can pass record fields as they are.
pub trait MonetaryValue {
    /// The amount, or `None` when the value is missing, NaN or unparsable.
    fn to_decimal(&self) -> Option<Decimal>;
}

impl MonetaryValue for Decimal {
    fn to_decimal(&self) -> Option<Decimal> {
        Some(*self)
    }
}

impl MonetaryValue for f64 {
    fn to_decimal(&self) -> Option<Decimal> {
        if !self.is_finite() {
            return None;
        }
        Decimal::try_from(*self).ok()
    }
}

impl MonetaryValue for f32 {
    fn to_decimal(&self) -> Option<Decimal> {
        f64::from(*self).to_decimal()
    }
}

macro_rules! integer_monetary_value {
    ($($t:ty),*) => {
        $(impl MonetaryValue for $t {
            fn to_decimal(&self) -> Option<Decimal> {
                Some(Decimal::from(*self))
            }
        })*
    };
}

integer_monetary_value!(i32, i64, u32, u64);

impl MonetaryValue for str {
    fn to_decimal(&self) -> Option<Decimal> {
        parse_decimal(self)
    }
}

impl MonetaryValue for String {
    fn to_decimal(&self) -> Option<Decimal> {
        parse_decimal(self)
    }
}

impl<T: MonetaryValue + ?Sized> MonetaryValue for &T {
    fn to_decimal(&self) -> Option<Decimal> {
        (**self).to_decimal()
    }
}

impl<T: MonetaryValue> MonetaryValue for Option<T> {
    fn to_decimal(&self) -> Option<Decimal> {
        self.as_ref().and_then(MonetaryValue::to_decimal)
    }
}

/// Reads a numeric-like string.
///
/// Accepts `1234.56`, `1234,56`, `1.234,56` and scientific notation. Returns
/// `None` for blank or unparsable text.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    let normalized = if text.contains(',') {
        text.replace('.', "").replace(',', ".")
    } else {
        text.to_string()
    };
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}

/// Formats an amount with two decimals and a comma separator, without
/// thousands grouping.
///
/// Total: missing, NaN and unparsable values print `0,00`, negative amounts
/// print their absolute value. The result always has the shape `\d+,\d{2}`.
pub fn format_currency(value: impl MonetaryValue) -> String {
    match value.to_decimal() {
        Some(amount) => {
            let (int_part, frac_part) = fixed(amount, 2);
            format!("{int_part},{frac_part}")
        }
        None => ZERO_CURRENCY.to_string(),
    }
}

/// Like [`format_currency`] but with `.` as thousands separator
/// (`16.500,00`).
pub fn format_currency_grouped(value: impl MonetaryValue) -> String {
    format_decimal(value, 2)
}

/// Quantities are printed with four decimals (`1,0000`).
pub fn format_quantity(value: impl MonetaryValue) -> String {
    format_decimal(value, 4)
}

/// Absolute value with `places` decimals, grouped thousands and a decimal
/// comma. Missing values print as zero.
pub fn format_decimal(value: impl MonetaryValue, places: u32) -> String {
    let amount = value.to_decimal().unwrap_or(Decimal::ZERO);
    let (int_part, frac_part) = fixed(amount, places);
    let grouped = group_from_right(&int_part, '.');
    if frac_part.is_empty() {
        grouped
    } else {
        format!("{grouped},{frac_part}")
    }
}

/// Splits `|amount|`, rounded half away from zero to `places`, into its
/// integer and fractional digits.
fn fixed(amount: Decimal, places: u32) -> (String, String) {
    let mut rounded = amount
        .abs()
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    let text = rounded.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, String::new()),
    };
    // `rescale` keeps a smaller scale when the mantissa has no room left.
    let frac_part = format!("{frac_part:0<width$}", width = places as usize);
    (int_part, frac_part)
}
