//! Deserializers that accept the loosely typed JSON produced by invoice
//! importers: numbers where text is expected, numeric strings where amounts
//! are expected, and `null` where a collection or sub-record is expected.

use danfe_format::parse_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// An amount given as a JSON number or a numeric-like string.
/// Anything unparsable becomes `None`.
pub fn amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(&s),
        _ => None,
    }))
}

/// Text that may arrive as a JSON number (`"numero": 1134`).
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

/// `null` deserializes as the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "amount")]
        value: Option<Decimal>,
        #[serde(deserialize_with = "text")]
        label: Option<String>,
        #[serde(deserialize_with = "null_as_default")]
        items: Vec<u32>,
    }

    fn parse_sample(json: &str) -> Sample {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn amounts_from_numbers_and_strings() {
        assert_eq!(parse_sample(r#"{"value": 100.5}"#).value, Some(Decimal::new(1005, 1)));
        assert_eq!(parse_sample(r#"{"value": "100,50"}"#).value, Some(Decimal::new(10050, 2)));
        assert_eq!(parse_sample(r#"{"value": "abc"}"#).value, None);
        assert_eq!(parse_sample(r#"{"value": null}"#).value, None);
        assert_eq!(parse_sample(r#"{"value": [1]}"#).value, None);
        assert_eq!(parse_sample("{}").value, None);
    }

    #[test]
    fn text_from_numbers() {
        assert_eq!(parse_sample(r#"{"label": 1134}"#).label.as_deref(), Some("1134"));
        assert_eq!(parse_sample(r#"{"label": "A"}"#).label.as_deref(), Some("A"));
        assert_eq!(parse_sample(r#"{"label": {}}"#).label, None);
    }

    #[test]
    fn null_collections_are_empty() {
        assert!(parse_sample(r#"{"items": null}"#).items.is_empty());
        assert_eq!(parse_sample(r#"{"items": [1, 2]}"#).items, vec![1, 2]);
    }
}
