//! Tolerant field deserializers.
//!
//! Older app builds stored numbers as form-field strings and left unset
//! fields as `""`. These helpers accept both spellings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Decimal kept as text. Accepts a JSON number or string; blank becomes `None`.
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;

    Ok(match value {
        Some(NumberOrText::Number(n)) => Some(n.to_string()),
        Some(NumberOrText::Text(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Decimal kept as text, empty when absent.
pub fn decimal_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_decimal(deserializer).map(Option::unwrap_or_default)
}

/// Numeric amount. A number or numeric string parses; anything else is unknown.
pub fn optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite()))
}
