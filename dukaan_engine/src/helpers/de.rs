//! Lenient deserializers for request payloads.
//!
//! The mobile and web clients are not consistent about sending ids and amounts as JSON numbers or as strings, so the
//! payload types accept either.
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
        }
    }
}

/// Accepts `"12"` or `12` and returns `"12"`.
pub fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_string)
}

/// Like [`string_or_number`], but `null` becomes `None`. Use with `#[serde(default)]` so that absent fields are
/// `None` too.
pub fn opt_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Option::<StringOrNumber>::deserialize(deserializer).map(|v| v.map(StringOrNumber::into_string))
}

/// Accepts `2.5`, `2` or `"2.5"`. `null` and blank strings become `None`.
pub fn opt_number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        #[allow(clippy::cast_precision_loss)]
        Some(StringOrNumber::Int(i)) => Ok(Some(i as f64)),
        Some(StringOrNumber::Float(f)) => Ok(Some(f)),
        Some(StringOrNumber::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(StringOrNumber::Text(s)) => {
            s.trim().parse::<f64>().map(Some).map_err(|_| serde::de::Error::custom(format!("{s} is not a number")))
        },
    }
}
