/// Serde helper functions for custom serialization/deserialization
use serde::{Deserialize, Deserializer};

/// Skip serializing if value is zero
pub fn is_zero_i64(value: &i64) -> bool {
    *value == 0
}

/// Accept either a JSON string or a JSON number for an identifier
///
/// Imported files frequently write ids as bare numbers (`"PID": 1`).
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}
