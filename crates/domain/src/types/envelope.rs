//! The `{code, data, error}` wrapper every endpoint responds with

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de::{lenient_i64, lenient_string};

/// Decoded response envelope
///
/// `code` is the application status echoed by the API and is independent of
/// the HTTP status. `data` stays schema-less here; typed decoding happens one
/// tier up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    #[serde(deserialize_with = "lenient_i64")]
    pub code: i64,
    pub data: Value,
    #[serde(deserialize_with = "nullable_error")]
    pub error: ErrorObject,
}

impl Envelope {
    /// The embedded error, if it carries a type or a message.
    pub fn failure(&self) -> Option<&ErrorObject> {
        (!self.error.is_empty()).then_some(&self.error)
    }
}

/// Application error embedded in an envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorObject {
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_string")]
    pub message: String,
}

impl ErrorObject {
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty() && self.message.is_empty()
    }
}

fn nullable_error<'de, D>(deserializer: D) -> Result<ErrorObject, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<ErrorObject>::deserialize(deserializer).map(Option::unwrap_or_default)
}
