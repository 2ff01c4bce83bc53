//! Error types for payload validation.

use thiserror::Error;

/// The payload does not have the expected top-level shape.
///
/// This is the only failure the alert pipeline reports. Gaps inside a
/// single record are tolerated and never surface here.
#[derive(Debug, Error)]
pub enum MalformedInputError {
    /// Payload is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Document is an object without a `features` member.
    #[error("payload has no `features` member")]
    MissingFeatures,

    /// `features` (or the document itself) is not an array.
    #[error("expected `features` to be an array, found {found}")]
    FeaturesNotArray { found: &'static str },

    /// An element of `features` is not an object.
    #[error("feature at index {index} is not an object, found {found}")]
    FeatureNotObject { index: usize, found: &'static str },
}

/// Human-readable JSON type name used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
