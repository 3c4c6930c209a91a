//! Error types for data preparation operations.

use serde_json::Value;

/// Result type for data preparation operations
pub type DataResult<T> = Result<T, DataError>;

/// Error type for data preparation operations
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Callback error: {0}")]
    Callback(String),
}

impl From<String> for DataError {
    fn from(s: String) -> Self {
        DataError::Callback(s)
    }
}

impl From<&str> for DataError {
    fn from(s: &str) -> Self {
        DataError::Callback(s.to_string())
    }
}

/// Name of the JSON kind carried by a value, for diagnostics.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrow the elements of a JSON array, or fail with a type mismatch.
pub(crate) fn expect_array(input: &Value) -> DataResult<&[Value]> {
    match input {
        Value::Array(items) => Ok(items),
        other => Err(DataError::TypeMismatch {
            expected: "array",
            actual: value_kind(other),
        }),
    }
}
