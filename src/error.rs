//! Error type shared by the domain, persistence and storage layers.
//!
//! Validation failures carry a human-readable `message` plus structured JSON
//! `details` naming the offending field, so callers can report or log them
//! precisely without parsing the message.

use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A persisted value is missing or violates its field constraint.
    #[error("{message}")]
    IllegalValue { message: String, details: Value },

    #[error("Failed to access roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed roster data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AppError {
    pub fn illegal_value(message: impl Into<String>, details: Value) -> Self {
        Self::IllegalValue {
            message: message.into(),
            details,
        }
    }

    /// Error for a field that is absent from a persisted record.
    pub fn missing_field(kind: &str) -> Self {
        Self::illegal_value(
            missing_field_message(kind),
            json!({ "field": kind, "reason": "missing" }),
        )
    }

    /// Error for a field that is present but fails its format predicate.
    pub fn invalid_field(kind: &str, constraints: &str) -> Self {
        Self::illegal_value(constraints, json!({ "field": kind, "reason": "invalid" }))
    }

    /// Structured details of an [`AppError::IllegalValue`], if any.
    pub fn details(&self) -> Option<&Value> {
        match self {
            Self::IllegalValue { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Adds `key` to the details of an [`AppError::IllegalValue`].
    ///
    /// Other variants, and details that are not a JSON object, are returned unchanged.
    pub fn with_detail(mut self, key: &str, value: Value) -> Self {
        if let Self::IllegalValue {
            details: Value::Object(map),
            ..
        } = &mut self
        {
            map.insert(key.to_owned(), value);
        }
        self
    }
}

/// Formats the message reported when a record lacks the field of kind `kind`.
pub fn missing_field_message(kind: &str) -> String {
    format!("Person's {kind} field is missing!")
}
