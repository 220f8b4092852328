// ABOUTME: Strict JSON request body decoding
// ABOUTME: Classifies decode failures so clients get actionable 400s instead of a blanket error

use axum::body::{to_bytes, Body};
use serde_json::error::Category;
use thiserror::Error;
use todo_items::TodoItem;

/// Request bodies larger than this are rejected outright.
pub const MAX_BODY_BYTES: usize = 1_048_576;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Request body must not be empty")]
    EmptyBody,
    #[error("Request body must not be larger than 1MB")]
    TooLarge,
    #[error("Request body contains badly-formed JSON (at line {line} column {column})")]
    Malformed { line: usize, column: usize },
    #[error("Request body contains an invalid value: {0}")]
    InvalidValue(String),
    #[error("Request body contains unknown field \"{0}\"")]
    UnknownField(String),
    #[error("failed to read request body")]
    Read,
}

/// Reads and decodes a request body into a [`TodoItem`], enforcing the size
/// cap and rejecting unknown fields.
pub async fn decode_item(body: Body) -> Result<TodoItem, DecodeError> {
    let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        if is_length_limit(&e) {
            DecodeError::TooLarge
        } else {
            DecodeError::Read
        }
    })?;

    if bytes.is_empty() {
        return Err(DecodeError::EmptyBody);
    }

    serde_json::from_slice(&bytes).map_err(classify)
}

fn classify(err: serde_json::Error) -> DecodeError {
    match err.classify() {
        Category::Syntax | Category::Eof => DecodeError::Malformed {
            line: err.line(),
            column: err.column(),
        },
        Category::Data => {
            let msg = err.to_string();
            // serde reports rejected fields as: unknown field `x`, expected ...
            if let Some(field) = msg
                .strip_prefix("unknown field `")
                .and_then(|rest| rest.split('`').next())
            {
                DecodeError::UnknownField(field.to_string())
            } else {
                DecodeError::InvalidValue(msg)
            }
        }
        Category::Io => DecodeError::Read,
    }
}

fn is_length_limit(err: &axum::Error) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        if inner.is::<http_body_util::LengthLimitError>() {
            return true;
        }
        source = inner.source();
    }
    false
}
