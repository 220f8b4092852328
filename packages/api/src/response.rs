// ABOUTME: Error-to-HTTP response mapping for the todo API
// ABOUTME: The only place domain error kinds are paired with status codes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;
use todo_items::TodoError;

use crate::decode::DecodeError;

/// Error body returned on every failed request. `code` duplicates the HTTP
/// status so clients parsing only the body still see it.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: u16,
    pub details: String,
}

impl ErrorBody {
    fn new(message: &str, status: StatusCode, details: String) -> Self {
        ErrorBody {
            message: message.to_string(),
            code: status.as_u16(),
            details,
        }
    }
}

/// Maps a domain error to its designated status and serialized body.
pub fn error_response(err: TodoError) -> Response {
    let (status, message) = match &err {
        TodoError::InvalidParameter(_) => (StatusCode::BAD_REQUEST, "invalid param"),
        TodoError::NoId => (StatusCode::NOT_FOUND, "no id"),
        TodoError::NotFound(_) => (StatusCode::NOT_FOUND, "not found"),
        TodoError::Unknown => (StatusCode::INTERNAL_SERVER_ERROR, "unknown"),
        TodoError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal error"),
    };

    let body = ErrorBody::new(message, status, err.to_string());
    (status, ResponseJson(body)).into_response()
}

/// Maps a request decode failure; these never reach the domain layer.
pub fn decode_error_response(err: DecodeError) -> Response {
    let status = match &err {
        DecodeError::EmptyBody
        | DecodeError::Malformed { .. }
        | DecodeError::InvalidValue(_)
        | DecodeError::UnknownField(_) => StatusCode::BAD_REQUEST,
        DecodeError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        DecodeError::Read => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::PAYLOAD_TOO_LARGE => "request too large",
        _ => "internal error",
    };

    let body = ErrorBody::new(message, status, err.to_string());
    (status, ResponseJson(body)).into_response()
}
