// ABOUTME: Error taxonomy shared by the domain core and storage adapter
// ABOUTME: Storage failures are always folded into one of these kinds before leaving the layer

use thiserror::Error;

/// Domain error kinds for the todo service.
///
/// Storage-level failures are converted into one of these before they cross
/// into the domain layer. `Unknown` deliberately carries no detail so SQL
/// internals never leak to clients. HTTP status mapping happens at the
/// transport boundary, not here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("{0}")]
    InvalidParameter(String),
    #[error("no id found in request")]
    NoId,
    #[error("item with id {0} not found")]
    NotFound(String),
    #[error("unknown error occurred")]
    Unknown,
    #[error("something's wrong on our end")]
    Internal,
}

pub type TodoResult<T> = Result<T, TodoError>;
