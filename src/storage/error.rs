//! Error types for the placement store

use axum::http::StatusCode;
use thiserror::Error;

/// Store operation result type
pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation errors
///
/// Every error is local to the call that produced it; a failed insert never
/// leaves partial state in the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Content was empty or whitespace only
    #[error("Validation error: content must not be empty")]
    Validation,

    /// Strategy name is not one of the recognised strategies
    #[error("Unknown collision strategy: {0}")]
    UnknownStrategy(String),

    /// Every probed node is at capacity
    #[error("Storage full: {strategy} probed {probed} node(s) without free capacity")]
    StorageFull { strategy: String, probed: usize },

    /// Node id outside `[0, node_count)` or not a number at all
    #[error("Storage node not found: {id} (node count {node_count})")]
    NotFound { id: String, node_count: usize },

    /// Rejected construction parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StoreError {
    /// HTTP status the transport layer reports for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::Validation | StoreError::UnknownStrategy(_) => StatusCode::BAD_REQUEST,
            StoreError::StorageFull { .. } => StatusCode::INSUFFICIENT_STORAGE,
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
