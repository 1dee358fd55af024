// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// A lifecycle transition was requested from a state that does not allow it.
    #[error("precondition failed: {0}")]
    Precondition(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
