// src/domain/errors.rs
use crate::domain::slug::SlugError;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    /// A slug was claimed by another record between resolution and insert.
    #[error("slug conflict: {0}")]
    SlugConflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error(transparent)]
    Slug(#[from] SlugError),
}
