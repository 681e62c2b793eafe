//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `LessonService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonServiceError {
    #[error("all {capacity} squares are already filled")]
    CapacityReached { capacity: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("lessons file path is empty")]
    EmptyDataPath,
    #[error(transparent)]
    Lessons(#[from] LessonServiceError),
}
