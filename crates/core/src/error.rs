use thiserror::Error;

use crate::model::{LessonError, ParseIdError};

/// Any validation failure raised while rebuilding a lesson from raw fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
}
