use std::sync::Arc;

use chrono::NaiveDate;
use storage::repository::LessonRepository;
use tracker_core::LESSON_CAPACITY;
use tracker_core::model::{Lesson, LessonDraft};

use crate::Clock;
use crate::error::LessonServiceError;
use crate::tracker_view::TrackerBoard;

/// Rows shown in the "recent lessons" table.
pub const RECENT_LESSONS_LIMIT: usize = 10;

/// Orchestrates loading the lesson log and appending new lessons.
///
/// Owns the capacity rule: once the board is full, nothing more is stored.
#[derive(Clone)]
pub struct LessonService {
    clock: Clock,
    lessons: Arc<dyn LessonRepository>,
    capacity: usize,
}

impl LessonService {
    #[must_use]
    pub fn new(clock: Clock, lessons: Arc<dyn LessonRepository>) -> Self {
        Self::with_capacity(clock, lessons, LESSON_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(clock: Clock, lessons: Arc<dyn LessonRepository>, capacity: usize) -> Self {
        Self {
            clock,
            lessons,
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Default date for a new lesson.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Load the log and compute progress, grid, and recent history.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Storage` if the log cannot be read.
    pub async fn load_board(&self) -> Result<TrackerBoard, LessonServiceError> {
        let lessons = self.lessons.load_lessons().await?;
        Ok(TrackerBoard::from_lessons(
            lessons,
            self.capacity,
            RECENT_LESSONS_LIMIT,
        ))
    }

    /// Append a lesson unless the board is full.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::CapacityReached` when the board is full.
    /// Returns `LessonServiceError::Storage` if loading or persisting fails.
    pub async fn add_lesson(&self, draft: LessonDraft) -> Result<Lesson, LessonServiceError> {
        let count = self.lessons.load_lessons().await?.len();
        if count >= self.capacity {
            tracing::warn!(count, capacity = self.capacity, "rejected lesson: board is full");
            return Err(LessonServiceError::CapacityReached {
                capacity: self.capacity,
            });
        }

        let lesson = self.lessons.append_lesson(draft).await?;
        tracing::info!(id = %lesson.id(), date = %lesson.date_iso(), "lesson added");
        Ok(lesson)
    }
}
