use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracker_core::model::{
    Lesson, LessonColor, LessonDraft, LessonId, parse_lesson_date,
};

use crate::csv_store::CsvLessonStore;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unexpected header `{found}`, expected `id,date,teacher,color,note`")]
    Header { found: String },

    #[error("malformed lesson on line {line}: {source}")]
    Parse {
        line: u64,
        #[source]
        source: RowError,
    },

    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

/// Why a single lesson row could not be read.
#[derive(Debug, Error)]
pub enum RowError {
    /// The row has the wrong number of fields.
    #[error(transparent)]
    Shape(csv::Error),

    /// A field failed validation.
    #[error(transparent)]
    Value(#[from] tracker_core::Error),
}

/// Column order of the lessons file.
pub const LESSON_HEADER: [&str; 5] = ["id", "date", "teacher", "color", "note"];

/// Persisted shape for a lesson: one CSV row, all fields as text.
///
/// Kept separate from the domain `Lesson` so malformed files are caught at
/// the storage boundary with a line number attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRow {
    pub id: String,
    pub date: String,
    pub teacher: String,
    pub color: String,
    pub note: String,
}

impl LessonRow {
    #[must_use]
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id().to_string(),
            date: lesson.date_iso(),
            teacher: lesson.teacher().to_owned(),
            color: lesson.color().to_string(),
            note: lesson.note().to_owned(),
        }
    }

    /// Convert the row back into a domain `Lesson`.
    ///
    /// # Errors
    ///
    /// Returns `tracker_core::Error` if the id, date, or color fail validation.
    pub fn into_lesson(self) -> Result<Lesson, tracker_core::Error> {
        let id: LessonId = self.id.parse()?;
        let date = parse_lesson_date(&self.date)?;
        let color = LessonColor::parse_or_default(&self.color)?;
        Ok(Lesson::from_persisted(id, date, self.teacher, color, self.note))
    }
}

/// Repository contract for the lesson log.
///
/// The log is append-only from the app's point of view: lessons are added
/// through `append_lesson` and never edited or removed.
#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// Load every lesson, sorted ascending by id.
    ///
    /// Returns an empty list when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Header` for a foreign header,
    /// `StorageError::Parse` for malformed records, or other storage errors.
    async fn load_lessons(&self) -> Result<Vec<Lesson>, StorageError>;

    /// Replace the stored collection with `lessons`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be written.
    async fn save_lessons(&self, lessons: &[Lesson]) -> Result<(), StorageError>;

    /// Assign the next id (`count + 1`), store the lesson, and persist the
    /// whole collection.
    ///
    /// Capacity is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if loading or saving fails.
    async fn append_lesson(&self, draft: LessonDraft) -> Result<Lesson, StorageError> {
        let mut lessons = self.load_lessons().await?;
        let lesson = Lesson::from_draft(LessonId::next_after(lessons.len()), draft);
        lessons.push(lesson.clone());
        self.save_lessons(&lessons).await?;
        Ok(lesson)
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    lessons: Arc<Mutex<Vec<Lesson>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of lessons.
    #[must_use]
    pub fn with_lessons(lessons: Vec<Lesson>) -> Self {
        Self {
            lessons: Arc::new(Mutex::new(lessons)),
        }
    }
}

#[async_trait]
impl LessonRepository for InMemoryRepository {
    async fn load_lessons(&self) -> Result<Vec<Lesson>, StorageError> {
        let guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        let mut lessons = guard.clone();
        lessons.sort_by_key(Lesson::id);
        Ok(lessons)
    }

    async fn save_lessons(&self, lessons: &[Lesson]) -> Result<(), StorageError> {
        let mut guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        *guard = lessons.to_vec();
        Ok(())
    }
}

/// Holds the lesson repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub lessons: Arc<dyn LessonRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let lessons: Arc<dyn LessonRepository> = Arc::new(InMemoryRepository::new());
        Self { lessons }
    }

    /// Build a `Storage` backed by the CSV file at `path`.
    ///
    /// The file is not touched until the first load or save.
    #[must_use]
    pub fn csv(path: impl Into<PathBuf>) -> Self {
        let lessons: Arc<dyn LessonRepository> = Arc::new(CsvLessonStore::new(path));
        Self { lessons }
    }
}
