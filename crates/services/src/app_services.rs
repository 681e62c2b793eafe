use std::path::Path;
use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::lesson_service::LessonService;

/// Assembles app-facing services from a storage backend.
#[derive(Clone)]
pub struct AppServices {
    lessons: Arc<LessonService>,
}

impl AppServices {
    /// Build services backed by the CSV file at `path`.
    ///
    /// The file is read once up front so a malformed log is reported at
    /// startup instead of on the first page render.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::EmptyDataPath` for an empty path, or
    /// `AppServicesError::Lessons` if the existing file cannot be loaded.
    pub async fn new_csv(path: &Path, clock: Clock) -> Result<Self, AppServicesError> {
        if path.as_os_str().is_empty() {
            return Err(AppServicesError::EmptyDataPath);
        }

        let services = Self::from_storage(&Storage::csv(path), clock);
        let board = services.lessons.load_board().await?;
        tracing::info!(
            path = %path.display(),
            lessons = board.progress.completed(),
            "opened lessons file"
        );
        Ok(services)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock) -> Self {
        let lessons = Arc::new(LessonService::new(clock, Arc::clone(&storage.lessons)));
        Self { lessons }
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }
}
