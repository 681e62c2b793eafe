use std::sync::Arc;

use services::{AppServices, AppServicesError, Clock, LessonService, LessonServiceError};
use storage::repository::{LessonRepository, Storage, StorageError};
use tracker_core::model::{Lesson, LessonDraft, LessonId};
use tracker_core::time::fixed_today;

fn draft(note: &str) -> LessonDraft {
    LessonDraft::new(fixed_today(), "Marie", None, note)
}

#[tokio::test]
async fn submit_cycle_persists_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lessons.csv");
    let services = AppServices::new_csv(&path, Clock::fixed(fixed_today()))
        .await
        .expect("open services");
    let lessons = services.lessons();

    lessons.add_lesson(draft("first")).await.unwrap();
    lessons.add_lesson(draft("second")).await.unwrap();

    // A fresh service over the same file sees the same board.
    let reopened = AppServices::new_csv(&path, Clock::fixed(fixed_today()))
        .await
        .expect("reopen services");
    let board = reopened.lessons().load_board().await.unwrap();
    assert_eq!(board.progress.label(), "2 / 100");
    assert_eq!(board.recent[0].note(), "second");
    assert_eq!(board.grid.filled_count(), 2);
}

#[tokio::test]
async fn full_board_rejects_hundred_and_first() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::csv(dir.path().join("lessons.csv"));
    let full: Vec<Lesson> = (1..=100)
        .map(|id| Lesson::from_draft(LessonId::new(id), draft("")))
        .collect();
    storage.lessons.save_lessons(&full).await.unwrap();

    let svc = LessonService::new(Clock::fixed(fixed_today()), Arc::clone(&storage.lessons));
    let board = svc.load_board().await.unwrap();
    assert!(!board.can_add());

    let err = svc.add_lesson(draft("one too many")).await.unwrap_err();
    assert!(matches!(err, LessonServiceError::CapacityReached { capacity: 100 }));
    assert_eq!(storage.lessons.load_lessons().await.unwrap().len(), 100);
}

#[tokio::test]
async fn malformed_file_fails_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lessons.csv");
    std::fs::write(&path, "id,date,teacher,color,note\n1,2024-01-01,Marie,pink,\n").unwrap();

    let err = AppServices::new_csv(&path, Clock::fixed(fixed_today()))
        .await
        .err()
        .expect("malformed file should fail");
    assert!(matches!(
        err,
        AppServicesError::Lessons(LessonServiceError::Storage(StorageError::Parse { line: 2, .. }))
    ));
}

struct FailingRepo;

#[async_trait::async_trait]
impl LessonRepository for FailingRepo {
    async fn load_lessons(&self) -> Result<Vec<Lesson>, StorageError> {
        Err(StorageError::Poisoned("fail".to_string()))
    }

    async fn save_lessons(&self, _lessons: &[Lesson]) -> Result<(), StorageError> {
        Err(StorageError::Poisoned("fail".to_string()))
    }
}

#[tokio::test]
async fn storage_failures_surface_as_service_errors() {
    let svc = LessonService::new(Clock::fixed(fixed_today()), Arc::new(FailingRepo));
    assert!(matches!(
        svc.load_board().await,
        Err(LessonServiceError::Storage(_))
    ));
    assert!(matches!(
        svc.add_lesson(draft("")).await,
        Err(LessonServiceError::Storage(_))
    ));
}
