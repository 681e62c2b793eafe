use std::sync::Arc;

use storage::repository::{LessonRepository, StorageError};
use tracker_core::model::{Lesson, LessonColor, LessonDraft, LessonId, parse_lesson_date};
use tracker_core::time::fixed_today;

use super::test_harness::{setup_view_harness, setup_view_harness_with_repo};

fn draft(teacher: &str, note: &str) -> LessonDraft {
    LessonDraft::new(
        parse_lesson_date("2024-01-01").unwrap(),
        teacher,
        Some(LessonColor::parse("#FFB3C8").unwrap()),
        note,
    )
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_renders_empty_board() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Progress: 0 / 100 lessons"), "missing progress in {html}");
    assert_eq!(html.matches("cell empty").count(), 100, "{html}");
    assert!(html.contains("Fill one square"), "missing submit button in {html}");
    assert!(html.contains("2024-01-01"), "missing default date in {html}");
    assert!(!html.contains("recent-table"), "unexpected history table in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_renders_first_lesson() {
    let mut harness = setup_view_harness();
    harness
        .lessons
        .append_lesson(draft("Marie", ""))
        .await
        .expect("append lesson");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Progress: 1 / 100 lessons"), "missing progress in {html}");
    assert!(html.contains("background-color:#FFB3C8;"), "missing filled cell in {html}");
    assert_eq!(html.matches("cell empty").count(), 99, "{html}");
    assert!(html.contains("recent-table"), "missing history table in {html}");
    assert!(html.contains("Marie"), "missing teacher in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_escapes_user_text() {
    let mut harness = setup_view_harness();
    harness
        .lessons
        .append_lesson(draft("<b>Marie</b>", "<script>alert(1)</script>"))
        .await
        .expect("append lesson");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(!html.contains("<script>"), "raw script in {html}");
    assert!(!html.contains("<b>Marie"), "raw markup in {html}");
    assert!(html.contains("&lt;script&gt;"), "missing escaped note in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_hides_form_when_full() {
    let mut harness = setup_view_harness();
    let full: Vec<Lesson> = (1..=100)
        .map(|id| Lesson::from_draft(LessonId::new(id), LessonDraft::new(fixed_today(), "", None, "")))
        .collect();
    harness.lessons.save_lessons(&full).await.expect("save lessons");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Progress: 100 / 100 lessons"), "missing progress in {html}");
    assert!(html.contains("All 100 squares are filled"), "missing warning in {html}");
    assert!(!html.contains("Fill one square"), "form still shown in {html}");
    assert_eq!(html.matches("cell empty").count(), 0, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_shows_lessons_added_through_service() {
    let mut harness = setup_view_harness();
    for teacher in ["Marie", "Lucas"] {
        harness
            .service
            .add_lesson(draft(teacher, ""))
            .await
            .expect("add lesson");
    }

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Progress: 2 / 100 lessons"), "missing progress in {html}");
    assert_eq!(html.matches("cell empty").count(), 98, "{html}");
    assert!(html.contains("Lucas"), "missing latest lesson in {html}");
    assert!(html.contains("Fill one square"), "form hidden in {html}");
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

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_repo(Arc::new(FailingRepo));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("Something went wrong while reading your lessons."),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}
