use services::{LessonService, LessonServiceError};
use tracker_core::model::{
    DEFAULT_LESSON_COLOR, Lesson, LessonColor, LessonDraft, LessonId, parse_lesson_date,
};

use crate::views::ViewError;

/// Raw input of the add-lesson form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct LessonForm {
    pub(super) date: String,
    pub(super) teacher: String,
    pub(super) color: String,
    pub(super) note: String,
}

impl LessonForm {
    pub(super) fn new(default_date: &str) -> Self {
        Self {
            date: default_date.to_string(),
            teacher: String::new(),
            color: DEFAULT_LESSON_COLOR.to_string(),
            note: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct LessonFormErrors {
    pub(super) date: Option<&'static str>,
    pub(super) color: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum SaveState {
    Idle,
    Saving,
    Error(ViewError),
}

pub(super) fn validate_form(form: &LessonForm) -> Result<LessonDraft, LessonFormErrors> {
    let mut errors = LessonFormErrors::default();

    let date = parse_lesson_date(&form.date)
        .map_err(|_| errors.date = Some("Pick a valid date (YYYY-MM-DD)."))
        .ok();
    let color = LessonColor::parse_or_default(&form.color)
        .map_err(|_| errors.color = Some("Pick a color like #FFB3C8."))
        .ok();

    match (date, color) {
        (Some(date), Some(color)) => Ok(LessonDraft::new(
            date,
            &form.teacher,
            Some(color),
            &form.note,
        )),
        _ => Err(errors),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum SubmitError {
    Invalid(LessonFormErrors),
    Save(ViewError),
}

pub(super) fn added_notice(id: LessonId) -> String {
    format!("Lesson {id} added!")
}

/// Validate the form and store the lesson.
pub(super) async fn submit_lesson(
    lessons: &LessonService,
    form: &LessonForm,
) -> Result<Lesson, SubmitError> {
    let draft = validate_form(form).map_err(SubmitError::Invalid)?;
    lessons.add_lesson(draft).await.map_err(|err| match err {
        LessonServiceError::CapacityReached { .. } => SubmitError::Save(ViewError::BoardFull),
        err => {
            tracing::error!(error = %err, "failed to add lesson");
            SubmitError::Save(ViewError::SaveFailed)
        }
    })
}
