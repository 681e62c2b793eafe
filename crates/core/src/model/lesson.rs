use chrono::NaiveDate;
use thiserror::Error;

use crate::model::color::LessonColor;
use crate::model::ids::LessonId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),

    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `LessonError::InvalidDate` if the value is not a valid date.
pub fn parse_lesson_date(raw: &str) -> Result<NaiveDate, LessonError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| LessonError::InvalidDate(raw.to_string()))
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// A lesson as entered by the user, before it has been given an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonDraft {
    date: NaiveDate,
    teacher: String,
    color: LessonColor,
    note: String,
}

impl LessonDraft {
    /// Build a draft. Teacher and note are trimmed; a missing color becomes
    /// the default pink.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        teacher: impl AsRef<str>,
        color: Option<LessonColor>,
        note: impl AsRef<str>,
    ) -> Self {
        Self {
            date,
            teacher: teacher.as_ref().trim().to_string(),
            color: color.unwrap_or_default(),
            note: note.as_ref().trim().to_string(),
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn teacher(&self) -> &str {
        &self.teacher
    }

    #[must_use]
    pub fn color(&self) -> &LessonColor {
        &self.color
    }

    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// One completed lesson. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    date: NaiveDate,
    teacher: String,
    color: LessonColor,
    note: String,
}

impl Lesson {
    /// Attach an id to a draft.
    #[must_use]
    pub fn from_draft(id: LessonId, draft: LessonDraft) -> Self {
        Self {
            id,
            date: draft.date,
            teacher: draft.teacher,
            color: draft.color,
            note: draft.note,
        }
    }

    /// Rehydrate a lesson from already-validated persisted fields.
    #[must_use]
    pub fn from_persisted(
        id: LessonId,
        date: NaiveDate,
        teacher: String,
        color: LessonColor,
        note: String,
    ) -> Self {
        Self {
            id,
            date,
            teacher,
            color,
            note,
        }
    }

    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Date in ISO 8601 form, as shown in tooltips and stored on disk.
    #[must_use]
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    #[must_use]
    pub fn teacher(&self) -> &str {
        &self.teacher
    }

    #[must_use]
    pub fn color(&self) -> &LessonColor {
        &self.color
    }

    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        parse_lesson_date(raw).unwrap()
    }

    #[test]
    fn draft_trims_text_and_defaults_color() {
        let draft = LessonDraft::new(date("2024-01-01"), "  Marie ", None, "\n verbs \n");
        assert_eq!(draft.teacher(), "Marie");
        assert_eq!(draft.note(), "verbs");
        assert_eq!(draft.color(), &LessonColor::default());
    }

    #[test]
    fn from_draft_keeps_fields() {
        let color = LessonColor::parse("#00FF00").unwrap();
        let draft = LessonDraft::new(date("2024-03-05"), "Lucas", Some(color.clone()), "");
        let lesson = Lesson::from_draft(LessonId::new(3), draft);
        assert_eq!(lesson.id(), LessonId::new(3));
        assert_eq!(lesson.date_iso(), "2024-03-05");
        assert_eq!(lesson.teacher(), "Lucas");
        assert_eq!(lesson.color(), &color);
        assert_eq!(lesson.note(), "");
    }

    #[test]
    fn parse_lesson_date_rejects_other_formats() {
        assert!(parse_lesson_date("2024-02-30").is_err());
        assert_eq!(
            parse_lesson_date("01/02/2024"),
            Err(LessonError::InvalidDate("01/02/2024".to_string()))
        );
    }
}
