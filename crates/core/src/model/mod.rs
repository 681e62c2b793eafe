mod color;
mod ids;
mod lesson;

pub use color::{DEFAULT_LESSON_COLOR, LessonColor};
pub use ids::{LessonId, ParseIdError};
pub use lesson::{Lesson, LessonDraft, LessonError, parse_lesson_date};
