use tracker_core::model::Lesson;

/// One row of the recent-lessons table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentLessonVm {
    pub id: u64,
    pub date: String,
    pub teacher: String,
    pub note: String,
}

impl From<&Lesson> for RecentLessonVm {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id().value(),
            date: lesson.date_iso(),
            teacher: lesson.teacher().to_owned(),
            note: lesson.note().to_owned(),
        }
    }
}

#[must_use]
pub fn map_recent_lessons(lessons: &[Lesson]) -> Vec<RecentLessonVm> {
    lessons.iter().map(RecentLessonVm::from).collect()
}
