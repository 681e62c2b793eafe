use tracker_core::model::Lesson;
use tracker_core::{GridState, Progress, render_grid};

/// Everything the tracker page shows, computed from one load of the log.
///
/// Presentation-agnostic: no formatted strings beyond what the grid
/// tooltips need. The UI decides labels and layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerBoard {
    pub lessons: Vec<Lesson>,
    pub progress: Progress,
    pub grid: GridState,
    /// Most recent lessons first.
    pub recent: Vec<Lesson>,
}

impl TrackerBoard {
    /// Build the board from lessons sorted ascending by id.
    #[must_use]
    pub fn from_lessons(lessons: Vec<Lesson>, capacity: usize, recent_limit: usize) -> Self {
        let progress = Progress::new(lessons.len(), capacity);
        let grid = render_grid(&lessons);
        let recent = lessons.iter().rev().take(recent_limit).cloned().collect();
        Self {
            lessons,
            progress,
            grid,
            recent,
        }
    }

    #[must_use]
    pub fn can_add(&self) -> bool {
        !self.progress.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::LESSON_CAPACITY;
    use tracker_core::model::{LessonDraft, LessonId};
    use tracker_core::time::fixed_today;

    fn lessons(count: u64) -> Vec<Lesson> {
        (1..=count)
            .map(|id| {
                Lesson::from_draft(
                    LessonId::new(id),
                    LessonDraft::new(fixed_today(), "Marie", None, ""),
                )
            })
            .collect()
    }

    #[test]
    fn recent_is_newest_first_and_limited() {
        let board = TrackerBoard::from_lessons(lessons(14), LESSON_CAPACITY, 10);
        let ids: Vec<u64> = board.recent.iter().map(|l| l.id().value()).collect();
        assert_eq!(ids, (5..=14).rev().collect::<Vec<_>>());
        assert_eq!(board.grid.filled_count(), 14);
        assert_eq!(board.progress.label(), "14 / 100");
        assert!(board.can_add());
    }

    #[test]
    fn full_board_cannot_add() {
        let board = TrackerBoard::from_lessons(lessons(100), LESSON_CAPACITY, 10);
        assert!(!board.can_add());
        assert_eq!(board.grid.empty_count(), 0);
    }
}
