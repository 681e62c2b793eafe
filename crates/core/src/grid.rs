//! Pure mapping from the lesson list onto the fixed 10x10 board.

use crate::model::{Lesson, LessonColor, LessonId};

/// Cells per row and rows per board.
pub const GRID_SIZE: usize = 10;

/// Maximum number of lessons, one per cell.
pub const LESSON_CAPACITY: usize = GRID_SIZE * GRID_SIZE;

/// Label used in tooltips when a lesson has no teacher name.
pub const TEACHER_PLACEHOLDER: &str = "Teacher";

/// One position on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    Filled {
        id: LessonId,
        color: LessonColor,
        /// Raw tooltip text. Escape before embedding in markup.
        tooltip: String,
    },
    Empty,
}

impl GridCell {
    #[must_use]
    pub fn is_filled(&self) -> bool {
        matches!(self, GridCell::Filled { .. })
    }
}

/// The full board, always exactly `LESSON_CAPACITY` cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    cells: Vec<GridCell>,
}

impl GridState {
    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Rows of `GRID_SIZE` cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(GRID_SIZE)
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        self.cells.get(row * GRID_SIZE + col)
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.filled_count()
    }
}

/// Tooltip text for a lesson: id, date, teacher, and the note when present.
#[must_use]
pub fn lesson_tooltip(lesson: &Lesson) -> String {
    let teacher = if lesson.teacher().is_empty() {
        TEACHER_PLACEHOLDER
    } else {
        lesson.teacher()
    };
    let mut tooltip = format!("Lesson {} | {} | {}", lesson.id(), lesson.date_iso(), teacher);
    if !lesson.note().is_empty() {
        tooltip.push_str(" | ");
        tooltip.push_str(lesson.note());
    }
    tooltip
}

/// Lay the lessons out on the board in the order given.
///
/// Lessons past `LESSON_CAPACITY` are ignored.
#[must_use]
pub fn render_grid(lessons: &[Lesson]) -> GridState {
    let cells = (0..LESSON_CAPACITY)
        .map(|idx| match lessons.get(idx) {
            Some(lesson) => GridCell::Filled {
                id: lesson.id(),
                color: lesson.color().clone(),
                tooltip: lesson_tooltip(lesson),
            },
            None => GridCell::Empty,
        })
        .collect();
    GridState { cells }
}
