use crate::grid::LESSON_CAPACITY;

/// How far along the board is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    completed: usize,
    capacity: usize,
}

impl Progress {
    #[must_use]
    pub fn new(completed: usize, capacity: usize) -> Self {
        Self {
            completed,
            capacity,
        }
    }

    /// Progress against the standard 100-lesson board.
    #[must_use]
    pub fn of(completed: usize) -> Self {
        Self::new(completed, LESSON_CAPACITY)
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lessons left before the goal, never negative.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.completed)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed >= self.capacity
    }

    /// Completed share in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.capacity == 0 {
            return 1.0;
        }
        (self.completed as f64 / self.capacity as f64).min(1.0)
    }

    /// Whole-number percentage, rounded down.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.capacity == 0 {
            return 100;
        }
        let percent = (self.completed.min(self.capacity) * 100) / self.capacity;
        u8::try_from(percent).unwrap_or(100)
    }

    /// `"completed / capacity"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {}", self.completed, self.capacity)
    }
}
