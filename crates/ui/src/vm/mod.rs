mod grid_vm;
mod lesson_vm;
mod progress_vm;

pub use grid_vm::grid_markup;
pub use lesson_vm::{RecentLessonVm, map_recent_lessons};
pub use progress_vm::ProgressVm;
