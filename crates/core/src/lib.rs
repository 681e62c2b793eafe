#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod model;
pub mod progress;
pub mod time;

pub use error::Error;
pub use grid::{GRID_SIZE, GridCell, GridState, LESSON_CAPACITY, render_grid};
pub use progress::Progress;
pub use time::Clock;
