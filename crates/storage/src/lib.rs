#![forbid(unsafe_code)]

pub mod csv_store;
pub mod repository;

pub use csv_store::CsvLessonStore;
pub use repository::{
    InMemoryRepository, LessonRepository, LessonRow, RowError, Storage, StorageError,
};
