#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod lesson_service;
pub mod tracker_view;

pub use tracker_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, LessonServiceError};
pub use lesson_service::{LessonService, RECENT_LESSONS_LIMIT};
pub use tracker_view::TrackerBoard;
