use std::sync::Arc;

use services::LessonService;

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn lessons(&self) -> Arc<LessonService>;

    /// Goal shown in the header badge.
    fn goal_label(&self) -> String {
        "Goal: level B1".to_string()
    }
}

#[derive(Clone)]
pub struct AppContext {
    lessons: Arc<LessonService>,
    goal_label: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            lessons: app.lessons(),
            goal_label: app.goal_label(),
        }
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn goal_label(&self) -> &str {
        &self.goal_label
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
