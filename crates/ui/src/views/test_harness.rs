use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Clock, LessonService};
use storage::repository::{LessonRepository, Storage};
use tracker_core::time::fixed_today;

use crate::context::{UiApp, build_app_context};
use crate::views::TrackerView;

struct TestApp {
    lessons: Arc<LessonService>,
}

impl UiApp for TestApp {
    fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[allow(non_snake_case)]
fn TrackerHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { TrackerView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub lessons: Arc<dyn LessonRepository>,
    pub service: Arc<LessonService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..2 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_view_harness() -> ViewHarness {
    setup_view_harness_with_repo(Storage::in_memory().lessons)
}

pub fn setup_view_harness_with_repo(lessons: Arc<dyn LessonRepository>) -> ViewHarness {
    let service = Arc::new(LessonService::new(
        Clock::fixed(fixed_today()),
        Arc::clone(&lessons),
    ));
    let app = Arc::new(TestApp {
        lessons: Arc::clone(&service),
    });
    let dom = VirtualDom::new_with_props(TrackerHarness, HarnessProps { app });
    ViewHarness {
        dom,
        lessons,
        service,
    }
}
