use dioxus::prelude::*;
use services::TrackerBoard;
use tracker_core::model::LessonId;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ProgressVm, grid_markup, map_recent_lessons};

use super::components::{AddLessonPanel, HeaderCard, LessonGrid, ProgressPanel, RecentLessons};
use super::state::added_notice;

#[component]
pub fn TrackerView() -> Element {
    let ctx = use_context::<AppContext>();
    let lessons = ctx.lessons();
    let goal = ctx.goal_label().to_string();
    let default_date = lessons.today().format("%Y-%m-%d").to_string();
    let mut last_added = use_signal(|| None::<LessonId>);

    let mut resource = use_resource(move || {
        let lessons = lessons.clone();
        async move {
            lessons.load_board().await.map_err(|err| {
                tracing::error!(error = %err, "failed to load lessons");
                ViewError::LoadFailed
            })
        }
    });
    let state: ViewState<TrackerBoard> = view_state_from_resource(&resource);

    let on_added = move |id: LessonId| {
        last_added.set(Some(id));
        resource.restart();
    };

    rsx! {
        div { class: "page",
            HeaderCard { goal }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                ViewState::Ready(board) => rsx! {
                    ProgressPanel { progress: ProgressVm::from(&board.progress) }
                    LessonGrid { markup: grid_markup(&board.grid) }
                    if let Some(id) = last_added() {
                        p { class: "notice notice--success", {added_notice(id)} }
                    }
                    AddLessonPanel {
                        can_add: board.can_add(),
                        default_date: default_date.clone(),
                        on_added,
                    }
                    RecentLessons { rows: map_recent_lessons(&board.recent) }
                },
                ViewState::Error(err) => {
                    let message = err.message();
                    rsx! {
                        p { class: "notice notice--error", "{message}" }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| resource.restart(),
                            "Retry"
                        }
                    }
                }
            }
        }
    }
}
