use dioxus::prelude::*;
use tracker_core::model::LessonId;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{ProgressVm, RecentLessonVm};

use super::state::{LessonForm, LessonFormErrors, SaveState, SubmitError, submit_lesson};

#[component]
pub(super) fn HeaderCard(goal: String) -> Element {
    rsx! {
        div { class: "tracker-card",
            div { class: "tracker-title",
                span { "My 100 lessons" }
                span { class: "badge-soft", "{goal}" }
            }
        }
    }
}

#[component]
pub(super) fn ProgressPanel(progress: ProgressVm) -> Element {
    let bar_style = progress.bar_style();
    rsx! {
        section { class: "progress-panel",
            div { class: "progress-main",
                p { class: "progress-label", "Progress: {progress.label} lessons" }
                div { class: "progress-bar",
                    div { class: "progress-fill", style: "{bar_style}" }
                }
                span { class: "progress-percent", "{progress.percent}%" }
            }
            div { class: "progress-side",
                p { class: "progress-label", "Before the goal: {progress.remaining} lessons" }
            }
            if progress.is_complete {
                p { class: "notice notice--success",
                    "All 100 squares filled. Goal reached, congratulations!"
                }
            }
        }
    }
}

#[component]
pub(super) fn LessonGrid(markup: String) -> Element {
    rsx! {
        section { class: "grid-section",
            h3 { "My 100-square board" }
            div { class: "grid-wrapper", dangerous_inner_html: "{markup}" }
            p { class: "footer-note", "Hover a colored square to see its note." }
        }
    }
}

#[component]
pub(super) fn RecentLessons(rows: Vec<RecentLessonVm>) -> Element {
    if rows.is_empty() {
        return rsx! {};
    }
    rsx! {
        section { class: "recent-lessons",
            h3 { "Recent lessons (latest 10)" }
            table { class: "recent-table",
                thead {
                    tr {
                        th { "#" }
                        th { "Date" }
                        th { "Teacher" }
                        th { "Note" }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.id}",
                            td { "{row.id}" }
                            td { "{row.date}" }
                            td { "{row.teacher}" }
                            td { "{row.note}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn AddLessonPanel(
    can_add: bool,
    default_date: String,
    on_added: EventHandler<LessonId>,
) -> Element {
    rsx! {
        section { class: "add-lesson",
            h3 { "Fill one more square" }
            if can_add {
                AddLessonForm { default_date, on_added }
            } else {
                p { class: "notice notice--warning",
                    "All 100 squares are filled. Tidy up the lessons file to add more."
                }
            }
        }
    }
}

#[component]
fn AddLessonForm(default_date: String, on_added: EventHandler<LessonId>) -> Element {
    let ctx = use_context::<AppContext>();
    let lessons = ctx.lessons();

    let initial_date = default_date.clone();
    let mut form = use_signal(move || LessonForm::new(&initial_date));
    let mut errors = use_signal(LessonFormErrors::default);
    let save_state = use_signal(|| SaveState::Idle);

    let on_submit = move |_: MouseEvent| {
        let form_value = form();
        let lessons = lessons.clone();
        let default_date = default_date.clone();
        let mut save_state = save_state;
        spawn(async move {
            save_state.set(SaveState::Saving);
            match submit_lesson(&lessons, &form_value).await {
                Ok(lesson) => {
                    errors.set(LessonFormErrors::default());
                    form.set(LessonForm::new(&default_date));
                    save_state.set(SaveState::Idle);
                    on_added.call(lesson.id());
                }
                Err(SubmitError::Invalid(next_errors)) => {
                    errors.set(next_errors);
                    save_state.set(SaveState::Idle);
                }
                Err(SubmitError::Save(err)) => {
                    errors.set(LessonFormErrors::default());
                    save_state.set(SaveState::Error(err));
                }
            }
        });
    };

    let current = form();
    let field_errors = errors();
    let is_saving = save_state() == SaveState::Saving;
    let save_error = match save_state() {
        SaveState::Error(err) => Some(err.message()),
        SaveState::Idle | SaveState::Saving => None,
    };

    rsx! {
        div { class: "lesson-form",
            div { class: "form-row",
                label { class: "form-field",
                    span { "Lesson date" }
                    input {
                        r#type: "date",
                        value: "{current.date}",
                        oninput: move |evt| form.write().date = evt.value(),
                    }
                    if let Some(msg) = field_errors.date {
                        span { class: "field-error", "{msg}" }
                    }
                }
                label { class: "form-field",
                    span { "Square color" }
                    input {
                        r#type: "color",
                        value: "{current.color}",
                        oninput: move |evt| form.write().color = evt.value(),
                    }
                    if let Some(msg) = field_errors.color {
                        span { class: "field-error", "{msg}" }
                    }
                }
            }
            label { class: "form-field",
                span { "Teacher (optional)" }
                input {
                    r#type: "text",
                    placeholder: "e.g. Marie / Lucas",
                    value: "{current.teacher}",
                    oninput: move |evt| form.write().teacher = evt.value(),
                }
            }
            label { class: "form-field",
                span { "Note (optional)" }
                textarea {
                    rows: 3,
                    placeholder: "Pronunciation drills / grammar point / impressions",
                    value: "{current.note}",
                    oninput: move |evt| form.write().note = evt.value(),
                }
            }
            if let Some(msg) = save_error {
                p { class: "notice notice--error", "{msg}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: is_saving,
                onclick: on_submit,
                if is_saving { "Saving..." } else { "Fill one square" }
            }
        }
    }
}
