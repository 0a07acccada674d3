//! Small building blocks shared by the storefront pages.

use crate::components::course_details::{star_slots, ConfirmationRequest, ModalAction};
use crate::components::{Icon, Route};
use chrono::{Datelike, Utc};
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Dismissible one-line message shown above page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[component]
pub fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let tone = match notice.kind {
        NoticeKind::Success => "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        NoticeKind::Error => "border-red-500/40 bg-red-500/10 text-red-200",
    };

    rsx! {
        div { class: "mx-auto my-4 flex max-w-maxContent items-center justify-between gap-4 rounded-lg border px-4 py-3 {tone}",
            p { class: "text-sm", "{notice.text}" }
            button {
                class: "p-1 rounded-md hover:bg-white/10 transition-colors",
                aria_label: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
            }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "grid min-h-[calc(100vh-3.5rem)] place-items-center",
            div { class: "animate-spin h-10 w-10 border-4 border-yellow-200 border-t-transparent rounded-full" }
        }
    }
}

#[component]
pub fn ErrorView(message: Option<String>) -> Element {
    rsx! {
        div { class: "grid min-h-[calc(100vh-3.5rem)] place-items-center text-richblack-5",
            div { class: "flex flex-col items-center gap-4 text-center",
                p { class: "text-3xl font-semibold", "Error - 404 Not Found" }
                if let Some(message) = message {
                    p { class: "text-richblack-300", "{message}" }
                }
                Link { class: "yellowButton", to: Route::Home {}, "Back to home" }
            }
        }
    }
}

#[component]
pub fn ConfirmationModal(
    request: ConfirmationRequest,
    on_action: EventHandler<ModalAction>,
) -> Element {
    let primary = request.btn1_action;
    let secondary = request.btn2_action;

    rsx! {
        div { class: "fixed inset-0 z-[1000] grid place-items-center overflow-auto bg-white/10 backdrop-blur-sm",
            div { class: "w-11/12 max-w-[350px] rounded-lg border border-richblack-400 bg-richblack-800 p-6",
                p { class: "text-2xl font-semibold text-richblack-5", "{request.text1}" }
                p { class: "mt-3 mb-5 leading-6 text-richblack-200", "{request.text2}" }
                div { class: "flex items-center gap-x-4",
                    button {
                        class: "yellowButton",
                        onclick: move |_| on_action.call(primary),
                        "{request.btn1_text}"
                    }
                    button {
                        class: "cursor-pointer rounded-md bg-richblack-200 py-[8px] px-[20px] font-semibold text-richblack-900",
                        onclick: move |_| on_action.call(secondary),
                        "{request.btn2_text}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn RatingStars(rating: f64, #[props(default = 20)] star_size: u32) -> Element {
    let (full, half, empty) = star_slots(rating);
    let size = format!("width: {star_size}px; height: {star_size}px;");

    rsx! {
        div { class: "flex gap-1 text-yellow-100",
            for _ in 0..full {
                span { style: "{size}",
                    Icon { name: "star".to_string(), class: "w-full h-full".to_string() }
                }
            }
            if half {
                span { style: "{size}",
                    Icon { name: "star-half".to_string(), class: "w-full h-full".to_string() }
                }
            }
            for _ in 0..empty {
                span { style: "{size}",
                    Icon { name: "star-empty".to_string(), class: "w-full h-full".to_string() }
                }
            }
        }
    }
}

/// 1-based list of already-shaped text lines.
#[component]
pub fn NumberedList(items: Vec<String>, #[props(default)] class: String) -> Element {
    rsx! {
        ul { class: "list-none {class}",
            for (index , line) in items.iter().enumerate() {
                li { key: "{index}", class: "flex items-start",
                    span { class: "mr-2", "{index + 1}." }
                    span { "{line}" }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx! {
        footer { class: "border-t border-richblack-700 bg-richblack-800",
            div { class: "mx-auto flex w-11/12 max-w-maxContent flex-col items-center justify-between gap-4 py-10 text-sm text-richblack-400 lg:flex-row",
                div { class: "flex items-center gap-2",
                    Icon { name: "book".to_string(), class: "w-5 h-5".to_string() }
                    span { class: "font-semibold text-richblack-50", "Coursefront" }
                }
                nav { class: "flex gap-6",
                    Link { to: Route::Home {}, "Catalog" }
                    Link { to: Route::EnrolledCourses {}, "My Courses" }
                }
                p { "Made with Dioxus © {year} Coursefront" }
            }
        }
    }
}
