use crate::api::{ApiConfig, EnrolledCourse, StorefrontClient};
use crate::components::{Icon, Route, Spinner};
use crate::db::Session;
use dioxus::prelude::*;

#[component]
pub fn EnrolledCourses() -> Element {
    let session = use_context::<Signal<Session>>();
    let api_config = use_context::<Signal<ApiConfig>>();

    let courses = use_resource(move || {
        let token = session().token().map(str::to_string);
        let config = api_config();
        async move {
            let Some(token) = token else {
                return None;
            };
            let client = StorefrontClient::new(config);
            match client.get_enrolled_courses(&token).await {
                Ok(courses) => Some(Ok(courses)),
                Err(error) => {
                    tracing::warn!(%error, "could not load enrolled courses");
                    Some(Err(error))
                }
            }
        }
    });

    if session().loading {
        return rsx! {
            Spinner {}
        };
    }

    let body = match courses() {
        None => rsx! {
            div { class: "flex items-center justify-center py-20",
                Icon {
                    name: "loader".to_string(),
                    class: "w-8 h-8 text-richblack-300".to_string(),
                }
            }
        },
        Some(None) => rsx! {
            div { class: "flex flex-col items-start gap-4",
                p { class: "text-richblack-300", "Sign in to see the courses you own." }
                Link { class: "yellowButton", to: Route::Login {}, "Login" }
            }
        },
        Some(Some(Err(error))) => rsx! {
            p { class: "text-red-300", "Could not load your courses: {error}" }
        },
        Some(Some(Ok(list))) if list.is_empty() => rsx! {
            p { class: "text-richblack-300", "You have not enrolled in any course yet." }
        },
        Some(Some(Ok(list))) => rsx! {
            div { class: "flex flex-col divide-y divide-richblack-700 rounded-lg border border-richblack-700",
                for course in list {
                    EnrolledCourseRow { key: "{course.id}", course: course.clone() }
                }
            }
        },
    };

    rsx! {
        div { class: "mx-auto w-11/12 max-w-maxContent py-10 text-richblack-5",
            h1 { class: "mb-8 text-3xl font-semibold", "Enrolled Courses" }
            {body}
        }
    }
}

#[component]
fn EnrolledCourseRow(course: EnrolledCourse) -> Element {
    let name = course
        .course_name
        .clone()
        .unwrap_or("Untitled Course".to_string());
    let progress = clamped_progress(course.progress_percentage);
    let duration = course.total_duration.clone().unwrap_or_default();
    let progress_text = progress_label(progress);

    rsx! {
        Link {
            class: "flex items-center gap-4 p-4 hover:bg-richblack-800 transition-colors",
            to: Route::CourseDetail {
                course_id: course.id.clone(),
            },
            if let Some(thumbnail) = course.thumbnail.clone() {
                img {
                    class: "h-14 w-14 rounded-lg object-cover",
                    src: "{thumbnail}",
                    alt: "{name}",
                    loading: "lazy",
                }
            }
            div { class: "flex flex-1 flex-col gap-1",
                p { class: "font-semibold", "{name}" }
                if let Some(description) = course.course_description.clone() {
                    p { class: "text-sm text-richblack-300 line-clamp-1", "{description}" }
                }
            }
            span { class: "text-sm text-richblack-300", "{duration}" }
            div { class: "w-32",
                p { class: "text-xs text-richblack-300", "{progress_text}" }
                div { class: "h-2 rounded-full bg-richblack-700",
                    div {
                        class: "h-2 rounded-full bg-caribbeangreen-200",
                        style: "width: {progress}%;",
                    }
                }
            }
        }
    }
}

fn clamped_progress(progress: Option<f64>) -> f64 {
    match progress {
        Some(value) if value.is_finite() => value.clamp(0.0, 100.0),
        _ => 0.0,
    }
}

fn progress_label(progress: f64) -> String {
    format!("{progress:.0}% complete")
}
