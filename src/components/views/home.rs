use crate::api::ApiConfig;
use crate::components::{Footer, Icon, Route};
use crate::db::{save_settings, AppSettings};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let nav = navigator();
    let mut api_config = use_context::<Signal<ApiConfig>>();
    let mut app_settings = use_context::<Signal<AppSettings>>();

    let mut course_id = use_signal(String::new);
    let mut api_url = use_signal(|| api_config.peek().base_url.clone());
    let mut save_status = use_signal(|| None::<String>);

    let can_open = use_memo(move || !course_id().trim().is_empty());

    let on_open = move |_| {
        let id = course_id().trim().to_string();
        if id.is_empty() {
            return;
        }
        nav.push(Route::CourseDetail { course_id: id });
    };

    let on_save_backend = move |_| {
        let url = api_url().trim().to_string();
        let mut settings = app_settings();
        settings.api_base_url = if url.is_empty() { None } else { Some(url) };
        api_config.set(ApiConfig::from_env().with_override(settings.api_base_url.as_deref()));
        app_settings.set(settings.clone());

        spawn(async move {
            match save_settings(settings).await {
                Ok(()) => save_status.set(Some("Backend saved".to_string())),
                Err(error) => {
                    tracing::warn!(%error, "could not persist settings");
                    save_status.set(Some(format!("Could not save: {error}")));
                }
            }
        });
    };

    let base_url = api_config().base_url;

    rsx! {
        div { class: "mx-auto flex w-11/12 max-w-maxContent flex-col gap-10 py-16 text-richblack-5",
            div { class: "flex flex-col gap-3",
                h1 { class: "text-4xl font-bold", "Find your next course" }
                p { class: "text-richblack-300",
                    "Paste a course id from the catalog to open its details page."
                }
            }

            div { class: "flex flex-col gap-3 sm:flex-row",
                input {
                    class: "flex-1 rounded-lg border border-richblack-600 bg-richblack-800 px-4 py-3 text-richblack-5 focus:outline-none focus:border-yellow-50",
                    placeholder: "Course id",
                    value: "{course_id}",
                    oninput: move |evt| course_id.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter && can_open() {
                            let id = course_id().trim().to_string();
                            nav.push(Route::CourseDetail { course_id: id });
                        }
                    },
                }
                button {
                    class: "yellowButton flex items-center justify-center gap-2",
                    disabled: !can_open(),
                    onclick: on_open,
                    Icon { name: "search".to_string(), class: "w-4 h-4".to_string() }
                    "Open course"
                }
            }

            div { class: "flex flex-col gap-3 rounded-lg border border-richblack-700 p-6",
                p { class: "text-lg font-semibold", "Storefront backend" }
                p { class: "text-sm text-richblack-300", "Requests go to {base_url}" }
                div { class: "flex flex-col gap-3 sm:flex-row",
                    input {
                        class: "flex-1 rounded-lg border border-richblack-600 bg-richblack-800 px-4 py-2 text-richblack-5 focus:outline-none focus:border-yellow-50",
                        placeholder: "https://api.example.com/api/v1",
                        value: "{api_url}",
                        oninput: move |evt| api_url.set(evt.value()),
                    }
                    button { class: "blackButton", onclick: on_save_backend, "Save" }
                }
                if let Some(status) = save_status() {
                    p { class: "text-sm text-richblack-200", "{status}" }
                }
            }
        }

        Footer {}
    }
}
