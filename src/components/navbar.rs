use crate::components::{view_label, Icon, Route};
use crate::db::{clear_session, Session};
use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let route = use_route::<Route>();
    let nav = navigator();

    let on_logout = move |_| {
        session.set(Session::default());
        spawn(async move {
            if let Err(error) = clear_session().await {
                tracing::warn!(%error, "could not clear stored session");
            }
        });
        tracing::info!("signed out");
        nav.push(Route::Home {});
    };

    let current = session();
    let signed_in = current.token().is_some();
    let user_name = current
        .user
        .as_ref()
        .map(|user| user.first_name.clone())
        .unwrap_or_default();

    rsx! {
        header { class: "flex h-14 items-center justify-center border-b border-richblack-700",
            div { class: "flex w-11/12 max-w-maxContent items-center justify-between",
                Link { class: "flex items-center gap-2 text-richblack-5", to: Route::Home {},
                    Icon { name: "book".to_string(), class: "w-6 h-6".to_string() }
                    span { class: "text-lg font-bold", "Coursefront" }
                }

                span { class: "text-sm font-semibold text-richblack-300 md:hidden",
                    "{view_label(&route)}"
                }

                nav { class: "hidden gap-6 text-richblack-25 md:flex",
                    NavItem {
                        label: "Catalog",
                        to: Route::Home {},
                        active: matches!(route, Route::Home {}),
                    }
                    NavItem {
                        label: "My Courses",
                        to: Route::EnrolledCourses {},
                        active: matches!(route, Route::EnrolledCourses {}),
                    }
                }

                div { class: "flex items-center gap-3",
                    if current.loading {
                        Icon {
                            name: "loader".to_string(),
                            class: "w-5 h-5 text-richblack-300".to_string(),
                        }
                    } else if signed_in {
                        span { class: "hidden text-sm text-richblack-100 sm:inline", "{user_name}" }
                        button {
                            class: "flex items-center gap-2 rounded-md border border-richblack-700 bg-richblack-800 px-3 py-2 text-richblack-100 hover:text-richblack-5",
                            onclick: on_logout,
                            Icon { name: "log-out".to_string(), class: "w-4 h-4".to_string() }
                            "Log out"
                        }
                    } else {
                        Link {
                            class: "rounded-md border border-richblack-700 bg-richblack-800 px-3 py-2 text-richblack-100",
                            to: Route::Login {},
                            "Log in"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(label: &'static str, to: Route, active: bool) -> Element {
    let tone = if active {
        "text-yellow-25"
    } else {
        "text-richblack-25 hover:text-richblack-5"
    };

    rsx! {
        Link { class: "{tone} transition-colors", to, "{label}" }
    }
}
