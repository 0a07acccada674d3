use crate::api::{ApiConfig, LoginRequest, StorefrontClient};
use crate::components::{Icon, Route};
use crate::db::{save_session, Session};
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    let nav = navigator();
    let api_config = use_context::<Signal<ApiConfig>>();
    let mut session = use_context::<Signal<Session>>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let can_submit = use_memo(move || {
        !email().trim().is_empty() && !password().is_empty() && !is_submitting()
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !can_submit() {
            return;
        }
        let request = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        let config = api_config.peek().clone();

        is_submitting.set(true);
        error.set(None);

        spawn(async move {
            let client = StorefrontClient::new(config);
            match client.login(&request).await {
                Ok((token, user)) => {
                    tracing::info!(user_id = %user.id, "signed in");
                    let next = Session::signed_in(token, user);
                    session.set(next.clone());
                    if let Err(err) = save_session(next).await {
                        tracing::warn!(error = %err, "could not persist session");
                    }
                    is_submitting.set(false);
                    if nav.can_go_back() {
                        nav.go_back();
                    } else {
                        nav.replace(Route::Home {});
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "login failed");
                    error.set(Some(err));
                    is_submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "grid min-h-[calc(100vh-3.5rem)] place-items-center px-4 text-richblack-5",
            form {
                class: "flex w-full max-w-[450px] flex-col gap-4 rounded-lg border border-richblack-700 bg-richblack-800 p-8",
                onsubmit: on_submit,
                h1 { class: "text-3xl font-semibold", "Welcome Back" }
                p { class: "text-richblack-300", "Sign in to purchase and continue your courses." }

                label { class: "flex flex-col gap-1 text-sm",
                    "Email Address"
                    input {
                        class: "rounded-lg border border-richblack-600 bg-richblack-900 px-3 py-2 text-base focus:outline-none focus:border-yellow-50",
                        r#type: "email",
                        autocomplete: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "flex flex-col gap-1 text-sm",
                    "Password"
                    input {
                        class: "rounded-lg border border-richblack-600 bg-richblack-900 px-3 py-2 text-base focus:outline-none focus:border-yellow-50",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                if let Some(message) = error() {
                    p { class: "text-sm text-red-300", "{message}" }
                }

                button {
                    class: "yellowButton flex items-center justify-center gap-2",
                    r#type: "submit",
                    disabled: !can_submit(),
                    if is_submitting() {
                        Icon { name: "loader".to_string(), class: "w-4 h-4".to_string() }
                        "Signing in..."
                    } else {
                        "Sign In"
                    }
                }
            }
        }
    }
}
