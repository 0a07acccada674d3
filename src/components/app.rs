use crate::api::ApiConfig;
use crate::components::course_details::PaymentLoadingSignal;
use crate::components::{Navbar, Route};
use crate::db::{initialize_database, load_session, load_settings, AppSettings, Session};
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let mut session = use_signal(|| Session {
        loading: true,
        ..Session::default()
    });
    let mut app_settings = use_signal(AppSettings::default);
    let mut api_config = use_signal(ApiConfig::from_env);
    let payment_loading = use_signal(|| false);

    // Provide state via context
    use_context_provider(|| session);
    use_context_provider(|| app_settings);
    use_context_provider(|| api_config);
    use_context_provider(|| PaymentLoadingSignal(payment_loading));

    // Initialize storage and restore settings and session on mount
    use_effect(move || {
        spawn(async move {
            if let Err(error) = initialize_database().await {
                tracing::error!(%error, "failed to initialize storage");
                session.write().loading = false;
                return;
            }

            match load_settings().await {
                Ok(settings) => {
                    api_config
                        .set(ApiConfig::from_env().with_override(settings.api_base_url.as_deref()));
                    app_settings.set(settings);
                }
                Err(error) => tracing::warn!(%error, "could not load settings"),
            }

            match load_session().await {
                Ok(stored) => {
                    if stored.token().is_some() {
                        tracing::info!("restored saved session");
                    }
                    session.set(Session {
                        loading: false,
                        ..stored
                    });
                }
                Err(error) => {
                    tracing::warn!(%error, "could not load session");
                    session.write().loading = false;
                }
            }
        });
    });

    rsx! {
        div { class: "app-container flex min-h-screen w-full flex-col bg-richblack-900 font-inter",
            Navbar {}
            main { class: "flex-1", Outlet::<Route> {} }
        }
    }
}
