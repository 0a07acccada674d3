use crate::components::ErrorView;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        ErrorView { message: Some(format!("Nothing lives at {path}")) }
    }
}
