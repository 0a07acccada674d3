use dioxus::prelude::*;

mod api;
mod components;
mod db;

use components::Route;

const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    if let Err(error) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("failed to initialize logger: {error}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#161d29" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Title { "Coursefront" }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: APP_CSS }

        Router::<Route> {}
    }
}
