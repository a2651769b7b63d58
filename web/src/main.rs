use dioxus::prelude::*;

use ui::views::Explorer;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Specifications table, shipped with the app; there is no backend.
const DATASET_CSV: &str = include_str!("../assets/cleaned_dataset.csv");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        Explorer { csv: DATASET_CSV.to_string() }
    }
}
