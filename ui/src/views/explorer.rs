use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::components::tooltip::TooltipState;
use crate::components::{Chart, ControlBar, TooltipOverlay};
use crate::core::dataset::{Dataset, ALL_BRANDS};
use crate::core::navigation::NavigationState;
use crate::core::scene::compose_frame;

/// The scene-driven explorer page: title, explanation, controls, chart,
/// and tooltip overlay. Every interaction funnels into one of three
/// signals (navigation, brand filter, tooltip); the frame is recomputed
/// from them on each render, which is the whole redraw engine.
#[component]
pub fn Explorer(csv: String) -> Element {
    let dataset = use_signal(move || {
        let parsed = Dataset::from_csv(&csv);
        match &parsed {
            Ok(data) => info!(records = data.len(), "dataset loaded"),
            Err(err) => warn!(%err, "dataset failed to load"),
        }
        parsed
    });
    let mut navigation = use_signal(NavigationState::new);
    let mut brand = use_signal(|| ALL_BRANDS.to_string());
    let mut tooltip = use_signal(TooltipState::default);

    let loaded = dataset();
    let Ok(data) = &loaded else {
        let message = loaded
            .as_ref()
            .err()
            .map(|err| err.to_string())
            .unwrap_or_default();
        return rsx! {
            section { class: "page page-explorer",
                div { class: "page-explorer__error",
                    "⚠️ Could not load the dataset: {message}"
                }
            }
        };
    };

    let frame = compose_frame(data, navigation().scene(), &brand());
    let brands = data.brands();
    let selected_brand = brand();

    rsx! {
        section { class: "page page-explorer",
            h1 { class: "page-explorer__title", "{frame.title}" }
            p { class: "page-explorer__explanation", "{frame.explanation}" }

            ControlBar {
                navigation: navigation(),
                brands,
                selected_brand,
                brand_filter_enabled: frame.brand_filter_enabled,
                // Scene changes clear any lingering tooltip; a brand
                // change only refilters the current scene, so the hover
                // state may stay.
                on_select_scene: move |index| {
                    navigation.with_mut(|nav| nav.go_to(index));
                    tooltip.set(TooltipState::default());
                },
                on_previous: move |_| {
                    navigation.with_mut(|nav| nav.previous());
                    tooltip.set(TooltipState::default());
                },
                on_next: move |_| {
                    navigation.with_mut(|nav| nav.next());
                    tooltip.set(TooltipState::default());
                },
                on_brand_change: move |value| brand.set(value),
            }

            Chart { frame, tooltip }
            TooltipOverlay { state: tooltip() }
        }
    }
}
