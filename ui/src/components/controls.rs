use dioxus::prelude::*;

use crate::core::navigation::NavigationState;
use crate::core::scene::SCENE_ORDER;

/// Scene selectors, previous/next buttons, and the brand filter.
///
/// Enablement is derived entirely from the navigation state and the
/// active frame: previous/next disable at the deck boundaries and the
/// brand select disables on the aggregate scene, where filtering is
/// meaningless.
#[component]
pub fn ControlBar(
    navigation: NavigationState,
    brands: Vec<String>,
    selected_brand: String,
    brand_filter_enabled: bool,
    on_select_scene: EventHandler<usize>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_brand_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "controls",
            div { class: "controls__scenes",
                for (index, scene) in SCENE_ORDER.iter().enumerate() {
                    button {
                        r#type: "button",
                        class: if navigation.index() == index {
                            "controls__scene controls__scene--active"
                        } else {
                            "controls__scene"
                        },
                        onclick: move |_| on_select_scene.call(index),
                        "{scene.descriptor().button_label}"
                    }
                }
            }

            div { class: "controls__nav",
                button {
                    r#type: "button",
                    class: "controls__step",
                    disabled: navigation.previous_disabled(),
                    onclick: move |_| on_previous.call(()),
                    "Previous"
                }
                button {
                    r#type: "button",
                    class: "controls__step",
                    disabled: navigation.next_disabled(),
                    onclick: move |_| on_next.call(()),
                    "Next"
                }
            }

            label { class: "controls__filter",
                "Brand: "
                select {
                    disabled: !brand_filter_enabled,
                    value: "{selected_brand}",
                    onchange: move |evt| on_brand_change.call(evt.value()),
                    for brand in brands.iter() {
                        option { value: "{brand}", "{brand}" }
                    }
                }
            }
        }
    }
}
