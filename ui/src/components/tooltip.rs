use dioxus::prelude::*;

/// Floating tooltip state shared between the chart (which writes it from
/// hover events) and the overlay (which renders it). Content is kept when
/// hidden so the CSS opacity fade has something to fade out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub lines: Vec<String>,
    /// Page coordinates of the pointer at hover time.
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

impl TooltipState {
    pub fn show(lines: Vec<String>, x: f64, y: f64) -> Self {
        Self {
            lines,
            x,
            y,
            visible: true,
        }
    }

    pub fn hidden(&self) -> Self {
        Self {
            visible: false,
            ..self.clone()
        }
    }
}

#[component]
pub fn TooltipOverlay(state: TooltipState) -> Element {
    let class = if state.visible {
        "chart-tooltip chart-tooltip--visible"
    } else {
        "chart-tooltip"
    };
    // Offset mirrors the pointer anchor: slightly right, above the cursor.
    let left = state.x + 5.0;
    let top = state.y - 28.0;

    rsx! {
        div {
            class: "{class}",
            style: "left: {left}px; top: {top}px;",
            for line in state.lines.iter() {
                div { class: "chart-tooltip__line", "{line}" }
            }
        }
    }
}
