use dioxus::prelude::*;

use crate::components::tooltip::TooltipState;
use crate::core::scene::{
    plot_bounds, SceneFrame, CANVAS_HEIGHT, CANVAS_WIDTH, MARGIN_LEFT, MARGIN_TOP,
};

/// Width budget for annotation label lines before wrapping.
const LABEL_WRAP_COLUMNS: usize = 34;

/// Pre-laid-out callout: everything the SVG needs as plain numbers.
#[derive(Clone, PartialEq)]
struct CalloutLayout {
    anchor_x: f64,
    anchor_y: f64,
    end_x: f64,
    end_y: f64,
    title: String,
    title_y: f64,
    label_lines: Vec<(f64, String)>,
    anchor: &'static str,
    circle_radius: Option<f64>,
}

/// Renders one [`SceneFrame`] as inline SVG. The component draws whatever
/// the frame says and nothing else; a scene switch therefore replaces
/// every point, path, callout, and hover binding wholesale.
#[component]
pub fn Chart(frame: SceneFrame, tooltip: Signal<TooltipState>) -> Element {
    let bounds = plot_bounds();
    let plot_width = bounds.width;
    let plot_height = bounds.height;
    let x_label_x = plot_width / 2.0;
    let x_label_y = plot_height + 40.0;
    let y_label_x = -plot_height / 2.0;

    let line_points = frame.line.as_ref().map(|vertices| {
        vertices
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ")
    });

    let callouts: Vec<CalloutLayout> = frame
        .annotations
        .iter()
        .map(|annotation| {
            let end_x = annotation.x + annotation.dx;
            let end_y = annotation.y + annotation.dy;
            let label_lines = wrap_label(&annotation.label, LABEL_WRAP_COLUMNS)
                .into_iter()
                .enumerate()
                .map(|(row, line)| (end_y + 12.0 + row as f64 * 14.0, line))
                .collect();
            CalloutLayout {
                anchor_x: annotation.x,
                anchor_y: annotation.y,
                end_x,
                end_y,
                title: annotation.title.clone(),
                title_y: end_y - 6.0,
                label_lines,
                anchor: anchor_for(annotation.dx),
                circle_radius: annotation.circle_radius,
            }
        })
        .collect();

    rsx! {
        svg {
            class: "chart",
            width: "{CANVAS_WIDTH}",
            height: "{CANVAS_HEIGHT}",
            g {
                transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",

                // Axis lines, ticks, and labels.
                g { class: "chart__axis chart__axis--x",
                    line {
                        x1: "0", y1: "{plot_height}",
                        x2: "{plot_width}", y2: "{plot_height}",
                    }
                    for tick in frame.x_axis.ticks.iter() {
                        g {
                            transform: "translate({tick.offset},{plot_height})",
                            line { x1: "0", y1: "0", x2: "0", y2: "6" }
                            text { y: "20", text_anchor: "middle", "{tick.text}" }
                        }
                    }
                    text {
                        class: "chart__axis-label",
                        x: "{x_label_x}",
                        y: "{x_label_y}",
                        text_anchor: "middle",
                        "{frame.x_axis.label}"
                    }
                }
                g { class: "chart__axis chart__axis--y",
                    line { x1: "0", y1: "0", x2: "0", y2: "{plot_height}" }
                    for tick in frame.y_axis.ticks.iter() {
                        g {
                            transform: "translate(0,{tick.offset})",
                            line { x1: "0", y1: "0", x2: "-6", y2: "0" }
                            text { x: "-10", y: "4", text_anchor: "end", "{tick.text}" }
                        }
                    }
                    text {
                        class: "chart__axis-label",
                        transform: "rotate(-90)",
                        x: "{y_label_x}",
                        y: "-40",
                        text_anchor: "middle",
                        "{frame.y_axis.label}"
                    }
                }

                // Aggregate-scene polyline under its dots.
                if let Some(points) = line_points {
                    polyline {
                        class: "chart__line",
                        points: "{points}",
                        fill: "none",
                        stroke: "{frame.color}",
                        stroke_width: "2",
                    }
                }

                // One mark per visible record (or per year aggregate).
                for point in frame.points.iter() {
                    circle {
                        cx: "{point.x}",
                        cy: "{point.y}",
                        r: "5",
                        fill: "{frame.color}",
                        onmouseover: {
                            let lines = point.tooltip.clone();
                            let mut tooltip = tooltip;
                            move |evt: MouseEvent| {
                                let coords = evt.page_coordinates();
                                tooltip.set(TooltipState::show(lines.clone(), coords.x, coords.y));
                            }
                        },
                        onmouseout: {
                            let mut tooltip = tooltip;
                            move |_| {
                                let hidden = tooltip.peek().hidden();
                                tooltip.set(hidden);
                            }
                        },
                    }
                }

                // Annotation callouts, offsets already boundary-adjusted.
                for callout in callouts.iter() {
                    g { class: "chart__annotation",
                        if let Some(radius) = callout.circle_radius {
                            circle {
                                class: "chart__annotation-subject",
                                cx: "{callout.anchor_x}",
                                cy: "{callout.anchor_y}",
                                r: "{radius}",
                                fill: "none",
                            }
                        }
                        line {
                            class: "chart__annotation-connector",
                            x1: "{callout.anchor_x}",
                            y1: "{callout.anchor_y}",
                            x2: "{callout.end_x}",
                            y2: "{callout.end_y}",
                        }
                        text {
                            class: "chart__annotation-title",
                            x: "{callout.end_x}",
                            y: "{callout.title_y}",
                            text_anchor: "{callout.anchor}",
                            "{callout.title}"
                        }
                        for (line_y, line) in callout.label_lines.iter() {
                            text {
                                class: "chart__annotation-label",
                                x: "{callout.end_x}",
                                y: "{line_y}",
                                text_anchor: "{callout.anchor}",
                                "{line}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Callouts flipped left of their anchor read right-to-left.
fn anchor_for(dx: f64) -> &'static str {
    if dx < 0.0 {
        "end"
    } else {
        "start"
    }
}

/// Greedy word wrap for annotation labels; SVG text has no native
/// wrapping, so each returned line becomes its own text element.
fn wrap_label(label: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in label.split_whitespace() {
        if !current.is_empty() && current.len() + word.len() + 1 > columns {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
