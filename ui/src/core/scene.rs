//! Scene descriptors and the frame composer — the redraw half of the
//! scene state machine.
//!
//! A scene activation (or a brand-filter change on a metric scene) calls
//! [`compose_frame`], which selects the visible subset, recomputes both
//! scale domains from it, projects every point into pixel space, and
//! boundary-adjusts the scene's annotations. The result is a complete
//! [`SceneFrame`]; the chart component renders it wholesale, so the old
//! visuals (points, line, callouts, hover bindings) are torn down and
//! rebuilt on every transition rather than diffed. At this data size that
//! is the simplest correct strategy.

use super::aggregate::{count_by_year, peak_year};
use super::annotate::{milestones_for, place, PlotBounds};
use super::dataset::{Dataset, MetricField, PhoneRecord, ALL_BRANDS};
use super::format::{format_metric, format_tick};
use super::scale::{extent, max_finite, LinearScale};

/// Fixed chart geometry, in logical pixels.
pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 500.0;
pub const MARGIN_TOP: f64 = 80.0;
pub const MARGIN_RIGHT: f64 = 50.0;
pub const MARGIN_BOTTOM: f64 = 80.0;
pub const MARGIN_LEFT: f64 = 70.0;

/// The plot area inside the margins; annotation offsets are resolved
/// against these bounds.
pub fn plot_bounds() -> PlotBounds {
    PlotBounds {
        width: CANVAS_WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
        height: CANVAS_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
    }
}

/// One named visualization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    All,
    Battery,
    Memory,
    Storage,
    Camera,
}

/// Slideshow order; adjacency for previous/next navigation.
pub const SCENE_ORDER: [SceneId; 5] = [
    SceneId::All,
    SceneId::Battery,
    SceneId::Memory,
    SceneId::Storage,
    SceneId::Camera,
];

/// Static per-scene configuration, constructed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneDescriptor {
    pub id: SceneId,
    /// Absent for the aggregate release-count scene.
    pub metric: Option<MetricField>,
    pub color: &'static str,
    pub y_label: &'static str,
    pub button_label: &'static str,
    pub title: &'static str,
    pub explanation: &'static str,
}

impl SceneId {
    pub fn descriptor(self) -> &'static SceneDescriptor {
        match self {
            Self::All => &SceneDescriptor {
                id: SceneId::All,
                metric: None,
                color: "steelblue",
                y_label: "Number of Phones Released",
                button_label: "Phones Per Year",
                title: "Number of Phones Released Per Year",
                explanation: "This line graph shows the trend in smartphone releases over the years, indicating the overall growth of the smartphone market.",
            },
            Self::Battery => &SceneDescriptor {
                id: SceneId::Battery,
                metric: Some(MetricField::Battery),
                color: "orange",
                y_label: "Battery Capacity (mAh)",
                button_label: "Battery",
                title: "Smartphone Battery Capacity Over Time",
                explanation: "This chart shows how smartphone battery capacity has changed over the years. Higher values indicate longer battery life.",
            },
            Self::Memory => &SceneDescriptor {
                id: SceneId::Memory,
                metric: Some(MetricField::Memory),
                color: "blue",
                y_label: "Memory (GB)",
                button_label: "Memory",
                title: "Smartphone Memory Capacity Over Time",
                explanation: "This chart displays the evolution of smartphone memory capacity. More memory allows for better multitasking and app performance.",
            },
            Self::Storage => &SceneDescriptor {
                id: SceneId::Storage,
                metric: Some(MetricField::PrimaryStorage),
                color: "green",
                y_label: "Primary Storage (GB)",
                button_label: "Storage",
                title: "Smartphone Storage Capacity Over Time",
                explanation: "This visualization shows how smartphone storage capacity has increased. More storage allows users to keep more apps, photos, and files on their devices.",
            },
            Self::Camera => &SceneDescriptor {
                id: SceneId::Camera,
                metric: Some(MetricField::PrimaryCamera),
                color: "purple",
                y_label: "Primary Camera (MP)",
                button_label: "Camera",
                title: "Smartphone Camera Resolution Over Time",
                explanation: "This chart illustrates the improvement in smartphone camera resolutions. Higher megapixel counts generally allow for more detailed photos.",
            },
        }
    }

    /// Position within [`SCENE_ORDER`].
    pub fn position(self) -> usize {
        SCENE_ORDER
            .iter()
            .position(|scene| *scene == self)
            .unwrap_or(0)
    }
}

/// One rendered tick mark.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Pixel offset along the axis.
    pub offset: f64,
    pub text: String,
}

/// Everything the chart needs to draw one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFrame {
    pub ticks: Vec<Tick>,
    pub label: String,
}

/// One plotted mark, already projected to plot pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedPoint {
    pub x: f64,
    pub y: f64,
    /// Tooltip body, one line per entry.
    pub tooltip: Vec<String>,
}

/// A callout with its offset already boundary-adjusted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedAnnotation {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub title: String,
    pub label: String,
    /// Radius of an emphasis circle around the anchor, when the callout
    /// highlights a region rather than a single point.
    pub circle_radius: Option<f64>,
}

/// A fully computed redraw: the chart component renders this and nothing
/// else, so two identical frames always paint identically.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub scene: SceneId,
    pub title: &'static str,
    pub explanation: &'static str,
    pub color: &'static str,
    pub x_axis: AxisFrame,
    pub y_axis: AxisFrame,
    pub points: Vec<PlottedPoint>,
    /// Polyline vertices for the aggregate scene, plot-order.
    pub line: Option<Vec<(f64, f64)>>,
    pub annotations: Vec<PlacedAnnotation>,
    pub brand_filter_enabled: bool,
}

const X_TICK_COUNT: usize = 8;
const Y_TICK_COUNT: usize = 6;

/// Compose the frame for `scene` under the active brand filter. The
/// filter only applies to metric scenes; the aggregate scene always uses
/// the full dataset (its control is disabled).
pub fn compose_frame(dataset: &Dataset, scene: SceneId, brand: &str) -> SceneFrame {
    match scene.descriptor().metric {
        Some(metric) => compose_metric_frame(dataset, scene, metric, brand),
        None => compose_aggregate_frame(dataset, scene),
    }
}

fn compose_metric_frame(
    dataset: &Dataset,
    scene: SceneId,
    metric: MetricField,
    brand: &str,
) -> SceneFrame {
    let descriptor = scene.descriptor();
    let bounds = plot_bounds();

    // Records hidden by the filter or carrying an uncoercible metric cell
    // are excluded from both the plot and the scale domains.
    let visible: Vec<&PhoneRecord> = dataset
        .records
        .iter()
        .filter(|record| brand == ALL_BRANDS || record.brand == brand)
        .filter(|record| metric.value_of(record).is_finite())
        .collect();

    let x_domain = extent(visible.iter().map(|r| f64::from(r.release_year)))
        .or_else(|| extent(dataset.records.iter().map(|r| f64::from(r.release_year))))
        .unwrap_or((0.0, 1.0));
    let y_max = max_finite(visible.iter().map(|r| metric.value_of(r))).unwrap_or(1.0);

    let x_scale = LinearScale::new(x_domain, (0.0, bounds.width));
    let y_scale = LinearScale::new((0.0, y_max), (bounds.height, 0.0));

    let points = visible
        .iter()
        .map(|record| {
            let value = metric.value_of(record);
            PlottedPoint {
                x: x_scale.scale(f64::from(record.release_year)),
                y: y_scale.scale(value),
                tooltip: vec![
                    format!("Brand: {}", record.brand),
                    format!("Model: {}", record.model),
                    format!("Release Date: {}", record.release_year),
                    format!("{}: {} {}", metric.label(), format_metric(value), metric.unit()),
                    format!("OS: {}", record.os),
                    format!("Processor: {}", record.processor),
                ],
            }
        })
        .collect();

    let annotations = milestones_for(metric)
        .iter()
        .map(|milestone| {
            let x = x_scale.scale(f64::from(milestone.year));
            let y = y_scale.scale(milestone.value);
            let (dx, dy) = place(x, y, milestone.dx, milestone.dy, bounds);
            PlacedAnnotation {
                x,
                y,
                dx,
                dy,
                title: milestone.title.to_string(),
                label: milestone.label.to_string(),
                circle_radius: None,
            }
        })
        .collect();

    SceneFrame {
        scene,
        title: descriptor.title,
        explanation: descriptor.explanation,
        color: descriptor.color,
        x_axis: axis_frame(&x_scale, X_TICK_COUNT, "Release Year"),
        y_axis: axis_frame(&y_scale, Y_TICK_COUNT, descriptor.y_label),
        points,
        line: None,
        annotations,
        brand_filter_enabled: true,
    }
}

fn compose_aggregate_frame(dataset: &Dataset, scene: SceneId) -> SceneFrame {
    let descriptor = scene.descriptor();
    let bounds = plot_bounds();
    let aggregates = count_by_year(&dataset.records);

    let x_domain = extent(aggregates.iter().map(|a| f64::from(a.year))).unwrap_or((0.0, 1.0));
    let y_max = max_finite(aggregates.iter().map(|a| a.count as f64)).unwrap_or(1.0);

    let x_scale = LinearScale::new(x_domain, (0.0, bounds.width));
    let y_scale = LinearScale::new((0.0, y_max), (bounds.height, 0.0));

    let points: Vec<PlottedPoint> = aggregates
        .iter()
        .map(|aggregate| {
            let mut tooltip = vec![
                format!("Year: {}", aggregate.year),
                format!("Total Phones: {}", aggregate.count),
                "Top Companies:".to_string(),
            ];
            for (rank, entry) in aggregate.top_brands.iter().enumerate() {
                tooltip.push(format!("{}. {} ({})", rank + 1, entry.brand, entry.count));
            }
            PlottedPoint {
                x: x_scale.scale(f64::from(aggregate.year)),
                y: y_scale.scale(aggregate.count as f64),
                tooltip,
            }
        })
        .collect();

    let line = Some(points.iter().map(|p| (p.x, p.y)).collect());

    let mut annotations = Vec::new();
    if let Some(peak) = peak_year(&aggregates) {
        let x = x_scale.scale(f64::from(peak.year));
        let y = y_scale.scale(peak.count as f64);
        let (dx, dy) = place(x, y, 50.0, -50.0, bounds);
        annotations.push(PlacedAnnotation {
            x,
            y,
            dx,
            dy,
            title: format!("Year {}", peak.year),
            label: format!("Peak releases: {} phones", peak.count),
            circle_radius: None,
        });
    }

    // Fixed context callout describing the overall market trend; anchored
    // to a nominal (2016, 250) reference rather than any data point. The
    // value is clamped into the domain so the callout stays on the canvas
    // for datasets that never reach 250 releases a year.
    let growth_x = x_scale.scale(2016.0);
    let growth_y = y_scale.scale(250.0_f64.min(y_max));
    let (growth_dx, growth_dy) = place(growth_x, growth_y, -200.0, 0.0, bounds);
    annotations.push(PlacedAnnotation {
        x: growth_x,
        y: growth_y,
        dx: growth_dx,
        dy: growth_dy,
        title: "Market Growth".to_string(),
        label: "Steady increase in smartphone releases with the rise of new brands and models and better technology".to_string(),
        circle_radius: Some(150.0),
    });

    SceneFrame {
        scene,
        title: descriptor.title,
        explanation: descriptor.explanation,
        color: descriptor.color,
        x_axis: axis_frame(&x_scale, X_TICK_COUNT, "Release Year"),
        y_axis: axis_frame(&y_scale, Y_TICK_COUNT, descriptor.y_label),
        points,
        line,
        annotations,
        brand_filter_enabled: false,
    }
}

fn axis_frame(scale: &LinearScale, count: usize, label: &str) -> AxisFrame {
    AxisFrame {
        ticks: scale
            .ticks(count)
            .into_iter()
            .map(|value| Tick {
                offset: scale.scale(value),
                text: format_tick(value),
            })
            .collect(),
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::PhoneRecord;

    fn record(brand: &str, year: i32, battery: f64) -> PhoneRecord {
        PhoneRecord {
            brand: brand.into(),
            model: format!("{brand}-{year}"),
            os: "Android".into(),
            processor: "test".into(),
            release_year: year,
            battery,
            memory: 4.0,
            primary_storage: 64.0,
            primary_camera: 12.0,
        }
    }

    fn dataset(records: Vec<PhoneRecord>) -> Dataset {
        Dataset { records }
    }

    #[test]
    fn scene_order_has_the_aggregate_scene_first() {
        assert_eq!(SCENE_ORDER[0], SceneId::All);
        assert_eq!(SCENE_ORDER.len(), 5);
        for (index, scene) in SCENE_ORDER.iter().enumerate() {
            assert_eq!(scene.position(), index);
        }
    }

    #[test]
    fn metric_frame_pixel_y_descends_as_values_grow() {
        let data = dataset(vec![
            record("Samsung", 2016, 3000.0),
            record("Apple", 2018, 2716.0),
            record("Xiaomi", 2020, 4500.0),
            record("Oppo", 2022, 5000.0),
        ]);
        let frame = compose_frame(&data, SceneId::Battery, ALL_BRANDS);

        let mut by_value: Vec<(f64, f64)> = data
            .records
            .iter()
            .zip(&frame.points)
            .map(|(r, p)| (r.battery, p.y))
            .collect();
        by_value.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        for pair in by_value.windows(2) {
            assert!(pair[1].1 <= pair[0].1, "larger value must not sit lower");
        }
    }

    #[test]
    fn brand_filter_restricts_points_but_not_titles() {
        let data = dataset(vec![
            record("Samsung", 2016, 3000.0),
            record("Apple", 2018, 2716.0),
            record("Apple", 2020, 2815.0),
        ]);
        let all = compose_frame(&data, SceneId::Battery, ALL_BRANDS);
        let apple = compose_frame(&data, SceneId::Battery, "Apple");

        assert_eq!(all.points.len(), 3);
        assert_eq!(apple.points.len(), 2);
        assert_eq!(apple.title, all.title);
        assert_eq!(apple.explanation, all.explanation);
        assert!(apple.brand_filter_enabled);
    }

    #[test]
    fn nan_metric_records_are_excluded_from_points_and_domain() {
        let data = dataset(vec![
            record("Samsung", 2016, 3000.0),
            record("Nokia", 2017, f64::NAN),
        ]);
        let frame = compose_frame(&data, SceneId::Battery, ALL_BRANDS);
        assert_eq!(frame.points.len(), 1);

        // The NaN record still counts in the aggregate scene.
        let aggregate = compose_frame(&data, SceneId::All, ALL_BRANDS);
        assert_eq!(aggregate.points.len(), 2);
    }

    #[test]
    fn empty_filter_result_still_yields_valid_axes() {
        let data = dataset(vec![record("Samsung", 2016, 3000.0)]);
        let frame = compose_frame(&data, SceneId::Battery, "Nokia");

        assert!(frame.points.is_empty());
        assert!(!frame.x_axis.ticks.is_empty());
        assert!(!frame.y_axis.ticks.is_empty());
        for tick in frame.x_axis.ticks.iter().chain(&frame.y_axis.ticks) {
            assert!(tick.offset.is_finite());
        }
    }

    #[test]
    fn aggregate_frame_disables_the_filter_and_draws_a_line() {
        let data = dataset(vec![
            record("Samsung", 2016, 3000.0),
            record("Apple", 2017, 2716.0),
        ]);
        let frame = compose_frame(&data, SceneId::All, "Apple");

        assert!(!frame.brand_filter_enabled);
        // The filter argument is ignored on the aggregate scene.
        assert_eq!(frame.points.len(), 2);
        assert_eq!(frame.line.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn aggregate_frame_annotates_the_peak_year() {
        let mut records = Vec::new();
        for i in 0..12 {
            records.push(record("Samsung", 2020, 3000.0 + i as f64));
        }
        records.push(record("Apple", 2019, 2716.0));
        records.push(record("Apple", 2021, 2815.0));

        let frame = compose_frame(&dataset(records), SceneId::All, ALL_BRANDS);
        let peak = frame
            .annotations
            .iter()
            .find(|a| a.title == "Year 2020")
            .expect("peak annotation present");
        assert_eq!(peak.label, "Peak releases: 12 phones");
    }

    #[test]
    fn aggregate_tooltips_rank_the_top_brands() {
        let records = vec![
            record("Samsung", 2020, 3000.0),
            record("Samsung", 2020, 3100.0),
            record("Apple", 2020, 2716.0),
        ];
        let frame = compose_frame(&dataset(records), SceneId::All, ALL_BRANDS);
        let tooltip = &frame.points[0].tooltip;
        assert!(tooltip.contains(&"1. Samsung (2)".to_string()));
        assert!(tooltip.contains(&"2. Apple (1)".to_string()));
    }

    #[test]
    fn milestone_annotations_survive_brand_filtering() {
        let data = dataset(vec![
            record("Apple", 2016, 2000.0),
            record("Apple", 2022, 3200.0),
        ]);
        let frame = compose_frame(&data, SceneId::Battery, "Apple");
        // Both curated battery milestones stay overlaid even though
        // neither device is an Apple record.
        assert_eq!(frame.annotations.len(), 2);
    }

    #[test]
    fn annotation_offsets_respect_plot_bounds() {
        let data = dataset(vec![
            record("Samsung", 2016, 3500.0),
            record("Blackview", 2022, 8380.0),
        ]);
        let frame = compose_frame(&data, SceneId::Battery, ALL_BRANDS);
        let bounds = plot_bounds();
        for annotation in &frame.annotations {
            assert!(annotation.x + annotation.dx <= bounds.width);
            assert!(annotation.y + annotation.dy >= 0.0);
        }
    }
}
