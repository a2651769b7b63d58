//! Annotation callouts: curated historical milestones and the offset
//! heuristic that keeps callout labels inside the plot.
//!
//! The placement rule is deliberately minimal — it only resolves
//! collisions with the plot boundary, not with other annotations, which
//! may therefore overlap. Every scene activation rebuilds the whole
//! annotation set, so placement never has to reconcile stale callouts.

use once_cell::sync::Lazy;

use super::dataset::MetricField;

/// Pixel-space bounds of the plot area (origin at the top-left corner of
/// the plot, y growing downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub width: f64,
    pub height: f64,
}

/// A fixed, curated reference device annotated on a metric chart
/// regardless of the active brand filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub year: i32,
    pub value: f64,
    pub title: &'static str,
    pub label: &'static str,
    pub dx: f64,
    pub dy: f64,
}

/// Historical milestones keyed by metric, in chart order.
static MILESTONES: Lazy<Vec<(MetricField, Vec<Milestone>)>> = Lazy::new(|| {
    vec![
        (
            MetricField::Battery,
            vec![
                Milestone {
                    year: 2016,
                    value: 3500.0,
                    title: "Samsung Galaxy S7 Edge",
                    label: "3500 mAh battery, new standard for flagships",
                    dx: -50.0,
                    dy: -25.0,
                },
                Milestone {
                    year: 2022,
                    value: 8380.0,
                    title: "Blackview BL8800",
                    label: "Impressive 8380 mAh capacity, a massive increase at the time",
                    dx: 100.0,
                    dy: 10.0,
                },
            ],
        ),
        (
            MetricField::Memory,
            vec![
                Milestone {
                    year: 2019,
                    value: 8.0,
                    title: "Samsung Galaxy S10+",
                    label: "8GB RAM becomes common in high-end devices",
                    dx: -75.0,
                    dy: -25.0,
                },
                Milestone {
                    year: 2021,
                    value: 18.0,
                    title: "Asus ROG Phone 5 Ultimate",
                    label: "Pushing boundaries with 18GB RAM",
                    dx: 50.0,
                    dy: -25.0,
                },
            ],
        ),
        (
            MetricField::PrimaryStorage,
            vec![Milestone {
                year: 2018,
                value: 512.0,
                title: "iPhone XS Max",
                label: "Introduces a 512GB storage option, matching Samsung offerings",
                dx: 50.0,
                dy: -25.0,
            }],
        ),
        (
            MetricField::PrimaryCamera,
            vec![Milestone {
                year: 2020,
                value: 108.0,
                title: "Xiaomi Mi Note 10",
                label: "First 108MP smartphone camera",
                dx: -25.0,
                dy: -25.0,
            }],
        ),
    ]
});

/// Milestones for one metric, empty when none are curated.
pub fn milestones_for(metric: MetricField) -> &'static [Milestone] {
    MILESTONES
        .iter()
        .find(|(field, _)| *field == metric)
        .map(|(_, entries)| entries.as_slice())
        .unwrap_or(&[])
}

/// Resolve the final label offset for a callout anchored at pixel
/// `(x, y)`. If the preferred offset would push the label past the right
/// plot edge the horizontal offset flips left; if it would rise above the
/// top edge (pixel y decreases upward) the vertical offset flips downward.
/// Pure and idempotent.
pub fn place(x: f64, y: f64, dx: f64, dy: f64, bounds: PlotBounds) -> (f64, f64) {
    let adjusted_dx = if x + dx > bounds.width { -dx.abs() } else { dx };
    let adjusted_dy = if y + dy < 0.0 { dy.abs() } else { dy };
    (adjusted_dx, adjusted_dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: PlotBounds = PlotBounds {
        width: 680.0,
        height: 340.0,
    };

    #[test]
    fn in_bounds_offsets_pass_through() {
        assert_eq!(place(100.0, 200.0, 50.0, -25.0, BOUNDS), (50.0, -25.0));
    }

    #[test]
    fn right_edge_collision_flips_horizontal_offset() {
        assert_eq!(place(660.0, 200.0, 50.0, -25.0, BOUNDS), (-50.0, -25.0));
    }

    #[test]
    fn top_edge_collision_flips_vertical_offset() {
        assert_eq!(place(100.0, 10.0, 50.0, -25.0, BOUNDS), (50.0, 25.0));
    }

    #[test]
    fn both_edges_can_flip_independently() {
        assert_eq!(place(670.0, 5.0, 40.0, -30.0, BOUNDS), (-40.0, 30.0));
    }

    #[test]
    fn placement_is_idempotent() {
        let first = place(660.0, 10.0, 50.0, -25.0, BOUNDS);
        let second = place(660.0, 10.0, first.0, first.1, BOUNDS);
        // Re-running with the adjusted offsets must not flip them back.
        assert_eq!(place(660.0, 10.0, 50.0, -25.0, BOUNDS), first);
        assert_eq!(second, first);
    }

    #[test]
    fn every_metric_has_its_curated_milestones() {
        assert_eq!(milestones_for(MetricField::Battery).len(), 2);
        assert_eq!(milestones_for(MetricField::Memory).len(), 2);
        assert_eq!(milestones_for(MetricField::PrimaryStorage).len(), 1);
        assert_eq!(milestones_for(MetricField::PrimaryCamera).len(), 1);
    }
}
