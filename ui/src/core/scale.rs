//! Linear value→pixel scales and their tick delegates.
//!
//! Both chart axes share this type: the horizontal scale maps release year
//! onto `[0, plot_width]` and the vertical scale maps the active metric (or
//! the per-year count) onto `[plot_height, 0]` — pixel y grows downward, so
//! the range is inverted to keep larger values higher on screen.
//!
//! Domains are recomputed from the currently visible subset on every
//! redraw; the scale itself is a dumb mapping with no retained state.

/// A continuous linear mapping from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Project a domain value into pixel space. A zero-span domain maps
    /// every input to the midpoint of the range instead of dividing by
    /// zero (happens when a filtered subset covers a single year).
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Roughly `count` tick values inside the domain, stepped on a rounded
    /// 1/2/5 progression so labels land on friendly numbers.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span <= 0.0 || count == 0 {
            return vec![d0];
        }

        let raw_step = span / count as f64;
        let magnitude = 10f64.powf(raw_step.log10().floor());
        let residual = raw_step / magnitude;
        // Error-minimizing thresholds between the 1/2/5/10 candidates.
        let step = if residual >= 50f64.sqrt() {
            10.0 * magnitude
        } else if residual >= 10f64.sqrt() {
            5.0 * magnitude
        } else if residual >= 2f64.sqrt() {
            2.0 * magnitude
        } else {
            magnitude
        };

        let mut ticks = Vec::new();
        let mut tick = (d0 / step).ceil() * step;
        while tick <= d1 + step * 1e-9 {
            // Snap away float drift so year ticks render as clean integers.
            ticks.push((tick / step).round() * step);
            tick += step;
        }
        ticks
    }
}

/// `[min, max]` of the finite values in `iter`, or `None` when nothing
/// finite remains (empty filter result, or all cells failed coercion).
pub fn extent(iter: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for value in iter {
        if !value.is_finite() {
            continue;
        }
        bounds = Some(match bounds {
            None => (value, value),
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
        });
    }
    bounds
}

/// Maximum finite value, for `[0, max]` style value domains.
pub fn max_finite(iter: impl IntoIterator<Item = f64>) -> Option<f64> {
    extent(iter).map(|(_, hi)| hi)
}
