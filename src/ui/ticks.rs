//! Axis tick placement for the chart plots.
//!
//! Steps are picked from the usual "nice" sequence (1, 2, 2.5, 5 × 10^k) so that no
//! more than a given number of marks fall inside the visible range.

use egui_plot::{GridInput, GridMark};
use std::ops::RangeInclusive;

/// Upper bound on major ticks for the time-series axes.
pub const MAX_MAJOR_TICKS: usize = 15;

/// Tick limit used for integer-only axes.
const INTEGER_AXIS_MAX_TICKS: usize = 10;

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];
const INTEGER_STEPS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// How major ticks are placed on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPolicy {
    /// Leave it to the plot's default spacer.
    Auto,
    /// At most this many ticks.
    MaxTicks(usize),
    /// Whole numbers only, labelled without decimals.
    Integer,
}

impl TickPolicy {
    /// Grid marks for the visible `bounds`, or `None` for `Auto`.
    pub fn marks(self, bounds: (f64, f64)) -> Option<Vec<GridMark>> {
        match self {
            TickPolicy::Auto => None,
            TickPolicy::MaxTicks(max_ticks) => Some(limited_marks(bounds, max_ticks, false)),
            TickPolicy::Integer => Some(limited_marks(bounds, INTEGER_AXIS_MAX_TICKS, true)),
        }
    }

    /// Grid spacer closure suitable for `Plot::x_grid_spacer` / `Plot::y_grid_spacer`.
    pub fn spacer(self) -> Option<impl Fn(GridInput) -> Vec<GridMark> + 'static> {
        match self {
            TickPolicy::Auto => None,
            policy => Some(move |input: GridInput| policy.marks(input.bounds).unwrap_or_default()),
        }
    }
}

/// Label formatter for integer axes.
pub fn integer_label(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    format!("{}", mark.value.round() as i64)
}

/// Smallest nice step that keeps `span` within `max_ticks` marks.
pub fn tick_step(span: f64, max_ticks: usize, integer: bool) -> f64 {
    let intervals = max_ticks.saturating_sub(1).max(1) as f64;
    let raw = span / intervals;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }

    let magnitude = 10f64.powf(raw.log10().floor());
    let multipliers: &[f64] = if integer { &INTEGER_STEPS } else { &NICE_STEPS };
    // tolerate rounding in `raw` so exact fits like span 14 / 14 intervals keep step 1
    let step = multipliers
        .iter()
        .map(|m| m * magnitude)
        .find(|&step| step >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * magnitude);

    if integer { step.max(1.0).round() } else { step }
}

fn limited_marks(bounds: (f64, f64), max_ticks: usize, integer: bool) -> Vec<GridMark> {
    let (min, max) = if bounds.0 <= bounds.1 { bounds } else { (bounds.1, bounds.0) };
    if !min.is_finite() || !max.is_finite() || max_ticks == 0 {
        return Vec::new();
    }

    let step = tick_step(max - min, max_ticks, integer);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;

    (first..=last)
        .take(max_ticks)
        .map(|i| GridMark {
            value: i as f64 * step,
            step_size: step,
        })
        .collect()
}
