//! # Chart Layout
//!
//! Describes and draws the three stacked plots of a scenario:
//! 1. Requested quality per segment (integer segment axis)
//! 2. Buffer level over time
//! 3. Throughput over time
//!
//! `build_subplots` is pure so the figure contents can be checked without a display;
//! `render_subplots` turns the description into `egui_plot` widgets.

use eframe::egui;
use egui_plot::{Line, Plot};

use super::ticks::{MAX_MAJOR_TICKS, TickPolicy, integer_label};
use crate::analyzer::ScenarioLogs;

/// Plots never shrink below this height, even in a tiny window.
const MIN_PLOT_HEIGHT: f32 = 80.0;

/// Everything needed to draw one subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct Subplot {
    /// Stable egui id of the plot widget.
    pub id: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x_ticks: TickPolicy,
    pub y_ticks: TickPolicy,
    pub points: Vec<[f64; 2]>,
}

/// Lay out the scenario's three series as stacked subplots, top to bottom.
pub fn build_subplots(logs: &ScenarioLogs) -> [Subplot; 3] {
    [
        Subplot {
            id: "adaptation_plot",
            title: "Requested Quality vs. Segment Index",
            x_label: "Segment Index",
            y_label: "Requested Quality",
            x_ticks: TickPolicy::Integer,
            y_ticks: TickPolicy::Auto,
            points: logs.adaptation.points(),
        },
        Subplot {
            id: "buffer_plot",
            title: "Buffer Level over Time",
            x_label: "Time (s)",
            y_label: "Buffer Level (s)",
            x_ticks: TickPolicy::MaxTicks(MAX_MAJOR_TICKS),
            y_ticks: TickPolicy::MaxTicks(MAX_MAJOR_TICKS),
            points: logs.buffer.points(),
        },
        Subplot {
            id: "throughput_plot",
            title: "Throughput over Time",
            x_label: "Time (s)",
            y_label: "Bandwidth (bytes)",
            x_ticks: TickPolicy::MaxTicks(MAX_MAJOR_TICKS),
            y_ticks: TickPolicy::MaxTicks(MAX_MAJOR_TICKS),
            points: logs.throughput.points(),
        },
    ]
}

/// Draw `subplots` stacked vertically, sharing the available height equally.
///
/// # Parameters
///
/// * `ui` - egui UI region to fill
/// * `subplots` - Plots in top-to-bottom order
pub fn render_subplots(ui: &mut egui::Ui, subplots: &[Subplot]) {
    if subplots.is_empty() {
        return;
    }

    let count = subplots.len() as f32;
    let spacing = ui.spacing().item_spacing.y;
    let title_height = ui.text_style_height(&egui::TextStyle::Heading);
    // every subplot costs a title row plus two item gaps besides the plot itself
    let chrome = count * (title_height + 2.0 * spacing);
    let plot_height = ((ui.available_height() - chrome) / count).max(MIN_PLOT_HEIGHT);

    for subplot in subplots {
        ui.vertical_centered(|ui| {
            ui.heading(subplot.title);
        });

        let plot = Plot::new(subplot.id)
            .height(plot_height)
            .x_axis_label(subplot.x_label)
            .y_axis_label(subplot.y_label);
        let plot = with_x_ticks(plot, subplot.x_ticks);
        let plot = with_y_ticks(plot, subplot.y_ticks);

        plot.show(ui, |plot_ui| {
            plot_ui.line(Line::new(subplot.y_label, subplot.points.clone()));
        });
    }
}

fn with_x_ticks(plot: Plot<'_>, policy: TickPolicy) -> Plot<'_> {
    let plot = match policy.spacer() {
        Some(spacer) => plot.x_grid_spacer(spacer),
        None => plot,
    };
    if policy == TickPolicy::Integer { plot.x_axis_formatter(integer_label) } else { plot }
}

fn with_y_ticks(plot: Plot<'_>, policy: TickPolicy) -> Plot<'_> {
    let plot = match policy.spacer() {
        Some(spacer) => plot.y_grid_spacer(spacer),
        None => plot,
    };
    if policy == TickPolicy::Integer { plot.y_axis_formatter(integer_label) } else { plot }
}
