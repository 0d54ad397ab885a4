// UI module for the DASH log visualizer
//
// This module organizes the chart window into separate components:
// - `ticks`: axis tick placement policies and label formatting
// - `charts`: subplot descriptions and their stacked rendering
// - `app_state`: the eframe application and the blocking window entry point

pub mod app_state;
pub mod charts;
pub mod ticks;

pub use app_state::show_charts;
