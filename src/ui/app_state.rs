//! # Chart Window
//!
//! `ChartApp` holds the subplot descriptions for one scenario and redraws them every
//! frame (immediate mode). The parsed data never changes after the window opens, so
//! there is no background task and no repaint scheduling.

use eframe::egui;

use super::charts::{Subplot, build_subplots, render_subplots};
use crate::analyzer::ScenarioLogs;
use crate::common::VisualizerConfig;

/// Application state for the chart window.
pub struct ChartApp {
    subplots: [Subplot; 3],
}

impl ChartApp {
    pub fn new(logs: &ScenarioLogs) -> Self {
        Self {
            subplots: build_subplots(logs),
        }
    }

    #[cfg(test)]
    pub fn subplots(&self) -> &[Subplot] {
        &self.subplots
    }

    /// Draw one frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            render_subplots(ui, &self.subplots);
        });
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

/// Open the chart window and block until the operator closes it.
///
/// # Parameters
///
/// * `title` - Window title
/// * `logs` - Parsed series to plot
/// * `config` - Supplies the initial window size
pub fn show_charts(title: &str, logs: &ScenarioLogs, config: &VisualizerConfig) -> anyhow::Result<()> {
    let app = ChartApp::new(logs);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    log::info!("Opening chart window");
    eframe::run_native(title, native_options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Chart window failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::load_scenario;
    use crate::analyzer::types::LogNaming;
    use crate::selector::{Prompter, select_scenario};
    use std::fs;
    use std::io::Cursor;

    fn write_scenario(root: &std::path::Path) {
        let dir = root.join("tobasco").join("3");
        fs::create_dir_all(&dir).unwrap();
        fs::create_dir_all(root.join("panda").join("1")).unwrap();
        fs::write(dir.join("sim1_cl0_adaptationLog.txt"), "segIndex rep time case delayCase\n0 0 0.0 A B\n1 1 2.5 A B\n").unwrap();
        fs::write(dir.join("sim1_cl0_bufferLog.txt"), "timeNow bufferLevel\n0.0 10.0\n1.0 9.5\n").unwrap();
        fs::write(dir.join("sim1_cl0_throughputLog.txt"), "timeNow bandwidth\n0.0 100\n1.0 200\n").unwrap();
    }

    fn headless_frame(app: &mut ChartApp) -> egui::FullOutput {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1000.0, 900.0))),
            ..Default::default()
        };
        ctx.run(input, |ctx| app.show(ctx))
    }

    #[test]
    fn end_to_end_selection_parse_and_render() {
        let root = tempfile::tempdir().unwrap();
        write_scenario(root.path());

        let mut prompter = Prompter::new(Cursor::new(b"tobasco\n3\n".to_vec()), Vec::new());
        let scenario = select_scenario(root.path(), &mut prompter).unwrap();
        let logs = load_scenario(&scenario.dir(), &LogNaming::default()).unwrap();

        let mut app = ChartApp::new(&logs);
        let points: Vec<_> = app.subplots().iter().map(|s| s.points.clone()).collect();
        assert_eq!(
            points,
            vec![
                vec![[0.0, 0.0], [1.0, 1.0]],
                vec![[0.0, 10.0], [1.0, 9.5]],
                vec![[0.0, 100.0], [1.0, 200.0]],
            ]
        );

        let output = headless_frame(&mut app);
        assert!(!output.shapes.is_empty());
    }

    #[test]
    fn empty_series_render_without_panicking() {
        let mut app = ChartApp::new(&ScenarioLogs::default());
        let output = headless_frame(&mut app);
        assert!(!output.shapes.is_empty());
    }

    #[test]
    fn malformed_log_stops_before_rendering() {
        let root = tempfile::tempdir().unwrap();
        write_scenario(root.path());
        let dir = root.path().join("tobasco").join("3");
        fs::write(dir.join("sim1_cl0_bufferLog.txt"), "timeNow bufferLevel\n0.0 ten\n").unwrap();

        let err = load_scenario(&dir, &LogNaming::default()).unwrap_err();
        assert!(err.to_string().contains("invalid buffer level value \"ten\""));
    }
}
