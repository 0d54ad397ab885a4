use anyhow::Context;
use env_logger::Builder;
use log::{LevelFilter, error, info};
use std::path::Path;

mod analyzer;
mod common;
mod selector;
mod ui;

use common::{CONFIG_FILE_NAME, VisualizerConfig};
use selector::Prompter;

/// Select a scenario on the console, parse its logs and show the charts.
fn run() -> anyhow::Result<()> {
    let config = VisualizerConfig::load_or_default(Path::new(CONFIG_FILE_NAME))?;

    let mut prompter = Prompter::stdio();
    let scenario = selector::select_scenario(&config.log_root, &mut prompter)?;
    info!("Selected {} ({})", scenario, scenario.dir().display());

    let logs = analyzer::load_scenario(&scenario.dir(), &config.log_naming())
        .with_context(|| format!("Failed to load logs for {}", scenario))?;

    let title = format!("DASH Log Visualizer: {}", scenario);
    ui::show_charts(&title, &logs, &config)
}

fn main() {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("dash_log_visualizer"), LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting up");

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
