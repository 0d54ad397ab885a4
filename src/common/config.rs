//! Optional `visualizer.toml` configuration.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::analyzer::LogNaming;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "visualizer.toml";

/// Visualizer settings; every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct VisualizerConfig {
    /// Root of the `<algorithm>/<client-count>` tree written by the simulation.
    pub log_root: PathBuf,
    /// Simulation id in the log file names (`sim<id>_...`).
    pub simulation_id: u32,
    /// Client index in the log file names (`..._cl<id>_...`).
    pub client_id: u32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            log_root: PathBuf::from("dash-log-files"),
            simulation_id: 1,
            client_id: 0,
            window_width: 1000.0,
            window_height: 900.0,
        }
    }
}

impl VisualizerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the config file
    ///
    /// # Returns
    /// * `Ok(VisualizerConfig)` if the file was read and parsed
    /// * `Err` describing the read or parse failure otherwise
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(config_path).with_context(|| format!("Failed to read config file {}", config_path.display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    /// Load `config_path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.is_file() {
            log::info!("Loading configuration from {}", config_path.display());
            Self::load(config_path)
        } else {
            log::info!("No {} found, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    pub fn log_naming(&self) -> LogNaming {
        LogNaming {
            simulation_id: self.simulation_id,
            client_id: self.client_id,
        }
    }
}
