//! Shared application plumbing.

pub mod config;

pub use config::{CONFIG_FILE_NAME, VisualizerConfig};
