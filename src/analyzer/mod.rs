//! Analyzer module for DASH client log parsing.
//!
//! Provides functionality for:
//! - Header-skipping, row-validating reads of plaintext simulation logs
//! - Conversion of the adaptation, buffer and throughput logs into aligned series
//!
//! Nothing here touches the console or the display, so every parser can be driven
//! from an in-memory reader.

pub mod log_loader;
pub mod log_parser;
pub mod types;

pub use log_parser::load_scenario;
pub use types::{LogNaming, ScenarioLogs};
