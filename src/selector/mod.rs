//! Interactive choice of the scenario to plot.
//!
//! - `prompt`: pure selection validation and the re-prompting console loop
//! - `scenario`: directory listing and the two-step algorithm/client-count exchange

pub mod prompt;
pub mod scenario;

pub use prompt::Prompter;
pub use scenario::select_scenario;
