//! Scenario discovery in the `<log-root>/<algorithm>/<client-count>` tree.

use std::fmt;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::prompt::{Prompter, Question, SelectionError};

const ALGORITHM_QUESTION: Question<'static> = Question {
    heading: None,
    prompt: "Choose an algorithm:",
    rejection: "That algorithm doesn't exist",
};

const CLIENT_COUNT_QUESTION: Question<'static> = Question {
    heading: Some("Number of clients:"),
    prompt: "Plot for which number of clients?",
    rejection: "That number of clients doesn't exist",
};

/// A chosen (algorithm, client count) pair below a log root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioPath {
    pub root: PathBuf,
    pub algorithm: String,
    pub client_count: String,
}

impl ScenarioPath {
    /// Directory holding the scenario's log files. Its contents are not checked.
    pub fn dir(&self) -> PathBuf {
        self.root.join(&self.algorithm).join(&self.client_count)
    }
}

impl fmt::Display for ScenarioPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with {} clients", self.algorithm, self.client_count)
    }
}

/// Names of all entries in `dir`, sorted for a stable listing.
pub fn list_entries(dir: &Path) -> Result<Vec<String>, SelectionError> {
    let listing_error = |source| SelectionError::Listing {
        dir: dir.to_path_buf(),
        source,
    };
    let read_dir = fs::read_dir(dir).map_err(listing_error)?;
    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(listing_error)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Ask for an algorithm, then for a client count within it.
///
/// Every round re-lists the corresponding directory, so each answer is validated
/// against what exists at the moment it is given.
///
/// # Parameters
///
/// * `root` - Log root containing one directory per algorithm
/// * `prompter` - Console used for both exchanges
pub fn select_scenario<R: BufRead, W: Write>(root: &Path, prompter: &mut Prompter<R, W>) -> anyhow::Result<ScenarioPath> {
    let algorithm = prompter.choose(&ALGORITHM_QUESTION, || list_entries(root))?;

    let algorithm_dir = root.join(&algorithm);
    let client_count = prompter.choose(&CLIENT_COUNT_QUESTION, || list_entries(&algorithm_dir))?;

    Ok(ScenarioPath {
        root: root.to_path_buf(),
        algorithm,
        client_count,
    })
}
