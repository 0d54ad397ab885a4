//! Turn the three per-client DASH logs into aligned numeric series.
//!
//! Supported file layouts (one header line, then whitespace-separated rows):
//!
//! ```text
//! adaptationLog:  segIndex rep time case delayCase
//! bufferLog:      timeNow bufferLevel
//! throughputLog:  timeNow bandwidth
//! ```
//!
//! Any malformed row aborts the whole parse; there is no row skipping.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use super::log_loader::{LogLoader, LogParseError, open_log};
use super::types::{AdaptationSeries, BufferSeries, LogKind, LogNaming, ScenarioLogs, ThroughputSeries};

/// Parse an adaptation log.
///
/// Keeps the segment index (X) and the requested representation index (Y). The
/// remaining three columns must be present but are not interpreted.
pub fn parse_adaptation_log<R: BufRead>(reader: R, source: &str) -> Result<AdaptationSeries, LogParseError> {
    let mut loader = LogLoader::new(reader, source);
    let mut series = AdaptationSeries::new();

    while let Some(row) = loader.next_row(LogKind::Adaptation.field_count())? {
        let segment_index: i64 = row.parse(0, "segment index")?;
        let representation: i64 = row.parse(1, "representation index")?;
        series.push(segment_index, representation);
    }

    Ok(series)
}

/// Parse a buffer log. Every row is kept, including repeated timestamps.
pub fn parse_buffer_log<R: BufRead>(reader: R, source: &str) -> Result<BufferSeries, LogParseError> {
    let mut loader = LogLoader::new(reader, source);
    let mut series = BufferSeries::new();

    while let Some(row) = loader.next_row(LogKind::Buffer.field_count())? {
        let time: f64 = row.parse(0, "timestamp")?;
        let level: f64 = row.parse(1, "buffer level")?;
        series.push(time, level);
    }

    Ok(series)
}

/// Parse a throughput log.
///
/// Only the first row for a given timestamp is kept; later rows with the same
/// timestamp are dropped, whatever their bandwidth. `nan` never equals itself, so
/// every `nan` row is kept.
pub fn parse_throughput_log<R: BufRead>(reader: R, source: &str) -> Result<ThroughputSeries, LogParseError> {
    let mut loader = LogLoader::new(reader, source);
    let mut series = ThroughputSeries::new();
    let mut seen = HashSet::new();

    while let Some(row) = loader.next_row(LogKind::Throughput.field_count())? {
        let time: f64 = row.parse(0, "timestamp")?;
        let bandwidth: i64 = row.parse(1, "bandwidth")?;
        if time.is_nan() || seen.insert(timestamp_key(time)) {
            series.push(time, bandwidth);
        } else {
            log::debug!("{}:{}: dropping duplicate timestamp {}", source, row.line(), time);
        }
    }

    Ok(series)
}

/// Hashable identity of a timestamp; `-0.0 + 0.0` is `0.0`, so both zeros share a key.
fn timestamp_key(time: f64) -> u64 {
    (time + 0.0).to_bits()
}

/// Open and parse the adaptation log at `path`.
pub fn load_adaptation_log(path: &Path) -> Result<AdaptationSeries, LogParseError> {
    parse_adaptation_log(open_log(path)?, &path.display().to_string())
}

/// Open and parse the buffer log at `path`.
pub fn load_buffer_log(path: &Path) -> Result<BufferSeries, LogParseError> {
    parse_buffer_log(open_log(path)?, &path.display().to_string())
}

/// Open and parse the throughput log at `path`.
pub fn load_throughput_log(path: &Path) -> Result<ThroughputSeries, LogParseError> {
    parse_throughput_log(open_log(path)?, &path.display().to_string())
}

/// Parse the three logs of a scenario directory, one file at a time.
///
/// # Parameters
///
/// * `dir` - Scenario directory (`<log-root>/<algorithm>/<client-count>`)
/// * `naming` - Simulation and client ids that select the file set
///
/// # Returns
///
/// All three series, or the first error encountered.
pub fn load_scenario(dir: &Path, naming: &LogNaming) -> Result<ScenarioLogs, LogParseError> {
    let adaptation_path = dir.join(naming.file_name(LogKind::Adaptation));
    log::debug!("Reading {}", adaptation_path.display());
    let adaptation = load_adaptation_log(&adaptation_path)?;
    log::info!("Parsed {} rows from {}", adaptation.len(), LogKind::Adaptation);

    let buffer_path = dir.join(naming.file_name(LogKind::Buffer));
    log::debug!("Reading {}", buffer_path.display());
    let buffer = load_buffer_log(&buffer_path)?;
    log::info!("Parsed {} rows from {}", buffer.len(), LogKind::Buffer);

    let throughput_path = dir.join(naming.file_name(LogKind::Throughput));
    log::debug!("Reading {}", throughput_path.display());
    let throughput = load_throughput_log(&throughput_path)?;
    log::info!("Parsed {} unique timestamps from {}", throughput.len(), LogKind::Throughput);

    for (kind, empty) in [
        (LogKind::Adaptation, adaptation.is_empty()),
        (LogKind::Buffer, buffer.is_empty()),
        (LogKind::Throughput, throughput.is_empty()),
    ] {
        if empty {
            log::warn!("The {} has no data rows", kind);
        }
    }

    Ok(ScenarioLogs {
        adaptation,
        buffer,
        throughput,
    })
}
