//! Type definitions specific to the analyzer module.

use std::fmt;

/// The three per-client log files written by the DASH simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// `segIndex rep time case delayCase`
    Adaptation,
    /// `timeNow bufferLevel`
    Buffer,
    /// `timeNow bandwidth`
    Throughput,
}

impl LogKind {
    /// Number of whitespace-separated fields in every data row.
    pub fn field_count(self) -> usize {
        match self {
            LogKind::Adaptation => 5,
            LogKind::Buffer | LogKind::Throughput => 2,
        }
    }

    /// Infix used by the simulator in file names (`sim1_cl0_<infix>Log.txt`).
    pub fn file_infix(self) -> &'static str {
        match self {
            LogKind::Adaptation => "adaptation",
            LogKind::Buffer => "buffer",
            LogKind::Throughput => "throughput",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} log", self.file_infix())
    }
}

/// Simulation and client identifiers that select one file set in a scenario directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogNaming {
    pub simulation_id: u32,
    pub client_id: u32,
}

impl LogNaming {
    pub fn file_name(&self, kind: LogKind) -> String {
        format!("sim{}_cl{}_{}Log.txt", self.simulation_id, self.client_id, kind.file_infix())
    }
}

impl Default for LogNaming {
    fn default() -> Self {
        Self {
            simulation_id: 1,
            client_id: 0,
        }
    }
}

/// Numeric value that can be placed on a plot axis.
pub trait AxisValue: Copy {
    fn to_axis(self) -> f64;
}

impl AxisValue for i64 {
    fn to_axis(self) -> f64 {
        self as f64
    }
}

impl AxisValue for f64 {
    fn to_axis(self) -> f64 {
        self
    }
}

/// Two positionally aligned sequences, `series[i] = (xs[i], ys[i])`.
///
/// Both coordinates are only ever appended together, so the lengths cannot diverge.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPair<X, Y> {
    xs: Vec<X>,
    ys: Vec<Y>,
}

impl<X, Y> SeriesPair<X, Y> {
    pub fn new() -> Self {
        Self { xs: Vec::new(), ys: Vec::new() }
    }

    pub fn push(&mut self, x: X, y: Y) {
        self.xs.push(x);
        self.ys.push(y);
    }

    pub fn xs(&self) -> &[X] {
        &self.xs
    }

    pub fn ys(&self) -> &[Y] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<X: AxisValue, Y: AxisValue> SeriesPair<X, Y> {
    /// Points in the `[x, y]` layout expected by the plotting layer.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.xs().iter().zip(self.ys()).map(|(&x, &y)| [x.to_axis(), y.to_axis()]).collect()
    }
}

impl<X, Y> Default for SeriesPair<X, Y> {
    fn default() -> Self {
        Self::new()
    }
}

/// Segment index → requested representation index.
pub type AdaptationSeries = SeriesPair<i64, i64>;
/// Timestamp (s) → buffer level (s).
pub type BufferSeries = SeriesPair<f64, f64>;
/// Timestamp (s) → bandwidth sample (bytes).
pub type ThroughputSeries = SeriesPair<f64, i64>;

/// All series parsed for one scenario directory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScenarioLogs {
    pub adaptation: AdaptationSeries,
    pub buffer: BufferSeries,
    pub throughput: ThroughputSeries,
}
