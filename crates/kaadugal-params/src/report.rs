//! Diagnostics emitted while loading a parameter file.
//!
//! Loading never prints directly. It hands warnings and the resolved
//! configuration to a [`Reporter`], so callers choose between structured
//! tracing events ([`TracingReporter`], the default), the fixed console text
//! ([`ConsoleReporter`]) or capturing them ([`MemoryReporter`]).

use std::io::{self, Write};

use tracing::{info, warn};

use crate::params::ForestBuilderParams;

/// Sink for load diagnostics.
pub trait Reporter {
    /// A load failed or was incomplete.
    fn warn(&mut self, message: &str);

    /// A load succeeded; `params` is the resolved configuration.
    fn summary(&mut self, params: &ForestBuilderParams);
}

impl ForestBuilderParams {
    /// Return the fixed-format summary block, one entry per line.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("[ Number of Threads   ]: {}", self.n_threads),
            format!("[ Number of Trees     ]: {}", self.n_trees),
            format!("[ Max Levels Per Tree ]: {}", self.max_levels),
            format!("[ Training Method     ]: {}", self.train_method.description()),
            format!("[ Num of Cand Thresholds  ]: {}", self.n_candidate_thresholds),
            format!("[ Num of Cand Features    ]: {}", self.n_candidate_features),
            format!("[ Minimum Gain        ]: {}", self.min_gain),
        ]
    }
}

/// Emits diagnostics as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn warn(&mut self, message: &str) {
        warn!("{message}");
    }

    fn summary(&mut self, params: &ForestBuilderParams) {
        info!(
            n_threads = params.n_threads,
            n_trees = params.n_trees,
            max_levels = params.max_levels,
            train_method = params.train_method.description(),
            n_candidate_thresholds = params.n_candidate_thresholds,
            n_candidate_features = params.n_candidate_features,
            min_gain = params.min_gain,
            "training parameters resolved"
        );
    }
}

/// Writes the `[ WARN ]:` / `[ INFO ]:` console text to any writer.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    /// Report to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Report to the given writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

// Write failures are dropped: there is nowhere left to report them.
impl<W: Write> Reporter for ConsoleReporter<W> {
    fn warn(&mut self, message: &str) {
        let _ = writeln!(self.out, "[ WARN ]: {message}");
    }

    fn summary(&mut self, params: &ForestBuilderParams) {
        let _ = writeln!(self.out, "[ INFO ]: Here are the training parameters:");
        for line in params.summary_lines() {
            let _ = writeln!(self.out, "{line}");
        }
    }
}

/// One captured diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// A warning message.
    Warning(String),
    /// A snapshot of the resolved configuration.
    Summary(ForestBuilderParams),
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    reports: Vec<Report>,
}

impl MemoryReporter {
    /// Create an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics in the order they were emitted.
    #[must_use]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Only the warning messages.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.reports.iter().filter_map(|r| match r {
            Report::Warning(message) => Some(message.as_str()),
            Report::Summary(_) => None,
        })
    }

    /// Only the summary snapshots.
    pub fn summaries(&self) -> impl Iterator<Item = &ForestBuilderParams> {
        self.reports.iter().filter_map(|r| match r {
            Report::Summary(params) => Some(params),
            Report::Warning(_) => None,
        })
    }
}

impl Reporter for MemoryReporter {
    fn warn(&mut self, message: &str) {
        self.reports.push(Report::Warning(message.to_string()));
    }

    fn summary(&mut self, params: &ForestBuilderParams) {
        self.reports.push(Report::Summary(params.clone()));
    }
}
