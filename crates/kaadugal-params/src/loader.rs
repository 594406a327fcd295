//! Parameter-file loading and completeness checking.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::ParamsError;
use crate::key::{ParamKey, REQUIRED_KEY_COUNT};
use crate::method::TrainMethod;
use crate::params::ForestBuilderParams;
use crate::parser::{NumberParsing, SplitMode, parse_float, parse_int, split_pairs};
use crate::report::{Reporter, TracingReporter};

/// When parsed values are written into the target parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitMode {
    /// Apply each value as it is parsed. A failed load keeps what was read.
    #[default]
    Partial,
    /// Parse into a copy and apply it only if the whole file is valid.
    Transactional,
}

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Distinct required keys that were read.
    pub required_found: usize,
    /// Whether the optional `MinLeafSamples` key was present.
    pub min_leaf_samples_set: bool,
    /// Unrecognized keys, in file order.
    pub ignored_keys: Vec<String>,
    /// Lines read, including comments and blank lines.
    pub lines_read: usize,
}

/// Reads parameter files into [`ForestBuilderParams`].
///
/// # Defaults
///
/// | Option           | Default                  |
/// |------------------|--------------------------|
/// | `split_mode`     | `SplitMode::Toggle`      |
/// | `number_parsing` | `NumberParsing::Lenient` |
/// | `commit_mode`    | `CommitMode::Partial`    |
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamsLoader {
    split_mode: SplitMode,
    number_parsing: NumberParsing,
    commit_mode: CommitMode,
}

const OPEN_WARNING: &str = "Unable to open parameters file. Please check input.";

impl ParamsLoader {
    /// Create a loader with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how lines are split into key/value pairs.
    #[must_use]
    pub fn with_split_mode(mut self, split_mode: SplitMode) -> Self {
        self.split_mode = split_mode;
        self
    }

    /// Set how numeric values are parsed.
    #[must_use]
    pub fn with_number_parsing(mut self, number_parsing: NumberParsing) -> Self {
        self.number_parsing = number_parsing;
        self
    }

    /// Set when parsed values are applied.
    #[must_use]
    pub fn with_commit_mode(mut self, commit_mode: CommitMode) -> Self {
        self.commit_mode = commit_mode;
        self
    }

    /// Return the split mode.
    #[must_use]
    pub fn split_mode(&self) -> SplitMode {
        self.split_mode
    }

    /// Return the number parsing mode.
    #[must_use]
    pub fn number_parsing(&self) -> NumberParsing {
        self.number_parsing
    }

    /// Return the commit mode.
    #[must_use]
    pub fn commit_mode(&self) -> CommitMode {
        self.commit_mode
    }

    /// Load a file into fresh parameters.
    ///
    /// # Errors
    ///
    /// Same as [`load_into`](Self::load_into).
    pub fn load<R: Reporter + ?Sized>(
        &self,
        path: &Path,
        reporter: &mut R,
    ) -> Result<ForestBuilderParams, ParamsError> {
        let mut params = ForestBuilderParams::default();
        self.load_into(&mut params, path, reporter)?;
        Ok(params)
    }

    /// Load a file into existing parameters.
    ///
    /// `params.is_valid()` is updated on every path. On failure one warning
    /// goes to `reporter`; on success the resolved configuration does.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ParamsError::FileOpen`] | file missing or unreadable; `params` untouched apart from validity |
    /// | [`ParamsError::ReadLine`] | a line could not be read |
    /// | [`ParamsError::Parse`] | strict mode only: a value did not parse |
    /// | [`ParamsError::IncompleteConfiguration`] | fewer than 7 required keys |
    #[instrument(skip(self, params, reporter), fields(path = %path.display()))]
    pub fn load_into<R: Reporter + ?Sized>(
        &self,
        params: &mut ForestBuilderParams,
        path: &Path,
        reporter: &mut R,
    ) -> Result<LoadReport, ParamsError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                params.is_valid = false;
                reporter.warn(OPEN_WARNING);
                return Err(ParamsError::FileOpen {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let mut staged = match self.commit_mode {
            CommitMode::Partial => None,
            CommitMode::Transactional => Some(params.clone()),
        };
        let outcome = match staged.as_mut() {
            Some(copy) => self.read_lines(copy, path, file),
            None => self.read_lines(params, path, file),
        };

        let report = match outcome {
            Ok(report) => report,
            Err(e) => {
                params.is_valid = false;
                reporter.warn(&failure_warning(&e));
                return Err(e);
            }
        };

        if report.required_found < REQUIRED_KEY_COUNT {
            params.is_valid = false;
            let error = ParamsError::IncompleteConfiguration {
                path: path.to_path_buf(),
                found: report.required_found,
                required: REQUIRED_KEY_COUNT,
            };
            reporter.warn(&failure_warning(&error));
            return Err(error);
        }

        if let Some(copy) = staged {
            *params = copy;
        }
        params.is_valid = true;
        debug!(
            lines = report.lines_read,
            ignored = report.ignored_keys.len(),
            "parameter file loaded"
        );
        reporter.summary(params);
        Ok(report)
    }

    fn read_lines(
        &self,
        target: &mut ForestBuilderParams,
        path: &Path,
        file: File,
    ) -> Result<LoadReport, ParamsError> {
        let mut report = LoadReport::default();
        let mut seen = [false; REQUIRED_KEY_COUNT];

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|e| ParamsError::ReadLine {
                path: PathBuf::from(path),
                line: line_no,
                source: e,
            })?;
            report.lines_read = line_no;

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            for (key, value) in split_pairs(&line, self.split_mode) {
                let Some(param) = ParamKey::from_name(key) else {
                    debug!(line = line_no, key, "ignoring unrecognized key");
                    report.ignored_keys.push(key.to_string());
                    continue;
                };
                self.apply(target, param, value, line_no)?;
                match param.required_slot() {
                    Some(slot) => seen[slot] = true,
                    None => report.min_leaf_samples_set = true,
                }
            }
        }

        report.required_found = seen.iter().filter(|&&read| read).count();
        Ok(report)
    }

    fn apply(
        &self,
        target: &mut ForestBuilderParams,
        key: ParamKey,
        value: &str,
        line: usize,
    ) -> Result<(), ParamsError> {
        let parse_error = || ParamsError::Parse {
            line,
            key: key.name().to_string(),
            value: value.to_string(),
        };
        let int = || parse_int(value, self.number_parsing).ok_or_else(parse_error);

        match key {
            ParamKey::NumTrees => target.n_trees = int()?,
            ParamKey::MaxTreeLevels => target.max_levels = int()?,
            ParamKey::NumCandidateFeats => target.n_candidate_features = int()?,
            ParamKey::NumCandidateThresh => target.n_candidate_thresholds = int()?,
            ParamKey::NumThreads => target.n_threads = int()?.max(1),
            ParamKey::MinLeafSamples => target.min_leaf_samples = int()?,
            ParamKey::MinGain => {
                target.min_gain =
                    parse_float(value, self.number_parsing).ok_or_else(parse_error)?;
            }
            ParamKey::TrainMethod => match self.number_parsing {
                NumberParsing::Lenient => match TrainMethod::from_token(value) {
                    Some(method) => target.train_method = method,
                    None => debug!(line, value, "unrecognized training method left unchanged"),
                },
                NumberParsing::Strict => {
                    target.train_method =
                        TrainMethod::from_token(value.trim()).ok_or_else(parse_error)?;
                }
            },
        }
        debug!(line, key = key.name(), value, "parameter read");
        Ok(())
    }
}

fn failure_warning(error: &ParamsError) -> String {
    match error {
        ParamsError::FileOpen { .. } => OPEN_WARNING.to_string(),
        ParamsError::IncompleteConfiguration {
            found, required, ..
        } => format!(
            "Some parameters are missing (read only {found} / {required}). Please check input."
        ),
        ParamsError::Parse { line, key, value } => {
            format!("Invalid value \"{value}\" for {key} on line {line}. Please check input.")
        }
        ParamsError::ReadLine { line, .. } => {
            format!("Unable to read line {line} of parameters file. Please check input.")
        }
        other => other.to_string(),
    }
}

impl ForestBuilderParams {
    /// Load parameters from a file with default loader options.
    ///
    /// Never fails: check [`is_valid`](Self::is_valid) on the result.
    /// Diagnostics go to [`TracingReporter`].
    #[must_use]
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let mut params = Self::default();
        // The failure is recorded in `is_valid` and already reported.
        let _ = params.reload(path);
        params
    }

    /// Reload these parameters from a file with default loader options.
    ///
    /// # Errors
    ///
    /// See [`ParamsLoader::load_into`].
    pub fn reload(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, ParamsError> {
        ParamsLoader::new().load_into(self, path.as_ref(), &mut TracingReporter)
    }
}
