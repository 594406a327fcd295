use std::path::PathBuf;

/// Errors from loading, validating and writing forest-builder parameters.
#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    /// Returned when the parameter file does not exist or cannot be opened.
    #[error("unable to open parameters file {path}")]
    FileOpen {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a line cannot be read (I/O failure or invalid UTF-8).
    #[error("failed to read line {line} of {path}")]
    ReadLine {
        /// Path to the parameter file.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when fewer than all required keys were found in the file.
    #[error("some parameters are missing in {path} (read only {found} / {required})")]
    IncompleteConfiguration {
        /// Path to the parameter file.
        path: PathBuf,
        /// Number of distinct required keys that were read.
        found: usize,
        /// Number of required keys.
        required: usize,
    },

    /// Returned in strict mode when a value cannot be parsed for its key.
    #[error("invalid value \"{value}\" for {key} on line {line}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// The recognized key.
        key: String,
        /// The raw (left-trimmed) value.
        value: String,
    },

    /// Returned when the parameter file cannot be written.
    #[error("cannot write parameters file {path}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the worker pool for the configured thread count cannot be built.
    #[error("failed to build a thread pool")]
    ThreadPool {
        /// The underlying rayon error.
        source: rayon::ThreadPoolBuildError,
    },
}
