//! Forest-builder training parameters: load, validate, report, write back.
//!
//! Parameters live in a line-oriented `key: value` text file:
//!
//! ```text
//! # comment line
//! NumTrees: 10
//! TrainMethod: DFS
//! MaxTreeLevels: 12
//! NumCandidateFeats: 20
//! NumCandidateThresh: 50
//! MinGain: 0.01
//! NumThreads: 4
//! MinLeafSamples: 5
//! ```
//!
//! All keys except `MinLeafSamples` are required. Loading always records its
//! outcome in [`ForestBuilderParams::is_valid`], which the training routine
//! must check before use.

mod error;
mod key;
mod loader;
mod method;
mod params;
mod parser;
mod report;
mod writer;

pub use error::ParamsError;
pub use key::REQUIRED_KEY_COUNT;
pub use loader::{CommitMode, LoadReport, ParamsLoader};
pub use method::TrainMethod;
pub use params::{DEFAULT_MIN_LEAF_SAMPLES, ForestBuilderParams};
pub use parser::{NumberParsing, SplitMode};
pub use report::{ConsoleReporter, MemoryReporter, Report, Reporter, TracingReporter};
