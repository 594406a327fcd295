use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use kaadugal_params::{
    CommitMode, ConsoleReporter, ForestBuilderParams, NumberParsing, ParamsLoader, Reporter,
    SplitMode, TracingReporter, TrainMethod,
};

#[derive(Parser)]
#[command(name = "kaadugal")]
#[command(about = "Load, check and write decision-forest training parameter files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,
}

/// Training method names accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    Dfs,
    Bfs,
    Hybrid,
}

impl From<MethodArg> for TrainMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Dfs => TrainMethod::DepthFirst,
            MethodArg::Bfs => TrainMethod::BreadthFirst,
            MethodArg::Hybrid => TrainMethod::Hybrid,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Load a parameter file, report it and print the resolved values as JSON
    Check {
        /// Path to the parameter file
        file: PathBuf,

        /// Reject malformed numbers and unknown training methods
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Split each line on its first colon only
        #[arg(long, default_value_t = false)]
        first_colon: bool,

        /// Leave no fields applied when the file is invalid
        #[arg(long, default_value_t = false)]
        transactional: bool,

        /// Print the `[ INFO ]` / `[ WARN ]` console report instead of log events
        #[arg(long, default_value_t = false)]
        console: bool,
    },

    /// Write a parameter file from explicit values
    Write {
        /// Output path for the parameter file
        file: PathBuf,

        /// Number of trees in the forest
        #[arg(long)]
        n_trees: i32,

        /// Maximum levels per tree
        #[arg(long)]
        max_levels: i32,

        /// Candidate features drawn per split
        #[arg(long)]
        candidate_features: i32,

        /// Candidate thresholds drawn per feature
        #[arg(long)]
        candidate_thresholds: i32,

        /// Minimum gain a split must reach
        #[arg(long)]
        min_gain: f64,

        /// Tree-growing strategy
        #[arg(long, value_enum, default_value_t = MethodArg::Dfs)]
        train_method: MethodArg,

        /// Worker threads for training
        #[arg(long, default_value_t = 1)]
        threads: i32,

        /// Minimum samples per leaf
        #[arg(long, default_value_t = kaadugal_params::DEFAULT_MIN_LEAF_SAMPLES)]
        min_leaf_samples: i32,
    },
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct CheckOutput<'a> {
    file: String,
    required_found: usize,
    ignored_keys: &'a [String],
    params: &'a ForestBuilderParams,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Check {
            file,
            strict,
            first_colon,
            transactional,
            console,
        } => {
            let loader = ParamsLoader::new()
                .with_number_parsing(if strict {
                    NumberParsing::Strict
                } else {
                    NumberParsing::Lenient
                })
                .with_split_mode(if first_colon {
                    SplitMode::FirstColon
                } else {
                    SplitMode::Toggle
                })
                .with_commit_mode(if transactional {
                    CommitMode::Transactional
                } else {
                    CommitMode::Partial
                });

            let mut console_reporter;
            let mut tracing_reporter = TracingReporter;
            let reporter: &mut dyn Reporter = if console {
                console_reporter = ConsoleReporter::stdout();
                &mut console_reporter
            } else {
                &mut tracing_reporter
            };

            let mut params = ForestBuilderParams::default();
            let report = loader
                .load_into(&mut params, &file, reporter)
                .with_context(|| format!("invalid parameter file {}", file.display()))?;

            let output = CheckOutput {
                file: file.display().to_string(),
                required_found: report.required_found,
                ignored_keys: &report.ignored_keys,
                params: &params,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Write {
            file,
            n_trees,
            max_levels,
            candidate_features,
            candidate_thresholds,
            min_gain,
            train_method,
            threads,
            min_leaf_samples,
        } => {
            let params = ForestBuilderParams::new(
                n_trees,
                max_levels,
                candidate_features,
                candidate_thresholds,
                min_gain,
            )
            .with_train_method(train_method.into())
            .with_n_threads(threads.max(1))
            .with_min_leaf_samples(min_leaf_samples);

            params
                .save(&file)
                .context("failed to write parameter file")?;
            info!(path = %file.display(), "parameter file written");
        }
    }

    Ok(())
}
