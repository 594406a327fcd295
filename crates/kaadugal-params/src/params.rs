//! Training parameters handed to the forest builder.

use serde::Serialize;

use crate::error::ParamsError;
use crate::method::TrainMethod;

/// Parameters consumed by the forest-building routine.
///
/// Build one directly with [`ForestBuilderParams::new`] and chain `with_*`
/// methods, or load one from a parameter file with
/// [`ForestBuilderParams::from_file`]. Callers must check
/// [`is_valid`](Self::is_valid) before training.
///
/// # Defaults for explicit construction
///
/// | Parameter          | Default       |
/// |--------------------|---------------|
/// | `train_method`     | `DepthFirst`  |
/// | `n_threads`        | 1             |
/// | `min_leaf_samples` | 3             |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForestBuilderParams {
    pub(crate) n_trees: i32,
    pub(crate) max_levels: i32,
    pub(crate) n_candidate_features: i32,
    pub(crate) n_candidate_thresholds: i32,
    pub(crate) train_method: TrainMethod,
    pub(crate) min_gain: f64,
    pub(crate) n_threads: i32,
    pub(crate) min_leaf_samples: i32,
    pub(crate) is_valid: bool,
}

/// Minimum leaf size used when a file or caller does not set one.
pub const DEFAULT_MIN_LEAF_SAMPLES: i32 = 3;

impl Default for ForestBuilderParams {
    /// The not-yet-loaded state: zero counts, marked invalid.
    fn default() -> Self {
        Self {
            n_trees: 0,
            max_levels: 0,
            n_candidate_features: 0,
            n_candidate_thresholds: 0,
            train_method: TrainMethod::DepthFirst,
            min_gain: 0.0,
            n_threads: 1,
            min_leaf_samples: DEFAULT_MIN_LEAF_SAMPLES,
            is_valid: false,
        }
    }
}

impl ForestBuilderParams {
    /// Create parameters from explicitly supplied values.
    ///
    /// Values are taken as given and the result is marked valid.
    #[must_use]
    pub fn new(
        n_trees: i32,
        max_levels: i32,
        n_candidate_features: i32,
        n_candidate_thresholds: i32,
        min_gain: f64,
    ) -> Self {
        Self {
            n_trees,
            max_levels,
            n_candidate_features,
            n_candidate_thresholds,
            train_method: TrainMethod::DepthFirst,
            min_gain,
            n_threads: 1,
            min_leaf_samples: DEFAULT_MIN_LEAF_SAMPLES,
            is_valid: true,
        }
    }

    // --- Setters ---

    /// Set the tree-growing strategy.
    #[must_use]
    pub fn with_train_method(mut self, train_method: TrainMethod) -> Self {
        self.train_method = train_method;
        self
    }

    /// Set the worker thread count for training.
    #[must_use]
    pub fn with_n_threads(mut self, n_threads: i32) -> Self {
        self.n_threads = n_threads;
        self
    }

    /// Set the sample count below which a node becomes a leaf.
    #[must_use]
    pub fn with_min_leaf_samples(mut self, min_leaf_samples: i32) -> Self {
        self.min_leaf_samples = min_leaf_samples;
        self
    }

    // --- Getters ---

    /// Return the number of trees.
    #[must_use]
    pub fn n_trees(&self) -> i32 {
        self.n_trees
    }

    /// Return the maximum number of levels per tree.
    #[must_use]
    pub fn max_levels(&self) -> i32 {
        self.max_levels
    }

    /// Return the number of candidate features drawn per split.
    #[must_use]
    pub fn n_candidate_features(&self) -> i32 {
        self.n_candidate_features
    }

    /// Return the number of candidate thresholds drawn per feature.
    #[must_use]
    pub fn n_candidate_thresholds(&self) -> i32 {
        self.n_candidate_thresholds
    }

    /// Return the tree-growing strategy.
    #[must_use]
    pub fn train_method(&self) -> TrainMethod {
        self.train_method
    }

    /// Return the minimum gain a split must reach.
    #[must_use]
    pub fn min_gain(&self) -> f64 {
        self.min_gain
    }

    /// Return the worker thread count.
    #[must_use]
    pub fn n_threads(&self) -> i32 {
        self.n_threads
    }

    /// Return the minimum number of samples per leaf.
    #[must_use]
    pub fn min_leaf_samples(&self) -> i32 {
        self.min_leaf_samples
    }

    /// Whether the last load succeeded (always true for explicit construction).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Build a rayon pool with [`n_threads`](Self::n_threads) workers for the
    /// training routine.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::ThreadPool`] if the pool cannot be created.
    pub fn thread_pool(&self) -> Result<rayon::ThreadPool, ParamsError> {
        // A zero count would make rayon pick the core count.
        let n_threads = usize::try_from(self.n_threads.max(1)).unwrap_or(1);
        rayon::ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build()
            .map_err(|e| ParamsError::ThreadPool { source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MIN_LEAF_SAMPLES, ForestBuilderParams};
    use crate::method::TrainMethod;

    #[test]
    fn explicit_construction_is_valid_with_defaults() {
        let params = ForestBuilderParams::new(10, 12, 20, 50, 0.01);
        assert!(params.is_valid());
        assert_eq!(params.n_trees(), 10);
        assert_eq!(params.max_levels(), 12);
        assert_eq!(params.n_candidate_features(), 20);
        assert_eq!(params.n_candidate_thresholds(), 50);
        assert_eq!(params.min_gain(), 0.01);
        assert_eq!(params.train_method(), TrainMethod::DepthFirst);
        assert_eq!(params.n_threads(), 1);
        assert_eq!(params.min_leaf_samples(), DEFAULT_MIN_LEAF_SAMPLES);
    }

    #[test]
    fn builder_chaining() {
        let params = ForestBuilderParams::new(5, 3, 2, 8, 0.0)
            .with_train_method(TrainMethod::Hybrid)
            .with_n_threads(6)
            .with_min_leaf_samples(9);
        assert_eq!(params.train_method(), TrainMethod::Hybrid);
        assert_eq!(params.n_threads(), 6);
        assert_eq!(params.min_leaf_samples(), 9);
        assert_eq!(params.n_trees(), 5);
    }

    #[test]
    fn default_is_unloaded_and_invalid() {
        let params = ForestBuilderParams::default();
        assert!(!params.is_valid());
        assert_eq!(params.n_trees(), 0);
        assert_eq!(params.n_threads(), 1);
        assert_eq!(params.min_leaf_samples(), 3);
    }

    #[test]
    fn clone_is_independent_and_keeps_validity() {
        let original = ForestBuilderParams::new(1, 2, 3, 4, 0.5);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        copy.n_trees = 99;
        copy.is_valid = false;
        assert_eq!(original.n_trees(), 1);
        assert!(original.is_valid());
    }

    #[test]
    fn thread_pool_matches_thread_count() {
        let params = ForestBuilderParams::new(1, 1, 1, 1, 0.0).with_n_threads(3);
        let pool = params.thread_pool().unwrap();
        assert_eq!(pool.current_num_threads(), 3);
    }

    #[test]
    fn thread_pool_never_empty() {
        let params = ForestBuilderParams::new(1, 1, 1, 1, 0.0).with_n_threads(-4);
        let pool = params.thread_pool().unwrap();
        assert_eq!(pool.current_num_threads(), 1);
    }
}
