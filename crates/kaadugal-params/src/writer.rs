//! Write parameters back out in the `key: value` file format.

use std::fmt::Write as _;
use std::path::Path;

use tracing::{info, instrument};

use crate::error::ParamsError;
use crate::key::ParamKey;
use crate::params::ForestBuilderParams;

const HEADER: &str = "# Forest builder parameters";

impl ForestBuilderParams {
    /// Render the parameters as a parameter file.
    ///
    /// Every key is written, `MinLeafSamples` included, so loading the text
    /// reproduces these values.
    #[must_use]
    pub fn to_params_string(&self) -> String {
        let mut out = String::new();
        out.push_str(HEADER);
        out.push('\n');
        for key in ParamKey::ALL {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{}: {}", key.name(), self.value_text(key));
        }
        out
    }

    /// Save the parameters to a file, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::WriteFile`] if the file cannot be written.
    #[instrument(skip(self), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let path = path.as_ref();
        let text = self.to_params_string();
        std::fs::write(path, &text).map_err(|e| ParamsError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(size_bytes = text.len(), "parameters saved");
        Ok(())
    }

    fn value_text(&self, key: ParamKey) -> String {
        match key {
            ParamKey::NumTrees => self.n_trees.to_string(),
            ParamKey::TrainMethod => self.train_method.token().to_string(),
            ParamKey::MaxTreeLevels => self.max_levels.to_string(),
            ParamKey::NumCandidateFeats => self.n_candidate_features.to_string(),
            ParamKey::NumCandidateThresh => self.n_candidate_thresholds.to_string(),
            ParamKey::MinGain => self.min_gain.to_string(),
            ParamKey::NumThreads => self.n_threads.to_string(),
            ParamKey::MinLeafSamples => self.min_leaf_samples.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::method::TrainMethod;
    use crate::params::ForestBuilderParams;

    #[test]
    fn renders_every_key_in_order() {
        let params = ForestBuilderParams::new(10, 12, 20, 50, 0.01)
            .with_n_threads(4)
            .with_min_leaf_samples(5);
        assert_eq!(
            params.to_params_string(),
            "# Forest builder parameters\n\
             NumTrees: 10\n\
             TrainMethod: DFS\n\
             MaxTreeLevels: 12\n\
             NumCandidateFeats: 20\n\
             NumCandidateThresh: 50\n\
             MinGain: 0.01\n\
             NumThreads: 4\n\
             MinLeafSamples: 5\n"
        );
    }

    #[test]
    fn save_then_load_reproduces_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("forest.params");
        let params = ForestBuilderParams::new(7, 9, 3, 128, 1.0e-7)
            .with_train_method(TrainMethod::Hybrid)
            .with_n_threads(8)
            .with_min_leaf_samples(11);
        params.save(&path).unwrap();

        let loaded = ForestBuilderParams::from_file(&path);
        assert_eq!(loaded, params);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("forest.params");
        let result = ForestBuilderParams::new(1, 1, 1, 1, 0.0).save(&path);
        assert!(matches!(
            result,
            Err(crate::error::ParamsError::WriteFile { .. })
        ));
    }
}
