//! Typed configuration entities for the pipeline stages

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the data transformation stage reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataTransformationConfig {
    /// Output directory for `train.csv` and `test.csv`
    pub root_dir: PathBuf,

    /// Cleaned input table
    pub data_path: PathBuf,
}

impl DataTransformationConfig {
    pub fn new(root_dir: impl Into<PathBuf>, data_path: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            data_path: data_path.into(),
        }
    }

    pub fn train_path(&self) -> PathBuf {
        self.root_dir.join("train.csv")
    }

    pub fn test_path(&self) -> PathBuf {
        self.root_dir.join("test.csv")
    }
}

/// The parts of the project config file this crate consumes.
///
/// Sections owned by other stages (ingestion, training, ...) may live in the
/// same file and are ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    pub artifacts_root: PathBuf,
    pub data_transformation: DataTransformationConfig,
}

impl StageConfig {
    /// Directories that must exist before the transformation stage runs
    pub fn required_directories(&self) -> Vec<&Path> {
        vec![
            self.artifacts_root.as_path(),
            self.data_transformation.root_dir.as_path(),
        ]
    }
}
