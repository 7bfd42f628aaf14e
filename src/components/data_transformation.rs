//! Data transformation stage: train/test split of the cleaned dataset
//!
//! The input is assumed clean already, so the only transformation applied is
//! the held-out split. The stage never creates its output directory; run
//! [`create_directories`](crate::common::create_directories) over
//! [`StageConfig::required_directories`](crate::entity::StageConfig::required_directories)
//! first.

use crate::components::table::Table;
use crate::entity::DataTransformationConfig;
use crate::error::Result;
use tracing::{debug, info};

/// Fraction of rows held out for the test subset
pub const TEST_SIZE: f64 = 0.25;

/// Seed for the row permutation
pub const RANDOM_STATE: u64 = 42;

pub struct DataTransformation {
    config: DataTransformationConfig,
}

impl DataTransformation {
    pub fn new(config: DataTransformationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DataTransformationConfig {
        &self.config
    }

    /// Split `data_path` into `root_dir/train.csv` and `root_dir/test.csv`.
    ///
    /// A quarter of the rows, chosen by a permutation seeded with
    /// [`RANDOM_STATE`], go to the test file. Both shapes are logged and
    /// printed to stdout as `(rows, columns)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed, has no rows,
    /// or either output file cannot be created (including when `root_dir`
    /// does not exist).
    pub fn train_test_splitting(&self) -> Result<()> {
        debug!("Reading dataset from {}", self.config.data_path.display());
        let data = Table::from_path(&self.config.data_path)?;

        let (train, test) = data.train_test_split(TEST_SIZE, RANDOM_STATE)?;

        train.write_to_path(self.config.train_path())?;
        test.write_to_path(self.config.test_path())?;

        info!("Split data into training and test sets");
        info!("Train shape: {:?}", train.shape());
        info!("Test shape: {:?}", test.shape());

        println!("{:?}", train.shape());
        println!("{:?}", test.shape());

        Ok(())
    }
}
