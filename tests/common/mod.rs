//! Common test utilities and helpers

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DATASET_HEADER: &str = "fixed acidity,volatile acidity,citric acid,pH,alcohol,quality";

/// Project layout on disk: a config file plus a cleaned dataset
pub struct ProjectFixture {
    temp_dir: TempDir,
}

impl ProjectFixture {
    /// Create a project with `rows` dataset rows and a config pointing at them.
    ///
    /// Paths inside the config are relative to [`ProjectFixture::root`].
    pub fn new(rows: usize) -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let fixture = Self { temp_dir };

        fs::create_dir_all(fixture.root().join("artifacts/data_ingestion"))?;
        fs::write(fixture.data_path(), dataset_csv(rows))?;

        fs::create_dir_all(fixture.root().join("config"))?;
        fs::write(
            fixture.config_path(),
            r#"artifacts_root: artifacts

data_ingestion:
  root_dir: artifacts/data_ingestion
  source_URL: https://example.com/winequality.zip

data_transformation:
  root_dir: artifacts/data_transformation
  data_path: artifacts/data_ingestion/winequality-red.csv
"#,
        )?;

        Ok(fixture)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("config/config.yaml")
    }

    pub fn data_path(&self) -> PathBuf {
        self.root().join("artifacts/data_ingestion/winequality-red.csv")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("artifacts/data_transformation")
    }
}

/// Cleaned wine-quality style CSV with a unique first column per row
pub fn dataset_csv(rows: usize) -> String {
    let mut content = format!("{DATASET_HEADER}\n");
    for i in 0..rows {
        content.push_str(&format!(
            "{}.{},{:.2},{:.2},{:.2},{:.1},{}\n",
            4 + i / 10,
            i % 10,
            0.2 + (i % 9) as f64 * 0.1,
            (i % 4) as f64 * 0.15,
            2.9 + (i % 6) as f64 * 0.1,
            8.5 + (i % 11) as f64 * 0.5,
            3 + i % 6
        ));
    }
    content
}

/// Data lines of a CSV file, header stripped
pub fn data_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .map(str::to_string)
        .collect()
}
