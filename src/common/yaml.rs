//! YAML documents loaded into typed structures

use crate::error::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Read a YAML file into the structure the caller expects.
///
/// Declare the exact fields on `T`; add `#[serde(deny_unknown_fields)]` to
/// reject extras at load time.
///
/// # Errors
///
/// - [`Error::EmptyDocument`] if the file holds no document (blank, only
///   comments, or a bare `null`)
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::Yaml`] for any other parse or shape mismatch
pub fn read_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    if is_blank_document(&content) {
        return Err(Error::EmptyDocument {
            path: path.to_path_buf(),
        });
    }

    let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
    if value.is_null() {
        return Err(Error::EmptyDocument {
            path: path.to_path_buf(),
        });
    }

    let parsed = serde_yaml::from_value(value)?;
    info!("YAML file loaded successfully: {}", path.display());
    Ok(parsed)
}

/// Write `data` as YAML, replacing any existing file.
pub fn save_yaml<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_yaml::to_writer(&mut writer, data)?;
    writer.flush()?;

    info!("YAML file saved at: {}", path.display());
    Ok(())
}

/// True when the text contains no YAML content besides comments and
/// document markers.
fn is_blank_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
