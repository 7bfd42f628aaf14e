//! Opaque binary object files.
//!
//! Any value with serde support can be stored. The payload is plain
//! bincode with no header, version or checksum, so a foreign or truncated
//! file surfaces as [`Error::Bincode`](crate::Error::Bincode).

use crate::error::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Serialize `data` to a binary file, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoding fails.
pub fn save_bin<T: Serialize + ?Sized>(data: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, data)?;
    writer.flush()?;

    info!("Binary file saved at: {}", path.display());
    Ok(())
}

/// Deserialize a value previously written by [`save_bin`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not decode as `T`.
pub fn load_bin<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let data = bincode::deserialize_from(reader)?;

    info!("Binary file loaded from: {}", path.display());
    Ok(data)
}
