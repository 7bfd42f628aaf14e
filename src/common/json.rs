//! JSON save/load with stable four-space indentation

use crate::error::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Save `data` as pretty-printed JSON, replacing any existing file.
pub fn save_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    data.serialize(&mut serializer)?;
    writer.flush()?;

    info!("JSON file saved at: {}", path.display());
    Ok(())
}

/// Load a JSON file into the structure the caller expects.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let content = serde_json::from_reader(reader)?;

    info!("JSON file loaded successfully from: {}", path.display());
    Ok(content)
}
