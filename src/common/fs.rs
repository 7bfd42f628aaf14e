//! Directory creation and file size reporting

use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::info;

/// Create every directory in `paths`, including missing ancestors.
///
/// Directories that already exist are left alone. When `verbose` is set,
/// one line is logged per path.
pub fn create_directories<P: AsRef<Path>>(paths: &[P], verbose: bool) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path)?;
        if verbose {
            info!("Created directory at: {}", path.display());
        }
    }
    Ok(())
}

/// Size of a file in whole kilobytes, formatted as `"~ N KB"`.
///
/// Halfway values round to the nearest even number, so 1536 bytes reports
/// `~ 2 KB` and 2560 bytes also reports `~ 2 KB`.
pub fn get_size(path: impl AsRef<Path>) -> Result<String> {
    let bytes = fs::metadata(path.as_ref())?.len();
    Ok(format!("~ {} KB", kilobytes(bytes)))
}

fn kilobytes(bytes: u64) -> u64 {
    (bytes as f64 / 1024.0).round_ties_even() as u64
}
