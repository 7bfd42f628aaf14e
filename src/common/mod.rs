//! Stateless file helpers shared by the pipeline stages.
//!
//! Each helper opens, uses and releases its own file handle, logs through
//! `tracing` on success, and returns failures from the underlying primitive
//! without retrying. The only translated failure is an empty YAML document,
//! which becomes [`Error::EmptyDocument`](crate::Error::EmptyDocument).

mod binary;
mod fs;
mod json;
mod yaml;

pub use binary::{load_bin, save_bin};
pub use fs::{create_directories, get_size};
pub use json::{load_json, save_json};
pub use yaml::{read_yaml, save_yaml};
