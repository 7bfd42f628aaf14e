//! # mlproject
//!
//! Data transformation stage of a small ML pipeline, plus the file helpers
//! the other stages share.
//!
//! ## Modules
//!
//! - `common` - Stateless YAML/JSON/binary load-save, directory creation, file size
//! - `components` - Pipeline stages (train/test split) and the CSV table they operate on
//! - `entity` - Typed configuration entities consumed by the stages
//! - `error` - Crate-wide error type
//! - `logging` - Subscriber setup for the binary
pub mod common;
pub mod components;
pub mod entity;
pub mod error;
pub mod logging;

pub use components::{DataTransformation, Table, RANDOM_STATE, TEST_SIZE};
pub use entity::{DataTransformationConfig, StageConfig};
pub use error::{Error, Result};
