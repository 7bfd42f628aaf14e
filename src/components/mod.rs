//! Pipeline stages and the table type they operate on

pub mod data_transformation;
pub mod table;

pub use data_transformation::{DataTransformation, RANDOM_STATE, TEST_SIZE};
pub use table::{split_indices, Table};
