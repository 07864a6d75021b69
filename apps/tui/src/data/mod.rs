// Data module for fan_value_engine
// Loads the fan and cluster CSV files into immutable in-memory tables

pub mod error;
pub mod loader;
pub mod reshape;
pub mod table;

pub use error::DataError;
pub use loader::{DataPaths, Dataset};
pub use reshape::{melt, melt_rows, LongRow};
pub use table::DataTable;
