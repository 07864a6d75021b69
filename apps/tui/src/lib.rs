// Export our modules for use in the binary and tests
pub mod analytics;
pub mod config;
pub mod data;
pub mod domain;

pub use domain::{Tier, View};
