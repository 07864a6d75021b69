pub mod advanced;
pub mod clusters;
pub mod detail;
pub mod overview;
