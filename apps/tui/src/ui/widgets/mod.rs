pub mod charts;
pub mod heatmap;
pub mod metrics;
pub mod pie;
pub mod popup;
pub mod radar;
pub mod tables;
