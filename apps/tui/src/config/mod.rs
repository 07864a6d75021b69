#[allow(clippy::module_inception)]
mod config;

pub use config::{
    init_app_config, AppConfig, CLUSTER_SUMMARY_ENV, DEBUG_ENV, DEFAULT_LOG_FILE, FAN_DATA_ENV,
    LOG_FILE_ENV,
};
