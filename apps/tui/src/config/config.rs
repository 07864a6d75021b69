use crate::data::DataPaths;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const FAN_DATA_ENV: &str = "FAN_DATA_PATH";
pub const CLUSTER_SUMMARY_ENV: &str = "CLUSTER_SUMMARY_PATH";
pub const LOG_FILE_ENV: &str = "FAN_ENGINE_LOG";
pub const DEBUG_ENV: &str = "DEBUG";
pub const DEFAULT_LOG_FILE: &str = "fan_value_engine.log";

/// Runtime settings resolved from `.env`, the environment and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data: DataPaths,
    /// Log destination; `None` leaves logging off.
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

/// Initializes the application configuration
pub fn init_app_config() -> AppConfig {
    // Load environment variables from .env file; existing variables win
    dotenv().ok();

    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = DataPaths::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let debug = non_empty(DEBUG_ENV).is_some_and(|value| value != "0");

        let log_file = non_empty(LOG_FILE_ENV)
            .map(PathBuf::from)
            .or_else(|| debug.then(|| PathBuf::from(DEFAULT_LOG_FILE)));

        Self {
            data: DataPaths {
                fans: non_empty(FAN_DATA_ENV).map_or(defaults.fans, PathBuf::from),
                clusters: non_empty(CLUSTER_SUMMARY_ENV).map_or(defaults.clusters, PathBuf::from),
            },
            log_file,
            debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[]));

        assert_eq!(config.data, DataPaths::default());
        assert_eq!(config.log_file, None);
        assert!(!config.debug);
    }

    #[test]
    fn environment_overrides_paths() {
        let config = AppConfig::from_lookup(lookup(&[
            (FAN_DATA_ENV, "data/fans.csv"),
            (CLUSTER_SUMMARY_ENV, "data/clusters.csv"),
            (LOG_FILE_ENV, "engine.log"),
        ]));

        assert_eq!(config.data.fans, PathBuf::from("data/fans.csv"));
        assert_eq!(config.data.clusters, PathBuf::from("data/clusters.csv"));
        assert_eq!(config.log_file, Some(PathBuf::from("engine.log")));
    }

    #[test]
    fn debug_enables_default_log_file() {
        let config = AppConfig::from_lookup(lookup(&[(DEBUG_ENV, "1")]));

        assert!(config.debug);
        assert_eq!(config.log_file, Some(PathBuf::from(DEFAULT_LOG_FILE)));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[(FAN_DATA_ENV, "  "), (DEBUG_ENV, "0")]));

        assert_eq!(config.data.fans, PathBuf::from("fan_data.csv"));
        assert!(!config.debug);
    }
}
