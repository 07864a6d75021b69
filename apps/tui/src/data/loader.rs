use crate::data::{DataError, DataTable};
use chrono::{DateTime, Local};
use std::path::PathBuf;

pub const DEFAULT_FAN_DATA: &str = "fan_data.csv";
pub const DEFAULT_CLUSTER_SUMMARY: &str = "resumen_clusters.csv";

/// Locations of the two input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub fans: PathBuf,
    pub clusters: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            fans: PathBuf::from(DEFAULT_FAN_DATA),
            clusters: PathBuf::from(DEFAULT_CLUSTER_SUMMARY),
        }
    }
}

/// Both tables, loaded once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub fans: DataTable,
    pub clusters: DataTable,
    pub paths: DataPaths,
    pub loaded_at: DateTime<Local>,
}

impl Dataset {
    /// Loads the fan table and the cluster summary. Either failing aborts the load.
    pub fn load(paths: &DataPaths) -> Result<Self, DataError> {
        let fans = DataTable::from_path(&paths.fans)?;
        tracing::info!(
            path = %paths.fans.display(),
            rows = fans.len(),
            columns = fans.headers().len(),
            "loaded fan table"
        );

        let clusters = DataTable::from_path(&paths.clusters)?;
        tracing::info!(
            path = %paths.clusters.display(),
            rows = clusters.len(),
            columns = clusters.headers().len(),
            "loaded cluster summary"
        );

        Ok(Self::from_tables(fans, clusters, paths.clone()))
    }

    pub fn from_tables(fans: DataTable, clusters: DataTable, paths: DataPaths) -> Self {
        Self {
            fans,
            clusters,
            paths,
            loaded_at: Local::now(),
        }
    }
}
