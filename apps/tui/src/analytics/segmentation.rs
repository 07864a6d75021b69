use crate::data::{melt, DataError, DataTable, LongRow};
use crate::domain::{cluster_columns, Tier};
use serde::Serialize;

pub const MISSING_TIER_COLUMNS_WARNING: &str = "No hay columnas de nivel válidas para graficar.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterScore {
    pub cluster: String,
    pub score: f64,
}

/// Aggregate score of every cluster, in file order.
pub fn cluster_scores(summary: &DataTable) -> Result<Vec<ClusterScore>, DataError> {
    let clusters = summary.column(cluster_columns::CLUSTER)?;
    let scores = summary.numeric_column(cluster_columns::SCORE)?;

    Ok(clusters
        .into_iter()
        .zip(scores)
        .map(|(cluster, score)| ClusterScore {
            cluster: cluster.to_string(),
            score,
        })
        .collect())
}

/// The tier percentage columns present in the summary, in canonical order.
pub fn present_tier_columns(summary: &DataTable) -> Vec<Tier> {
    Tier::SUMMARY_COLUMNS
        .into_iter()
        .filter(|tier| summary.has_column(tier.as_str()))
        .collect()
}

/// Long-form tier percentages, or the reason there is nothing to chart.
#[derive(Debug, Clone, PartialEq)]
pub enum TierDistribution {
    Grouped {
        clusters: Vec<String>,
        tiers: Vec<Tier>,
        /// `id` is the cluster, `variable` the tier label, `value` the percentage.
        rows: Vec<LongRow<f64>>,
    },
    NoTierColumns,
}

impl TierDistribution {
    /// Percentage at summary row `cluster` and tier column `tier`, both
    /// positional. Rows are variable-major, so repeated cluster labels keep
    /// their own values.
    pub fn value(&self, cluster: usize, tier: usize) -> Option<f64> {
        match self {
            Self::Grouped {
                clusters,
                tiers,
                rows,
            } if cluster < clusters.len() && tier < tiers.len() => rows
                .get(tier * clusters.len() + cluster)
                .map(|row| row.value),
            _ => None,
        }
    }
}

pub fn tier_distribution(summary: &DataTable) -> Result<TierDistribution, DataError> {
    let tiers = present_tier_columns(summary);
    if tiers.is_empty() {
        tracing::warn!(table = summary.name(), "no tier percentage columns present");
        return Ok(TierDistribution::NoTierColumns);
    }

    let columns: Vec<&str> = tiers.iter().map(|tier| tier.as_str()).collect();
    let rows = melt(summary, cluster_columns::CLUSTER, &columns)?;
    let clusters = summary
        .column(cluster_columns::CLUSTER)?
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(TierDistribution::Grouped {
        clusters,
        tiers,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(headers: &[&str], rows: &[&[&str]]) -> DataTable {
        DataTable::new(
            "resumen_clusters.csv",
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn scores_follow_file_order() -> Result<(), DataError> {
        let table = summary(&["Cluster", "Fan_Score"], &[&["2", "70.5"], &["0", "40"]]);

        let scores = cluster_scores(&table)?;
        assert_eq!(scores[0].cluster, "2");
        assert!((scores[0].score - 70.5).abs() < f64::EPSILON);
        assert_eq!(scores[1].cluster, "0");
        Ok(())
    }

    #[test]
    fn missing_all_tier_columns_takes_warning_branch() -> Result<(), DataError> {
        let table = summary(&["Cluster", "Fan_Score"], &[&["0", "50"], &["1", "60"]]);

        assert!(present_tier_columns(&table).is_empty());
        assert_eq!(tier_distribution(&table)?, TierDistribution::NoTierColumns);
        Ok(())
    }

    #[test]
    fn partial_tier_columns_are_melted_in_canonical_order() -> Result<(), DataError> {
        let table = summary(
            &["Cluster", "Fan_Score", "Dormido", "Alto", "Extra"],
            &[&["0", "50", "30", "70", "x"], &["1", "60", "10", "90", "y"]],
        );

        let distribution = tier_distribution(&table)?;
        let TierDistribution::Grouped { clusters, tiers, rows } = &distribution else {
            panic!("expected grouped distribution, got {distribution:?}");
        };

        assert_eq!(tiers, &[Tier::Alto, Tier::Dormido]);
        assert_eq!(clusters, &["0", "1"]);
        assert_eq!(rows.len(), 4);
        assert_eq!(distribution.value(1, 1), Some(10.0));
        assert_eq!(distribution.value(0, 0), Some(70.0));
        assert_eq!(distribution.value(1, 2), None);
        assert_eq!(distribution.value(2, 0), None);
        Ok(())
    }

    #[test]
    fn repeated_cluster_labels_keep_their_own_values() -> Result<(), DataError> {
        let table = summary(
            &["Cluster", "Fan_Score", "Alto", "Bajo"],
            &[&["0", "50", "10", "90"], &["0", "60", "40", "60"]],
        );

        let distribution = tier_distribution(&table)?;
        assert_eq!(distribution.value(0, 0), Some(10.0));
        assert_eq!(distribution.value(1, 0), Some(40.0));
        assert_eq!(distribution.value(1, 1), Some(60.0));
        Ok(())
    }
}
