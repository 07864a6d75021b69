use crate::data::{melt_rows, DataError, DataTable, LongRow};
use crate::domain::fan_columns;
use serde::Serialize;
use std::cmp::Ordering;

/// Per-cluster column means (`values[cluster][variable]`). A cell is `None`
/// when the cluster has no present value in that column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterMeans {
    pub clusters: Vec<String>,
    pub variables: Vec<&'static str>,
    pub values: Vec<Vec<Option<f64>>>,
}

/// Group-by-mean of `columns` keyed on `group_column`. Blank and NA cells
/// are skipped, so each mean is over the values present.
pub fn group_means(
    fans: &DataTable,
    group_column: &str,
    columns: &[&'static str],
) -> Result<ClusterMeans, DataError> {
    let keys = fans.column(group_column)?;
    let series = columns
        .iter()
        .map(|column| fans.optional_numeric_column(column))
        .collect::<Result<Vec<_>, _>>()?;

    let mut clusters: Vec<String> = Vec::new();
    let mut sums: Vec<Vec<f64>> = Vec::new();
    let mut counts: Vec<Vec<usize>> = Vec::new();

    for (row, key) in keys.iter().enumerate() {
        let slot = if let Some(slot) = clusters.iter().position(|cluster| cluster == key) {
            slot
        } else {
            clusters.push((*key).to_string());
            sums.push(vec![0.0; columns.len()]);
            counts.push(vec![0; columns.len()]);
            clusters.len() - 1
        };

        for (column, values) in series.iter().enumerate() {
            if let Some(value) = values[row] {
                sums[slot][column] += value;
                counts[slot][column] += 1;
            }
        }
    }

    let mut groups: Vec<(String, Vec<Option<f64>>)> = clusters
        .into_iter()
        .zip(sums)
        .zip(counts)
        .map(|((cluster, sums), counts)| {
            let means = sums
                .into_iter()
                .zip(counts)
                .map(|(sum, count)| (count > 0).then(|| sum / count as f64))
                .collect();
            (cluster, means)
        })
        .collect();

    let numeric_keys = groups.iter().all(|(key, _)| key.parse::<f64>().is_ok());
    groups.sort_by(|(a, _), (b, _)| compare_keys(a, b, numeric_keys));

    let (clusters, values) = groups.into_iter().unzip();
    Ok(ClusterMeans {
        clusters,
        variables: columns.to_vec(),
        values,
    })
}

fn compare_keys(a: &str, b: &str, numeric: bool) -> Ordering {
    if numeric {
        if let (Ok(a), Ok(b)) = (a.parse::<f64>(), b.parse::<f64>()) {
            return a.total_cmp(&b);
        }
    }
    a.cmp(b)
}

/// Min-max rescaled means. A `None` cell belongs to a column whose value is
/// the same for every cluster, where the rescale has no defined result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledMatrix {
    pub clusters: Vec<String>,
    pub variables: Vec<&'static str>,
    pub values: Vec<Vec<Option<f64>>>,
    pub constant_columns: Vec<&'static str>,
}

impl ScaledMatrix {
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Long form for the heatmap: one row per cluster and variable.
    pub fn to_long(&self) -> Vec<LongRow<Option<f64>>> {
        melt_rows(&self.clusters, &self.variables, &self.values)
    }
}

/// Maps every column independently onto `[0, 1]`:
/// `(v - min) / (max - min)` with min and max taken across clusters.
/// Missing means stay `None`.
pub fn min_max_scale(means: &ClusterMeans) -> ScaledMatrix {
    let columns = means.variables.len();
    let mut values = vec![vec![None; columns]; means.clusters.len()];
    let mut constant_columns = Vec::new();

    for (column, variable) in means.variables.iter().enumerate() {
        let column_values = means.values.iter().filter_map(|row| row[column]);
        let Some(min) = column_values.clone().reduce(f64::min) else {
            continue;
        };
        let max = column_values.reduce(f64::max).unwrap_or(min);
        let range = max - min;

        if range <= f64::EPSILON * max.abs().max(1.0) {
            constant_columns.push(*variable);
            continue;
        }

        for (row, scaled) in values.iter_mut().enumerate() {
            scaled[column] = means.values[row][column]
                .map(|value| ((value - min) / range).clamp(0.0, 1.0));
        }
    }

    if !constant_columns.is_empty() {
        tracing::debug!(?constant_columns, "columns with zero range across clusters");
    }

    ScaledMatrix {
        clusters: means.clusters.clone(),
        variables: means.variables.clone(),
        values,
        constant_columns,
    }
}

/// Cluster means of the digital engagement columns, rescaled per column.
pub fn digital_profile(fans: &DataTable) -> Result<ScaledMatrix, DataError> {
    let means = group_means(fans, fan_columns::CLUSTER, &fan_columns::DIGITAL)?;
    Ok(min_max_scale(&means))
}
