use color_eyre::Result;
use fan_value_engine::analytics::{
    cluster_scores, digital_profile, score_histogram, segmentation::MISSING_TIER_COLUMNS_WARNING,
    tier_breakdown, tier_distribution, ClusterScore, Histogram, OverviewStats, ScaledMatrix,
    TierDistribution, TierShare,
};
use fan_value_engine::data::{DataError, Dataset, LongRow};
use std::fmt::Write as _;

/// Print every section's figures and exit; used when stdout is not a terminal.
pub fn run_headless(dataset: &Dataset, json: bool) -> Result<()> {
    let report = build_report(dataset);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report_text(&report));
    }

    if !report.errors.is_empty() {
        tracing::warn!(errors = report.errors.len(), "headless report has failed sections");
    }

    Ok(())
}

#[derive(Debug, serde::Serialize)]
pub struct HeadlessReport {
    loaded_at: String,
    fans_path: String,
    clusters_path: String,
    overview: Option<OverviewStats>,
    tiers: Option<Vec<TierShare>>,
    histogram: Option<Histogram>,
    cluster_scores: Option<Vec<ClusterScore>>,
    tier_distribution: Option<Vec<LongRow<f64>>>,
    digital_profile: Option<ScaledMatrix>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

pub fn build_report(dataset: &Dataset) -> HeadlessReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let overview = section(&mut errors, "overview", OverviewStats::compute(&dataset.fans));
    let tiers = section(&mut errors, "tiers", tier_breakdown(&dataset.fans));
    let histogram = section(&mut errors, "histogram", score_histogram(&dataset.fans)).flatten();
    let cluster_scores = section(&mut errors, "cluster scores", cluster_scores(&dataset.clusters));

    let tier_distribution = match section(
        &mut errors,
        "tier distribution",
        tier_distribution(&dataset.clusters),
    ) {
        Some(TierDistribution::Grouped { rows, .. }) => Some(rows),
        Some(TierDistribution::NoTierColumns) => {
            warnings.push(MISSING_TIER_COLUMNS_WARNING.to_string());
            None
        }
        None => None,
    };

    let digital_profile = section(&mut errors, "digital profile", digital_profile(&dataset.fans));
    if let Some(profile) = &digital_profile {
        if !profile.constant_columns.is_empty() {
            warnings.push(format!(
                "Constant across clusters, not rescaled: {}",
                profile.constant_columns.join(", ")
            ));
        }
    }

    HeadlessReport {
        loaded_at: dataset.loaded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        fans_path: dataset.paths.fans.display().to_string(),
        clusters_path: dataset.paths.clusters.display().to_string(),
        overview,
        tiers,
        histogram,
        cluster_scores,
        tier_distribution,
        digital_profile,
        warnings,
        errors,
    }
}

fn section<T>(errors: &mut Vec<String>, name: &str, result: Result<T, DataError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(format!("{name}: {e}"));
            None
        }
    }
}

pub fn render_report_text(report: &HeadlessReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\nFan Value Engine");
    let _ = writeln!(out, "================");
    let _ = writeln!(out, "Fans: {}", report.fans_path);
    let _ = writeln!(out, "Clusters: {}", report.clusters_path);
    let _ = writeln!(out, "Loaded: {}", report.loaded_at);

    if let Some(overview) = &report.overview {
        let _ = writeln!(out, "\nResumen General");
        let _ = writeln!(out, "Total fans: {}", overview.total_label());
        let _ = writeln!(out, "Mean Fan Score: {}", overview.mean_label());
        let _ = writeln!(out, "Premium fans: {}", overview.premium_label());
    }

    if let Some(tiers) = &report.tiers {
        let _ = writeln!(out, "\nFans by tier:");
        for tier in tiers {
            let _ = writeln!(out, "- {}: {} ({:.1}%)", tier.label, tier.count, tier.pct);
        }
    }

    if let Some(histogram) = &report.histogram {
        let _ = writeln!(out, "\nFan Score histogram ({} bins):", histogram.counts.len());
        for (index, count) in histogram.counts.iter().enumerate() {
            let _ = writeln!(out, "- {:>7.1}: {count}", histogram.lower_edge(index));
        }
    }

    if let Some(scores) = &report.cluster_scores {
        let _ = writeln!(out, "\nSegmentación por Clusters");
        for score in scores {
            let _ = writeln!(out, "- Cluster {}: {:.1}", score.cluster, score.score);
        }
    }

    if let Some(rows) = &report.tier_distribution {
        let _ = writeln!(out, "\nTier share by cluster:");
        for row in rows {
            let _ = writeln!(out, "- Cluster {} | {} | {:.1}%", row.id, row.variable, row.value);
        }
    }

    if let Some(profile) = &report.digital_profile {
        let _ = writeln!(out, "\nAnálisis Avanzado (min-max per variable)");
        let _ = writeln!(out, "Cluster | {}", profile.variables.join(" | "));
        for (cluster, values) in profile.clusters.iter().zip(&profile.values) {
            let cells: Vec<String> = values
                .iter()
                .map(|value| value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}")))
                .collect();
            let _ = writeln!(out, "{cluster} | {}", cells.join(" | "));
        }
    }

    for warning in &report.warnings {
        let _ = writeln!(out, "\nWarning: {warning}");
    }
    for error in &report.errors {
        let _ = writeln!(out, "\nError: {error}");
    }

    out
}
