use crate::app::App;
use crate::ui::widgets::charts::{
    render_error, render_grouped_bars, render_value_bars, render_warning,
};
use crate::ui::widgets::tables::render_data_table;
use fan_value_engine::analytics::segmentation::MISSING_TIER_COLUMNS_WARNING;
use fan_value_engine::analytics::{cluster_scores, tier_distribution, TierDistribution};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

const TABLE_TITLE: &str = "Resumen por Cluster";
const SCORES_TITLE: &str = "Fan Score medio por Cluster";
pub const DISTRIBUTION_TITLE: &str = "Distribución por Nivel de Fan";

pub fn render_clusters(app: &App, f: &mut Frame<'_>, area: Rect) {
    let summary = &app.dataset.clusters;

    let table_height = u16::try_from(summary.len().saturating_add(3))
        .unwrap_or(u16::MAX)
        .min(area.height / 3)
        .max(4);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(table_height), Constraint::Min(8)])
        .split(area);

    render_data_table(f, rows[0], TABLE_TITLE, summary, app.cluster_table_offset);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    match cluster_scores(summary) {
        Ok(scores) => {
            let values: Vec<(String, f64)> = scores
                .into_iter()
                .map(|score| (format!("Cluster {}", score.cluster), score.score))
                .collect();
            render_value_bars(f, charts[0], SCORES_TITLE, &values, Direction::Vertical);
        }
        Err(err) => render_error(f, charts[0], SCORES_TITLE, &err),
    }

    match tier_distribution(summary) {
        Ok(TierDistribution::NoTierColumns) => {
            render_warning(f, charts[1], MISSING_TIER_COLUMNS_WARNING);
        }
        Ok(distribution) => render_grouped_bars(f, charts[1], DISTRIBUTION_TITLE, &distribution),
        Err(err) => render_error(f, charts[1], DISTRIBUTION_TITLE, &err),
    }
}
