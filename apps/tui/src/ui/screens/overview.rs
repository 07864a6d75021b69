use crate::app::App;
use crate::ui::widgets::charts::{render_error, render_histogram, render_placeholder};
use crate::ui::widgets::metrics::render_metric;
use crate::ui::widgets::pie::render_pie;
use fan_value_engine::analytics::{score_histogram, tier_breakdown, OverviewStats};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

const HISTOGRAM_TITLE: &str = "Histograma del Fan Score";
const PIE_TITLE: &str = "Distribución de Niveles";

pub fn render_overview(app: &App, f: &mut Frame<'_>, area: Rect) {
    let fans = &app.dataset.fans;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(area);

    match OverviewStats::compute(fans) {
        Ok(stats) => render_metric_cards(f, rows[0], &stats),
        Err(err) => render_error(f, rows[0], "Resumen", &err),
    }

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    match score_histogram(fans) {
        Ok(Some(histogram)) => render_histogram(f, charts[0], HISTOGRAM_TITLE, &histogram),
        Ok(None) => {
            render_placeholder(f, charts[0], HISTOGRAM_TITLE, "No fans available");
        }
        Err(err) => render_error(f, charts[0], HISTOGRAM_TITLE, &err),
    }

    match tier_breakdown(fans) {
        Ok(shares) => render_pie(f, charts[1], PIE_TITLE, &shares),
        Err(err) => render_error(f, charts[1], PIE_TITLE, &err),
    }
}

fn render_metric_cards(f: &mut Frame<'_>, area: Rect, stats: &OverviewStats) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_metric(f, cards[0], "Total Fans", &stats.total_label());
    render_metric(f, cards[1], "Fan Score Medio", &stats.mean_label());
    render_metric(f, cards[2], "% Fans Premium", &stats.premium_label());
}
