use crate::ui::theme::{self, series_color};
use fan_value_engine::analytics::{Histogram, TierDistribution};
use fan_value_engine::data::DataError;
use ratatui::layout::{Alignment, Direction, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Bars hold integers; values are stored in tenths so one decimal survives.
const BAR_SCALE: f64 = 10.0;

pub fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
}

/// Empty-data message inside a titled panel.
pub fn render_placeholder(f: &mut Frame<'_>, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(message)
        .block(chart_block(title))
        .style(Style::default().fg(theme::MUTED))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

pub fn render_warning(f: &mut Frame<'_>, area: Rect, message: &str) {
    let block = Block::default()
        .title("Aviso")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::WARNING));
    let paragraph = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(theme::WARNING))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// A section that could not be computed, e.g. because a column is missing.
pub fn render_error(f: &mut Frame<'_>, area: Rect, title: &str, error: &DataError) {
    let block = Block::default()
        .title(format!("{title} - error"))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ERROR));
    let paragraph = Paragraph::new(error.to_string())
        .block(block)
        .style(Style::default().fg(theme::ERROR))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_value(value: f64) -> u64 {
    (value.max(0.0) * BAR_SCALE).round() as u64
}

fn value_text(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Width that fits `count` bars (plus gaps) into `area`.
#[allow(clippy::cast_possible_truncation)]
fn fitted_bar_width(area: Rect, count: usize, gap: u16) -> u16 {
    let inner = area.width.saturating_sub(2);
    let count = count.max(1).min(usize::from(u16::MAX)) as u16;
    (inner / count).saturating_sub(gap).clamp(1, 12)
}

pub fn render_histogram(f: &mut Frame<'_>, area: Rect, title: &str, histogram: &Histogram) {
    let bars: Vec<Bar<'_>> = histogram
        .counts
        .iter()
        .enumerate()
        .map(|(index, count)| {
            Bar::default()
                .value(*count)
                .label(TextLine::from(format!("{:.0}", histogram.lower_edge(index))))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(Style::default().fg(Color::Black).bg(theme::ACCENT))
        })
        .collect();

    let max_value = histogram.counts.iter().copied().max().unwrap_or(0).max(1);

    let chart = BarChart::default()
        .block(chart_block(title))
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(fitted_bar_width(area, bars.len(), 1));

    f.render_widget(chart, area);
}

/// One bar per `(label, value)`, each in its own palette colour.
pub fn render_value_bars(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    values: &[(String, f64)],
    direction: Direction,
) {
    if values.is_empty() {
        render_placeholder(f, area, title, "No data available");
        return;
    }

    let bars: Vec<Bar<'_>> = values
        .iter()
        .enumerate()
        .map(|(index, (label, value))| {
            Bar::default()
                .value(bar_value(*value))
                .text_value(value_text(*value))
                .label(TextLine::from(label.as_str()))
                .style(Style::default().fg(series_color(index)))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(series_color(index))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let max_value = bars_max(values);

    let mut chart = BarChart::default()
        .block(chart_block(title))
        .direction(direction)
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1);

    chart = match direction {
        Direction::Vertical => chart.bar_width(fitted_bar_width(area, bars.len(), 1)),
        Direction::Horizontal => chart.bar_width(1),
    };

    f.render_widget(chart, area);
}

fn bars_max(values: &[(String, f64)]) -> u64 {
    values
        .iter()
        .map(|(_, value)| bar_value(*value))
        .max()
        .unwrap_or(0)
        .max(1)
}

/// One group per cluster, one bar per tier inside each group.
pub fn render_grouped_bars(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    distribution: &TierDistribution,
) {
    let TierDistribution::Grouped {
        clusters,
        tiers,
        rows,
    } = distribution
    else {
        return;
    };

    let groups: Vec<(String, Vec<Bar<'_>>)> = clusters
        .iter()
        .enumerate()
        .map(|(cluster_index, cluster)| {
            let bars = (0..tiers.len())
                .map(|index| {
                    let value = distribution.value(cluster_index, index).unwrap_or(0.0);
                    Bar::default()
                        .value(bar_value(value))
                        .text_value(value_text(value))
                        .style(Style::default().fg(series_color(index)))
                        .value_style(Style::default().fg(Color::Black).bg(series_color(index)))
                })
                .collect();
            (format!("Cluster {cluster}"), bars)
        })
        .collect();

    let max_value = rows
        .iter()
        .map(|row| bar_value(row.value))
        .max()
        .unwrap_or(0)
        .max(1);

    let bar_count = clusters.len() * tiers.len();
    let mut chart = BarChart::default()
        .block(chart_block(title))
        .max(max_value)
        .bar_gap(0)
        .group_gap(2)
        .bar_width(fitted_bar_width(area, bar_count + clusters.len(), 0));

    for (label, bars) in &groups {
        chart = chart.data(
            BarGroup::default()
                .label(TextLine::from(label.as_str()))
                .bars(bars),
        );
    }

    let legend = TextLine::from(
        tiers
            .iter()
            .enumerate()
            .flat_map(|(index, tier)| {
                [
                    ratatui::text::Span::styled("■ ", Style::default().fg(series_color(index))),
                    ratatui::text::Span::raw(format!("{}  ", tier.as_str())),
                ]
            })
            .collect::<Vec<_>>(),
    );

    let chunks = ratatui::layout::Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Min(3),
            ratatui::layout::Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(chart, chunks[0]);
    f.render_widget(Paragraph::new(legend).alignment(Alignment::Center), chunks[1]);
}
