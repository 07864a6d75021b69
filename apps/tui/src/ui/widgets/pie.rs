use crate::ui::theme::{self, series_color};
use crate::ui::widgets::charts::{chart_block, render_placeholder};
use crate::ui::widgets::radar::aspect_bounds;
use fan_value_engine::analytics::TierShare;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::f64::consts::TAU;

const LEGEND_WIDTH: u16 = 24;

/// Clockwise angle of `(x, y)` measured from 12 o'clock, in `[0, TAU)`.
fn clockwise_angle(x: f64, y: f64) -> f64 {
    x.atan2(y).rem_euclid(TAU)
}

/// Index of the slice covering `angle`, given each slice's share of the whole.
fn slice_at(angle: f64, fractions: &[f64]) -> usize {
    let mut end = 0.0;
    for (index, fraction) in fractions.iter().enumerate() {
        end += fraction * TAU;
        if angle < end {
            return index;
        }
    }
    fractions.len().saturating_sub(1)
}

/// Grid points inside the unit circle, bucketed by slice.
fn slice_points(
    fractions: &[f64],
    columns: u16,
    rows: u16,
    bounds: ([f64; 2], [f64; 2]),
) -> Vec<Vec<(f64, f64)>> {
    let mut buckets = vec![Vec::new(); fractions.len()];
    if fractions.is_empty() {
        return buckets;
    }

    // Braille cells are 2x4 dots.
    let dots_x = u32::from(columns) * 2;
    let dots_y = u32::from(rows) * 4;
    let step_x = (bounds.0[1] - bounds.0[0]) / f64::from(dots_x.max(1));
    let step_y = (bounds.1[1] - bounds.1[0]) / f64::from(dots_y.max(1));

    for row in 0..=dots_y {
        let y = f64::from(row).mul_add(step_y, bounds.1[0]);
        for column in 0..=dots_x {
            let x = f64::from(column).mul_add(step_x, bounds.0[0]);
            if x.mul_add(x, y * y) <= 1.0 {
                buckets[slice_at(clockwise_angle(x, y), fractions)].push((x, y));
            }
        }
    }

    buckets
}

pub fn render_pie(f: &mut Frame<'_>, area: Rect, title: &str, shares: &[TierShare]) {
    let total: usize = shares.iter().map(|share| share.count).sum();
    if total == 0 {
        render_placeholder(f, area, title, "No fans available");
        return;
    }

    let block = chart_block(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(8), Constraint::Length(LEGEND_WIDTH)])
        .split(inner);

    let fractions: Vec<f64> = shares
        .iter()
        .map(|share| share.count as f64 / total as f64)
        .collect();
    let bounds = aspect_bounds(chunks[0], 1.05);
    let buckets = slice_points(&fractions, chunks[0].width, chunks[0].height, bounds);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(theme::BACKGROUND)
        .x_bounds(bounds.0)
        .y_bounds(bounds.1)
        .paint(|ctx| {
            for (index, coords) in buckets.iter().enumerate() {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: series_color(index),
                });
            }
        });
    f.render_widget(canvas, chunks[0]);

    let legend: Vec<TextLine<'_>> = shares
        .iter()
        .enumerate()
        .map(|(index, share)| {
            TextLine::from(vec![
                Span::styled("■ ", Style::default().fg(series_color(index))),
                Span::raw(format!("{:<9}", share.label)),
                Span::styled(
                    format!("{:>5.1}%", share.pct),
                    Style::default().fg(theme::MUTED),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend), chunks[1]);
}
