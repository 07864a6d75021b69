use crate::ui::theme::{self, series_color};
use crate::ui::widgets::charts::{chart_block, render_placeholder};
use fan_value_engine::analytics::ScaledMatrix;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::f64::consts::{FRAC_PI_2, TAU};

const GRID_LEVELS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
/// Extra room around the unit circle for axis labels.
const LABEL_MARGIN: f64 = 1.35;

/// Canvas bounds that keep circles round in `area`.
///
/// A terminal cell is about twice as tall as it is wide, so one unit along
/// `y` must cover half as many rows as one unit along `x` covers columns.
pub fn aspect_bounds(area: Rect, radius: f64) -> ([f64; 2], [f64; 2]) {
    let width = f64::from(area.width.max(1));
    let height = f64::from(area.height.max(1)) * 2.0;
    let unit = width.min(height) / 2.0;
    let half_x = radius * width / 2.0 / unit;
    let half_y = radius * height / 2.0 / unit;
    ([-half_x, half_x], [-half_y, half_y])
}

/// `Frecuencia_Visitas_Web` -> `Frecuencia`.
pub fn short_label(column: &str) -> &str {
    column.split('_').next().unwrap_or(column)
}

/// Angle of axis `index` out of `count`, starting at 12 o'clock and
/// going clockwise.
fn axis_angle(index: usize, count: usize) -> f64 {
    FRAC_PI_2 - TAU * index as f64 / count.max(1) as f64
}

fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.cos(), radius * angle.sin())
}

/// Vertices of a closed polygon through `radii` on evenly spaced axes.
fn polygon(radii: &[f64]) -> Vec<CanvasLine> {
    let count = radii.len();
    (0..count)
        .map(|index| {
            let next = (index + 1) % count;
            let (x1, y1) = polar(radii[index], axis_angle(index, count));
            let (x2, y2) = polar(radii[next], axis_angle(next, count));
            CanvasLine {
                x1,
                y1,
                x2,
                y2,
                color: Color::DarkGray,
            }
        })
        .collect()
}

pub fn render_radar(f: &mut Frame<'_>, area: Rect, title: &str, profile: &ScaledMatrix) {
    if profile.is_empty() {
        render_placeholder(f, area, title, "No clusters available");
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(area);

    let block = chart_block(title);
    let canvas_area = block.inner(chunks[0]);
    let (x_bounds, y_bounds) = aspect_bounds(canvas_area, LABEL_MARGIN);
    let axes = profile.variables.len();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(theme::BACKGROUND)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for level in GRID_LEVELS {
                for line in polygon(&vec![level; axes]) {
                    ctx.draw(&line);
                }
            }
            for index in 0..axes {
                let (x, y) = polar(1.0, axis_angle(index, axes));
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: x,
                    y2: y,
                    color: Color::DarkGray,
                });
            }

            ctx.layer();

            for (cluster_index, row) in profile.values.iter().enumerate() {
                let radii: Vec<f64> = row.iter().map(|value| value.unwrap_or(0.0)).collect();
                let color = series_color(cluster_index);
                for mut line in polygon(&radii) {
                    line.color = color;
                    ctx.draw(&line);
                }
            }

            for (index, variable) in profile.variables.iter().enumerate() {
                let (x, y) = polar(1.12, axis_angle(index, axes));
                let label = short_label(variable);
                // Centre the text horizontally around the axis tip.
                let offset = label.chars().count() as f64 / 2.0
                    * (x_bounds[1] - x_bounds[0])
                    / f64::from(canvas_area.width.max(1));
                let x = if x.abs() < 0.1 {
                    x - offset
                } else if x < 0.0 {
                    2.0f64.mul_add(-offset, x)
                } else {
                    x
                };
                ctx.print(
                    x,
                    y,
                    Span::styled(label.to_string(), Style::default().fg(theme::MUTED)),
                );
            }
        });

    f.render_widget(canvas, chunks[0]);
    f.render_widget(Paragraph::new(legend(profile)), chunks[1]);
}

fn legend(profile: &ScaledMatrix) -> Vec<TextLine<'static>> {
    let mut lines = vec![TextLine::from(
        profile
            .clusters
            .iter()
            .enumerate()
            .flat_map(|(index, cluster)| {
                [
                    Span::styled("● ", Style::default().fg(series_color(index))),
                    Span::raw(format!("Cluster {cluster}  ")),
                ]
            })
            .collect::<Vec<_>>(),
    )];

    if !profile.constant_columns.is_empty() {
        let names: Vec<&str> = profile
            .constant_columns
            .iter()
            .map(|column| short_label(column))
            .collect();
        lines.push(TextLine::from(Span::styled(
            format!("Constant across clusters: {}", names.join(", ")),
            Style::default().fg(theme::MUTED),
        )));
    }

    lines
}
