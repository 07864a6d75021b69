use crate::ui::theme::{self, teal_scale, text_on_scale};
use crate::ui::widgets::charts::{chart_block, render_placeholder};
use crate::ui::widgets::radar::short_label;
use fan_value_engine::analytics::ScaledMatrix;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

/// Shown for cells whose column has no spread across clusters.
pub const UNDEFINED_CELL: &str = "–";
const LEGEND_STEPS: u16 = 10;

fn value_cell(value: Option<f64>) -> Cell<'static> {
    match value {
        Some(value) => Cell::from(format!("{value:.2}")).style(
            Style::default()
                .bg(teal_scale(value))
                .fg(text_on_scale(value))
                .add_modifier(Modifier::BOLD),
        ),
        None => Cell::from(UNDEFINED_CELL).style(Style::default().fg(theme::MUTED)),
    }
}

fn legend_line() -> TextLine<'static> {
    let mut spans = vec![Span::raw("0 ")];
    spans.extend((0..=LEGEND_STEPS).map(|step| {
        let value = f64::from(step) / f64::from(LEGEND_STEPS);
        Span::styled("  ", Style::default().bg(teal_scale(value)))
    }));
    spans.push(Span::raw(" 1"));
    TextLine::from(spans)
}

/// Cluster-by-variable grid coloured on the teal scale.
pub fn render_heatmap(f: &mut Frame<'_>, area: Rect, title: &str, profile: &ScaledMatrix) {
    if profile.is_empty() {
        render_placeholder(f, area, title, "No clusters available");
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(area);

    let mut header = vec![Cell::from("Cluster")];
    header.extend(
        profile
            .variables
            .iter()
            .map(|variable| Cell::from(short_label(variable))),
    );

    let rows = profile.clusters.iter().zip(&profile.values).map(|(cluster, values)| {
        let mut cells = vec![Cell::from(cluster.clone())];
        cells.extend(values.iter().map(|value| value_cell(*value)));
        Row::new(cells)
    });

    let mut widths = vec![Constraint::Length(8)];
    widths.extend(profile.variables.iter().map(|_| Constraint::Fill(1)));

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(theme::key_style()))
        .block(chart_block(title))
        .column_spacing(1);

    f.render_widget(table, chunks[0]);
    f.render_widget(
        Paragraph::new(legend_line()).alignment(Alignment::Center),
        chunks[1],
    );
}
