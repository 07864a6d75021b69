use crate::ui::theme;
use fan_value_engine::data::DataTable;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

/// First visible row so that `selected_index` stays on screen.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

/// Renders `table` verbatim, starting at row `offset`.
pub fn render_data_table(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    table: &DataTable,
    offset: usize,
) {
    let header = Row::new(table.headers().iter().map(|h| Cell::from(h.as_str())))
        .style(theme::key_style());

    // Borders plus header row.
    let max_visible_rows = usize::from(area.height.saturating_sub(3));
    let total_rows = table.len();
    let start = offset.min(total_rows.saturating_sub(max_visible_rows));

    let rows = table
        .rows()
        .iter()
        .skip(start)
        .take(max_visible_rows)
        .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))));

    let widths: Vec<Constraint> = table
        .headers()
        .iter()
        .map(|_| Constraint::Fill(1))
        .collect();

    let shown = if total_rows > max_visible_rows {
        let end = (start + max_visible_rows).min(total_rows);
        format!("{title} ({}-{end} of {total_rows})", start + 1)
    } else {
        title.to_string()
    };

    let widget = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(shown)
                .title_style(theme::title_style())
                .borders(Borders::ALL)
                .border_style(theme::panel_border()),
        )
        .column_spacing(1);

    f.render_widget(widget, area);
}
