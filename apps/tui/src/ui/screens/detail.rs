use crate::app::App;
use crate::ui::theme;
use crate::ui::widgets::charts::{render_error, render_placeholder, render_value_bars};
use crate::ui::widgets::metrics::render_metric;
use crate::ui::widgets::tables::scroll_offset;
use fan_value_engine::analytics::fan_profile;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

const SELECTOR_TITLE: &str = "Selecciona un Fan ID";
const BEHAVIOUR_TITLE: &str = "Comportamiento Individual";
const SELECTOR_WIDTH: u16 = 28;

pub fn render_detail(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SELECTOR_WIDTH), Constraint::Min(20)])
        .split(area);

    render_selector(app, f, columns[0]);

    let Some(fan_id) = app.selected_fan_id() else {
        let message = if app.dataset.fans.is_empty() {
            "No fans available"
        } else {
            "No fan ids match the filter"
        };
        render_placeholder(f, columns[1], BEHAVIOUR_TITLE, message);
        return;
    };

    let profile = match fan_profile(&app.dataset.fans, fan_id) {
        Ok(profile) => profile,
        Err(err) => {
            render_error(f, columns[1], BEHAVIOUR_TITLE, &err);
            return;
        }
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(columns[1]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_metric(f, cards[0], "Fan Score", &profile.score_label());
    render_metric(f, cards[1], "Nivel", &profile.tier);

    let values: Vec<(String, f64)> = profile
        .behaviour
        .iter()
        .map(|(column, value)| ((*column).to_string(), *value))
        .collect();
    render_value_bars(
        f,
        rows[1],
        &format!("{BEHAVIOUR_TITLE} - {}", profile.id),
        &values,
        Direction::Horizontal,
    );
}

fn render_selector(app: &App, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let filter = Paragraph::new(TextLine::from(vec![
        Span::styled("/ ", theme::key_style()),
        Span::raw(app.fan_filter.as_str()),
        Span::styled("_", Style::default().fg(theme::ACCENT)),
    ]))
    .block(
        Block::default()
            .title(SELECTOR_TITLE)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_style(theme::panel_border()),
    );
    f.render_widget(filter, rows[0]);

    let choices = match app.fan_choices() {
        Ok(choices) => choices,
        Err(err) => {
            render_error(f, rows[1], "Fan IDs", err);
            return;
        }
    };

    let max_visible_rows = usize::from(rows[1].height.saturating_sub(2));
    let offset = scroll_offset(choices.len(), max_visible_rows, app.selected_fan_index);

    let items: Vec<ListItem<'_>> = choices
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, id)| {
            let style = if index == app.selected_fan_index {
                Style::default()
                    .fg(theme::BACKGROUND)
                    .bg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let prefix = if index == app.selected_fan_index { ">" } else { " " };
            ListItem::new(format!("{prefix} {id}")).style(style)
        })
        .collect();

    let title = format!("Fan IDs ({})", choices.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(theme::panel_border()),
    );
    f.render_widget(list, rows[1]);
}
