use crate::ui::theme;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SHORTCUTS: [(&str, &str); 11] = [
    ("Tab / →", "Next section"),
    ("Shift+Tab / ←", "Previous section"),
    ("1-4", "Jump to section"),
    ("↑ / ↓", "Move selection or scroll"),
    ("PgUp / PgDn", "Move by a page"),
    ("Home / End", "First / last fan"),
    ("type", "Filter fan ids (Detalle Individual)"),
    ("Esc", "Clear filter / quit"),
    ("F1", "Toggle this help"),
    ("q", "Quit (outside the fan selector)"),
    ("Ctrl+C", "Quit"),
];

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Fan Value Engine",
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    lines.extend(SHORTCUTS.iter().map(|(key, action)| {
        TextLine::from(vec![
            Span::styled(format!("  {key:<14}"), theme::key_style()),
            Span::raw(format!(" - {action}")),
        ])
    }));

    lines
}

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(70, 70, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(theme::key_style())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(theme::SURFACE));

    let paragraph = Paragraph::new(Text::from(help_lines()))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Span::styled(
        "Press F1 or Esc to close",
        Style::default().fg(theme::MUTED),
    ))
    .alignment(Alignment::Center);
    f.render_widget(hint, hint_area);
}
