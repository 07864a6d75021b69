use crate::ui::theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// A headline number with its caption, as on a dashboard card.
pub fn render_metric(f: &mut Frame<'_>, area: Rect, label: &str, value: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .style(Style::default().bg(theme::SURFACE));

    let text = Text::from(vec![
        TextLine::from(Span::styled(label.to_string(), Style::default().fg(theme::MUTED))),
        TextLine::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ]);

    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}
