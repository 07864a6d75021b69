// Rendering for the dashboard. Each frame is drawn from `App` alone:
// the selected section recomputes its numbers from the loaded tables.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::App;
use fan_value_engine::View;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SIDEBAR_WIDTH: u16 = 34;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(rows[0]);

    render_sidebar(app, f, columns[0]);
    render_content(app, f, columns[1]);
    render_status_line(app, f, rows[1]);

    if app.show_help {
        widgets::popup::render_help_popup(f, area);
    }
}

fn render_sidebar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Fan Value Engine ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .style(Style::default().bg(theme::SURFACE));

    let mut lines = vec![
        TextLine::from(Span::styled(
            "Ir a sección:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];

    lines.extend(View::ALL.iter().map(|view| {
        let selected = *view == app.view;
        let marker = if selected { "(●)" } else { "( )" };
        let style = if selected {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        TextLine::from(vec![
            Span::styled(format!("{} ", view.index() + 1), theme::key_style()),
            Span::styled(format!("{marker} {}", view.label()), style),
        ])
    }));

    let dataset = &app.dataset;
    lines.extend([
        TextLine::from(""),
        TextLine::from(Span::styled("Datos:", Style::default().fg(theme::MUTED))),
        TextLine::from(format!(
            "{} ({} filas)",
            dataset.paths.fans.display(),
            dataset.fans.len()
        )),
        TextLine::from(format!(
            "{} ({} filas)",
            dataset.paths.clusters.display(),
            dataset.clusters.len()
        )),
    ]);

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_content(app: &App, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(8)])
        .split(area.inner(Margin::new(1, 0)));

    f.render_widget(
        Paragraph::new(Span::styled(app.view.title(), theme::title_style())),
        rows[0],
    );

    match app.view {
        View::Overview => screens::overview::render_overview(app, f, rows[1]),
        View::Clusters => screens::clusters::render_clusters(app, f, rows[1]),
        View::FanDetail => screens::detail::render_detail(app, f, rows[1]),
        View::Advanced => screens::advanced::render_advanced(app, f, rows[1]),
    }
}

fn render_status_line(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut spans = Vec::new();

    if app.status_message.is_empty() {
        spans.push(Span::styled(
            format!(
                "Cargado {} ",
                app.dataset.loaded_at.format("%Y-%m-%d %H:%M:%S")
            ),
            Style::default().fg(theme::MUTED),
        ));
    } else {
        spans.push(Span::styled(
            format!("{} ", app.status_message),
            Style::default().fg(theme::WARNING),
        ));
    }

    for (key, action) in [("Tab", "Sección"), ("F1", "Ayuda"), ("q", "Salir")] {
        spans.push(Span::styled("| ", Style::default().fg(theme::MUTED)));
        spans.push(Span::styled(key, theme::key_style()));
        spans.push(Span::styled(
            format!(": {action} "),
            Style::default().fg(theme::MUTED),
        ));
    }

    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::{sample_app, sample_dataset};
    use crate::ui::screens::clusters::DISTRIBUTION_TITLE;
    use crate::ui::widgets::heatmap::UNDEFINED_CELL;
    use fan_value_engine::analytics::segmentation::MISSING_TIER_COLUMNS_WARNING;
    use fan_value_engine::data::{DataPaths, DataTable, Dataset};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(160, 48);
        let mut terminal =
            Terminal::new(backend).unwrap_or_else(|e| panic!("test terminal: {e}"));
        terminal
            .draw(|f| ui(app, f))
            .unwrap_or_else(|e| panic!("draw: {e}"));

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    #[test]
    fn overview_shows_headline_metrics() {
        let screen = draw(&sample_app(View::Overview));

        assert!(screen.contains("Total Fans"));
        assert!(screen.contains("20.0%"));
        assert!(screen.contains("Histograma del Fan Score"));
        assert!(screen.contains("Distribución de Niveles"));
    }

    #[test]
    fn sidebar_marks_the_current_section() {
        let screen = draw(&sample_app(View::Clusters));

        assert!(screen.contains("Ir a sección:"));
        assert!(screen.contains("(●) Segmentación por Clusters"));
        assert!(screen.contains("( ) Resumen General"));
    }

    #[test]
    fn clusters_without_tier_columns_show_the_warning() {
        let base = sample_dataset();
        let clusters = DataTable::new(
            "resumen_clusters.csv",
            vec!["Cluster".into(), "Fan_Score".into()],
            vec![vec!["0".into(), "81.1".into()], vec!["1".into(), "23.9".into()]],
        );
        let dataset = Dataset::from_tables(base.fans, clusters, DataPaths::default());
        let screen = draw(&App::new(dataset, View::Clusters));

        assert!(screen.contains(MISSING_TIER_COLUMNS_WARNING));
        assert!(!screen.contains(DISTRIBUTION_TITLE));
        assert!(screen.contains("Fan Score medio por Cluster"));
    }

    #[test]
    fn clusters_with_tier_columns_draw_the_grouped_chart() {
        let screen = draw(&sample_app(View::Clusters));

        assert!(screen.contains(DISTRIBUTION_TITLE));
        assert!(!screen.contains(MISSING_TIER_COLUMNS_WARNING));
    }

    #[test]
    fn detail_shows_the_selected_fan() {
        let mut app = sample_app(View::FanDetail);
        app.move_fan_selection(2);
        let screen = draw(&app);

        assert!(screen.contains("> F003"));
        assert!(screen.contains("Comportamiento Individual - F003"));
        assert!(screen.contains("61.4"));
        assert!(screen.contains("Medio"));
    }

    #[test]
    fn detail_without_matches_shows_placeholder() {
        let mut app = sample_app(View::FanDetail);
        for ch in "zzz".chars() {
            app.push_filter_char(ch);
        }
        let screen = draw(&app);

        assert!(screen.contains("No fan ids match the filter"));
    }

    #[test]
    fn advanced_marks_constant_columns() {
        // App usage varies by cluster in the sample; flatten it.
        let base = sample_dataset();
        let headers = base.fans.headers().to_vec();
        let app_column = headers
            .iter()
            .position(|h| h == "Seguimiento_App_Oficial")
            .unwrap_or_else(|| panic!("sample has no app column"));
        let rows = base
            .fans
            .rows()
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row[app_column] = "1".to_string();
                row
            })
            .collect();
        let fans = DataTable::new("fan_data.csv", headers, rows);
        let dataset = Dataset::from_tables(fans, base.clusters, DataPaths::default());
        let screen = draw(&App::new(dataset, View::Advanced));

        assert!(screen.contains(UNDEFINED_CELL));
        assert!(screen.contains("Constant across clusters: Seguimiento"));
        assert!(!screen.contains("NaN"));
    }

    #[test]
    fn missing_column_only_breaks_its_own_panel() {
        let base = sample_dataset();
        let fans = DataTable::new(
            "fan_data.csv",
            vec!["Fan_ID".into(), "Fan_Score".into(), "Nivel_Fan".into()],
            vec![vec!["F1".into(), "50".into(), "Premium".into()]],
        );
        let dataset = Dataset::from_tables(fans, base.clusters, DataPaths::default());
        let screen = draw(&App::new(dataset, View::Advanced));

        assert!(screen.contains("error"));
        assert!(screen.contains("Fan Value Engine"));
    }

    #[test]
    fn help_popup_overlays_the_view() {
        let mut app = sample_app(View::Overview);
        app.show_help = true;
        let screen = draw(&app);

        assert!(screen.contains("Help & Keyboard Shortcuts"));
    }
}
