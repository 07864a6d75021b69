use crate::app::App;
use crate::ui::widgets::charts::render_error;
use crate::ui::widgets::heatmap::render_heatmap;
use crate::ui::widgets::radar::render_radar;
use fan_value_engine::analytics::digital_profile;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

const RADAR_TITLE: &str = "Radar Normalizado de Comportamiento Digital";
const HEATMAP_TITLE: &str = "Heatmap de Comportamiento Digital";

pub fn render_advanced(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Both panels read the same rescaled matrix.
    match digital_profile(&app.dataset.fans) {
        Ok(profile) => {
            render_radar(f, columns[0], RADAR_TITLE, &profile);
            render_heatmap(f, columns[1], HEATMAP_TITLE, &profile);
        }
        Err(err) => {
            render_error(f, columns[0], RADAR_TITLE, &err);
            render_error(f, columns[1], HEATMAP_TITLE, &err);
        }
    }
}
