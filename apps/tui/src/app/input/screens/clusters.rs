use crate::app::input::screens::navigation::handle_navigation_input;
use crate::app::state::{App, PAGE_STEP};
use crossterm::event::KeyCode;

pub fn handle_clusters_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up => app.scroll_cluster_table(-1),
        KeyCode::Down => app.scroll_cluster_table(1),
        KeyCode::PageUp => app.scroll_cluster_table(-PAGE_STEP),
        KeyCode::PageDown => app.scroll_cluster_table(PAGE_STEP),
        KeyCode::Home => app.cluster_table_offset = 0,
        _ => handle_navigation_input(app, key),
    }
}
