use crate::app::state::App;
use crossterm::event::KeyCode;
use fan_value_engine::View;

/// Keys that switch sections. Returns `true` when the key was consumed.
pub fn handle_view_switch(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Tab | KeyCode::Right => app.next_view(),
        KeyCode::BackTab | KeyCode::Left => app.prev_view(),
        _ => return false,
    }
    true
}

/// Section switching plus the single-key shortcuts that are only safe
/// outside the fan selector (digits and `q` are filter input there).
pub fn handle_navigation_input(app: &mut App, key: KeyCode) {
    if handle_view_switch(app, key) {
        return;
    }

    match key {
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch as usize - '1' as usize;
            if let Some(view) = View::from_index(index) {
                app.select_view(view);
            }
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        _ => {}
    }
}
