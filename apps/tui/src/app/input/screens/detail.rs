use crate::app::input::screens::navigation::handle_view_switch;
use crate::app::state::{App, PAGE_STEP};
use crossterm::event::KeyCode;

/// Fan selector: arrows move, printable keys filter, Esc clears the filter.
pub fn handle_detail_input(app: &mut App, key: KeyCode) {
    if handle_view_switch(app, key) {
        return;
    }

    match key {
        KeyCode::Up => app.move_fan_selection(-1),
        KeyCode::Down => app.move_fan_selection(1),
        KeyCode::PageUp => app.move_fan_selection(-PAGE_STEP),
        KeyCode::PageDown => app.move_fan_selection(PAGE_STEP),
        KeyCode::Home => app.selected_fan_index = 0,
        KeyCode::End => app.select_last_fan(),
        KeyCode::Backspace => app.pop_filter_char(),
        KeyCode::Esc => {
            if app.fan_filter.is_empty() {
                app.status_message = "Ctrl-C quits, Tab changes section".to_string();
            } else {
                app.clear_filter();
            }
        }
        KeyCode::Char(ch) if !ch.is_control() => app.push_filter_char(ch),
        _ => {}
    }
}
