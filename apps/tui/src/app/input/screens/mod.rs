use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use fan_value_engine::View;

mod clusters;
mod detail;
mod help;
mod navigation;

pub fn dispatch_input(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    if help::handle_help_toggle(app, key.code) {
        return;
    }

    match app.view {
        View::FanDetail => detail::handle_detail_input(app, key.code),
        View::Clusters => clusters::handle_clusters_input(app, key.code),
        View::Overview | View::Advanced => navigation::handle_navigation_input(app, key.code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::sample_app;

    fn press(app: &mut App, code: KeyCode) {
        dispatch_input(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn digits_select_views_outside_the_selector() {
        let mut app = sample_app(View::Overview);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.view, View::Advanced);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.view, View::FanDetail);
    }

    #[test]
    fn digits_filter_inside_the_selector() {
        let mut app = sample_app(View::FanDetail);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.view, View::FanDetail);
        assert_eq!(app.fan_filter, "3");
        assert_eq!(app.selected_fan_id(), Some("F003"));

        press(&mut app, KeyCode::Esc);
        assert!(app.fan_filter.is_empty());
        assert!(app.running);
    }

    #[test]
    fn tab_leaves_the_selector() {
        let mut app = sample_app(View::FanDetail);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, View::Advanced);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view, View::FanDetail);
    }

    #[test]
    fn help_popup_swallows_keys() {
        let mut app = sample_app(View::Overview);

        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.view, View::Overview);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = sample_app(View::FanDetail);

        dispatch_input(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn q_quits_outside_the_selector() {
        let mut app = sample_app(View::Clusters);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.cluster_table_offset, 1);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
