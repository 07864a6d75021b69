use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::terminal::Tui;
use crate::ui;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Run the main application event loop.
///
/// The screen is drawn once up front and again only after an event that can
/// change it; idle poll timeouts do no rendering.
pub fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    tracing::info!(view = app.view.as_str(), "dashboard started");

    let mut needs_redraw = true;
    while app.running {
        if needs_redraw {
            terminal
                .draw(|f| ui::ui(app, f))
                .map_err(|e| eyre!("Terminal draw error: {e}"))?;
            needs_redraw = false;
        }

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            continue;
        }

        needs_redraw = handle_event(app, event::read()?);
    }

    tracing::info!("dashboard closed");
    Ok(())
}

/// Applies one terminal event to `app` and reports whether the frame is stale.
fn handle_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            handle_input(app, key);
            key.kind != KeyEventKind::Release
        }
        Event::Resize(width, height) => {
            tracing::debug!(width, height, "terminal resized");
            true
        }
        Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => false,
    }
}
