// tuido — a terminal to-do list with a live clock and daily advice
// Copyright (C) 2026  The tuido authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod clock;
mod events;
mod input;
mod state;
mod todos;

pub use events::{AppEvent, handle_app_event, handle_terminal_event};
pub use input::InputState;
pub use state::{App, EditSession, ThemeMode, TodoItem};

use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt as _};

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

/// Run until quit. All state transitions happen on this task; the clock and
/// the advice fetch only post onto `app.event_rx`.
pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Enable bracketed paste (ignore error on unsupported terminals)
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableBracketedPaste);

    let clock_token = clock::start(app.event_tx.clone());
    let mut events = EventStream::new();

    loop {
        // Phase 1: wait for at least one event
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                events::handle_terminal_event(app, event);
            }
            Some(event) = app.event_rx.recv() => {
                events::handle_app_event(app, event);
            }
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            // Terminal events first (keeps typing responsive)
            if let Some(Some(Ok(event))) = events.next().now_or_never() {
                events::handle_terminal_event(app, event);
                continue;
            }
            match app.event_rx.try_recv() {
                Ok(event) => events::handle_app_event(app, event),
                Err(_) => break,
            }
        }

        if app.should_quit {
            break;
        }

        // Phase 3: render once
        terminal.draw(|f| crate::ui::render(f, app))?;
    }

    // Teardown: the clock handle is cancelled exactly once, here.
    clock_token.cancel();

    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableBracketedPaste);
    ratatui::restore();

    Ok(())
}
