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

use crate::advice::Advice;
use chrono::{DateTime, Local};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

/// Results posted back by the background tasks. Both land on the same
/// single-threaded queue as terminal input, so handlers never interleave.
#[derive(Debug)]
pub enum AppEvent {
    /// Clock tick carrying the current wall-clock time.
    Tick(DateTime<Local>),
    /// The one-shot advice fetch resolved.
    AdviceFetched(Advice),
}

pub fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Tick(now) => app.clock = now,
        AppEvent::AdviceFetched(advice) => {
            tracing::debug!(author = %advice.author, "advice received");
            app.advice = Some(advice);
        }
    }
}

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => app.input.insert_str(&text),
        // Resize is handled automatically by ratatui
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        // Ctrl+C: quit unconditionally
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        (KeyCode::Char('e'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.start_edit_selected();
        }
        (KeyCode::Char('x'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.delete_selected();
        }
        (KeyCode::Char('d'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.toggle_selected();
        }
        (KeyCode::Char('t'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.toggle_theme();
        }
        // Esc: leave the edit session, or quit when there is none
        (KeyCode::Esc, _) => {
            if app.edit.is_some() {
                app.cancel_edit();
            } else {
                app.should_quit = true;
            }
        }
        // Enter: save the draft when editing, otherwise add
        (KeyCode::Enter, _) => {
            if app.edit.is_some() {
                app.save_edit();
            } else {
                app.add_todo();
            }
        }
        (KeyCode::Up, _) => app.select_prev(),
        (KeyCode::Down, _) => app.select_next(),
        (KeyCode::Left, _) => app.input.move_left(),
        (KeyCode::Right, _) => app.input.move_right(),
        (KeyCode::Home, _) => app.input.move_home(),
        (KeyCode::End, _) => app.input.move_end(),
        (KeyCode::Backspace, _) => app.input.delete_char_before(),
        (KeyCode::Delete, _) => app.input.delete_char_after(),
        // Space with an empty buffer toggles the selected item; with text
        // in flight it is just a space.
        (KeyCode::Char(' '), _) if app.input.is_empty() && app.edit.is_none() => {
            app.toggle_selected();
        }
        (KeyCode::Char(c), m)
            if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
        {
            app.input.insert_char(c);
        }
        _ => {}
    }
}
