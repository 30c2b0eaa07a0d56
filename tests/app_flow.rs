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

//! End-to-end flows over the public API: key events in, persisted state out.
//! No real terminal, no network -- just the state store and a storage port.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tuido::app::{App, ThemeMode, handle_terminal_event};
use tuido::storage::{JsonFileStore, MemoryStore, Store as _};

fn press(app: &mut App, code: KeyCode) {
    handle_terminal_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn ctrl(app: &mut App, c: char) {
    handle_terminal_event(
        app,
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
    );
}

fn type_and_add(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
}

#[test]
fn a_session_survives_restart_through_the_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().to_path_buf());

    {
        let mut app = App::new(Box::new(store.clone()), None);
        type_and_add(&mut app, "buy milk");
        type_and_add(&mut app, "water plants");
        type_and_add(&mut app, "call mom");

        press(&mut app, KeyCode::Down); // select "water plants"
        ctrl(&mut app, 'd'); // mark done
        ctrl(&mut app, 't'); // switch to dark
    }

    // Fresh process: same directory, new app.
    let mut app = App::new(Box::new(store), None);

    assert_eq!(
        app.todos.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(),
        vec!["buy milk", "water plants", "call mom"]
    );
    assert_eq!(
        app.todos.iter().map(|t| t.completed).collect::<Vec<_>>(),
        vec![false, true, false]
    );
    assert_eq!(app.theme, ThemeMode::Dark);

    // Ids were persisted; new items keep counting upward.
    let max_id = app.todos.iter().map(|t| t.id).max().unwrap();
    type_and_add(&mut app, "new after restart");
    assert_eq!(app.todos[3].id, max_id + 1);
}

#[test]
fn edit_flow_renames_exactly_one_item() {
    let store = MemoryStore::default();
    let mut app = App::new(Box::new(store.clone()), None);
    type_and_add(&mut app, "alpha");
    type_and_add(&mut app, "beta");

    press(&mut app, KeyCode::Down);
    ctrl(&mut app, 'e');
    // Clear the draft ("beta") and retype.
    for _ in 0..4 {
        press(&mut app, KeyCode::Backspace);
    }
    for c in "gamma".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);

    let persisted = store.load().todos;
    assert_eq!(
        persisted.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(),
        vec!["alpha", "gamma"]
    );
}

#[test]
fn cancelled_edit_leaves_no_trace() {
    let store = MemoryStore::default();
    let mut app = App::new(Box::new(store.clone()), None);
    type_and_add(&mut app, "keep me");

    ctrl(&mut app, 'e');
    for c in " (scratch)".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.todos[0].text, "keep me");
    assert_eq!(store.load().todos[0].text, "keep me");
    assert!(!app.should_quit);
}

#[test]
fn delete_in_the_middle_preserves_neighbors() {
    let store = MemoryStore::default();
    let mut app = App::new(Box::new(store.clone()), None);
    for text in ["a", "b", "c", "d"] {
        type_and_add(&mut app, text);
    }

    press(&mut app, KeyCode::Down);
    ctrl(&mut app, 'x'); // delete "b"

    let persisted = store.load().todos;
    assert_eq!(
        persisted.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(),
        vec!["a", "c", "d"]
    );
    // Selection now rests on the item that slid into position 1.
    assert_eq!(app.selected, 1);
    assert_eq!(app.selected_id(), Some(persisted[1].id));
}

#[test]
fn whitespace_only_submissions_never_reach_the_store() {
    let store = MemoryStore::default();
    let mut app = App::new(Box::new(store.clone()), None);

    press(&mut app, KeyCode::Enter);
    type_and_add(&mut app, "   ");

    assert!(app.todos.is_empty());
    assert!(store.load().todos.is_empty());
}
