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
use crate::storage::{LoadedState, Store};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use super::events::AppEvent;
use super::input::InputState;

/// One to-do entry. Items are addressed by `id`, never by list position:
/// deletes shift positions within a frame, ids stay stable for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Lists written before ids existed deserialize as zero; `App::new`
    /// assigns those a fresh id.
    #[serde(default)]
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The literal persisted in the theme entry.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Transient rename state: which item, and the input text that was pending
/// before the edit began (restored when the session ends). The draft itself
/// lives in the shared input buffer. At most one session at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: u64,
    pub(super) stashed_input: String,
}

pub struct App {
    pub todos: Vec<TodoItem>,
    pub input: InputState,
    pub edit: Option<EditSession>,
    pub theme: ThemeMode,
    pub clock: DateTime<Local>,
    pub advice: Option<Advice>,
    /// Index of the highlighted list row (clamped after every mutation).
    pub selected: usize,
    /// First visible list row; the renderer keeps `selected` in the window.
    pub list_scroll: usize,
    pub should_quit: bool,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
    pub event_rx: mpsc::UnboundedReceiver<AppEvent>,
    pub(super) store: Box<dyn Store>,
    pub(super) next_id: u64,
}

impl App {
    pub fn new(store: Box<dyn Store>, theme_override: Option<ThemeMode>) -> Self {
        let LoadedState { mut todos, theme } = store.load();
        let mut next_id = todos.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        for item in &mut todos {
            if item.id == 0 {
                item.id = next_id;
                next_id += 1;
            }
        }

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            todos,
            input: InputState::new(),
            edit: None,
            theme: theme_override.unwrap_or(theme),
            clock: Local::now(),
            advice: None,
            selected: 0,
            list_scroll: 0,
            should_quit: false,
            event_tx,
            event_rx,
            store,
            next_id,
        }
    }

    /// Minimal app over an in-memory store. No TUI, no tasks -- just state.
    #[must_use]
    pub fn test_default() -> Self {
        Self::new(Box::new(crate::storage::MemoryStore::default()), None)
    }

    pub(super) fn take_next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
