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

//! List and theme intents. Every mutation that touches the list re-writes
//! the full serialized list through the store; theme changes write the
//! theme scalar. Persistence failures are logged, never surfaced.

use super::state::{App, EditSession, TodoItem};

impl App {
    /// Append the pending input as a new item. Whitespace-only input is
    /// silently ignored.
    pub fn add_todo(&mut self) {
        let text = self.input.text().trim().to_owned();
        if text.is_empty() {
            return;
        }
        let id = self.take_next_id();
        self.todos.push(TodoItem { id, text, completed: false });
        self.input.clear();
        self.persist_todos();
    }

    /// Begin renaming `id`: the item's text becomes the input draft and the
    /// pending input is stashed until the session ends.
    pub fn start_edit(&mut self, id: u64) {
        let Some(item) = self.todos.iter().find(|t| t.id == id) else {
            tracing::debug!(id, "start_edit: no such item");
            return;
        };
        let draft = item.text.clone();
        let stashed_input = self.input.text().to_owned();
        self.input.set_text(&draft);
        self.edit = Some(EditSession { id, stashed_input });
    }

    /// Commit the draft. An empty draft is ignored and the session stays
    /// open; leaving without a change takes an explicit cancel.
    pub fn save_edit(&mut self) {
        let Some(session) = self.edit.as_ref() else {
            return;
        };
        let draft = self.input.text().trim().to_owned();
        if draft.is_empty() {
            return;
        }
        let id = session.id;
        if let Some(item) = self.todos.iter_mut().find(|t| t.id == id) {
            item.text = draft;
        }
        self.finish_edit();
        self.persist_todos();
    }

    /// Drop the session without touching the item.
    pub fn cancel_edit(&mut self) {
        self.finish_edit();
    }

    fn finish_edit(&mut self) {
        if let Some(session) = self.edit.take() {
            self.input.set_text(&session.stashed_input);
        }
    }

    pub fn delete(&mut self, id: u64) {
        let Some(pos) = self.todos.iter().position(|t| t.id == id) else {
            tracing::debug!(id, "delete: no such item");
            return;
        };
        self.todos.remove(pos);
        // An edit session on the removed item has nothing left to rename.
        if self.edit.as_ref().is_some_and(|s| s.id == id) {
            self.finish_edit();
        }
        self.clamp_selection();
        self.persist_todos();
    }

    pub fn toggle(&mut self, id: u64) {
        let Some(item) = self.todos.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(id, "toggle: no such item");
            return;
        };
        item.completed = !item.completed;
        self.persist_todos();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.flipped();
        if let Err(err) = self.store.save_theme(self.theme) {
            tracing::warn!("failed to persist theme: {err}");
        }
    }

    // --- selection ---

    #[must_use]
    pub fn selected_id(&self) -> Option<u64> {
        self.todos.get(self.selected).map(|t| t.id)
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.todos.len() {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.todos.len() {
            self.selected = self.todos.len().saturating_sub(1);
        }
    }

    // --- selection-addressed wrappers used by the key handler ---

    pub fn start_edit_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.start_edit(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.delete(id);
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.toggle(id);
        }
    }

    fn persist_todos(&self) {
        if let Err(err) = self.store.save_todos(&self.todos) {
            tracing::warn!("failed to persist todo list: {err}");
        }
    }
}
