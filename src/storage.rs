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

use crate::app::{ThemeMode, TodoItem};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

const TODOS_FILE: &str = "todos.json";
const THEME_FILE: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize todo list: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Everything the store knows at startup. Absent or malformed data never
/// surfaces here: the list falls back to empty, the theme to light.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadedState {
    pub todos: Vec<TodoItem>,
    pub theme: ThemeMode,
}

/// Persistence port. The app holds one of these and re-serializes the full
/// list (or the theme scalar) after every mutation of that category.
pub trait Store {
    fn load(&self) -> LoadedState;
    fn save_todos(&self, todos: &[TodoItem]) -> Result<(), StorageError>;
    fn save_theme(&self, theme: ThemeMode) -> Result<(), StorageError>;
}

/// File-backed store: `todos.json` holds the serialized list, `theme` holds
/// the literal string `light` or `dark`. No versioning, no migration.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn todos_path(&self) -> PathBuf {
        self.dir.join(TODOS_FILE)
    }

    fn theme_path(&self) -> PathBuf {
        self.dir.join(THEME_FILE)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            action: "create",
            path: self.dir.clone(),
            source,
        })?;
        std::fs::write(path, contents).map_err(|source| StorageError::Io {
            action: "write",
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> LoadedState {
        let todos = match std::fs::read_to_string(self.todos_path()) {
            Ok(raw) => parse_todos(&raw).unwrap_or_else(|err| {
                tracing::warn!("malformed {TODOS_FILE}, starting with an empty list: {err}");
                Vec::new()
            }),
            Err(err) => {
                tracing::debug!("no persisted todo list ({err}), starting empty");
                Vec::new()
            }
        };

        let theme = match std::fs::read_to_string(self.theme_path()) {
            Ok(raw) => parse_theme(&raw).unwrap_or_else(|| {
                tracing::warn!("unrecognized theme {raw:?}, defaulting to light");
                ThemeMode::Light
            }),
            Err(_) => ThemeMode::Light,
        };

        LoadedState { todos, theme }
    }

    fn save_todos(&self, todos: &[TodoItem]) -> Result<(), StorageError> {
        let contents = serde_json::to_vec(todos)?;
        self.write(&self.todos_path(), &contents)
    }

    fn save_theme(&self, theme: ThemeMode) -> Result<(), StorageError> {
        self.write(&self.theme_path(), theme.as_str().as_bytes())
    }
}

fn parse_todos(raw: &str) -> Result<Vec<TodoItem>, serde_json::Error> {
    serde_json::from_str(raw)
}

fn parse_theme(raw: &str) -> Option<ThemeMode> {
    match raw.trim() {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

/// In-memory store sharing its entries across clones, so tests can hand one
/// handle to the app and inspect (or reload from) the other.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryEntries>>,
}

#[derive(Debug, Default)]
struct MemoryEntries {
    todos: Option<String>,
    theme: Option<String>,
}

impl Store for MemoryStore {
    fn load(&self) -> LoadedState {
        let inner = self.inner.borrow();
        let todos = inner
            .todos
            .as_deref()
            .and_then(|raw| parse_todos(raw).ok())
            .unwrap_or_default();
        let theme = inner
            .theme
            .as_deref()
            .and_then(parse_theme)
            .unwrap_or_default();
        LoadedState { todos, theme }
    }

    fn save_todos(&self, todos: &[TodoItem]) -> Result<(), StorageError> {
        self.inner.borrow_mut().todos = Some(serde_json::to_string(todos)?);
        Ok(())
    }

    fn save_theme(&self, theme: ThemeMode) -> Result<(), StorageError> {
        self.inner.borrow_mut().theme = Some(theme.as_str().to_owned());
        Ok(())
    }
}
