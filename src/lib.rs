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

pub mod advice;
pub mod app;
pub mod storage;
pub mod ui;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tuido", about = "A terminal to-do list", version)]
pub struct Cli {
    /// Directory holding the persisted list and theme (defaults to the
    /// platform data directory)
    #[arg(long, short = 'C')]
    pub data_dir: Option<PathBuf>,

    /// Start with this theme instead of the persisted one
    #[arg(long, value_enum)]
    pub theme: Option<app::ThemeMode>,

    /// Write diagnostics to this file (stderr belongs to the TUI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directives, e.g. `tuido=debug`
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
