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

use crate::app::ThemeMode;
use ratatui::style::Color;

// UI chrome
pub const PROMPT_CHAR: &str = "❯";
pub const SEPARATOR_CHAR: &str = "─";

// Item status icons
pub const ICON_DONE: &str = "✓";
pub const ICON_OPEN: &str = "○";
pub const SELECTION_CHAR: &str = "▸";

/// Resolved colors for one theme mode. Every widget draws exclusively from
/// this so a theme toggle restyles the whole frame at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub accent: Color,
    pub done: Color,
    pub selection_bg: Color,
}

const LIGHT: Palette = Palette {
    bg: Color::Rgb(250, 249, 245),
    fg: Color::Rgb(40, 40, 40),
    dim: Color::Rgb(140, 135, 125),
    accent: Color::Rgb(191, 82, 0),
    done: Color::Rgb(60, 130, 60),
    selection_bg: Color::Rgb(228, 224, 214),
};

const DARK: Palette = Palette {
    bg: Color::Rgb(24, 26, 31),
    fg: Color::Rgb(220, 220, 215),
    dim: Color::DarkGray,
    accent: Color::Rgb(244, 118, 0),
    done: Color::Green,
    selection_bg: Color::Rgb(40, 44, 52),
};

#[must_use]
pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => LIGHT,
        ThemeMode::Dark => DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_map_to_distinct_palettes() {
        assert_ne!(palette(ThemeMode::Light), palette(ThemeMode::Dark));
        assert_eq!(palette(ThemeMode::Light), LIGHT);
        assert_eq!(palette(ThemeMode::Dark), DARK);
    }
}
