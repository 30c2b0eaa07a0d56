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

use crate::app::{App, ThemeMode};
use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const HEADER_PAD: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let padded = Rect {
        x: area.x + HEADER_PAD,
        y: area.y,
        width: area.width.saturating_sub(HEADER_PAD * 2),
        height: area.height,
    };

    let sep = Span::styled("  \u{2502}  ", Style::default().fg(palette.dim));

    let theme_label = match app.theme {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
    };

    let spans = vec![
        Span::styled("\u{2611} ", Style::default().fg(palette.accent)),
        Span::styled(
            "tuido",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled(app.clock.format("%H:%M:%S").to_string(), Style::default().fg(palette.fg)),
        sep,
        Span::styled("Theme: ", Style::default().fg(palette.dim)),
        Span::styled(theme_label, Style::default().fg(palette.fg)),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), padded);
}
