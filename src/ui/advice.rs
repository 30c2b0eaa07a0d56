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

use crate::app::App;
use crate::ui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const ADVICE_PAD: u16 = 2;

/// Advice of the day. Until the fetch resolves (or forever, if it failed)
/// this shows the loading placeholder.
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let padded = Rect {
        x: area.x + ADVICE_PAD,
        y: area.y,
        width: area.width.saturating_sub(ADVICE_PAD * 2),
        height: area.height,
    };

    let lines = match &app.advice {
        Some(advice) => vec![
            Line::from(Span::styled(
                advice.message.clone(),
                Style::default().fg(palette.fg).add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                format!("- {}", advice.author),
                Style::default().fg(palette.dim),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "Fetching today's advice...",
            Style::default().fg(palette.dim),
        ))],
    };

    frame.render_widget(Paragraph::new(lines), padded);
}
