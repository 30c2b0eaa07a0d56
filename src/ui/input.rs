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
use crate::ui::theme::{self, Palette};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Horizontal padding to match header/footer inset.
const INPUT_PAD: u16 = 2;

/// Prompt prefix width: `❯ ` = 2 columns.
const PROMPT_WIDTH: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let padded = Rect {
        x: area.x + INPUT_PAD,
        y: area.y,
        width: area.width.saturating_sub(INPUT_PAD * 2),
        height: area.height,
    };

    let editing = app.edit.is_some();
    let prompt_style = Style::default().fg(palette.accent);

    if app.input.is_empty() {
        let placeholder = if editing {
            "Rewrite the memo, Enter saves, Esc cancels"
        } else {
            "Type a memo..."
        };
        let line = Line::from(vec![
            Span::styled(format!("{} ", theme::PROMPT_CHAR), prompt_style),
            Span::styled(placeholder, Style::default().fg(palette.dim)),
        ]);
        frame.render_widget(Paragraph::new(line), padded);
        frame.set_cursor_position((padded.x + PROMPT_WIDTH, padded.y));
        return;
    }

    // Single logical line; keep the cursor visible by windowing the tail.
    let content_width = padded.width.saturating_sub(PROMPT_WIDTH) as usize;
    if content_width == 0 {
        return;
    }
    let skip = app.input.cursor().saturating_sub(content_width.saturating_sub(1));
    let visible: String = app.input.text().chars().skip(skip).take(content_width).collect();
    let cursor_col = (app.input.cursor() - skip) as u16;

    let line = Line::from(vec![
        Span::styled(format!("{} ", theme::PROMPT_CHAR), prompt_style),
        Span::styled(visible, Style::default().fg(palette.fg)),
    ]);
    frame.render_widget(Paragraph::new(line), padded);

    let cursor_x = padded.x + PROMPT_WIDTH + cursor_col;
    if cursor_x < padded.right() {
        frame.set_cursor_position((cursor_x, padded.y));
    }
}
