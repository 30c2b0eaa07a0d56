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
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LIST_PAD: u16 = 2;
/// Columns taken by the selection marker and status icon: `▸ ✓ `.
const PREFIX_WIDTH: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let padded = Rect {
        x: area.x + LIST_PAD,
        y: area.y,
        width: area.width.saturating_sub(LIST_PAD * 2),
        height: area.height,
    };

    if app.todos.is_empty() {
        let line = Line::from(Span::styled(
            "Nothing to do yet. Type a memo and press Enter.",
            Style::default().fg(palette.dim),
        ));
        frame.render_widget(Paragraph::new(line), padded);
        return;
    }

    let visible = (padded.height as usize).min(app.todos.len());
    app.list_scroll = scroll_window(app.selected, app.list_scroll, app.todos.len(), visible);

    let text_width = (padded.width as usize).saturating_sub(PREFIX_WIDTH);
    let editing_id = app.edit.as_ref().map(|s| s.id);
    let mut lines: Vec<Line<'static>> = Vec::with_capacity(visible);

    for (row, item) in app.todos.iter().enumerate().skip(app.list_scroll).take(visible) {
        let is_selected = row == app.selected;
        let is_editing = editing_id == Some(item.id);

        let marker = if is_selected { theme::SELECTION_CHAR } else { " " };
        let (icon, icon_color) = if item.completed {
            (theme::ICON_DONE, palette.done)
        } else {
            (theme::ICON_OPEN, palette.dim)
        };

        let mut text_style = Style::default().fg(palette.fg);
        if item.completed {
            text_style = Style::default().fg(palette.dim).add_modifier(Modifier::CROSSED_OUT);
        }
        if is_editing {
            text_style = Style::default().fg(palette.accent).add_modifier(Modifier::ITALIC);
        }

        let text = fit_text(&item.text, text_width);
        let mut line = Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
            Span::styled(format!("{icon} "), Style::default().fg(icon_color)),
            Span::styled(text, text_style),
        ]);
        if is_selected {
            line = line.style(Style::default().bg(palette.selection_bg));
        }
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), padded);
}

/// First visible row such that `selected` stays inside a window of
/// `visible` rows over `total` items.
fn scroll_window(selected: usize, scroll: usize, total: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    let max_scroll = total - visible;
    let mut scroll = scroll.min(max_scroll);
    if selected < scroll {
        scroll = selected;
    } else if selected >= scroll + visible {
        scroll = selected + 1 - visible;
    }
    scroll
}

/// Truncate to `max_width` display columns, appending `...` when cut.
fn fit_text(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut fitted = String::new();
    let mut width: usize = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width + 3 > max_width {
            break;
        }
        fitted.push(ch);
        width += ch_width;
    }
    fitted.push_str("...");
    fitted
}
