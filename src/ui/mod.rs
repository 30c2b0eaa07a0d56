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

mod advice;
mod header;
mod input;
mod layout;
mod list;
pub mod theme;

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Pure function of current state: one frame of markup. Intents are issued
/// elsewhere (`app::events`); nothing here mutates beyond scroll clamping.
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = theme::palette(app.theme);
    let frame_area = frame.area();

    frame.render_widget(
        Block::new().style(Style::default().bg(palette.bg).fg(palette.fg)),
        frame_area,
    );

    let areas = layout::compute(frame_area);

    if areas.header.height > 0 {
        render_separator(frame, areas.header_top_sep, &palette);
        header::render(frame, areas.header, app, &palette);
        render_separator(frame, areas.header_bot_sep, &palette);
    }

    list::render(frame, areas.body, app, &palette);

    render_separator(frame, areas.input_sep, &palette);
    input::render(frame, areas.input, app, &palette);
    render_separator(frame, areas.input_bottom_sep, &palette);

    if areas.advice.height > 0 {
        advice::render(frame, areas.advice, app, &palette);
    }

    if let Some(footer_area) = areas.footer {
        render_footer(frame, footer_area, app, &palette);
    }
}

const FOOTER_PAD: u16 = 2;
const FOOTER_COLUMN_GAP: u16 = 1;

const HINTS_NORMAL: &str =
    "\u{2191}\u{2193} select  \u{23ce} add  ^E edit  ^X delete  ^D done  ^T theme  ^C quit";
const HINTS_EDITING: &str = "\u{23ce} save  esc cancel";

fn render_footer(frame: &mut Frame, area: Rect, app: &App, palette: &theme::Palette) {
    let padded = Rect {
        x: area.x + FOOTER_PAD,
        y: area.y,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        height: area.height,
    };

    let hints = if app.edit.is_some() { HINTS_EDITING } else { HINTS_NORMAL };
    let (left_area, right_area) = split_footer_columns(padded);

    let left = Line::from(Span::styled(
        fit_footer_text(hints, usize::from(left_area.width)).unwrap_or_default(),
        Style::default().fg(palette.dim),
    ));
    frame.render_widget(Paragraph::new(left), left_area);

    if right_area.width > 0
        && let Some(counter) = fit_footer_text(&progress_text(app), usize::from(right_area.width))
    {
        let line = Line::from(Span::styled(counter, Style::default().fg(palette.dim)));
        frame.render_widget(
            Paragraph::new(line).alignment(ratatui::layout::Alignment::Right),
            right_area,
        );
    }
}

/// `[2/5 done]`, empty for an empty list.
fn progress_text(app: &App) -> String {
    if app.todos.is_empty() {
        return String::new();
    }
    let done = app.todos.iter().filter(|t| t.completed).count();
    format!("[{done}/{} done]", app.todos.len())
}

fn split_footer_columns(area: Rect) -> (Rect, Rect) {
    if area.width == 0 {
        return (area, Rect { width: 0, ..area });
    }

    let gap = if area.width > 2 { FOOTER_COLUMN_GAP } else { 0 };
    let usable_width = area.width.saturating_sub(gap);
    // Hints need most of the row; the counter is short.
    let right_width = usable_width / 4;
    let left_width = usable_width - right_width;

    let left = Rect { width: left_width, ..area };
    let right = Rect {
        x: area.x.saturating_add(left_width).saturating_add(gap),
        width: right_width,
        ..area
    };
    (left, right)
}

fn fit_footer_text(text: &str, max_width: usize) -> Option<String> {
    if max_width == 0 || text.trim().is_empty() {
        return None;
    }
    if UnicodeWidthStr::width(text) <= max_width {
        return Some(text.to_owned());
    }
    Some(text.chars().take(max_width).collect())
}

fn render_separator(frame: &mut Frame, area: Rect, palette: &theme::Palette) {
    if area.height == 0 {
        return;
    }
    let sep_str = theme::SEPARATOR_CHAR.repeat(area.width as usize);
    let line = Line::from(Span::styled(sep_str, Style::default().fg(palette.dim)));
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_footer_columns_preserves_total_width() {
        let area = Rect::new(0, 0, 80, 1);
        let (left, right) = split_footer_columns(area);
        assert_eq!(left.width + right.width + FOOTER_COLUMN_GAP, 80);
        assert!(left.width > right.width);
    }

    #[test]
    fn split_footer_columns_zero_width() {
        let (left, right) = split_footer_columns(Rect::new(0, 0, 0, 1));
        assert_eq!(left.width, 0);
        assert_eq!(right.width, 0);
    }

    #[test]
    fn fit_footer_text_truncates_when_needed() {
        let fitted = fit_footer_text(HINTS_NORMAL, 10).unwrap();
        assert!(UnicodeWidthStr::width(fitted.as_str()) <= 10);
        assert!(fit_footer_text("", 10).is_none());
        assert!(fit_footer_text("x", 0).is_none());
    }

    #[test]
    fn progress_counts_completed_items() {
        let mut app = App::test_default();
        assert_eq!(progress_text(&app), "");

        for text in ["a", "b", "c"] {
            app.input.set_text(text);
            app.add_todo();
        }
        app.toggle(app.todos[0].id);
        assert_eq!(progress_text(&app), "[1/3 done]");
    }
}
