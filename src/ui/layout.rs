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

use ratatui::layout::{Constraint, Layout, Rect};

/// Advice panel rows: message line + author line.
const ADVICE_HEIGHT: u16 = 2;

pub struct AppLayout {
    pub header_top_sep: Rect,
    pub header: Rect,
    pub header_bot_sep: Rect,
    /// The todo list.
    pub body: Rect,
    pub input_sep: Rect,
    pub input: Rect,
    pub input_bottom_sep: Rect,
    /// Zero-height on very small terminals.
    pub advice: Rect,
    pub footer: Option<Rect>,
}

pub fn compute(area: Rect) -> AppLayout {
    let zero = Rect::new(area.x, area.y, area.width, 0);

    if area.height < 10 {
        // Ultra-compact: list + input only
        let [body, input_sep, input] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        AppLayout {
            header_top_sep: zero,
            header: zero,
            header_bot_sep: zero,
            body,
            input_sep,
            input,
            input_bottom_sep: Rect::new(area.x, input.y + input.height, area.width, 0),
            advice: zero,
            footer: None,
        }
    } else {
        let [
            header_top_sep,
            header,
            header_bot_sep,
            body,
            input_sep,
            input,
            input_bottom_sep,
            advice,
            footer,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(ADVICE_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);
        AppLayout {
            header_top_sep,
            header,
            header_bot_sep,
            body,
            input_sep,
            input,
            input_bottom_sep,
            advice,
            footer: Some(footer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn area(w: u16, h: u16) -> Rect {
        Rect::new(0, 0, w, h)
    }

    /// Sum all layout area heights (handles optional footer).
    fn total_height(layout: &AppLayout) -> u16 {
        layout.header_top_sep.height
            + layout.header.height
            + layout.header_bot_sep.height
            + layout.body.height
            + layout.input_sep.height
            + layout.input.height
            + layout.input_bottom_sep.height
            + layout.advice.height
            + layout.footer.map_or(0, |f| f.height)
    }

    /// Collect all non-zero-height areas in top-to-bottom order.
    fn visible_areas(layout: &AppLayout) -> Vec<Rect> {
        let mut areas = vec![
            layout.header_top_sep,
            layout.header,
            layout.header_bot_sep,
            layout.body,
            layout.input_sep,
            layout.input,
            layout.input_bottom_sep,
            layout.advice,
        ];
        if let Some(f) = layout.footer {
            areas.push(f);
        }
        areas.into_iter().filter(|r| r.height > 0).collect()
    }

    /// Assert no vertical overlap and areas are in ascending y-order.
    fn assert_no_overlap_and_ordered(layout: &AppLayout) {
        let areas = visible_areas(layout);
        for i in 1..areas.len() {
            let prev = areas[i - 1];
            let curr = areas[i];
            assert!(
                prev.y + prev.height <= curr.y,
                "Area {i}-1 ({prev:?}) overlaps or is not before area {i} ({curr:?})"
            );
        }
    }

    #[test]
    fn normal_terminal_has_all_areas() {
        let layout = compute(area(80, 24));
        assert_eq!(layout.header.height, 1);
        assert!(layout.body.height >= 3);
        assert_eq!(layout.input.height, 1);
        assert_eq!(layout.advice.height, 2);
        assert_eq!(layout.footer.map(|f| f.height), Some(1));
    }

    #[test]
    fn normal_all_areas_sum_to_total() {
        let layout = compute(area(80, 24));
        assert_eq!(total_height(&layout), 24);
    }

    #[test]
    fn ultra_compact_drops_header_advice_and_footer() {
        let layout = compute(area(80, 6));
        assert_eq!(layout.header.height, 0);
        assert_eq!(layout.advice.height, 0);
        assert!(layout.footer.is_none());
        assert_eq!(layout.input.height, 1);
        assert_eq!(total_height(&layout), 6);
    }

    #[test]
    fn compact_threshold_is_ten_rows() {
        assert!(compute(area(80, 10)).footer.is_some());
        assert!(compute(area(80, 9)).footer.is_none());
    }

    #[test]
    fn footer_sits_at_the_bottom() {
        let layout = compute(area(80, 24));
        let footer = layout.footer.unwrap();
        assert_eq!(footer.y + footer.height, 24);
    }

    #[test]
    fn offset_area_respects_origin() {
        let layout = compute(Rect::new(10, 5, 80, 24));
        assert_eq!(layout.header.x, 10);
        assert_eq!(layout.body.width, 80);
        assert_eq!(layout.header_top_sep.y, 5);
        assert_eq!(total_height(&layout), 24);
    }

    #[test]
    fn degenerate_sizes_do_not_panic() {
        for h in [0, 1, 2, 5] {
            let layout = compute(area(80, h));
            assert_eq!(total_height(&layout), h);
        }
        let layout = compute(area(0, 24));
        assert_eq!(layout.body.width, 0);
    }

    #[test]
    fn parametric_sizes_invariants() {
        for h in [1, 2, 3, 5, 9, 10, 15, 24, 50, 100] {
            for w in [1, 10, 80, 200] {
                let layout = compute(Rect::new(0, 0, w, h));
                assert_eq!(total_height(&layout), h, "Height mismatch for {w}x{h}");
                assert_no_overlap_and_ordered(&layout);
                for a in visible_areas(&layout) {
                    assert_eq!(a.width, w, "Width mismatch in area {a:?} for {w}x{h}");
                }
            }
        }
    }
}
