//! Headless rendering of a single marker to plain text.
//!
//! Backs the CLI `preview` subcommand: draws one marker into an in-memory
//! buffer at a fixed animation sample and returns the rows as a
//! newline-joined string, with no terminal involved.

use podium_types::Marker;
use podium_util::display_width;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::animation::Motion;
use crate::ui::theme;
use crate::ui::widgets::StageWidget;

/// Renders `marker` into a `width` by `height` text snapshot.
///
/// Highlighted markers are sampled fully emphasized with the ring hugging
/// the group, so the snapshot shows the complete attention treatment.
/// Trailing whitespace is trimmed from every row.
pub fn render_preview(marker: &Marker, theme_id: Option<&str>, width: u16, height: u16) -> String {
    let loaded = theme::load(theme_id);
    let motion = if marker.highlighted {
        Motion::emphasized()
    } else {
        Motion::rest()
    };

    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    let motions = [motion];
    StageWidget::new(std::slice::from_ref(marker), &motions, loaded.theme.as_ref(), "Preview").render(area, &mut buffer);

    let mut rows = Vec::with_capacity(height as usize);
    for y in 0..height {
        let mut row = String::new();
        // Wide glyphs occupy extra cells holding placeholder symbols;
        // skip those so the text keeps its on-screen width.
        let mut skip = 0u16;
        for x in 0..width {
            let Some(cell) = buffer.cell((x, y)) else { continue };
            if skip == 0 {
                row.push_str(cell.symbol());
            }
            skip = skip.max(display_width(cell.symbol())).saturating_sub(1);
        }
        rows.push(row.trim_end().to_string());
    }
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use podium_types::{Anchor, Marker};

    use super::*;

    #[test]
    fn preview_contains_the_name_and_glyph() {
        let marker = Marker::new("Crab", "🦀", Anchor::Center);
        let preview = render_preview(&marker, Some("midnight"), 40, 10);
        assert!(preview.contains("Crab"));
        assert!(preview.contains("🦀"));
    }

    #[test]
    fn highlighted_previews_show_the_ring() {
        let highlighted = Marker::new("Crab", "🦀", Anchor::Center).highlighted(true);
        let preview = render_preview(&highlighted, Some("midnight"), 40, 10);
        assert!(preview.contains("╭"));

        let resting = render_preview(&Marker::new("Crab", "🦀", Anchor::Center), Some("midnight"), 40, 10);
        assert!(!resting.contains("╭"));
    }

    #[test]
    fn row_count_matches_the_requested_height() {
        let marker = Marker::new("Cup", "☕", Anchor::Left);
        let preview = render_preview(&marker, None, 30, 8);
        assert_eq!(preview.lines().count(), 8);
    }

    #[test]
    fn wide_glyphs_do_not_widen_their_row() {
        let marker = Marker::new("Crab", "🦀", Anchor::Left);
        let preview = render_preview(&marker, Some("midnight"), 30, 8);
        for row in preview.lines() {
            assert!(display_width(row) <= 30, "row too wide: {row:?}");
        }
    }
}
