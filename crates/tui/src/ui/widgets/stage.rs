//! Stage compositor: bordered chrome plus every marker in scene order.

use podium_types::Marker;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::MarkerWidget;
use crate::animation::Motion;
use crate::ui::theme::{Theme, theme_helpers};

/// Renders a scene onto one surface. Markers draw in scene order, so a
/// later marker paints over an earlier one sharing its anchor.
pub struct StageWidget<'a> {
    markers: &'a [Marker],
    motions: &'a [Motion],
    theme: &'a dyn Theme,
    title: &'a str,
}

impl<'a> StageWidget<'a> {
    pub fn new(markers: &'a [Marker], motions: &'a [Motion], theme: &'a dyn Theme, title: &'a str) -> Self {
        Self {
            markers,
            motions,
            theme,
            title,
        }
    }
}

impl Widget for StageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let block = theme_helpers::block(self.theme, Some(self.title), false);
        let inner = block.inner(area);
        block.render(area, buf);
        for (marker, motion) in self.markers.iter().zip(self.motions) {
            MarkerWidget::new(marker, *motion, self.theme).render(inner, buf);
        }
    }
}
