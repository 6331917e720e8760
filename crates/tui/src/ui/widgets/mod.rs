//! Small, stateless stage widgets.

use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Position, Rect},
};

pub mod halo;
pub mod marker;
pub mod stage;

pub use halo::HaloWidget;
pub use marker::{MarkerLayout, MarkerWidget};
pub use stage::StageWidget;

/// Mutable cell access bounded by a clip rect, `None` outside it.
pub(crate) fn clipped_cell(buf: &mut Buffer, clip: Rect, x: u16, y: u16) -> Option<&mut Cell> {
    let position = Position::new(x, y);
    if !clip.contains(position) {
        return None;
    }
    buf.cell_mut(position)
}
