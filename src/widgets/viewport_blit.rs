//! Window copying between buffers
//!
//! Content wider or taller than the terminal (the news strip, the page body)
//! is rendered into an offscreen buffer at full size, then the visible window
//! is copied onto the frame.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};

/// Copy the window of `src` starting at `origin` into `area` of `dst`
///
/// Cells that fall outside `src` leave the destination untouched.
pub fn blit(src: &Buffer, origin: Position, dst: &mut Buffer, area: Rect) {
    for dy in 0..area.height {
        for dx in 0..area.width {
            let source = (origin.x.saturating_add(dx), origin.y.saturating_add(dy));
            let Some(cell) = src.cell(source) else {
                continue;
            };
            if let Some(target) = dst.cell_mut((area.x + dx, area.y + dy)) {
                *target = cell.clone();
            }
        }
    }
}
