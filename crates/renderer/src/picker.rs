use glam::DVec2;
use types::CellCoord;

use crate::layout::CellLayout;

/// The canvas's on-screen box, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Maps pointer positions in client (CSS) pixels to grid cells.
pub struct CellPicker {
    layout: CellLayout,
}

impl CellPicker {
    pub fn new(layout: CellLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }

    /// Client point to canvas backing-store pixels. The display box can be
    /// scaled by CSS, so rescale by backing size over displayed size.
    pub fn to_canvas_px(&self, client: DVec2, rect: &CanvasRect) -> DVec2 {
        let backing = DVec2::new(
            self.layout.canvas_width() as f64,
            self.layout.canvas_height() as f64,
        );
        let displayed = DVec2::new(rect.width, rect.height).max(DVec2::ONE);
        let scale = backing / displayed;
        (client - DVec2::new(rect.left, rect.top)) * scale
    }

    /// Cell under the pointer. Clicks on or past the last gridline clamp to
    /// the last row/column, so the result is always in range.
    pub fn pick(&self, client: DVec2, rect: &CanvasRect) -> CellCoord {
        let px = self.to_canvas_px(client, rect);
        let cell = (px / self.layout.pitch() as f64).floor();
        let max = DVec2::new(
            (self.layout.grid.width - 1) as f64,
            (self.layout.grid.height - 1) as f64,
        );
        let cell = cell.clamp(DVec2::ZERO, max);
        CellCoord::new(cell.y as u32, cell.x as u32)
    }
}
