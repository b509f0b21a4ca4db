use types::GridSize;

/// Pixel geometry of the board: each cell is `cell_size` pixels wide with a
/// 1px gridline on every side, shared between neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    pub grid: GridSize,
    pub cell_size: u32,
}

impl CellLayout {
    pub fn new(grid: GridSize, cell_size: u32) -> Self {
        debug_assert!(cell_size > 0);
        Self { grid, cell_size }
    }

    /// Distance between consecutive gridlines.
    #[inline]
    pub fn pitch(&self) -> u32 {
        self.cell_size + 1
    }

    pub fn canvas_width(&self) -> u32 {
        self.pitch() * self.grid.width + 1
    }

    pub fn canvas_height(&self) -> u32 {
        self.pitch() * self.grid.height + 1
    }

    /// Coordinate of the i-th gridline along either axis.
    #[inline]
    pub fn line_offset(&self, i: u32) -> f64 {
        (i * self.pitch() + 1) as f64
    }

    /// Top-left corner (x, y) of the cell rectangle.
    #[inline]
    pub fn cell_origin(&self, row: u32, col: u32) -> (f64, f64) {
        (self.line_offset(col), self.line_offset(row))
    }
}
