pub mod buffers;
pub mod tick;

use buffers::CellBuffers;
use types::{cell_index, wrap_offset, Command, CommandType, GridSize};

pub const DEFAULT_WIDTH: u32 = 64;
pub const DEFAULT_HEIGHT: u32 = 64;

/// Relative (drow, dcol) offsets of the glider stamped by `insert_glider`:
///
/// ```text
/// . # .
/// . . #
/// # # #
/// ```
pub const GLIDER_OFFSETS: [(i32, i32); 5] = [(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)];

/// What the simulation engine must provide to the render and input loop.
///
/// `cells` borrows the engine, so a view can never outlive the next
/// `tick`/`toggle_cell`/`insert_glider` call.
pub trait LifeEngine {
    fn size(&self) -> GridSize;

    /// Advance one generation.
    fn tick(&mut self);

    /// Packed cell buffer for the current generation.
    fn cells(&self) -> &[u8];

    fn toggle_cell(&mut self, row: u32, col: u32);

    fn insert_glider(&mut self, row: u32, col: u32);

    fn apply(&mut self, command: Command) {
        match command.command_type {
            CommandType::ToggleCell => self.toggle_cell(command.row, command.col),
            CommandType::InsertGlider => self.insert_glider(command.row, command.col),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialPattern {
    Empty,
    /// Cell `i` alive when `i % 2 == 0 || i % 7 == 0`.
    Default,
}

impl InitialPattern {
    pub fn from_render_empty(render_empty: bool) -> Self {
        if render_empty {
            InitialPattern::Empty
        } else {
            InitialPattern::Default
        }
    }
}

/// Toroidal B3/S23 universe backed by double-buffered packed cells.
pub struct Universe {
    buffers: CellBuffers,
    generation: u64,
}

impl Universe {
    pub fn new(pattern: InitialPattern) -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT, pattern)
    }

    pub fn with_size(width: u32, height: u32, pattern: InitialPattern) -> Self {
        let size = GridSize::new(width, height);
        let mut buffers = CellBuffers::new(size);
        if pattern == InitialPattern::Default {
            for i in 0..size.cell_count() {
                if i % 2 == 0 || i % 7 == 0 {
                    buffers.set(i, true);
                }
            }
        }
        Self { buffers, generation: 0 }
    }

    pub fn width(&self) -> u32 {
        self.buffers.size().width
    }

    pub fn height(&self) -> u32 {
        self.buffers.size().height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_count(&self) -> usize {
        self.buffers.live_count()
    }

    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        self.buffers.get(self.index(row, col))
    }

    /// Kill every cell, then set the given (row, col) cells alive.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) {
        self.buffers.clear();
        for &(row, col) in cells {
            let idx = self.index(row, col);
            self.buffers.set(idx, true);
        }
    }

    fn index(&self, row: u32, col: u32) -> usize {
        let size = self.buffers.size();
        debug_assert!(size.contains(row, col), "cell ({row},{col}) outside {size:?}");
        cell_index(row, col, size.width)
    }
}

impl LifeEngine for Universe {
    fn size(&self) -> GridSize {
        self.buffers.size()
    }

    fn tick(&mut self) {
        self.step();
    }

    fn cells(&self) -> &[u8] {
        self.buffers.read_bytes()
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        let idx = self.index(row, col);
        self.buffers.toggle(idx);
    }

    fn insert_glider(&mut self, row: u32, col: u32) {
        let size = self.buffers.size();
        for &(dr, dc) in &GLIDER_OFFSETS {
            let r = wrap_offset(row, dr, size.height);
            let c = wrap_offset(col, dc, size.width);
            let idx = self.index(r, c);
            self.buffers.set(idx, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_cells(u: &Universe) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for row in 0..u.height() {
            for col in 0..u.width() {
                if u.is_alive(row, col) {
                    out.push((row, col));
                }
            }
        }
        out
    }

    #[test]
    fn empty_pattern_has_no_live_cells() {
        let u = Universe::new(InitialPattern::Empty);
        assert_eq!((u.width(), u.height()), (64, 64));
        assert_eq!(u.live_count(), 0);
        assert!(u.cells().iter().all(|&b| b == 0));
    }

    #[test]
    fn default_pattern_density() {
        let u = Universe::new(InitialPattern::Default);
        let expected = (0..64 * 64).filter(|i| i % 2 == 0 || i % 7 == 0).count();
        assert_eq!(u.live_count(), expected);
        assert!(u.is_alive(0, 0));
        assert!(!u.is_alive(0, 1));
        assert!(u.is_alive(0, 7));
    }

    #[test]
    fn cells_has_packed_length() {
        let u = Universe::with_size(10, 3, InitialPattern::Default);
        assert_eq!(u.cells().len(), 4);
    }

    #[test]
    fn toggle_twice_restores_cell() {
        let mut u = Universe::new(InitialPattern::Default);
        let before = u.is_alive(5, 9);
        u.toggle_cell(5, 9);
        assert_ne!(u.is_alive(5, 9), before);
        u.toggle_cell(5, 9);
        assert_eq!(u.is_alive(5, 9), before);
    }

    #[test]
    fn glider_stamped_around_anchor() {
        let mut u = Universe::with_size(8, 8, InitialPattern::Empty);
        u.insert_glider(3, 3);
        assert_eq!(alive_cells(&u), vec![(2, 3), (3, 4), (4, 2), (4, 3), (4, 4)]);
    }

    #[test]
    fn glider_wraps_at_corner() {
        let mut u = Universe::with_size(8, 8, InitialPattern::Empty);
        u.insert_glider(0, 0);
        assert_eq!(alive_cells(&u), vec![(0, 1), (1, 0), (1, 1), (1, 7), (7, 0)]);
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut u = Universe::with_size(8, 8, InitialPattern::Empty);
        u.apply(Command::toggle(1, 1));
        assert_eq!(alive_cells(&u), vec![(1, 1)]);
        u.apply(Command::glider(5, 5));
        assert_eq!(u.live_count(), 6);
    }

    #[test]
    fn set_cells_replaces_board() {
        let mut u = Universe::new(InitialPattern::Default);
        u.set_cells(&[(1, 2), (3, 4)]);
        assert_eq!(alive_cells(&u), vec![(1, 2), (3, 4)]);
    }
}
