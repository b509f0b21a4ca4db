/// Grid dimensions in cells. Fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "grid must be non-empty");
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Length in bytes of the packed one-bit-per-cell buffer.
    pub fn packed_len(&self) -> usize {
        packed_len(self.width, self.height)
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCoord {
    pub row: u32,
    pub col: u32,
}

impl CellCoord {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Convert a (row, col) pair to its row-major linear index.
#[inline]
pub fn cell_index(row: u32, col: u32, width: u32) -> usize {
    row as usize * width as usize + col as usize
}

/// Convert a linear index back to (row, col).
#[inline]
pub fn cell_coords(index: usize, width: u32) -> (u32, u32) {
    let w = width as usize;
    ((index / w) as u32, (index % w) as u32)
}

/// ceil(width * height / 8)
#[inline]
pub fn packed_len(width: u32, height: u32) -> usize {
    (width as usize * height as usize + 7) / 8
}

/// Moore neighborhood: the 8 offsets (drow, dcol) around a cell.
#[inline]
pub fn neighbor_offsets() -> [(i32, i32); 8] {
    [
        (-1, -1), (-1, 0), (-1, 1),
        ( 0, -1),          ( 0, 1),
        ( 1, -1), ( 1, 0), ( 1, 1),
    ]
}

/// Apply a signed offset to a coordinate on a toroidal axis of length `len`.
#[inline]
pub fn wrap_offset(value: u32, delta: i32, len: u32) -> u32 {
    (value as i64 + delta as i64).rem_euclid(len as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_index_origin() {
        assert_eq!(cell_index(0, 0, 64), 0);
    }

    #[test]
    fn cell_index_last() {
        assert_eq!(cell_index(63, 63, 64), 64 * 64 - 1);
    }

    #[test]
    fn cell_roundtrip() {
        let w = 37;
        for &(r, c) in &[(0, 0), (1, 2), (10, 36), (20, 0)] {
            let idx = cell_index(r, c, w);
            assert_eq!(cell_coords(idx, w), (r, c), "roundtrip failed for ({r},{c})");
        }
    }

    #[test]
    fn packed_len_rounds_up() {
        assert_eq!(packed_len(8, 1), 1);
        assert_eq!(packed_len(64, 64), 512);
        assert_eq!(packed_len(3, 3), 2);
        assert_eq!(GridSize::new(5, 5).packed_len(), 4);
    }

    #[test]
    fn neighbor_offsets_symmetry() {
        let offsets = neighbor_offsets();
        assert!(!offsets.contains(&(0, 0)));
        for (dr, dc) in &offsets {
            let neg = (-dr, -dc);
            assert!(offsets.contains(&neg), "offset ({dr},{dc}) has no negation in list");
        }
    }

    #[test]
    fn wrap_offset_edges() {
        assert_eq!(wrap_offset(0, -1, 64), 63);
        assert_eq!(wrap_offset(63, 1, 64), 0);
        assert_eq!(wrap_offset(5, 0, 64), 5);
    }

    #[test]
    fn contains_checks_both_axes() {
        let size = GridSize::new(4, 2);
        assert!(size.contains(1, 3));
        assert!(!size.contains(2, 0));
        assert!(!size.contains(0, 4));
    }
}
