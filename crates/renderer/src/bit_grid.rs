use types::{cell_index, GridSize};

/// Read-only view over a packed one-bit-per-cell buffer.
///
/// Borrowed from the engine for a single redraw; it cannot outlive the
/// next mutating engine call.
#[derive(Clone, Copy)]
pub struct BitGridView<'a> {
    cells: &'a [u8],
    size: GridSize,
}

impl<'a> BitGridView<'a> {
    pub fn new(cells: &'a [u8], size: GridSize) -> Self {
        debug_assert!(
            cells.len() >= size.packed_len(),
            "packed buffer holds {} bytes, {size:?} needs {}",
            cells.len(),
            size.packed_len(),
        );
        Self { cells, size }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        debug_assert!(self.size.contains(row, col), "cell ({row},{col}) outside {:?}", self.size);
        let idx = cell_index(row, col, self.size.width);
        let mask = 1u8 << (idx % 8);
        self.cells[idx / 8] & mask != 0
    }

    pub fn live_count(&self) -> usize {
        (0..self.size.height)
            .flat_map(|row| (0..self.size.width).map(move |col| (row, col)))
            .filter(|&(row, col)| self.is_alive(row, col))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_row() {
        let buf = [0b0000_0101u8];
        let view = BitGridView::new(&buf, GridSize::new(8, 1));
        for col in 0..8 {
            assert_eq!(view.is_alive(0, col), col == 0 || col == 2, "col {col}");
        }
    }

    #[test]
    fn matches_manual_bit_math() {
        let size = GridSize::new(5, 3);
        let buf = [0b1010_0110u8, 0b0100_0001];
        let view = BitGridView::new(&buf, size);
        for row in 0..3 {
            for col in 0..5 {
                let i = (row * 5 + col) as usize;
                let expected = (buf[i / 8] >> (i % 8)) & 1 == 1;
                assert_eq!(view.is_alive(row, col), expected, "({row},{col})");
            }
        }
        assert_eq!(view.live_count(), 6);
    }

    #[test]
    fn rows_cross_byte_boundaries() {
        // width 3: cell (2,2) is index 8, bit 0 of byte 1
        let buf = [0u8, 0b0000_0001];
        let view = BitGridView::new(&buf, GridSize::new(3, 3));
        assert!(view.is_alive(2, 2));
        assert_eq!(view.live_count(), 1);
    }
}
