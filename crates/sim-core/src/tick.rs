use crate::buffers::{get_bit, set_bit};
use crate::Universe;
use types::{cell_index, neighbor_offsets, wrap_offset};

impl Universe {
    /// One B3/S23 generation with toroidal wraparound.
    pub(crate) fn step(&mut self) {
        let size = self.buffers.size();
        let (read, write) = self.buffers.split();

        for row in 0..size.height {
            for col in 0..size.width {
                let idx = cell_index(row, col, size.width);
                let mut neighbors = 0u8;
                for (dr, dc) in neighbor_offsets() {
                    let r = wrap_offset(row, dr, size.height);
                    let c = wrap_offset(col, dc, size.width);
                    neighbors += get_bit(read, cell_index(r, c, size.width)) as u8;
                }

                let alive = get_bit(read, idx);
                let next = matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
                set_bit(write, idx, next);
            }
        }

        self.buffers.swap();
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::{InitialPattern, LifeEngine, Universe};

    #[test]
    fn blinker_oscillates() {
        let mut u = Universe::with_size(5, 5, InitialPattern::Empty);
        u.set_cells(&[(2, 1), (2, 2), (2, 3)]);

        u.tick();
        assert!(u.is_alive(1, 2) && u.is_alive(2, 2) && u.is_alive(3, 2));
        assert!(!u.is_alive(2, 1) && !u.is_alive(2, 3));
        assert_eq!(u.live_count(), 3);

        u.tick();
        assert!(u.is_alive(2, 1) && u.is_alive(2, 2) && u.is_alive(2, 3));
        assert_eq!(u.generation(), 2);
    }

    #[test]
    fn block_is_still_life() {
        let mut u = Universe::with_size(6, 6, InitialPattern::Empty);
        let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
        u.set_cells(&block);
        let before = u.cells().to_vec();
        u.tick();
        assert_eq!(u.cells(), &before[..]);
    }

    #[test]
    fn lonely_cell_dies() {
        let mut u = Universe::with_size(4, 4, InitialPattern::Empty);
        u.set_cells(&[(1, 1)]);
        u.tick();
        assert_eq!(u.live_count(), 0);
    }

    #[test]
    fn neighbors_wrap_across_edges() {
        // Vertical blinker split across the top/bottom edge.
        let mut u = Universe::with_size(5, 5, InitialPattern::Empty);
        u.set_cells(&[(4, 2), (0, 2), (1, 2)]);
        u.tick();
        assert!(u.is_alive(0, 1) && u.is_alive(0, 2) && u.is_alive(0, 3));
        assert_eq!(u.live_count(), 3);
    }

    #[test]
    fn glider_returns_to_shape_after_four_generations() {
        let mut u = Universe::with_size(8, 8, InitialPattern::Empty);
        u.insert_glider(3, 3);
        for _ in 0..4 {
            u.tick();
        }
        // Same shape shifted one cell down and one to the right.
        let mut expected = Universe::with_size(8, 8, InitialPattern::Empty);
        expected.insert_glider(4, 4);
        assert_eq!(u.cells(), expected.cells());
    }
}
