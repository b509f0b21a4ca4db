use types::GridSize;

const WORD_BITS: usize = 32;

// The byte view handed to renderers reinterprets the u32 words in memory
// order, which only matches the LSB-first byte layout on little-endian
// targets (wasm32 and every host we test on).
const _: () = assert!(cfg!(target_endian = "little"), "packed cell view requires little-endian words");

/// Double-buffered packed cell storage: one bit per cell, row-major,
/// LSB-first. Ticks read one buffer and write the other, then swap.
pub struct CellBuffers {
    cells_a: Vec<u32>,
    cells_b: Vec<u32>,
    size: GridSize,
    current_read_is_a: bool,
}

impl CellBuffers {
    pub fn new(size: GridSize) -> Self {
        let words = (size.cell_count() + WORD_BITS - 1) / WORD_BITS;
        Self {
            cells_a: vec![0; words],
            cells_b: vec![0; words],
            size,
            current_read_is_a: true,
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn current_read_is_a(&self) -> bool {
        self.current_read_is_a
    }

    /// The current generation as packed bytes, exactly `size.packed_len()` long.
    pub fn read_bytes(&self) -> &[u8] {
        let bytes: &[u8] = bytemuck::cast_slice(self.read_words());
        &bytes[..self.size.packed_len()]
    }

    pub fn read_words(&self) -> &[u32] {
        if self.current_read_is_a {
            &self.cells_a
        } else {
            &self.cells_b
        }
    }

    fn read_words_mut(&mut self) -> &mut [u32] {
        if self.current_read_is_a {
            &mut self.cells_a
        } else {
            &mut self.cells_b
        }
    }

    /// (read, write) pair for one generation step.
    pub fn split(&mut self) -> (&[u32], &mut [u32]) {
        if self.current_read_is_a {
            (&self.cells_a[..], &mut self.cells_b[..])
        } else {
            (&self.cells_b[..], &mut self.cells_a[..])
        }
    }

    pub fn swap(&mut self) {
        self.current_read_is_a = !self.current_read_is_a;
    }

    pub fn get(&self, index: usize) -> bool {
        get_bit(self.read_words(), index)
    }

    pub fn set(&mut self, index: usize, alive: bool) {
        debug_assert!(index < self.size.cell_count(), "cell index {index} out of range");
        set_bit(self.read_words_mut(), index, alive);
    }

    pub fn toggle(&mut self, index: usize) {
        debug_assert!(index < self.size.cell_count(), "cell index {index} out of range");
        self.read_words_mut()[index / WORD_BITS] ^= 1 << (index % WORD_BITS);
    }

    pub fn clear(&mut self) {
        self.read_words_mut().fill(0);
    }

    /// Bits past the last cell are always zero, so a plain popcount is exact.
    pub fn live_count(&self) -> usize {
        self.read_words().iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[inline]
pub fn get_bit(words: &[u32], index: usize) -> bool {
    words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
}

#[inline]
pub fn set_bit(words: &mut [u32], index: usize, alive: bool) {
    let mask = 1 << (index % WORD_BITS);
    if alive {
        words[index / WORD_BITS] |= mask;
    } else {
        words[index / WORD_BITS] &= !mask;
    }
}
