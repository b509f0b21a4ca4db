pub mod bit_grid;
pub mod layout;
pub mod surface;
pub mod wireframe;
pub mod picker;

use types::{Color, ViewConfig};

pub use bit_grid::BitGridView;
pub use layout::CellLayout;
pub use picker::{CanvasRect, CellPicker};
pub use surface::{PixelCanvas, Surface};

pub struct GridRenderer {
    layout: CellLayout,
    grid_color: Color,
    alive_color: Color,
    dead_color: Color,
}

impl GridRenderer {
    pub fn new(layout: CellLayout, config: &ViewConfig) -> Self {
        Self {
            layout,
            grid_color: config.grid_color,
            alive_color: config.alive_color,
            dead_color: config.dead_color,
        }
    }

    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }

    pub fn draw_grid<S: Surface + ?Sized>(&self, surface: &mut S) {
        wireframe::encode(surface, &self.layout, self.grid_color);
    }

    /// Alive cells first, then dead cells, each pass in its own color.
    pub fn draw_cells<S: Surface + ?Sized>(&self, surface: &mut S, cells: &BitGridView<'_>) {
        debug_assert_eq!(cells.size(), self.layout.grid, "view does not match layout");
        self.fill_pass(surface, cells, true, self.alive_color);
        self.fill_pass(surface, cells, false, self.dead_color);
    }

    /// Grid then cells.
    pub fn render_frame<S: Surface + ?Sized>(&self, surface: &mut S, cells: &BitGridView<'_>) {
        self.draw_grid(surface);
        self.draw_cells(surface, cells);
    }

    fn fill_pass<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        cells: &BitGridView<'_>,
        alive: bool,
        color: Color,
    ) {
        let size = self.layout.cell_size as f64;
        surface.set_fill_color(color);
        for row in 0..self.layout.grid.height {
            for col in 0..self.layout.grid.width {
                if cells.is_alive(row, col) != alive {
                    continue;
                }
                let (x, y) = self.layout.cell_origin(row, col);
                surface.fill_rect(x, y, size, size);
            }
        }
    }
}
