use crate::layout::CellLayout;
use crate::surface::Surface;
use types::Color;

pub type Segment = ((f64, f64), (f64, f64));

/// Vertical lines first (one per column boundary), then horizontal lines,
/// each spanning the full canvas.
pub fn gridline_segments(layout: &CellLayout) -> Vec<Segment> {
    let right = layout.canvas_width() as f64;
    let bottom = layout.canvas_height() as f64;
    let mut segments = Vec::with_capacity((layout.grid.width + layout.grid.height + 2) as usize);

    for i in 0..=layout.grid.width {
        let x = layout.line_offset(i);
        segments.push(((x, 0.0), (x, bottom)));
    }
    for j in 0..=layout.grid.height {
        let y = layout.line_offset(j);
        segments.push(((0.0, y), (right, y)));
    }
    segments
}

/// Stroke every gridline as a single path.
pub fn encode<S: Surface + ?Sized>(surface: &mut S, layout: &CellLayout, color: Color) {
    surface.begin_path();
    surface.set_stroke_color(color);
    for ((x0, y0), (x1, y1)) in gridline_segments(layout) {
        surface.move_to(x0, y0);
        surface.line_to(x1, y1);
    }
    surface.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::GridSize;

    #[test]
    fn one_line_per_boundary() {
        let layout = CellLayout::new(GridSize::new(4, 3), 5);
        let segs = gridline_segments(&layout);
        assert_eq!(segs.len(), 5 + 4);
        assert_eq!(segs[0], ((1.0, 0.0), (1.0, 19.0)));
        assert_eq!(segs[4], ((25.0, 0.0), (25.0, 19.0)));
        assert_eq!(segs[5], ((0.0, 1.0), (25.0, 1.0)));
        assert_eq!(segs[8], ((0.0, 19.0), (25.0, 19.0)));
    }
}
