use renderer::{CellLayout, Surface};
use types::Color;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// `Surface` over a browser 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_string());
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_string());
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }
}

/// Size the backing store to fit the board exactly and grab its 2D context.
pub fn init_canvas(canvas: &HtmlCanvasElement, layout: &CellLayout) -> Result<CanvasSurface, String> {
    let width = layout.canvas_width();
    let height = layout.canvas_height();
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| format!("getContext('2d') failed: {e:?}"))?
        .ok_or("canvas has no 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "context is not a CanvasRenderingContext2d")?;

    web_sys::console::log_1(
        &format!(
            "Canvas: {width}x{height} for {}x{} cells of {}px",
            layout.grid.width, layout.grid.height, layout.cell_size
        )
        .into(),
    );

    Ok(CanvasSurface { ctx })
}
