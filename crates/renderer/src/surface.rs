use types::Color;

/// The subset of the canvas 2D context the renderer draws with.
pub trait Surface {
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Stroke the current path with 1px lines.
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// In-memory RGBA surface for headless rendering.
///
/// Paint is opaque overwrite. Strokes must be axis-aligned; a line at
/// coordinate `x` lands on the pixel column whose right edge is nearest,
/// i.e. `floor(x - 0.5)`.
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    stroke_color: Color,
    fill_color: Color,
    path: Vec<((f64, f64), (f64, f64))>,
    cursor: Option<(f64, f64)>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
            stroke_color: Color::rgb(0, 0, 0),
            fill_color: Color::rgb(0, 0, 0),
            path: Vec::new(),
            cursor: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Row-major RGBA bytes, the layout of canvas `ImageData`.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| [c.r, c.g, c.b, c.a]).collect()
    }

    fn paint(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let (w, h) = (self.width as i64, self.height as i64);
        for y in y0.clamp(0, h)..y1.clamp(0, h) {
            for x in x0.clamp(0, w)..x1.clamp(0, w) {
                self.pixels[(y * w + x) as usize] = color;
            }
        }
    }
}

impl Surface for PixelCanvas {
    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.cursor = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if let Some(from) = self.cursor {
            self.path.push((from, (x, y)));
        }
        self.cursor = Some((x, y));
    }

    fn stroke(&mut self) {
        let color = self.stroke_color;
        for ((ax, ay), (bx, by)) in std::mem::take(&mut self.path) {
            if ax == bx {
                let col = (ax - 0.5).floor() as i64;
                let (y0, y1) = (ay.min(by).floor() as i64, ay.max(by).ceil() as i64);
                self.paint(col, y0, col + 1, y1, color);
            } else if ay == by {
                let row = (ay - 0.5).floor() as i64;
                let (x0, x1) = (ax.min(bx).floor() as i64, ax.max(bx).ceil() as i64);
                self.paint(x0, row, x1, row + 1, color);
            } else {
                debug_assert!(false, "PixelCanvas only strokes axis-aligned segments");
            }
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (x0, y0) = (x.round() as i64, y.round() as i64);
        let (x1, y1) = ((x + width).round() as i64, (y + height).round() as i64);
        let color = self.fill_color;
        self.paint(x0, y0, x1, y1, color);
    }
}
