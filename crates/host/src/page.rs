use renderer::{CanvasRect, Surface};
use web_sys::{Element, HtmlCanvasElement, Performance};

use crate::canvas::CanvasSurface;

/// Everything the app touches on the embedding page.
pub trait Page {
    type Surface: Surface;

    fn surface(&mut self) -> &mut Self::Surface;
    fn set_toggle_label(&mut self, label: &str);
    fn set_status(&mut self, text: &str);
    /// Monotonic clock in milliseconds.
    fn now(&self) -> f64;
}

pub struct DomPage {
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    toggle: Element,
    status: Element,
    performance: Performance,
}

impl DomPage {
    pub fn new(
        canvas: HtmlCanvasElement,
        surface: CanvasSurface,
        toggle: Element,
        status: Element,
        performance: Performance,
    ) -> Self {
        Self { canvas, surface, toggle, status, performance }
    }

    pub fn canvas_rect(&self) -> CanvasRect {
        let r = self.canvas.get_bounding_client_rect();
        CanvasRect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        }
    }
}

impl Page for DomPage {
    type Surface = CanvasSurface;

    fn surface(&mut self) -> &mut CanvasSurface {
        &mut self.surface
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.toggle.set_text_content(Some(label));
    }

    fn set_status(&mut self, text: &str) {
        self.status.set_text_content(Some(text));
    }

    fn now(&self) -> f64 {
        self.performance.now()
    }
}
