//! Native stand-ins for the browser scheduler and page.

use std::cell::Cell;
use std::rc::Rc;

use renderer::PixelCanvas;

use crate::animation::{FrameHandle, FrameScheduler};
use crate::page::Page;

/// Queues frame requests until the test fires them.
#[derive(Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
    pub fail_next: bool,
}

impl ManualScheduler {
    pub fn pending(&self) -> Vec<FrameHandle> {
        self.pending.clone()
    }

    pub fn cancelled(&self) -> Vec<FrameHandle> {
        self.cancelled.clone()
    }

    /// Deliver the oldest pending frame, as the display refresh would.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, String> {
        if self.fail_next {
            self.fail_next = false;
            return Err("scheduler unavailable".to_string());
        }
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|&h| h != handle);
        self.cancelled.push(handle);
    }
}

pub struct TestPage {
    pub canvas: PixelCanvas,
    pub toggle_label: String,
    pub status: String,
    pub clock: Rc<Cell<f64>>,
}

impl TestPage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: PixelCanvas::new(width, height),
            toggle_label: String::new(),
            status: String::new(),
            clock: Rc::new(Cell::new(0.0)),
        }
    }
}

impl Page for TestPage {
    type Surface = PixelCanvas;

    fn surface(&mut self) -> &mut PixelCanvas {
        &mut self.canvas
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.toggle_label = label.to_string();
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn now(&self) -> f64 {
        self.clock.get()
    }
}
