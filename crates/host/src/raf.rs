use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::animation::{FrameHandle, FrameScheduler};

/// `requestAnimationFrame`-backed scheduler.
///
/// One closure is reused for every frame. The id of the pending request is
/// shared with it, and cleared on cancel, so a cancelled request can never
/// reach `on_frame`.
pub struct RafScheduler {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
    pending: Rc<Cell<Option<i32>>>,
}

impl RafScheduler {
    pub fn new(window: Window, on_frame: impl Fn(FrameHandle) + 'static) -> Self {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let fired = pending.clone();
        let callback = Closure::wrap(Box::new(move |_timestamp: f64| {
            if let Some(id) = fired.take() {
                on_frame(FrameHandle(id));
            }
        }) as Box<dyn FnMut(f64)>);

        Self { window, callback, pending }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, String> {
        let id = self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref::<js_sys::Function>())
            .map_err(|e| format!("requestAnimationFrame failed: {e:?}"))?;
        self.pending.set(Some(id));
        Ok(FrameHandle(id))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending.get() == Some(handle.0) {
            self.pending.set(None);
        }
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            web_sys::console::warn_1(&format!("cancelAnimationFrame({}) failed: {e:?}", handle.0).into());
        }
    }
}
