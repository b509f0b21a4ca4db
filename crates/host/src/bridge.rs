use glam::DVec2;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::animation::FrameHandle;
use crate::interaction::PointerClick;
use crate::page::DomPage;
use crate::raf::RafScheduler;
use crate::App;
use sim_core::Universe;

pub type WebApp = App<Universe, RafScheduler, DomPage>;

thread_local! {
    pub static APP: RefCell<Option<WebApp>> = RefCell::new(None);
}

/// Run `f` against the installed app, if any.
fn with_app<R>(f: impl FnOnce(&mut WebApp) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Animation frame callback target.
pub(crate) fn run_frame(handle: FrameHandle) {
    with_app(|app| {
        if let Err(e) = app.on_frame(handle) {
            web_sys::console::warn_1(&format!("Frame loop stopped: {e}").into());
        }
    });
}

#[wasm_bindgen]
pub fn on_canvas_click(client_x: f64, client_y: f64, ctrl_key: bool) {
    with_app(|app| {
        let click = PointerClick {
            client: DVec2::new(client_x, client_y),
            rect: app.page.canvas_rect(),
            ctrl_key,
        };
        app.handle_click(&click);
    });
}

#[wasm_bindgen]
pub fn on_toggle_click() {
    with_app(|app| {
        if let Err(e) = app.toggle_play_pause() {
            web_sys::console::warn_1(&format!("Could not start animation: {e}").into());
        }
    });
}

#[wasm_bindgen]
pub fn play() -> Result<(), JsValue> {
    with_app(|app| app.play())
        .unwrap_or(Ok(()))
        .map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen]
pub fn pause() {
    with_app(|app| app.pause());
}

#[wasm_bindgen]
pub fn is_paused() -> bool {
    with_app(|app| app.is_paused()).unwrap_or(true)
}
