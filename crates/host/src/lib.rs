pub mod animation;
pub mod bridge;
pub mod canvas;
pub mod interaction;
pub mod page;
pub mod raf;
pub mod timing;

#[cfg(test)]
mod testing;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use renderer::{BitGridView, CellLayout, GridRenderer};
use sim_core::{InitialPattern, LifeEngine, Universe};
use types::{Command, ViewConfig};

use animation::{AnimationController, FrameHandle, FrameScheduler};
use interaction::{InteractionController, PointerClick};
use page::{DomPage, Page};
use raf::RafScheduler;
use timing::FrameRateTracker;

/// Toggle label while the loop is running (press to pause).
pub const PAUSE_LABEL: &str = "⏸";
/// Toggle label while paused (press to play).
pub const PLAY_LABEL: &str = "▶";

pub struct App<E: LifeEngine, S: FrameScheduler, P: Page> {
    pub engine: E,
    pub renderer: GridRenderer,
    pub animation: AnimationController<S>,
    pub interaction: InteractionController,
    pub fps: FrameRateTracker,
    pub page: P,
}

impl<E: LifeEngine, S: FrameScheduler, P: Page> App<E, S, P> {
    pub fn new(engine: E, config: &ViewConfig, scheduler: S, page: P) -> Self {
        let layout = CellLayout::new(engine.size(), config.cell_size);
        let fps = FrameRateTracker::new(page.now());
        Self {
            engine,
            renderer: GridRenderer::new(layout, config),
            animation: AnimationController::new(scheduler),
            interaction: InteractionController::new(layout),
            fps,
            page,
        }
    }

    /// First paint, then enter the configured animation state.
    pub fn start(&mut self, start_paused: bool) -> Result<(), String> {
        self.redraw();
        if start_paused {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Draw grid and cells from a freshly borrowed cell buffer.
    pub fn redraw(&mut self) {
        let cells = BitGridView::new(self.engine.cells(), self.engine.size());
        self.renderer.render_frame(self.page.surface(), &cells);
    }

    pub fn is_paused(&self) -> bool {
        self.animation.is_paused()
    }

    pub fn play(&mut self) -> Result<(), String> {
        self.animation.play()?;
        self.page.set_toggle_label(PAUSE_LABEL);
        Ok(())
    }

    pub fn pause(&mut self) {
        self.animation.pause();
        self.page.set_toggle_label(PLAY_LABEL);
    }

    pub fn toggle_play_pause(&mut self) -> Result<(), String> {
        if self.is_paused() {
            self.play()
        } else {
            self.pause();
            Ok(())
        }
    }

    /// Body of one scheduled frame. Returns whether the frame ran; a handle
    /// that is no longer pending is ignored.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Result<bool, String> {
        if !self.animation.begin_frame(handle) {
            return Ok(false);
        }

        let stats = self.fps.record_frame(self.page.now());
        self.page.set_status(&stats.to_string());

        self.engine.tick();
        self.redraw();

        if let Err(e) = self.animation.end_frame() {
            self.page.set_toggle_label(PLAY_LABEL);
            return Err(e);
        }
        Ok(true)
    }

    /// Apply a board click and repaint immediately, running or not.
    pub fn handle_click(&mut self, click: &PointerClick) -> Command {
        let command = self.interaction.handle_click(&mut self.engine, click);
        self.redraw();
        command
    }
}

#[wasm_bindgen]
pub fn init() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let query = web_sys::UrlSearchParams::new_with_str(&window.location().search()?)?;
    let config = ViewConfig::from_flags(|flag| query.has(flag));

    let canvas = document
        .get_element_by_id("game-of-life-canvas")
        .ok_or("no canvas element with id 'game-of-life-canvas'")?;
    let canvas: web_sys::HtmlCanvasElement = canvas
        .dyn_into()
        .map_err(|_| "element is not a canvas")?;
    let toggle = document
        .get_element_by_id("play-pause")
        .ok_or("no element with id 'play-pause'")?;
    let status = document
        .get_element_by_id("fps")
        .ok_or("no element with id 'fps'")?;
    let performance = window.performance().ok_or("no performance timer")?;

    let universe = Universe::new(InitialPattern::from_render_empty(config.render_empty));
    let layout = CellLayout::new(universe.size(), config.cell_size);
    let surface = canvas::init_canvas(&canvas, &layout).map_err(|e| JsValue::from_str(&e))?;

    let page = DomPage::new(canvas.clone(), surface, toggle.clone(), status, performance);
    let scheduler = RafScheduler::new(window, bridge::run_frame);
    let app = App::new(universe, &config, scheduler, page);

    bridge::APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    let on_click = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        bridge::on_canvas_click(e.client_x() as f64, e.client_y() as f64, e.ctrl_key());
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
    canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let on_toggle = Closure::wrap(Box::new(move || {
        bridge::on_toggle_click();
    }) as Box<dyn FnMut()>);
    toggle.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
    on_toggle.forget();

    bridge::APP.with(|cell| match cell.borrow_mut().as_mut() {
        Some(app) => app.start(config.start_paused).map_err(|e| JsValue::from_str(&e)),
        None => Ok(()),
    })?;

    web_sys::console::log_1(
        &format!(
            "Game of Life initialized: {}x{}, empty={}, paused={}",
            layout.grid.width, layout.grid.height, config.render_empty, config.start_paused
        )
        .into(),
    );
    Ok(())
}
