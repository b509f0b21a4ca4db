use glam::DVec2;
use renderer::{CanvasRect, CellLayout, CellPicker};
use sim_core::LifeEngine;
use types::Command;

/// A click on the board, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerClick {
    pub client: DVec2,
    pub rect: CanvasRect,
    pub ctrl_key: bool,
}

/// Turns board clicks into engine mutations.
pub struct InteractionController {
    picker: CellPicker,
}

impl InteractionController {
    pub fn new(layout: CellLayout) -> Self {
        Self { picker: CellPicker::new(layout) }
    }

    /// Toggle the clicked cell, or stamp a glider there when ctrl is held.
    /// The caller redraws afterwards.
    pub fn handle_click<E: LifeEngine + ?Sized>(&self, engine: &mut E, click: &PointerClick) -> Command {
        let cell = self.picker.pick(click.client, &click.rect);
        let command = Command::for_click(cell.row, cell.col, click.ctrl_key);
        engine.apply(command);
        command
    }
}
