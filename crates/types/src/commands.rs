//! Mutation requests sent from the pointer handlers to the engine.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    ToggleCell,
    InsertGlider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub command_type: CommandType,
    pub row: u32,
    pub col: u32,
}

impl Command {
    pub fn new(command_type: CommandType, row: u32, col: u32) -> Self {
        Self { command_type, row, col }
    }

    pub fn toggle(row: u32, col: u32) -> Self {
        Self::new(CommandType::ToggleCell, row, col)
    }

    pub fn glider(row: u32, col: u32) -> Self {
        Self::new(CommandType::InsertGlider, row, col)
    }

    /// Modifier-click stamps a glider, a plain click toggles.
    pub fn for_click(row: u32, col: u32, ctrl_key: bool) -> Self {
        if ctrl_key {
            Self::glider(row, col)
        } else {
            Self::toggle(row, col)
        }
    }
}
