use crate::Color;

/// Page-level configuration. Colors and cell size are fixed at build time;
/// the two flags are read once from the page query at startup.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Cell edge length in canvas pixels, excluding the 1px gridline.
    pub cell_size: u32,
    pub grid_color: Color,
    pub dead_color: Color,
    pub alive_color: Color,
    /// `?empty`: start from an empty board instead of the default pattern.
    pub render_empty: bool,
    /// `?pause`: start paused instead of running.
    pub start_paused: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            cell_size: 5,
            grid_color: Color::rgb(0xCC, 0xCC, 0xCC),
            dead_color: Color::rgb(0xFF, 0xFF, 0xFF),
            alive_color: Color::rgb(0x00, 0x00, 0x00),
            render_empty: false,
            start_paused: false,
        }
    }
}

impl ViewConfig {
    pub const EMPTY_FLAG: &'static str = "empty";
    pub const PAUSE_FLAG: &'static str = "pause";

    /// Build from a query-flag lookup, e.g. `URLSearchParams::has`.
    pub fn from_flags(has_flag: impl Fn(&str) -> bool) -> Self {
        Self {
            render_empty: has_flag(Self::EMPTY_FLAG),
            start_paused: has_flag(Self::PAUSE_FLAG),
            ..Default::default()
        }
    }
}
