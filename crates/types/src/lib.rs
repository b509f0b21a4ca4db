pub mod grid;
pub mod commands;
pub mod color;
pub mod params;

pub use grid::*;
pub use commands::*;
pub use color::*;
pub use params::*;
