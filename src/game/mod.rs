//! Core board types for Snake
//!
//! This module contains the grid and snake primitives without any I/O or
//! rendering dependencies. A driver owns one `Grid` and one `Snake` at a
//! time and replaces the snake each tick.

pub mod ascii;
pub mod config;
pub mod error;
pub mod fill;
pub mod grid;
pub mod point;
pub mod snake;

// Re-export commonly used types
pub use ascii::{grid_from_ascii, grid_to_ascii};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use fill::{randomly_fill_grid, FillOptions};
pub use grid::{is_empty, Cell, Color, Grid};
pub use point::{Direction, Point, AROUND4};
pub use snake::Snake;
