//! Puzzle board model and text loader

pub mod cell;
pub mod grid;
pub mod loader;

pub use cell::{Cell, Mirror};
pub use grid::Board;
pub use loader::{BoardLoader, LoadError};
