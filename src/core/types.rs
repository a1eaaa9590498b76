//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Grid coordinate, row-major: `row` counts down from the top line of the
/// board text, `col` counts right from the first character of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one cell in `heading`.
    ///
    /// Returns `None` when the move would leave the first quadrant (row or
    /// column below zero). Upper bounds are the board's business.
    pub fn step(&self, heading: Heading) -> Option<Coord> {
        let (dr, dc) = heading.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Coord::new(row, col))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Cardinal heading of the laser ray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    North,
    #[default]
    East,
    South,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Dense index used by the reflection tables
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `(row, col)` delta for one step
    pub fn offset(self) -> (isize, isize) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }
}
