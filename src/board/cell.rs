//! Cell alphabet of a puzzle board

use serde::{Deserialize, Serialize};

/// Diagonal mirror orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mirror {
    /// `/`
    Forward,
    /// `\`
    Backward,
}

impl Mirror {
    /// Dense index used by the reflection tables
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Content of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    #[default]
    Blank,
    Wall,
    Crystal,
    Mirror(Mirror),
    /// Any symbol outside the alphabet, kept verbatim
    Other(char),
}

impl Cell {
    pub const BLANK: char = ' ';
    pub const WALL: char = '#';
    pub const CRYSTAL: char = '*';
    pub const MIRROR_FORWARD: char = '/';
    pub const MIRROR_BACKWARD: char = '\\';

    pub fn from_symbol(symbol: char) -> Cell {
        match symbol {
            Self::BLANK => Cell::Blank,
            Self::WALL => Cell::Wall,
            Self::CRYSTAL => Cell::Crystal,
            Self::MIRROR_FORWARD => Cell::Mirror(Mirror::Forward),
            Self::MIRROR_BACKWARD => Cell::Mirror(Mirror::Backward),
            other => Cell::Other(other),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Blank => Self::BLANK,
            Cell::Wall => Self::WALL,
            Cell::Crystal => Self::CRYSTAL,
            Cell::Mirror(Mirror::Forward) => Self::MIRROR_FORWARD,
            Cell::Mirror(Mirror::Backward) => Self::MIRROR_BACKWARD,
            Cell::Other(symbol) => symbol,
        }
    }

    pub fn is_mirror(self) -> bool {
        matches!(self, Cell::Mirror(_))
    }

    /// Cells a solution may never change: walls and crystals
    pub fn is_fixed(self) -> bool {
        matches!(self, Cell::Wall | Cell::Crystal)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.symbol())
    }
}
