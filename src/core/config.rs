//! Judge configuration with documented defaults
//!
//! The puzzle fixes where the laser enters the board. Those constants live
//! here instead of inline in the simulation so the ray state machine can be
//! driven against synthetic boards with other geometries.

use crate::core::types::{Coord, Heading};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Where and how the laser enters the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LaserConfig {
    /// Row of the entry cell
    ///
    /// The puzzle convention is row 1: row 0 is the top border wall.
    pub row: usize,

    /// Column of the entry cell
    ///
    /// The puzzle convention is column 0, the left edge of the board.
    pub col: usize,

    /// Initial heading of the ray
    pub heading: Heading,
}

impl Default for LaserConfig {
    fn default() -> Self {
        Self {
            row: 1,
            col: 0,
            heading: Heading::East,
        }
    }
}

impl LaserConfig {
    pub fn entry(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

/// Configuration for a judging run
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JudgeConfig {
    /// Laser entry point
    pub laser: LaserConfig,

    /// Maximum number of cells the ray may evaluate before the run is
    /// declared non-terminating
    ///
    /// `None` means `4 * rows * cols`: one visit per `(cell, heading)` pair.
    /// A walk longer than that must revisit a state and therefore cycles
    /// forever, because clearing a crystal never changes the heading.
    pub step_limit: Option<usize>,
}

impl JudgeConfig {
    /// Step bound for a board of the given size
    pub fn step_limit_for(&self, rows: usize, cols: usize) -> usize {
        self.step_limit
            .unwrap_or_else(|| rows.saturating_mul(cols).saturating_mul(Heading::ALL.len()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
