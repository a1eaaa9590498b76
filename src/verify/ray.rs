//! Laser ray simulation
//!
//! The ray is a tiny state machine: a position and a heading. At each step
//! the current cell acts on the ray (walls stop it, crystals are consumed,
//! mirrors turn it) and then the ray moves one cell along its heading.

use crate::board::{Board, Cell, Mirror};
use crate::core::config::LaserConfig;
use crate::core::types::{Coord, Heading};
use thiserror::Error;

/// Heading after a `/` mirror, indexed by incoming heading (N, E, S, W)
const FORWARD_REFLECTION: [Heading; 4] = [Heading::East, Heading::North, Heading::West, Heading::South];

/// Heading after a `\` mirror, indexed by incoming heading (N, E, S, W)
const BACKWARD_REFLECTION: [Heading; 4] = [Heading::West, Heading::South, Heading::East, Heading::North];

/// Reflection tables keyed by [`Mirror::index`]
static REFLECTIONS: [[Heading; 4]; 2] = [FORWARD_REFLECTION, BACKWARD_REFLECTION];

/// Outgoing heading of a ray hitting `mirror` while travelling `heading`
#[inline]
pub fn reflect(mirror: Mirror, heading: Heading) -> Heading {
    REFLECTIONS[mirror.index()][heading.index()]
}

/// Ways a simulation can fail to end on a wall
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RayFault {
    #[error("entry point {at} is outside the board")]
    EntryOutsideBoard { at: Coord },

    #[error("ray left the board at {from} heading {heading:?}")]
    LeftBoard { from: Coord, heading: Heading },

    #[error("no wall reached within {limit} steps, last at {at}")]
    StepLimit { limit: usize, at: Coord },
}

/// Position and heading of the ray between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayState {
    pub at: Coord,
    pub heading: Heading,
}

impl RayState {
    pub fn new(at: Coord, heading: Heading) -> Self {
        Self { at, heading }
    }

    pub fn from_config(laser: &LaserConfig) -> Self {
        Self::new(laser.entry(), laser.heading)
    }

    /// Let the current cell act on the ray. Returns `false` when the ray stops.
    ///
    /// Crystals are cleared to blank in place.
    pub fn interact(&mut self, cell: &mut Cell) -> bool {
        match *cell {
            Cell::Wall => return false,
            Cell::Crystal => *cell = Cell::Blank,
            Cell::Mirror(mirror) => self.heading = reflect(mirror, self.heading),
            Cell::Blank | Cell::Other(_) => {}
        }
        true
    }
}

/// Record of one completed simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RayTrace {
    /// Every cell evaluated, in order, ending with the halting wall
    pub path: Vec<Coord>,
    /// Crystals consumed, in the order they were hit
    pub cleared: Vec<Coord>,
}

impl RayTrace {
    /// The wall cell the ray stopped on
    pub fn halt(&self) -> Option<Coord> {
        self.path.last().copied()
    }

    pub fn steps(&self) -> usize {
        self.path.len()
    }
}

/// Run the ray over `board` until it stops on a wall.
///
/// Mutates `board`: every crystal the ray crosses becomes blank. At most
/// `step_limit` cells are evaluated before the run is declared endless.
pub fn simulate(
    board: &mut Board,
    laser: &LaserConfig,
    step_limit: usize,
) -> Result<RayTrace, RayFault> {
    let mut state = RayState::from_config(laser);
    let mut trace = RayTrace {
        path: Vec::new(),
        cleared: Vec::new(),
    };

    for _ in 0..step_limit {
        // Moves are bounds-checked below, so only the entry can miss here
        let cell = board
            .get_mut(state.at)
            .ok_or(RayFault::EntryOutsideBoard { at: state.at })?;
        trace.path.push(state.at);

        let was_crystal = *cell == Cell::Crystal;
        if !state.interact(cell) {
            tracing::debug!(at = %state.at, steps = trace.steps(), "ray stopped on wall");
            return Ok(trace);
        }
        if was_crystal {
            trace.cleared.push(state.at);
        }
        tracing::trace!(at = %state.at, heading = ?state.heading, "ray step");

        state.at = state
            .at
            .step(state.heading)
            .filter(|next| board.contains(*next))
            .ok_or(RayFault::LeftBoard {
                from: state.at,
                heading: state.heading,
            })?;
    }

    Err(RayFault::StepLimit {
        limit: step_limit,
        at: state.at,
    })
}
