//! Structural consistency: the solution must be the problem board with
//! mirrors placed on some blank cells and nothing else changed

use crate::board::{Board, Cell};
use crate::core::types::Coord;
use thiserror::Error;

/// First disagreement found between problem and solution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Inconsistency {
    #[error("dimensions differ: problem is {expected:?}, solution is {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("mirror budget differs: problem has {expected}, solution has {found}")]
    BudgetMismatch { expected: i64, found: i64 },

    #[error("cell {at}: problem has {expected}, solution has {found}")]
    CellMismatch {
        at: Coord,
        expected: Cell,
        found: Cell,
    },
}

pub struct ConsistencyValidator;

impl ConsistencyValidator {
    /// Stage 1: rows, cols and budget must match exactly
    pub fn validate_shape(problem: &Board, solution: &Board) -> Result<(), Inconsistency> {
        let expected = (problem.rows(), problem.cols());
        let found = (solution.rows(), solution.cols());
        if expected != found {
            return Err(Inconsistency::DimensionMismatch { expected, found });
        }
        if problem.mirror_budget() != solution.mirror_budget() {
            return Err(Inconsistency::BudgetMismatch {
                expected: problem.mirror_budget(),
                found: solution.mirror_budget(),
            });
        }
        Ok(())
    }

    /// Stage 2: walls and crystals stay put, blanks may only gain a mirror.
    ///
    /// Assumes [`validate_shape`](Self::validate_shape) already passed.
    pub fn validate_cells(problem: &Board, solution: &Board) -> Result<(), Inconsistency> {
        for ((at, expected), (_, found)) in problem.iter().zip(solution.iter()) {
            if !Self::is_allowed(expected, found) {
                return Err(Inconsistency::CellMismatch { at, expected, found });
            }
        }
        Ok(())
    }

    /// Whether `found` is a legal solution cell over problem cell `expected`
    pub fn is_allowed(expected: Cell, found: Cell) -> bool {
        match expected {
            Cell::Wall | Cell::Crystal => found == expected,
            Cell::Blank => matches!(found, Cell::Blank | Cell::Mirror(_)),
            // Problems only constrain walls, crystals and blanks
            Cell::Mirror(_) | Cell::Other(_) => true,
        }
    }
}
