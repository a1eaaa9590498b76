//! Solution verification pipeline
//!
//! Stages run in a fixed order and the first failure ends the run:
//!
//! 1. dimensions and budget match the problem
//! 2. every cell is a legal edit of the problem cell
//! 3. mirror count is within budget
//! 4. the laser reaches a wall
//! 5. no crystal is left standing

use crate::board::Board;
use crate::core::config::JudgeConfig;
use crate::core::error::{JudgeError, Result};
use crate::verify::budget::check_mirror_budget;
use crate::verify::consistency::ConsistencyValidator;
use crate::verify::ray::{simulate, RayTrace};

/// Outcome of a passing verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Mirrors placed by the solution
    pub mirrors: usize,
    /// Mirror budget shared by problem and solution
    pub budget: i64,
    /// Path taken by the laser
    pub trace: RayTrace,
    /// Solution board after the laser consumed its crystals
    pub board: Board,
}

/// Judges candidate solutions against a problem board
#[derive(Debug, Clone, Default)]
pub struct SolutionVerifier {
    config: JudgeConfig,
}

impl SolutionVerifier {
    pub fn new(config: JudgeConfig) -> Self {
        Self { config }
    }

    /// Verify `solution` against `problem`.
    ///
    /// Takes the solution by value: the simulation clears its crystals in
    /// place, and the consumed board is handed back inside the [`Verdict`].
    /// Clone before calling to verify the same board twice.
    pub fn verify(&self, problem: &Board, mut solution: Board) -> Result<Verdict> {
        ConsistencyValidator::validate_shape(problem, &solution)?;
        ConsistencyValidator::validate_cells(problem, &solution)?;
        tracing::debug!("solution consistent with problem");

        let mirrors = check_mirror_budget(&solution)?;
        tracing::debug!(mirrors, budget = solution.mirror_budget(), "mirror budget ok");

        let step_limit = self.config.step_limit_for(solution.rows(), solution.cols());
        let trace = simulate(&mut solution, &self.config.laser, step_limit)?;

        let remaining = solution.crystal_count();
        if remaining > 0 {
            return Err(JudgeError::CrystalsRemaining { remaining });
        }

        tracing::info!(
            mirrors,
            steps = trace.steps(),
            cleared = trace.cleared.len(),
            "solution accepted"
        );
        Ok(Verdict {
            mirrors,
            budget: solution.mirror_budget(),
            trace,
            board: solution,
        })
    }
}
