//! Mirror Judge - verifier for the laser-and-mirrors placement puzzle

pub mod board;
pub mod core;
pub mod verify;

use std::path::Path;

use crate::board::BoardLoader;
use crate::core::{JudgeConfig, Result};
use crate::verify::{SolutionVerifier, Verdict};

/// Load both boards from disk and judge the solution.
///
/// Either file failing to load is a malformed-input error; the problem file
/// is read first.
pub fn judge_files(problem: &Path, solution: &Path, config: JudgeConfig) -> Result<Verdict> {
    let loader = BoardLoader::new();
    let problem = loader.from_file(problem)?;
    let solution = loader.from_file(solution)?;
    SolutionVerifier::new(config).verify(&problem, solution)
}
