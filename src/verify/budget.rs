//! Mirror budget check

use crate::board::Board;
use crate::core::error::{JudgeError, Result};

/// Stage 3: the solution may place at most `mirror_budget` mirrors.
///
/// Returns the number of mirrors placed.
pub fn check_mirror_budget(solution: &Board) -> Result<usize> {
    let placed = solution.mirror_count();
    let budget = solution.mirror_budget();
    if i64::try_from(placed).map_or(true, |placed| placed > budget) {
        return Err(JudgeError::TooManyMirrors { placed, budget });
    }
    Ok(placed)
}
