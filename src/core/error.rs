use thiserror::Error;

use crate::board::loader::LoadError;
use crate::core::config::ConfigError;
use crate::verify::consistency::Inconsistency;
use crate::verify::ray::RayFault;

/// Every way a judging run can fail. Each variant maps to one process exit
/// code; the first failing stage wins and nothing is aggregated.
#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("malformed input file: {0}")]
    MalformedInput(#[from] LoadError),

    #[error("malformed config file: {0}")]
    Config(#[from] ConfigError),

    #[error("solution inconsistent with problem: {0}")]
    InconsistentData(#[from] Inconsistency),

    #[error("too many mirrors: {placed} placed, budget is {budget}")]
    TooManyMirrors { placed: usize, budget: i64 },

    #[error("not all crystals lit: {remaining} remaining")]
    CrystalsRemaining { remaining: usize },

    #[error("laser never reaches a wall: {0}")]
    NoTerminatingWall(#[from] RayFault),
}

impl JudgeError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            JudgeError::MalformedInput(_) | JudgeError::Config(_) => 1,
            JudgeError::InconsistentData(_) => 2,
            JudgeError::TooManyMirrors { .. } => 3,
            JudgeError::CrystalsRemaining { .. } => 4,
            JudgeError::NoTerminatingWall(_) => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, JudgeError>;
