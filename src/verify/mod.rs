//! Judging a candidate solution against its problem board

pub mod budget;
pub mod consistency;
pub mod ray;
pub mod verifier;

pub use consistency::{ConsistencyValidator, Inconsistency};
pub use ray::{reflect, simulate, RayFault, RayState, RayTrace};
pub use verifier::{SolutionVerifier, Verdict};
