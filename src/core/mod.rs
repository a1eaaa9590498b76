pub mod config;
pub mod error;
pub mod types;

pub use config::{JudgeConfig, LaserConfig};
pub use error::{JudgeError, Result};
pub use types::{Coord, Heading};
