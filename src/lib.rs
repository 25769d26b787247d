pub mod config;
pub mod course;
pub mod engines;
pub mod error;
pub mod types;

pub use course::Course;
pub use error::{Result, RunnerError};
pub use types::{Action, Position, Tile};
