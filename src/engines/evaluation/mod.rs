pub mod fitness;
pub mod replay;

pub use fitness::{evaluate_fitness, Evaluation};
pub use replay::{replay, Frame};
