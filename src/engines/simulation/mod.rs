pub mod simulator;
pub mod viewport;

pub use simulator::{AgentSimulator, RunState};
pub use viewport::Screen;
