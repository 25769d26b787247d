pub mod genome;
pub mod operators;
pub mod hall_of_fame;
pub mod evolution_engine;
pub mod progress;

pub use genome::Genome;
pub use hall_of_fame::{Champion, HallOfFame};
pub use evolution_engine::{EvolutionEngine, EvolutionResult, GenerationStats, ProgressCallback};
pub use progress::{ChannelProgressCallback, LogProgressCallback, ProgressMessage};
