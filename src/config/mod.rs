pub mod traits;
pub mod evolution;
pub mod display;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use display::DisplayConfig;
pub use traits::ConfigSection;
