mod grid;
mod teleport;

pub use grid::Course;
pub use teleport::TeleportMap;
