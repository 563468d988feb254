mod ant;
mod environment;

pub use ant::Ant;
pub use environment::{Environment, Neighbor};
