mod base;
mod colony;

pub use base::{Ant, Environment, Neighbor};
pub use colony::{Colony, Solution, State};
