mod topology;

pub use topology::{Graph, Metric, NodeIndex, MIN_NODES};

pub type Tour = Vec<NodeIndex>;
