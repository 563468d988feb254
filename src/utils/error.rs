use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("graph needs at least {1} nodes, got {0}")]
    TooFewNodes(usize, usize),
    #[error("node {0} declared twice")]
    DuplicateNode(usize),
    #[error("node {0} is not declared")]
    UnknownNode(usize),
    #[error("edge ({0}, {1}) has invalid distance {2}")]
    InvalidDistance(usize, usize, f64),
    #[error("edge ({0}, {1}) given both {2} and {3}")]
    AsymmetricDistance(usize, usize, f64, f64),
    #[error("edge ({0}, {1}) is missing, graph is not complete")]
    MissingEdge(usize, usize),
    #[error("parameter {0} {1}")]
    InvalidParameter(&'static str, String),
    #[error("no edge between node #{0} and node #{1}")]
    UndefinedEdge(usize, usize),
    #[error("selection weights from node #{0} sum to zero")]
    ZeroDenominator(usize),
    #[error("ant has not been placed on the graph")]
    UnplacedAnt,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
