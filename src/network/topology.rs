use hashbrown::HashMap;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::Deserialize;
use crate::utils::error::{Error, Result};


pub const MIN_NODES: usize = 3;

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    fn new(ix: usize) -> Self {
        NodeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Euclidean,
    /// TSPLIB pseudo-Euclidean distance, rounded up to an integer
    Att,
}

impl Metric {
    pub fn measure(self, a: [f64; 2], b: [f64; 2]) -> f64 {
        let (dx, dy) = (a[0] - b[0], a[1] - b[1]);
        match self {
            Metric::Euclidean => dx.hypot(dy),
            Metric::Att => {
                let r = ((dx * dx + dy * dy) / 10.0).sqrt();
                let t = r.round();
                if t < r { t + 1.0 } else { t }
            }
        }
    }
}

/// Complete undirected graph over labelled nodes.
///
/// Distances live in a dense row-major matrix indexed by `NodeIndex`; the
/// diagonal holds zero and is never handed out.
#[derive(Clone, Debug)]
pub struct Graph {
    labels: Vec<usize>,
    index: HashMap<usize, NodeIndex>,
    distances: Vec<f64>,
}

impl Graph {
    fn with_nodes(nodes: &[usize]) -> Result<Self> {
        if nodes.len() < MIN_NODES {
            return Err(Error::TooFewNodes(nodes.len(), MIN_NODES));
        }
        let mut index = HashMap::with_capacity(nodes.len());
        for (ix, &label) in nodes.iter().enumerate() {
            if index.insert(label, NodeIndex::new(ix)).is_some() {
                return Err(Error::DuplicateNode(label));
            }
        }
        let n = nodes.len();
        Ok(Graph { labels: nodes.to_vec(), index, distances: vec![0.0; n * n] })
    }
    /// Builds the graph from `(u, v, distance)` triples over labels.
    ///
    /// Self-loops and zero-weight edges are dropped first; what remains must
    /// cover every pair of distinct nodes with one positive distance.
    pub fn from_edges(nodes: &[usize], edges: Vec<(usize, usize, f64)>) -> Result<Self> {
        let mut graph = Graph::with_nodes(nodes)?;
        for (end0, end1, distance) in edges {
            if end0 == end1 || distance == 0.0 {
                continue;
            }
            let u = graph.lookup(end0)?;
            let v = graph.lookup(end1)?;
            if !(distance.is_finite() && distance > 0.0) {
                return Err(Error::InvalidDistance(end0, end1, distance));
            }
            let known = graph.cell(u, v);
            if known != 0.0 && known != distance {
                return Err(Error::AsymmetricDistance(end0, end1, known, distance));
            }
            graph.set(u, v, distance);
        }
        graph.check_complete()?;
        Ok(graph)
    }
    pub fn from_coordinates(points: &[(usize, [f64; 2])], metric: Metric) -> Result<Self> {
        let nodes: Vec<usize> = points.iter().map(|&(label, _)| label).collect();
        let edges = points.iter()
            .tuple_combinations()
            .map(|(a, b)| (a.0, b.0, metric.measure(a.1, b.1)))
            .collect();
        Graph::from_edges(&nodes, edges)
    }
    fn lookup(&self, label: usize) -> Result<NodeIndex> {
        self.index_of(label).ok_or(Error::UnknownNode(label))
    }
    fn cell(&self, u: NodeIndex, v: NodeIndex) -> f64 {
        self.distances[u.index() * self.node_count() + v.index()]
    }
    fn set(&mut self, u: NodeIndex, v: NodeIndex, distance: f64) {
        let n = self.node_count();
        self.distances[u.index() * n + v.index()] = distance;
        self.distances[v.index() * n + u.index()] = distance;
    }
    fn check_complete(&self) -> Result<()> {
        let missing = self.nodes()
            .tuple_combinations()
            .find(|&(u, v)| self.cell(u, v) == 0.0);
        match missing {
            Some((u, v)) => Err(Error::MissingEdge(self.label(u), self.label(v))),
            None => Ok(()),
        }
    }
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }
    pub fn nodes(&self) -> impl Iterator<Item=NodeIndex> + Clone {
        (0..self.node_count()).map(NodeIndex::new)
    }
    pub fn label(&self, node: NodeIndex) -> usize {
        debug_assert!(node.index() < self.labels.len());
        self.labels[node.index()]
    }
    pub fn index_of(&self, label: usize) -> Option<NodeIndex> {
        self.index.get(&label).copied()
    }
    /// `None` for a self pair or an index outside the graph.
    pub fn distance(&self, u: NodeIndex, v: NodeIndex) -> Option<f64> {
        let n = self.node_count();
        if u == v || u.index() >= n || v.index() >= n {
            return None;
        }
        Some(self.cell(u, v))
    }
    pub fn tour_length(&self, tour: &[NodeIndex]) -> f64 {
        tour.windows(2)
            .map(|ends| self.cell(ends[0], ends[1]))
            .sum()
    }
    pub fn labels_of(&self, tour: &[NodeIndex]) -> Vec<usize> {
        tour.iter().map(|&node| self.label(node)).collect()
    }
    /// Greedy closed tour from `start`; ties go to the lower index.
    pub fn nearest_neighbor_tour(&self, start: NodeIndex) -> Vec<NodeIndex> {
        let n = self.node_count();
        debug_assert!(start.index() < n);
        let mut visited = vec![false; n];
        let mut tour = Vec::with_capacity(n + 1);
        visited[start.index()] = true;
        tour.push(start);
        let mut current = start;
        while tour.len() < n {
            let next = self.nodes()
                .filter(|v| !visited[v.index()])
                .min_by_key(|&v| OrderedFloat(self.cell(current, v)));
            match next {
                Some(next) => {
                    visited[next.index()] = true;
                    tour.push(next);
                    current = next;
                }
                None => break,
            }
        }
        tour.push(start);
        tour
    }
}
