use crate::network::{Graph, NodeIndex};
use crate::utils::error::{Error, Result};


/// The nearest-neighbour bootstrap tour always starts here.
const NN_START: usize = 0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub node: NodeIndex,
    pub distance: f64,
    pub pheromone: f64,
}

/// Problem graph plus one pheromone level per undirected edge.
///
/// Pheromone is kept in a dense matrix mirroring the graph's distances, with
/// both `(u, v)` and `(v, u)` holding the same value.
#[derive(Clone, Debug)]
pub struct Environment {
    graph: Graph,
    pheromone: Vec<f64>,
    rho: f64,
    ant_population: usize,
    nn_distance: f64,
}

impl Environment {
    pub fn new(graph: Graph, rho: f64, ant_population: usize) -> Result<Self> {
        if !(rho > 0.0 && rho < 1.0) {
            return Err(Error::InvalidParameter("rho", format!("must lie in (0, 1), got {}", rho)));
        }
        if ant_population == 0 {
            return Err(Error::InvalidParameter("ant_population", String::from("must be positive")));
        }
        let n = graph.node_count();
        let mut environment = Environment {
            graph,
            pheromone: vec![0.0; n * n],
            rho,
            ant_population,
            nn_distance: 0.0,
        };
        environment.initialize_pheromone();
        Ok(environment)
    }
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
    pub fn rho(&self) -> f64 {
        self.rho
    }
    /// Length of the nearest-neighbour tour that scaled the initial pheromone.
    pub fn nn_distance(&self) -> f64 {
        self.nn_distance
    }
    pub fn distance(&self, u: NodeIndex, v: NodeIndex) -> Result<f64> {
        self.graph.distance(u, v)
            .ok_or(Error::UndefinedEdge(u.index(), v.index()))
    }
    pub fn pheromone(&self, u: NodeIndex, v: NodeIndex) -> Result<f64> {
        self.distance(u, v)?;
        Ok(self.level(u, v))
    }
    /// Every other node with its distance and pheromone level from `u`.
    pub fn reachable_neighbors(&self, u: NodeIndex)
        -> impl Iterator<Item=Neighbor> + '_ {
        self.graph.nodes().filter_map(move |v| {
            let distance = self.graph.distance(u, v)?;
            Some(Neighbor { node: v, distance, pheromone: self.level(u, v) })
        })
    }
    /// Sets every edge to `m / nnDistance`, where `m` is the ant population
    /// and `nnDistance` the length of a greedy tour from the first node.
    pub fn initialize_pheromone(&mut self) {
        let tour = self.graph.nearest_neighbor_tour(NN_START.into());
        self.nn_distance = self.graph.tour_length(&tour);
        debug_assert!(self.nn_distance > 0.0);
        let tau0 = self.ant_population as f64 / self.nn_distance;
        let n = self.node_count();
        for u in 0..n {
            for v in 0..n {
                self.pheromone[u * n + v] = if u == v { 0.0 } else { tau0 };
            }
        }
    }
    /// Evaporates every edge, then deposits `1 / distance` along each tour.
    ///
    /// Tours with a non-positive distance belong to ants that never ran and
    /// deposit nothing.
    pub fn update_pheromone<'a, I>(&mut self, tours: I)
    where I: IntoIterator<Item=(&'a [NodeIndex], f64)> {
        self.evaporate();
        for (tour, distance) in tours {
            self.deposit(tour, distance);
        }
    }
    fn evaporate(&mut self) {
        debug_assert!(self.rho < 1.0);
        let keep = 1.0 - self.rho;
        self.pheromone.iter_mut()
            .for_each(|tau| *tau *= keep);
    }
    fn deposit(&mut self, tour: &[NodeIndex], distance: f64) {
        if !(distance > 0.0) {
            return;
        }
        let n = self.node_count();
        let amount = 1.0 / distance;
        for ends in tour.windows(2) {
            let (u, v) = (ends[0].index(), ends[1].index());
            debug_assert!(u != v && u < n && v < n);
            self.pheromone[u * n + v] += amount;
            self.pheromone[v * n + u] += amount;
        }
    }
    fn level(&self, u: NodeIndex, v: NodeIndex) -> f64 {
        self.pheromone[u.index() * self.node_count() + v.index()]
    }
}
