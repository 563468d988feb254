use rand::Rng;
use crate::network::{NodeIndex, Tour};
use crate::utils::error::{Error, Result};
use super::environment::{Environment, Neighbor};


/// A single tour-constructing agent.
///
/// The ant never owns the environment; it is lent one on every call, along
/// with the random source driving its choices.
#[derive(Clone, Debug)]
pub struct Ant {
    alpha: f64,
    beta: f64,
    current: Option<NodeIndex>,
    tour: Tour,
    visited: Vec<bool>,
    travelled_distance: f64,
}

impl Ant {
    pub fn new(alpha: f64, beta: f64) -> Self {
        debug_assert!(alpha >= 0.0 && beta >= 0.0);
        Ant {
            alpha,
            beta,
            current: None,
            tour: vec![],
            visited: vec![],
            travelled_distance: 0.0,
        }
    }
    pub fn current_location(&self) -> Option<NodeIndex> {
        self.current
    }
    pub fn tour(&self) -> &[NodeIndex] {
        &self.tour
    }
    pub fn travelled_distance(&self) -> f64 {
        self.travelled_distance
    }
    pub fn is_complete(&self) -> bool {
        !self.visited.is_empty() && self.tour.len() == self.visited.len() + 1
    }
    /// Moves the ant to a uniformly random node and forgets its last tour.
    pub fn reset<R: Rng + ?Sized>(&mut self, environment: &Environment, rng: &mut R) {
        let n = environment.node_count();
        let start = NodeIndex::from(rng.gen_range(0..n));
        self.place(start, n);
    }
    fn place(&mut self, start: NodeIndex, node_count: usize) {
        debug_assert!(start.index() < node_count);
        self.visited.clear();
        self.visited.resize(node_count, false);
        self.visited[start.index()] = true;
        self.tour.clear();
        self.tour.push(start);
        self.current = Some(start);
        self.travelled_distance = 0.0;
    }
    /// Visits every remaining node once, then walks back to the start.
    pub fn run<R: Rng + ?Sized>(&mut self, environment: &Environment, rng: &mut R) -> Result<()> {
        self.location(environment)?;
        let start = self.tour[0];
        let n = environment.node_count();
        while self.tour.len() < n {
            let next = self.select_path(environment, rng)?;
            self.walk_to(environment, next)?;
        }
        if self.tour.len() == n {
            self.walk_to(environment, start)?;
        }
        Ok(())
    }
    fn walk_to(&mut self, environment: &Environment, next: NodeIndex) -> Result<()> {
        let current = self.location(environment)?;
        self.travelled_distance += environment.distance(current, next)?;
        self.visited[next.index()] = true;
        self.tour.push(next);
        self.current = Some(next);
        Ok(())
    }
    fn location(&self, environment: &Environment) -> Result<NodeIndex> {
        match self.current {
            Some(current) if self.visited.len() == environment.node_count() => Ok(current),
            _ => Err(Error::UnplacedAnt),
        }
    }
    fn attractiveness(&self, neighbor: &Neighbor) -> f64 {
        neighbor.pheromone.powf(self.alpha) * (1.0 / neighbor.distance).powf(self.beta)
    }
    /// Random-proportional distribution over the unvisited neighbours.
    ///
    /// Fails when the weights do not sum to a positive finite value, which
    /// includes the case of no candidate at all.
    pub fn probabilities(&self, environment: &Environment) -> Result<Vec<(NodeIndex, f64)>> {
        let current = self.location(environment)?;
        let weights: Vec<(NodeIndex, f64)> = environment.reachable_neighbors(current)
            .filter(|neighbor| !self.visited[neighbor.node.index()])
            .map(|neighbor| (neighbor.node, self.attractiveness(&neighbor)))
            .collect();
        let denominator: f64 = weights.iter().map(|&(_, weight)| weight).sum();
        if !(denominator > 0.0 && denominator.is_finite()) {
            return Err(Error::ZeroDenominator(current.index()));
        }
        Ok(weights.into_iter()
            .map(|(node, weight)| (node, weight / denominator))
            .collect())
    }
    /// Draws the next node by a cumulative scan over `probabilities`.
    pub fn select_path<R: Rng + ?Sized>(&self, environment: &Environment, rng: &mut R) -> Result<NodeIndex> {
        let current = self.location(environment)?;
        let probabilities = self.probabilities(environment)?;
        let draw: f64 = rng.gen();
        let mut accumulation = 0.0;
        for &(node, probability) in probabilities.iter() {
            accumulation += probability;
            if draw < accumulation {
                return Ok(node);
            }
        }
        // rounding left the cumulative sum just below the draw
        probabilities.iter()
            .rev()
            .find(|&&(_, probability)| probability > 0.0)
            .map(|&(node, _)| node)
            .ok_or(Error::ZeroDenominator(current.index()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Graph;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;
    use std::collections::HashSet;

    fn setup() -> Environment {
        let graph = Graph::from_edges(&[1, 2, 3, 4], vec![
            (1, 2, 1.0), (1, 3, 4.0), (1, 4, 3.0),
            (2, 3, 2.0), (2, 4, 5.0), (3, 4, 1.0),
        ]).unwrap();
        Environment::new(graph, 0.5, 4).unwrap()
    }

    fn ring(n: usize) -> Environment {
        let nodes: Vec<usize> = (0..n).collect();
        let points: Vec<(usize, [f64; 2])> = nodes.iter()
            .map(|&i| {
                let angle = i as f64 * std::f64::consts::PI * 2.0 / n as f64;
                (i, [100.0 * angle.cos(), 100.0 * angle.sin()])
            })
            .collect();
        let graph = Graph::from_coordinates(&points, crate::network::Metric::Euclidean).unwrap();
        Environment::new(graph, 0.5, n).unwrap()
    }

    #[test]
    fn it_runs_closed_hamiltonian_tours() {
        let environment = ring(9);
        let mut rng = ChaChaRng::seed_from_u64(7);
        let mut ant = Ant::new(1.0, 2.0);
        for _ in 0..20 {
            ant.reset(&environment, &mut rng);
            let start = ant.current_location().unwrap();
            assert_eq!(ant.tour(), &[start]);
            assert_eq!(ant.travelled_distance(), 0.0);

            ant.run(&environment, &mut rng).unwrap();
            let tour = ant.tour();
            assert!(ant.is_complete());
            assert_eq!(tour.len(), 10);
            assert_eq!(tour[0], start);
            assert_eq!(tour[9], start);
            let interior: HashSet<NodeIndex> = tour[..9].iter().cloned().collect();
            assert_eq!(interior.len(), 9);
            let length = environment.graph().tour_length(tour);
            assert!((ant.travelled_distance() - length).abs() < 1e-9);
        }
    }

    #[test]
    fn it_refuses_to_run_unplaced() {
        let environment = setup();
        let mut rng = ChaChaRng::seed_from_u64(0);
        let mut ant = Ant::new(1.0, 2.0);
        assert!(matches!(ant.run(&environment, &mut rng), Err(Error::UnplacedAnt)));
        assert!(matches!(ant.probabilities(&environment), Err(Error::UnplacedAnt)));
        // placed on a graph of another size
        ant.reset(&ring(6), &mut rng);
        assert!(matches!(ant.run(&environment, &mut rng), Err(Error::UnplacedAnt)));
    }

    #[test]
    fn it_computes_random_proportional_rule() {
        let environment = setup();
        let mut ant = Ant::new(1.0, 2.0);
        ant.place(0.into(), 4);
        let probabilities = ant.probabilities(&environment).unwrap();
        let nodes: Vec<usize> = probabilities.iter().map(|(n, _)| n.index()).collect();
        assert_eq!(nodes, vec![1, 2, 3]);
        let total: f64 = probabilities.iter().map(|&(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-12);
        // pheromone is uniform, so only (1/d)^2 matters: 1, 1/16, 1/9
        let denominator = 1.0 + 1.0 / 16.0 + 1.0 / 9.0;
        assert!((probabilities[0].1 - 1.0 / denominator).abs() < 1e-12);
        assert!((probabilities[1].1 - 1.0 / 16.0 / denominator).abs() < 1e-12);

        ant.walk_to(&environment, 1.into()).unwrap();
        let probabilities = ant.probabilities(&environment).unwrap();
        assert_eq!(probabilities.len(), 2);
        let total: f64 = probabilities.iter().map(|&(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-12);

        ant.walk_to(&environment, 2.into()).unwrap();
        let probabilities = ant.probabilities(&environment).unwrap();
        assert_eq!(probabilities, vec![(NodeIndex::from(3), 1.0)]);
    }

    #[test]
    fn it_samples_in_proportion() {
        let environment = setup();
        let mut rng = ChaChaRng::seed_from_u64(42);
        let mut ant = Ant::new(1.0, 2.0);
        ant.place(0.into(), 4);
        let expected = ant.probabilities(&environment).unwrap();
        let draws = 20000;
        let mut counts = [0usize; 4];
        for _ in 0..draws {
            counts[ant.select_path(&environment, &mut rng).unwrap().index()] += 1;
        }
        assert_eq!(counts[0], 0);
        for &(node, probability) in expected.iter() {
            let frequency = counts[node.index()] as f64 / draws as f64;
            assert!((frequency - probability).abs() < 0.02);
        }
        // not an argmax: the less likely candidates are still drawn
        assert!(counts[2] > 0 && counts[3] > 0);
    }

    #[test]
    fn it_fails_on_vanishing_weights() {
        let graph = Graph::from_edges(&[0, 1, 2], vec![
            (0, 1, 10.0), (1, 2, 10.0), (0, 2, 10.0),
        ]).unwrap();
        let environment = Environment::new(graph, 0.5, 3).unwrap();
        let mut rng = ChaChaRng::seed_from_u64(3);
        // 0.1 ^ 1000 underflows to zero
        let mut ant = Ant::new(1.0, 1000.0);
        ant.reset(&environment, &mut rng);
        let current = ant.current_location().unwrap().index();
        assert!(matches!(ant.probabilities(&environment), Err(Error::ZeroDenominator(n)) if n == current));
        assert!(matches!(ant.run(&environment, &mut rng), Err(Error::ZeroDenominator(_))));
    }

    #[test]
    fn it_ignores_exponents_of_zero() {
        let environment = setup();
        let mut ant = Ant::new(0.0, 0.0);
        ant.place(3.into(), 4);
        let probabilities = ant.probabilities(&environment).unwrap();
        for &(_, probability) in probabilities.iter() {
            assert!((probability - 1.0 / 3.0).abs() < 1e-12);
        }
    }
}
