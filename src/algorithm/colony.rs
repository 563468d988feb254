use std::iter;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use crate::network::Graph;
use crate::utils::config::{Config, Parameters};
use crate::utils::error::{Error, Result};
use super::base::{Ant, Environment};


#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Node labels of a closed cycle, first and last equal.
    pub tour: Vec<usize>,
    pub distance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Constructed,
    Iterating,
    Done,
}

/// Ant population sharing one environment.
///
/// The colony is the only writer of the pheromone map: ants read it while
/// building tours, and it is updated once every ant of the round is done.
pub struct Colony {
    parameters: Parameters,
    environment: Environment,
    ants: Vec<Ant>,
    rng: ChaChaRng,
    best: Option<Solution>,
    history: Vec<f64>,
    state: State,
    verbose: bool,
}

impl Colony {
    pub fn new(graph: Graph, parameters: Parameters, seed: u64) -> Result<Self> {
        Colony::with_rng(graph, parameters, ChaChaRng::seed_from_u64(seed))
    }
    pub fn with_rng(graph: Graph, parameters: Parameters, mut rng: ChaChaRng) -> Result<Self> {
        parameters.validate()?;
        let environment = Environment::new(graph, parameters.rho, parameters.ant_population)?;
        let mut ants: Vec<Ant> = iter::repeat_with(|| Ant::new(parameters.alpha, parameters.beta))
            .take(parameters.ant_population)
            .collect();
        for ant in ants.iter_mut() {
            ant.reset(&environment, &mut rng);
        }
        Ok(Colony {
            parameters,
            environment,
            ants,
            rng,
            best: None,
            history: vec![],
            state: State::Constructed,
            verbose: false,
        })
    }
    pub fn from_config(graph: Graph, config: &Config) -> Result<Self> {
        let mut colony = Colony::new(graph, config.parameters, config.seed)?;
        colony.verbose = config.verbose;
        Ok(colony)
    }
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
    pub fn environment(&self) -> &Environment {
        &self.environment
    }
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }
    pub fn state(&self) -> State {
        self.state
    }
    /// Best tour seen so far; still set after a failed `solve`.
    pub fn best(&self) -> Option<&Solution> {
        self.best.as_ref()
    }
    /// Best distance after each completed iteration.
    pub fn history(&self) -> &[f64] {
        &self.history
    }
    /// Runs every iteration and returns the shortest tour found.
    ///
    /// Solving a colony that is already done starts over with fresh
    /// pheromone; the random stream carries on, so it is not a replay.
    pub fn solve(&mut self) -> Result<Solution> {
        if self.state == State::Done {
            self.restart();
        }
        self.state = State::Iterating;
        for iteration in 0..self.parameters.iterations {
            self.iterate()?;
            if self.verbose {
                if let Some(best) = self.best.as_ref() {
                    println!("iteration #{} shortest = {:.2}", iteration + 1, best.distance);
                }
            }
        }
        self.state = State::Done;
        self.best.clone()
            .ok_or_else(|| Error::InvalidParameter("iterations", String::from("must be positive")))
    }
    fn iterate(&mut self) -> Result<()> {
        let environment = &self.environment;
        for ant in self.ants.iter_mut() {
            ant.run(environment, &mut self.rng)?;
            let distance = ant.travelled_distance();
            if self.best.as_ref().map_or(true, |best| distance < best.distance) {
                let tour = environment.graph().labels_of(ant.tour());
                self.best = Some(Solution { tour, distance });
            }
        }
        let tours = self.ants.iter()
            .map(|ant| (ant.tour(), ant.travelled_distance()));
        self.environment.update_pheromone(tours);
        for ant in self.ants.iter_mut() {
            ant.reset(&self.environment, &mut self.rng);
        }
        if let Some(best) = self.best.as_ref() {
            self.history.push(best.distance);
        }
        Ok(())
    }
    fn restart(&mut self) {
        self.environment.initialize_pheromone();
        self.best = None;
        self.history.clear();
        for ant in self.ants.iter_mut() {
            ant.reset(&self.environment, &mut self.rng);
        }
        self.state = State::Constructed;
    }
}
