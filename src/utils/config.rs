use serde::Deserialize;
use argh::FromArgs;
use crate::utils::error::{Error, Result};

/// Ant colony optimization for the symmetric travelling salesman problem
#[derive(FromArgs)]
pub struct Arguments {
    /// path to graph file
    #[argh(positional)]
    pub graph: String,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override random seed
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// override number of ants
    #[argh(option, short='m')]
    pub ants: Option<usize>,
    /// override number of iterations
    #[argh(option, short='i')]
    pub iterations: Option<usize>,
    /// override pheromone exponent
    #[argh(option, short='a')]
    pub alpha: Option<f64>,
    /// override distance exponent
    #[argh(option, short='b')]
    pub beta: Option<f64>,
    /// override evaporation rate
    #[argh(option, short='r')]
    pub rho: Option<f64>,
    /// search alpha, beta and rho over the sweep grid instead of solving once
    #[argh(switch)]
    pub sweep: bool,
    /// print the shortest distance after every iteration
    #[argh(switch, short='v')]
    pub verbose: bool,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub name: String,
    pub seed: u64,
    #[serde(default)]
    pub verbose: bool,
    pub parameters: Parameters,
    #[serde(default)]
    pub sweep: Option<Sweep>,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    pub ant_population: usize,
    pub iterations: usize,
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
}

/// Grid of alpha, beta and rho values, each tried `attempts` times.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Sweep {
    pub alphas: Vec<f64>,
    pub betas: Vec<f64>,
    pub rhos: Vec<f64>,
    pub attempts: usize,
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(ants) = args.ants {
            self.parameters.ant_population = ants;
        }
        if let Some(iterations) = args.iterations {
            self.parameters.iterations = iterations;
        }
        if let Some(alpha) = args.alpha {
            self.parameters.alpha = alpha;
        }
        if let Some(beta) = args.beta {
            self.parameters.beta = beta;
        }
        if let Some(rho) = args.rho {
            self.parameters.rho = rho;
        }
        self.verbose |= args.verbose;
    }
}

impl Parameters {
    pub fn new(ant_population: usize, iterations: usize, alpha: f64, beta: f64, rho: f64) -> Self {
        Parameters { ant_population, iterations, alpha, beta, rho }
    }
    pub fn validate(&self) -> Result<()> {
        if self.ant_population == 0 {
            return Err(invalid("ant_population", "must be positive"));
        }
        if self.iterations == 0 {
            return Err(invalid("iterations", "must be positive"));
        }
        check_exponent("alpha", self.alpha)?;
        check_exponent("beta", self.beta)?;
        if !(self.rho > 0.0 && self.rho < 1.0) {
            return Err(Error::InvalidParameter("rho", format!("must lie in (0, 1), got {}", self.rho)));
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters::new(20, 25, 1.0, 2.0, 0.5)
    }
}

impl Sweep {
    pub fn validate(&self) -> Result<()> {
        if self.alphas.is_empty() || self.betas.is_empty() || self.rhos.is_empty() {
            return Err(invalid("sweep", "needs at least one value on every axis"));
        }
        if self.attempts == 0 {
            return Err(invalid("attempts", "must be positive"));
        }
        Ok(())
    }
    pub fn combinations(&self) -> usize {
        self.alphas.len() * self.betas.len() * self.rhos.len()
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Sweep {
            alphas: vec![0.75, 1.0, 1.25],
            betas: vec![2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0],
            rhos: vec![0.4, 0.5, 0.6],
            attempts: 10,
        }
    }
}

fn check_exponent(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter(name, format!("must be a finite non-negative number, got {}", value)))
    }
}

fn invalid(name: &'static str, reason: &str) -> Error {
    Error::InvalidParameter(name, reason.to_owned())
}
