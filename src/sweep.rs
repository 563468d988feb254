use itertools::iproduct;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use crate::algorithm::{Colony, Solution};
use crate::network::Graph;
use crate::utils::config::{Parameters, Sweep};
use crate::utils::error::{Error, Result};


#[derive(Clone, Debug, PartialEq)]
pub struct Trial {
    pub parameters: Parameters,
    pub mean_distance: f64,
}

#[derive(Clone, Debug)]
pub struct SweepOutcome {
    pub trials: Vec<Trial>,
    pub best: Solution,
    pub best_parameters: Parameters,
}

/// Tries every alpha, beta and rho combination on top of `base`.
///
/// Every attempt builds a fresh colony whose seed is drawn from a generator
/// seeded with `seed`, so the whole sweep is reproducible.
pub fn grid_search(graph: &Graph, base: Parameters, sweep: &Sweep, seed: u64) -> Result<SweepOutcome> {
    sweep.validate()?;
    let mut seeds = ChaChaRng::seed_from_u64(seed);
    let mut trials = Vec::with_capacity(sweep.combinations());
    let mut best: Option<(Solution, Parameters)> = None;
    for (&alpha, &beta, &rho) in iproduct!(sweep.alphas.iter(), sweep.betas.iter(), sweep.rhos.iter()) {
        let parameters = Parameters { alpha, beta, rho, ..base };
        let mut total_distance = 0.0;
        for _ in 0..sweep.attempts {
            let mut colony = Colony::new(graph.clone(), parameters, seeds.gen())?;
            let solution = colony.solve()?;
            total_distance += solution.distance;
            if best.as_ref().map_or(true, |(known, _)| solution.distance < known.distance) {
                best = Some((solution, parameters));
            }
        }
        let mean_distance = total_distance / sweep.attempts as f64;
        trials.push(Trial { parameters, mean_distance });
    }
    let (best, best_parameters) = best
        .ok_or_else(|| Error::InvalidParameter("sweep", String::from("has nothing to try")))?;
    Ok(SweepOutcome { trials, best, best_parameters })
}
