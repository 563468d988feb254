use crate::algorithm::Solution;
use crate::sweep::SweepOutcome;
use crate::utils::config::Parameters;


pub fn show_solution(name: &str, solution: &Solution, parameters: &Parameters, elapsed: u128) -> String {
    let mut msg = String::new();
    msg.push_str(&format!("{} with {}\n", name, show_parameters(parameters)));
    msg.push_str(&format!("- tour {:?}\n", solution.tour));
    msg.push_str(&format!("- shortest distance {:.2}\n", solution.distance));
    msg.push_str(&format!("--- computing time: {} μs ---\n", elapsed));
    msg
}

pub fn show_sweep(name: &str, outcome: &SweepOutcome, elapsed: u128) -> String {
    let mut msg = String::new();
    msg.push_str(&format!("{} sweep over {} configurations\n", name, outcome.trials.len()));
    for trial in outcome.trials.iter() {
        let p = &trial.parameters;
        msg.push_str(&format!("- alpha {:.2} beta {:.2} rho {:.2}: average distance {:.2}\n",
                              p.alpha, p.beta, p.rho, trial.mean_distance));
    }
    msg.push_str(&format!("best with {}\n", show_parameters(&outcome.best_parameters)));
    msg.push_str(&format!("- tour {:?}\n", outcome.best.tour));
    msg.push_str(&format!("- shortest distance {:.2}\n", outcome.best.distance));
    msg.push_str(&format!("--- computing time: {} μs ---\n", elapsed));
    msg
}

fn show_parameters(p: &Parameters) -> String {
    format!("{} ants, {} iterations, alpha {:.2}, beta {:.2}, rho {:.2}",
            p.ant_population, p.iterations, p.alpha, p.beta, p.rho)
}
