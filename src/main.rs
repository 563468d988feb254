use ant_tour::algorithm::Colony;
use ant_tour::report;
use ant_tour::sweep;
use ant_tour::utils::config::Arguments;
use ant_tour::utils::error::Result;
use ant_tour::utils::yaml;
use std::process;
use std::time::Instant;

fn main() {
    let args: Arguments = argh::from_env();
    if let Err(error) = run(args) {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}

fn run(args: Arguments) -> Result<()> {
    let mut config = yaml::load_config(&args.config)?;
    config.override_from_args(&args);
    config.parameters.validate()?;
    let graph = yaml::load_graph(&args.graph)?;

    let start = Instant::now();
    let msg = if args.sweep {
        let grid = config.sweep.clone().unwrap_or_default();
        let outcome = sweep::grid_search(&graph, config.parameters, &grid, config.seed)?;
        report::show_sweep(&config.name, &outcome, start.elapsed().as_micros())
    } else {
        let mut colony = Colony::from_config(graph, &config)?;
        let solution = colony.solve()?;
        report::show_solution(&config.name, &solution, colony.parameters(), start.elapsed().as_micros())
    };
    print!("{}", msg);
    Ok(())
}
