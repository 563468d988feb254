use ant_tour::algorithm::{Colony, State};
use ant_tour::network::Graph;
use ant_tour::sweep;
use ant_tour::utils::config::{Parameters, Sweep};
use ant_tour::utils::error::Error;
use ant_tour::utils::yaml;
use itertools::Itertools;

fn brute_force(graph: &Graph) -> f64 {
    let mut nodes = graph.nodes();
    let first = nodes.next().unwrap();
    nodes.permutations(graph.node_count() - 1)
        .map(|rest| {
            let mut tour = vec![first];
            tour.extend(rest);
            tour.push(first);
            graph.tour_length(&tour)
        })
        .fold(f64::INFINITY, f64::min)
}

fn assert_closed_tour(tour: &[usize], labels: &[usize]) {
    assert_eq!(tour.len(), labels.len() + 1);
    assert_eq!(tour[0], tour[labels.len()]);
    let interior: Vec<usize> = tour[..labels.len()].iter().cloned().sorted().collect();
    assert_eq!(interior, labels);
}

#[test]
fn it_solves_square_scenario() {
    let graph = yaml::load_graph("data/graph/square.yaml").unwrap();
    let optimum = brute_force(&graph);
    assert!((optimum - 7.0).abs() < 1e-12);

    let mut colony = Colony::new(graph, Parameters::new(4, 10, 1.0, 2.0, 0.5), 420).unwrap();
    let solution = colony.solve().unwrap();
    assert_closed_tour(&solution.tour, &[1, 2, 3, 4]);
    assert!(solution.distance >= optimum - 1e-12);
    assert!((solution.distance - optimum).abs() < 1e-12);
}

#[test]
fn it_converges_on_octagon() {
    let graph = yaml::load_graph("data/graph/octagon.yaml").unwrap();
    let optimum = brute_force(&graph);
    assert!((optimum - (8.0 + 8.0 * 2f64.sqrt())).abs() < 1e-9);

    let config = yaml::load_config("data/config/default.yaml").unwrap();
    let mut colony = Colony::from_config(graph, &config).unwrap();
    let solution = colony.solve().unwrap();
    assert_eq!(colony.state(), State::Done);
    assert_closed_tour(&solution.tour, &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert!(solution.distance >= optimum - 1e-9);
    assert!(solution.distance <= optimum * 1.1);
    let history = colony.history();
    assert_eq!(history.len(), config.parameters.iterations);
    assert!(history.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn it_replays_with_fixed_seed() {
    let graph = yaml::load_graph("data/graph/cities.yaml").unwrap();
    let parameters = Parameters::new(8, 12, 1.0, 3.0, 0.5);
    let mut first = Colony::new(graph.clone(), parameters, 77).unwrap();
    let mut second = Colony::new(graph.clone(), parameters, 77).unwrap();
    let a = first.solve().unwrap();
    let b = second.solve().unwrap();
    assert_eq!(a, b);
    assert_eq!(first.history(), second.history());
    for (u, v) in graph.nodes().tuple_combinations() {
        let x = first.environment().pheromone(u, v).unwrap();
        let y = second.environment().pheromone(u, v).unwrap();
        assert_eq!(x.to_bits(), y.to_bits());
        assert!(x > 0.0);
    }
    assert!(a.distance >= nearest_edge_bound(&graph));
}

// every closed tour uses, at each node, at least its nearest edge
fn nearest_edge_bound(graph: &Graph) -> f64 {
    graph.nodes()
        .map(|u| graph.nodes()
            .filter_map(|v| graph.distance(u, v))
            .fold(f64::INFINITY, f64::min))
        .sum()
}

#[test]
fn it_sweeps_parameters() {
    let graph = yaml::load_graph("data/graph/square.yaml").unwrap();
    let grid = Sweep {
        alphas: vec![1.0],
        betas: vec![2.0, 5.0],
        rhos: vec![0.4, 0.6],
        attempts: 3,
    };
    let outcome = sweep::grid_search(&graph, Parameters::new(4, 6, 1.0, 2.0, 0.5), &grid, 9).unwrap();
    assert_eq!(outcome.trials.len(), 4);
    assert_closed_tour(&outcome.best.tour, &[1, 2, 3, 4]);
    assert!((outcome.best.distance - 7.0).abs() < 1e-12);
}

#[test]
fn it_rejects_broken_inputs() {
    let graph = yaml::parse_graph("
nodes: [1, 2, 3, 4]
edges:
  - { ends: [1, 2], distance: 1 }
  - { ends: [1, 3], distance: 4 }
  - { ends: [1, 4], distance: 0 }
  - { ends: [2, 3], distance: 2 }
  - { ends: [2, 4], distance: 5 }
  - { ends: [3, 4], distance: 1 }
");
    assert!(matches!(graph, Err(Error::MissingEdge(1, 4))));

    let graph = yaml::load_graph("data/graph/square.yaml").unwrap();
    let colony = Colony::new(graph, Parameters::new(4, 10, 1.0, -2.0, 0.5), 0);
    assert!(matches!(colony, Err(Error::InvalidParameter("beta", _))));
}
