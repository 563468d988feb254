use std::fs;

use serde::Deserialize;

use super::config::Config;
use super::error::Result;
use crate::network::{Graph, Metric};

#[derive(Deserialize)]
struct GraphYaml {
    #[serde(default)]
    nodes: Vec<usize>,
    #[serde(default)]
    edges: Vec<EdgeYaml>,
    #[serde(default)]
    coordinates: Vec<PointYaml>,
    #[serde(default)]
    metric: Option<Metric>,
}

#[derive(Deserialize)]
struct EdgeYaml {
    ends: [usize; 2],
    distance: f64,
}

#[derive(Deserialize)]
struct PointYaml {
    id: usize,
    at: [f64; 2],
}

pub fn load_graph(path: &str) -> Result<Graph> {
    let text = fs::read_to_string(path)?;
    parse_graph(&text)
}

/// Coordinates win over an explicit edge list when both are given.
pub fn parse_graph(text: &str) -> Result<Graph> {
    let yaml: GraphYaml = serde_yaml::from_str(text)?;
    if !yaml.coordinates.is_empty() {
        let points: Vec<(usize, [f64; 2])> = yaml.coordinates.into_iter()
            .map(|p| (p.id, p.at))
            .collect();
        Graph::from_coordinates(&points, yaml.metric.unwrap_or(Metric::Euclidean))
    } else {
        Graph::from_edges(&yaml.nodes, flatten(yaml.edges))
    }
}

pub fn load_config(path: &str) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(text)?;
    config.parameters.validate()?;
    if let Some(sweep) = config.sweep.as_ref() {
        sweep.validate()?;
    }
    Ok(config)
}

fn flatten(edges: Vec<EdgeYaml>) -> Vec<(usize, usize, f64)> {
    edges.into_iter()
        .map(|e| (e.ends[0], e.ends[1], e.distance))
        .collect()
}
