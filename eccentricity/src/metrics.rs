//! Whole-graph distance metrics built from one engine run per vertex.
use serde::Serialize;

use crate::dijkstra::compute_shortest_paths;
use crate::error::Result;
use crate::graph::Graph;
use crate::{Node, Weight};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GraphMetrics {
    /// Eccentricity of each vertex within its own component.
    pub eccentricities: Vec<Option<Weight>>,
    /// Smallest defined eccentricity.
    pub radius: Option<Weight>,
    /// Largest defined eccentricity.
    pub diameter: Option<Weight>,
    pub center: Vec<Node>,
    pub periphery: Vec<Node>,
    /// Every vertex reaches every other vertex.
    pub connected: bool,
}

pub fn graph_eccentricities(g: &Graph) -> Result<GraphMetrics> {
    g.validate()?;
    let n = g.len();
    let mut eccentricities = Vec::with_capacity(n);
    let mut connected = true;
    for s in 0..n {
        let r = compute_shortest_paths(g, s)?;
        connected &= r.reachable_count() == n;
        eccentricities.push(r.eccentricity);
    }
    let radius = eccentricities.iter().flatten().copied().min();
    let diameter = eccentricities.iter().flatten().copied().max();
    let matching = |target: Option<Weight>| -> Vec<Node> {
        if target.is_none() { return Vec::new(); }
        (0..n).filter(|&v| eccentricities[v] == target).collect()
    };
    let center = matching(radius);
    let periphery = matching(diameter);
    tracing::debug!(n, ?radius, ?diameter, connected, "graph metrics computed");
    Ok(GraphMetrics { eccentricities, radius, diameter, center, periphery, connected })
}
