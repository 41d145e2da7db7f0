use serde::Serialize;

use crate::adjacency::AdjacencyList;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::queue::IndexedMinHeap;
use crate::trace::{NoTrace, TraceEvent, TraceSink};
use crate::{Distance, Node, Weight};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: Node,
    pub distances: Vec<Distance>,
    /// `Some(source)` for the source itself, `None` for unreachable vertices.
    pub predecessors: Vec<Option<Node>>,
    /// Largest finite distance; `None` when the source reaches no other vertex.
    pub eccentricity: Option<Weight>,
}

impl ShortestPaths {
    pub fn source(&self) -> Node { self.source }
    pub fn distance(&self, v: Node) -> Distance { self.distances[v] }
    pub fn is_reachable(&self, v: Node) -> bool { self.distances[v].is_finite() }
    pub fn reachable_count(&self) -> usize { self.distances.iter().filter(|d| d.is_finite()).count() }

    pub fn unreachable(&self) -> Vec<Node> {
        (0..self.distances.len()).filter(|&v| !self.is_reachable(v)).collect()
    }

    /// Vertices from the source to `target` along the shortest-path tree.
    pub fn path_to(&self, target: Node) -> Option<Vec<Node>> {
        if !self.is_reachable(target) { return None; }
        let mut path = vec![target];
        let mut cur = target;
        while cur != self.source {
            cur = self.predecessors[cur]?;
            path.push(cur);
            if path.len() > self.distances.len() { return None; }
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra from `source` over the validated snapshot `g`.
pub fn compute_shortest_paths(g: &Graph, source: Node) -> Result<ShortestPaths> {
    compute_shortest_paths_traced(g, source, &mut NoTrace)
}

/// Same as [`compute_shortest_paths`], reporting every extraction and
/// relaxation to `sink`.
pub fn compute_shortest_paths_traced<S: TraceSink + ?Sized>(
    g: &Graph,
    source: Node,
    sink: &mut S,
) -> Result<ShortestPaths> {
    let n = g.len();
    if source >= n {
        return Err(Error::InvalidSource { vertex: source, n });
    }
    let adj = AdjacencyList::from_graph(g)?;

    let mut dist = vec![Distance::Unreachable; n];
    let mut pred: Vec<Option<Node>> = vec![None; n];
    dist[source] = Distance::Finite(0);
    pred[source] = Some(source);

    let mut frontier = IndexedMinHeap::init(dist.clone());
    let mut relaxations: usize = 0;

    while let Some((v, key)) = frontier.extract_min() {
        let d = match key {
            Distance::Finite(d) => d,
            Distance::Unreachable => { sink.record(TraceEvent::Unreached { vertex: v }); continue; }
        };
        sink.record(TraceEvent::Extracted { vertex: v, distance: d });

        for e in adj.neighbors(v) {
            let Some(current) = frontier.key(e.neighbor) else { continue };
            // Validation bounds the total edge weight, so this cannot overflow.
            let nd = d + e.weight;
            if Distance::Finite(nd) >= current { continue; }
            frontier.decrease_key(e.neighbor, Distance::Finite(nd))?;
            dist[e.neighbor] = Distance::Finite(nd);
            pred[e.neighbor] = Some(v);
            relaxations += 1;
            sink.record(TraceEvent::Relaxed { vertex: e.neighbor, via: v, previous: current, distance: nd });
        }
    }

    let reachable = dist.iter().filter(|d| d.is_finite()).count();
    let eccentricity = if reachable > 1 { dist.iter().filter_map(|d| d.finite()).max() } else { None };
    tracing::debug!(source, n, reachable, relaxations, ?eccentricity, "shortest paths computed");

    Ok(ShortestPaths { source, distances: dist, predecessors: pred, eccentricity })
}
