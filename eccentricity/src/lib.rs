//! eccentricity: single-source shortest paths over a symmetric weight matrix.
//! Dijkstra driven by an indexed binary heap with decrease-key; the run also
//! reports the eccentricity of the source within its reachable component.
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod adjacency;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod queue;
pub mod trace;

pub use adjacency::{AdjacencyEntry, AdjacencyList};
pub use dijkstra::{compute_shortest_paths, compute_shortest_paths_traced, ShortestPaths};
pub use error::{DecreaseKeyError, Error, MalformedGraph, Result};
pub use graph::Graph;
pub use metrics::{graph_eccentricities, GraphMetrics};
pub use queue::IndexedMinHeap;
pub use trace::{LogSink, NoTrace, TraceEvent, TraceSink};

pub type Node = usize;
pub type Weight = u64;

/// Tentative or final distance. Every finite value orders before `Unreachable`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Weight>", into = "Option<Weight>")]
pub enum Distance {
    Finite(Weight),
    Unreachable,
}

impl Distance {
    pub fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }
    pub fn is_finite(self) -> bool { matches!(self, Distance::Finite(_)) }
}

impl From<Option<Weight>> for Distance {
    fn from(d: Option<Weight>) -> Self { d.map_or(Distance::Unreachable, Distance::Finite) }
}

impl From<Distance> for Option<Weight> {
    fn from(d: Distance) -> Self { d.finite() }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_orders_before_unreachable() {
        assert!(Distance::Finite(u64::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(3) < Distance::Finite(4));
        assert_eq!(Distance::Unreachable.finite(), None);
    }

    #[test]
    fn serializes_unreachable_as_null() {
        let ds = vec![Distance::Finite(0), Distance::Unreachable, Distance::Finite(7)];
        let s = serde_json::to_string(&ds).unwrap();
        assert_eq!(s, "[0,null,7]");
        let back: Vec<Distance> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, ds);
    }

    #[test]
    fn display() {
        assert_eq!(Distance::Finite(12).to_string(), "12");
        assert_eq!(Distance::Unreachable.to_string(), "unreachable");
    }
}
