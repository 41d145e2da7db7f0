use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::MalformedGraph;
use crate::Node;

/// Immutable snapshot of an undirected graph as a dense weight matrix.
/// `0` means no edge; positive entries are edge weights.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    weights: Vec<Vec<i64>>,
}

impl Graph {
    pub fn new(n: usize) -> Self { Self { weights: vec![vec![0; n]; n] } }

    /// Wraps a matrix as-is. Shape and weights are checked by [`Graph::validate`].
    pub fn from_matrix(weights: Vec<Vec<i64>>) -> Self { Self { weights } }

    pub fn len(&self) -> usize { self.weights.len() }
    pub fn is_empty(&self) -> bool { self.weights.is_empty() }
    pub fn rows(&self) -> &[Vec<i64>] { &self.weights }

    /// Panics if `u` or `v` is out of range.
    pub fn weight(&self, u: Node, v: Node) -> i64 { self.weights[u][v] }

    /// Sets both `W[u][v]` and `W[v][u]`. A weight of `0` removes the edge.
    /// Panics if `u` or `v` is out of range.
    pub fn set_edge(&mut self, u: Node, v: Node, w: i64) {
        self.weights[u][v] = w;
        self.weights[v][u] = w;
    }

    /// Number of undirected edges, counting the upper triangle only.
    pub fn edge_count(&self) -> usize {
        self.weights.iter().enumerate()
            .map(|(i, row)| row.iter().skip(i + 1).filter(|&&w| w != 0).count())
            .sum()
    }

    /// Erdős–Rényi graph: each pair gets an edge with probability `p`, weight in `1..=maxw`.
    pub fn random<R: Rng + ?Sized>(n: usize, p: f64, maxw: u32, rng: &mut R) -> Self {
        let mut g = Self::new(n);
        for u in 0..n {
            for v in u + 1..n {
                if rng.gen::<f64>() < p {
                    let w = rng.gen_range(1..=maxw.max(1)) as i64;
                    g.set_edge(u, v, w);
                }
            }
        }
        g
    }

    /// Checks that the matrix is square, symmetric, free of self-loops and
    /// negative weights, and that no path weight can overflow a `u64`.
    pub fn validate(&self) -> Result<(), MalformedGraph> {
        let n = self.weights.len();
        if let Some((row, r)) = self.weights.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(MalformedGraph::NotSquare { row, len: r.len(), expected: n });
        }
        let mut total: u128 = 0;
        for u in 0..n {
            let weight = self.weights[u][u];
            if weight != 0 {
                return Err(MalformedGraph::SelfLoop { vertex: u, weight });
            }
            for v in u + 1..n {
                let (forward, backward) = (self.weights[u][v], self.weights[v][u]);
                if forward != backward {
                    return Err(MalformedGraph::Asymmetric { u, v, forward, backward });
                }
                if forward < 0 {
                    return Err(MalformedGraph::NegativeWeight { u, v, weight: forward });
                }
                total += forward as u128;
            }
        }
        // A shortest path uses each edge at most once.
        if total > u64::MAX as u128 {
            return Err(MalformedGraph::WeightOverflow);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn set_edge_is_symmetric() {
        let mut g = Graph::new(3);
        g.set_edge(0, 2, 5);
        assert_eq!(g.weight(0, 2), 5);
        assert_eq!(g.weight(2, 0), 5);
        assert_eq!(g.edge_count(), 1);
        g.set_edge(2, 0, 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn rejects_asymmetric() {
        let g = Graph::from_matrix(vec![vec![0, 1], vec![2, 0]]);
        assert_eq!(
            g.validate(),
            Err(MalformedGraph::Asymmetric { u: 0, v: 1, forward: 1, backward: 2 })
        );
    }

    #[test]
    fn rejects_negative_weight() {
        let mut g = Graph::new(3);
        g.set_edge(1, 2, -4);
        assert_eq!(g.validate(), Err(MalformedGraph::NegativeWeight { u: 1, v: 2, weight: -4 }));
    }

    #[test]
    fn rejects_self_loop() {
        let mut g = Graph::new(2);
        g.set_edge(1, 1, 3);
        assert_eq!(g.validate(), Err(MalformedGraph::SelfLoop { vertex: 1, weight: 3 }));
    }

    #[test]
    fn rejects_ragged_rows() {
        let g = Graph::from_matrix(vec![vec![0, 1], vec![1]]);
        assert_eq!(g.validate(), Err(MalformedGraph::NotSquare { row: 1, len: 1, expected: 2 }));
    }

    #[test]
    fn rejects_weight_overflow() {
        let mut g = Graph::new(3);
        g.set_edge(0, 1, i64::MAX);
        g.set_edge(1, 2, i64::MAX);
        assert!(g.validate().is_ok());
        g.set_edge(0, 2, 2);
        assert_eq!(g.validate(), Err(MalformedGraph::WeightOverflow));
    }

    #[test]
    fn random_graph_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = Graph::random(40, 0.2, 9, &mut rng);
        assert_eq!(g.len(), 40);
        assert!(g.validate().is_ok());
        assert!(g.rows().iter().flatten().all(|&w| (0..=9).contains(&w)));
    }

    #[test]
    fn json_snapshot() {
        let g: Graph = serde_json::from_str(r#"{"weights":[[0,3],[3,0]]}"#).unwrap();
        assert_eq!(g.weight(0, 1), 3);
        assert_eq!(serde_json::to_string(&g).unwrap(), r#"{"weights":[[0,3],[3,0]]}"#);
    }
}
