use std::fmt;

use crate::error::Result;
use crate::graph::Graph;
use crate::{Node, Weight};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyEntry {
    pub neighbor: Node,
    pub weight: Weight,
}

/// Per-vertex neighbor lists, each sorted by neighbor label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<Vec<AdjacencyEntry>>,
}

impl AdjacencyList {
    /// Validates `g` and flattens its matrix into neighbor lists. O(n²).
    pub fn from_graph(g: &Graph) -> Result<Self> {
        g.validate()?;
        let lists = g.rows().iter()
            .map(|row| {
                row.iter().enumerate()
                    .filter(|&(_, &w)| w > 0)
                    .map(|(neighbor, &w)| AdjacencyEntry { neighbor, weight: w as Weight })
                    .collect()
            })
            .collect();
        Ok(Self { lists })
    }

    pub fn len(&self) -> usize { self.lists.len() }
    pub fn is_empty(&self) -> bool { self.lists.is_empty() }
    pub fn neighbors(&self, v: Node) -> &[AdjacencyEntry] { &self.lists[v] }
    pub fn degree(&self, v: Node) -> usize { self.lists[v].len() }

    /// Total entries; each undirected edge appears twice.
    pub fn entry_count(&self) -> usize { self.lists.iter().map(Vec::len).sum() }
}

/// One line per vertex: `v: neighbor(weight) ...`.
impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, list) in self.lists.iter().enumerate() {
            write!(f, "{}:", v)?;
            for e in list { write!(f, " {}({})", e.neighbor, e.weight)?; }
            writeln!(f)?;
        }
        Ok(())
    }
}
