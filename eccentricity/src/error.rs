use crate::Node;

/// Errors returned before any shortest-path work starts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("malformed graph: {0}")]
    MalformedGraph(#[from] MalformedGraph),

    #[error("source vertex {vertex} out of range for graph with {n} vertices")]
    InvalidSource { vertex: Node, n: usize },

    #[error("frontier rejected a relaxation: {0}")]
    Frontier(#[from] DecreaseKeyError),
}

/// Reasons a weight matrix is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedGraph {
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("asymmetric weights: W[{u}][{v}] = {forward} but W[{v}][{u}] = {backward}")]
    Asymmetric { u: Node, v: Node, forward: i64, backward: i64 },

    #[error("negative weight {weight} on edge {u}-{v}")]
    NegativeWeight { u: Node, v: Node, weight: i64 },

    #[error("self-loop on vertex {vertex} with weight {weight}")]
    SelfLoop { vertex: Node, weight: i64 },

    #[error("total edge weight does not fit in a u64 distance")]
    WeightOverflow,
}

/// Rejected frontier update.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecreaseKeyError {
    #[error("vertex {0} is not in the frontier")]
    NotQueued(Node),

    #[error("key for vertex {label} is {current}, refusing to raise or keep it at {requested}")]
    NotSmaller { label: Node, current: crate::Distance, requested: crate::Distance },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Distance;

    #[test]
    fn frontier_errors_convert_instead_of_vanishing() {
        let err: Error = DecreaseKeyError::NotSmaller {
            label: 2,
            current: Distance::Finite(3),
            requested: Distance::Finite(5),
        }.into();
        assert_eq!(
            err.to_string(),
            "frontier rejected a relaxation: key for vertex 2 is 3, refusing to raise or keep it at 5"
        );
        let err: Error = DecreaseKeyError::NotQueued(4).into();
        assert!(matches!(err, Error::Frontier(DecreaseKeyError::NotQueued(4))));
    }
}
