use serde::Serialize;
use std::fmt;

/// Weight of a single stored edge
pub type Weight = u64;

/// Accumulated cost of a path
pub type Cost = u64;

/// Frontier discipline of an unweighted search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Breadth-first (FIFO queue)
    Bfs,
    /// Depth-first (LIFO stack)
    Dfs,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::Bfs => write!(f, "bfs"),
            SearchKind::Dfs => write!(f, "dfs"),
        }
    }
}

/// How an unweighted search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOutcome {
    /// The end vertex was taken off the frontier; `on_search_over` fired
    Reached,
    /// The frontier ran dry first; no terminal notification was sent
    Exhausted,
}

impl SearchOutcome {
    pub fn is_reached(&self) -> bool {
        matches!(self, SearchOutcome::Reached)
    }
}

/// A vertex confirmed optimal by Dijkstra, with its path cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinishedVertex<V> {
    pub vertex: V,
    pub cost: Cost,
}

/// Result of a Dijkstra run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath<V> {
    /// Vertices from start to end, both inclusive
    pub path: Vec<V>,
    /// Finished cost of the end vertex
    pub cost: Cost,
    /// Every finished vertex in finishing order
    pub finished: Vec<FinishedVertex<V>>,
}

impl<V> ShortestPath<V> {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
