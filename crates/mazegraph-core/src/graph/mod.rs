//! Directed weighted graph and its observable algorithms
//!
//! Provides:
//! - `WeightedGraph`, a map-of-maps store with non-negative integer weights
//! - An observer protocol reporting algorithm progress
//! - BFS and DFS searches that stop at an end vertex
//! - Dijkstra single-source shortest path with path reconstruction

pub mod algos;
pub mod observer;
pub mod store;
pub mod types;

pub use algos::{bfs, dfs, dijkstra};
pub use observer::{EventLog, GraphEvent, GraphObserver, ObserverRegistry};
pub use store::WeightedGraph;
pub use types::{Cost, FinishedVertex, SearchKind, SearchOutcome, ShortestPath, Weight};
