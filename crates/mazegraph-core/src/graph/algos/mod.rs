//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth- and depth-first search sharing one skeleton
//! - `dijkstra`: Weighted shortest path finding
//! - `shared`: Frontier disciplines and endpoint checks

pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::{bfs, dfs};
pub use dijkstra::dijkstra;
pub use shared::{check_endpoints, Frontier};
