//! Grid mazes exposed as directed weighted graphs
//!
//! A [`Maze`] describes cells, walls and per-direction traversal weights.
//! [`MazeGraph::from_maze`] turns it into a
//! [`WeightedGraph<Juncture>`](mazegraph_core::graph::WeightedGraph) that the
//! engine in `mazegraph-core` can search with BFS, DFS or Dijkstra while
//! observers watch.

pub mod config;
pub mod error;
pub mod grid;
pub mod maze;
pub mod maze_graph;

pub use config::{MazeConfig, WallConfig, WeightConfig};
pub use error::{MazeError, Result};
pub use grid::GridMaze;
pub use maze::{Direction, Juncture, Maze};
pub use maze_graph::MazeGraph;

pub use mazegraph_core::graph;
pub use mazegraph_core::logging;
