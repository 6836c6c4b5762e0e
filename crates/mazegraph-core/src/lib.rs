//! Mazegraph Core Library
//!
//! Generic directed weighted graph engine with observable BFS, DFS and
//! Dijkstra algorithms.

pub mod error;
pub mod graph;
pub mod logging;
