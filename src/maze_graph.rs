use crate::error::{MazeError, Result};
use crate::maze::{Direction, Juncture, Maze};
use mazegraph_core::graph::WeightedGraph;
use std::ops::Deref;

/// A maze converted into a directed weighted graph of junctures
///
/// Dereferences to the underlying [`WeightedGraph`], so the engine's
/// algorithms take a `&MazeGraph` directly.
#[derive(Debug, Clone)]
pub struct MazeGraph {
    graph: WeightedGraph<Juncture>,
    width: i32,
    height: i32,
}

impl MazeGraph {
    /// Build the graph for `maze`
    ///
    /// Cells are added column by column (`x` outer, `y` inner). Each cell
    /// then gets one edge per open side, tried in the order above, below,
    /// right, left, to the neighbour inside the maze. The edge carries the
    /// maze's weight for that move.
    ///
    /// Fails with `InvalidDimensions` unless the maze has at least one cell.
    #[tracing::instrument(level = "debug", skip(maze), fields(width = maze.width(), height = maze.height()))]
    pub fn from_maze<M: Maze + ?Sized>(maze: &M) -> Result<Self> {
        let (width, height) = (maze.width(), maze.height());
        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        let mut graph = WeightedGraph::new();

        for x in 0..width {
            for y in 0..height {
                graph.add_vertex(Juncture::new(x, y))?;
            }
        }

        for x in 0..width {
            for y in 0..height {
                let at = Juncture::new(x, y);
                for direction in Direction::ALL {
                    let neighbor = at.step(direction);
                    if maze.is_wall(at, direction) || !maze.contains(neighbor) {
                        continue;
                    }
                    graph.add_edge(&at, &neighbor, maze.weight(at, direction))?;
                }
            }
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "maze graph built"
        );
        Ok(Self {
            graph,
            width,
            height,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Top-left cell
    pub fn entrance(&self) -> Juncture {
        Juncture::new(0, 0)
    }

    /// Bottom-right cell
    pub fn exit(&self) -> Juncture {
        Juncture::new(self.width - 1, self.height - 1)
    }

    pub fn graph(&self) -> &WeightedGraph<Juncture> {
        &self.graph
    }

    pub fn into_graph(self) -> WeightedGraph<Juncture> {
        self.graph
    }
}

impl Deref for MazeGraph {
    type Target = WeightedGraph<Juncture>;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}
