//! Declarative maze descriptions
//!
//! A [`MazeConfig`] is plain data parsed from TOML or YAML text:
//!
//! ```toml
//! width = 3
//! height = 2
//! default_weight = 1
//!
//! [[walls]]
//! x = 0
//! y = 0
//! direction = "right"
//!
//! [[weights]]
//! x = 1
//! y = 1
//! direction = "left"
//! weight = 5
//! ```

use crate::error::Result;
use crate::grid::{GridMaze, DEFAULT_WEIGHT};
use crate::maze::{Direction, Juncture};
use serde::{Deserialize, Serialize};

fn default_weight() -> i64 {
    DEFAULT_WEIGHT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallConfig {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
    pub weight: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub width: i32,
    pub height: i32,

    #[serde(default = "default_weight")]
    pub default_weight: i64,

    #[serde(default)]
    pub walls: Vec<WallConfig>,

    #[serde(default)]
    pub weights: Vec<WeightConfig>,
}

impl MazeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Validate the description and build the maze it describes
    ///
    /// Fails on the first wall or weight that falls outside the grid or
    /// carries a negative weight.
    pub fn build(&self) -> Result<GridMaze> {
        let mut maze =
            GridMaze::new(self.width, self.height)?.with_default_weight(self.default_weight)?;

        for wall in &self.walls {
            maze.add_wall(Juncture::new(wall.x, wall.y), wall.direction)?;
        }
        for entry in &self.weights {
            maze.set_weight(
                Juncture::new(entry.x, entry.y),
                entry.direction,
                entry.weight,
            )?;
        }

        tracing::debug!(
            width = self.width,
            height = self.height,
            walls = self.walls.len(),
            weights = self.weights.len(),
            "built maze from config"
        );
        Ok(maze)
    }
}
