//! In-memory rectangular maze

use crate::error::{MazeError, Result};
use crate::maze::{Direction, Juncture, Maze};
use std::collections::{HashMap, HashSet};

/// Weight of a move that has not been given one explicitly
pub const DEFAULT_WEIGHT: i64 = 1;

/// A rectangular maze held in memory
///
/// Walls sit between two cells and block both of them. Weights belong to a
/// single move out of a cell and are not mirrored onto the reverse move.
#[derive(Debug, Clone)]
pub struct GridMaze {
    width: i32,
    height: i32,
    default_weight: i64,
    walls: HashSet<(Juncture, Direction)>,
    weights: HashMap<(Juncture, Direction), i64>,
}

impl GridMaze {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            default_weight: DEFAULT_WEIGHT,
            walls: HashSet::new(),
            weights: HashMap::new(),
        })
    }

    /// Replace the weight used for moves without an explicit one
    pub fn with_default_weight(mut self, weight: i64) -> Result<Self> {
        if weight < 0 {
            return Err(MazeError::NegativeDefaultWeight(weight));
        }
        self.default_weight = weight;
        Ok(self)
    }

    pub fn default_weight(&self) -> i64 {
        self.default_weight
    }

    /// Put a wall on the `direction` side of `at`
    ///
    /// The neighbouring cell gets the matching wall on its opposite side.
    /// Walls on the outer boundary are accepted and change nothing.
    pub fn add_wall(&mut self, at: Juncture, direction: Direction) -> Result<()> {
        self.check_bounds(at)?;
        self.walls.insert((at, direction));

        let neighbor = at.step(direction);
        if self.contains(neighbor) {
            self.walls.insert((neighbor, direction.opposite()));
        }
        Ok(())
    }

    /// Set the cost of moving out of `at` in `direction`
    pub fn set_weight(&mut self, at: Juncture, direction: Direction, weight: i64) -> Result<()> {
        self.check_bounds(at)?;
        if weight < 0 {
            return Err(MazeError::NegativeWeight {
                at,
                direction,
                weight,
            });
        }
        self.weights.insert((at, direction), weight);
        Ok(())
    }

    fn check_bounds(&self, at: Juncture) -> Result<()> {
        if self.contains(at) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                at,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Maze for GridMaze {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_wall(&self, at: Juncture, direction: Direction) -> bool {
        self.walls.contains(&(at, direction))
    }

    fn weight(&self, at: Juncture, direction: Direction) -> i64 {
        self.weights
            .get(&(at, direction))
            .copied()
            .unwrap_or(self.default_weight)
    }
}
