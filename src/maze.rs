//! Cells, directions and the maze contract consumed by the graph adapter

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell of a rectangular maze
///
/// `(0, 0)` is the top-left cell; `x` grows to the right and `y` downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Juncture {
    pub x: i32,
    pub y: i32,
}

impl Juncture {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in `direction`, which may lie outside the maze
    pub fn step(self, direction: Direction) -> Juncture {
        let (dx, dy) = direction.offset();
        Juncture::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Juncture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Above,
    Below,
    Left,
    Right,
}

impl Direction {
    /// Edge insertion order used when a maze is turned into a graph
    pub const ALL: [Direction; 4] = [
        Direction::Above,
        Direction::Below,
        Direction::Right,
        Direction::Left,
    ];

    /// `(dx, dy)` to the neighbouring cell
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Above => (0, -1),
            Direction::Below => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Above => Direction::Below,
            Direction::Below => Direction::Above,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Above => "above",
            Direction::Below => "below",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// A rectangular maze as seen by [`MazeGraph::from_maze`](crate::MazeGraph::from_maze)
///
/// Implementors answer for cells inside `width() x height()` only. A weight
/// is the cost of moving out of `at` in `direction`; it need not match the
/// weight of the reverse move.
pub trait Maze {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn is_wall(&self, at: Juncture, direction: Direction) -> bool;
    fn weight(&self, at: Juncture, direction: Direction) -> i64;

    fn contains(&self, at: Juncture) -> bool {
        (0..self.width()).contains(&at.x) && (0..self.height()).contains(&at.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_undoes_step() {
        let origin = Juncture::new(4, 7);
        for direction in Direction::ALL {
            assert_eq!(origin.step(direction).step(direction.opposite()), origin);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_y_grows_downward() {
        let origin = Juncture::new(1, 1);
        assert_eq!(origin.step(Direction::Above), Juncture::new(1, 0));
        assert_eq!(origin.step(Direction::Below), Juncture::new(1, 2));
        assert_eq!(origin.step(Direction::Left), Juncture::new(0, 1));
        assert_eq!(origin.step(Direction::Right), Juncture::new(2, 1));
    }

    #[test]
    fn test_direction_serde_is_lowercase() {
        let json = serde_json::to_string(&Direction::Right).unwrap();
        assert_eq!(json, "\"right\"");
        let parsed: Direction = serde_json::from_str("\"above\"").unwrap();
        assert_eq!(parsed, Direction::Above);
    }

    #[test]
    fn test_display() {
        assert_eq!(Juncture::new(2, 3).to_string(), "(2, 3)");
        assert_eq!(Direction::Below.to_string(), "below");
    }
}
