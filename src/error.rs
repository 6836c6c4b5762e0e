//! Error types for the maze adapter

use crate::maze::{Direction, Juncture};
use mazegraph_core::error::GraphError;
use thiserror::Error;

/// Result type alias for maze operations
pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("invalid maze dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("juncture {at} is outside the {width}x{height} maze")]
    OutOfBounds {
        at: Juncture,
        width: i32,
        height: i32,
    },

    #[error("negative weight {weight} for {direction} of {at}")]
    NegativeWeight {
        at: Juncture,
        direction: Direction,
        weight: i64,
    },

    #[error("negative default weight {0}")]
    NegativeDefaultWeight(i64),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl MazeError {
    /// Stable identifier for the error kind
    pub fn error_type(&self) -> &'static str {
        match self {
            MazeError::Graph(inner) => inner.error_type(),
            MazeError::InvalidDimensions { .. } => "invalid_dimensions",
            MazeError::OutOfBounds { .. } => "out_of_bounds",
            MazeError::NegativeWeight { .. } | MazeError::NegativeDefaultWeight(_) => {
                "negative_weight"
            }
            MazeError::Toml(_) => "toml_error",
            MazeError::Yaml(_) => "yaml_error",
        }
    }

    /// Render as the structured JSON error shape used by the engine
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_errors_pass_through() {
        let err: MazeError = GraphError::unknown_vertex(&Juncture::new(9, 9)).into();
        assert_eq!(err.error_type(), "unknown_vertex");
        assert!(err.to_string().contains("Juncture"));
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = MazeError::OutOfBounds {
            at: Juncture::new(3, -1),
            width: 2,
            height: 2,
        };
        assert_eq!(err.to_string(), "juncture (3, -1) is outside the 2x2 maze");
        assert_eq!(err.to_json()["error"]["type"], "out_of_bounds");
    }

    #[test]
    fn test_negative_weight_message() {
        let err = MazeError::NegativeWeight {
            at: Juncture::new(0, 1),
            direction: Direction::Left,
            weight: -4,
        };
        assert_eq!(err.to_string(), "negative weight -4 for left of (0, 1)");
    }
}
