//! Error types for the graph engine
//!
//! Every error is a local, synchronous violation of a store invariant raised
//! at the call site. There is no retry policy: callers fix the call.

mod macros;

use std::fmt;
use thiserror::Error;

/// Which part of an edge insertion was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFault {
    /// The `from` vertex is not in the store
    MissingSource,
    /// The `to` vertex is not in the store
    MissingTarget,
    /// The weight is below zero
    NegativeWeight(i64),
}

impl fmt::Display for EdgeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeFault::MissingSource => write!(f, "source vertex is not in the graph"),
            EdgeFault::MissingTarget => write!(f, "target vertex is not in the graph"),
            EdgeFault::NegativeWeight(w) => write!(f, "weight {} is negative", w),
        }
    }
}

/// Errors raised by the graph store and its algorithms
///
/// Vertices are rendered with their `Debug` representation so the error type
/// stays independent of the vertex type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("duplicate vertex: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("invalid edge {from} -> {to}: {fault}")]
    InvalidEdge {
        from: String,
        to: String,
        fault: EdgeFault,
    },

    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("target {target} is unreachable from {start}")]
    UnreachableTarget { start: String, target: String },
}

impl GraphError {
    pub fn duplicate_vertex(vertex: &impl fmt::Debug) -> Self {
        GraphError::DuplicateVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    pub fn invalid_edge(from: &impl fmt::Debug, to: &impl fmt::Debug, fault: EdgeFault) -> Self {
        GraphError::InvalidEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            fault,
        }
    }

    pub fn unknown_vertex(vertex: &impl fmt::Debug) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    pub fn unreachable_target(start: &impl fmt::Debug, target: &impl fmt::Debug) -> Self {
        GraphError::UnreachableTarget {
            start: format!("{:?}", start),
            target: format!("{:?}", target),
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::DuplicateVertex { .. } => "duplicate_vertex",
            GraphError::InvalidEdge { .. } => "invalid_edge",
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::UnreachableTarget { .. } => "unreachable_target",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_edge_message_names_fault() {
        let err = GraphError::invalid_edge(&"A", &"B", EdgeFault::NegativeWeight(-3));
        assert_eq!(
            err.to_string(),
            "invalid edge \"A\" -> \"B\": weight -3 is negative"
        );
    }

    #[test]
    fn test_unreachable_target_message() {
        let err = GraphError::unreachable_target(&1, &9);
        assert_eq!(err.to_string(), "target 9 is unreachable from 1");
        assert_eq!(err.error_type(), "unreachable_target");
    }

    #[test]
    fn test_to_json_shape() {
        let err = GraphError::unknown_vertex(&(2, 3));
        let json = err.to_json();
        assert_eq!(json["error"]["type"], "unknown_vertex");
        assert_eq!(json["error"]["message"], "unknown vertex: (2, 3)");
    }
}
