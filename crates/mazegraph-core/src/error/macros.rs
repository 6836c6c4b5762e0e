//! Error macros for the graph engine

/// Return `UnknownVertex` unless the graph contains the vertex
#[macro_export]
macro_rules! ensure_vertex {
    ($graph:expr, $vertex:expr) => {
        if !$graph.contains_vertex($vertex) {
            return Err($crate::error::GraphError::unknown_vertex($vertex));
        }
    };
}

/// Macro for returning invalid edge errors
#[macro_export]
macro_rules! bail_invalid_edge {
    ($from:expr, $to:expr, $fault:expr) => {
        return Err($crate::error::GraphError::invalid_edge($from, $to, $fault))
    };
}
