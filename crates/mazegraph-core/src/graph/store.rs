use crate::error::{EdgeFault, GraphError, Result};
use crate::graph::types::Weight;
use crate::{bail_invalid_edge, ensure_vertex};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Outgoing edges of a single vertex
#[derive(Debug, Clone)]
struct Adjacency<V> {
    /// Insertion index of the owning vertex
    rank: usize,
    weights: HashMap<V, Weight>,
    /// Destinations in the order their edge was first added
    order: Vec<V>,
}

impl<V> Adjacency<V> {
    fn new(rank: usize) -> Self {
        Self {
            rank,
            weights: HashMap::new(),
            order: Vec::new(),
        }
    }
}

/// A directed graph with non-negative integer edge weights
///
/// Vertices are opaque values compared by equality and hash. The store never
/// holds duplicate vertices and has no removal operations, so it only grows
/// while being built and is read-only once an algorithm runs.
///
/// Iteration is deterministic: vertices come back in insertion order and the
/// neighbours of a vertex in the order their edges were first added.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    vertices: Vec<V>,
    edges: HashMap<V, Adjacency<V>>,
    edge_count: usize,
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<V> WeightedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex with no outgoing edges
    ///
    /// Fails with `DuplicateVertex` if an equal vertex is already present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.edges.contains_key(&vertex) {
            return Err(GraphError::duplicate_vertex(&vertex));
        }
        let rank = self.vertices.len();
        self.vertices.push(vertex.clone());
        self.edges.insert(vertex, Adjacency::new(rank));
        Ok(())
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.edges.contains_key(vertex)
    }

    /// Insert or overwrite the directed edge `from -> to`
    ///
    /// Fails with `InvalidEdge` if either endpoint is missing or the weight is
    /// negative. Overwriting keeps the edge's position in the neighbour order.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: i64) -> Result<()> {
        if !self.edges.contains_key(from) {
            bail_invalid_edge!(from, to, EdgeFault::MissingSource);
        }
        if !self.edges.contains_key(to) {
            bail_invalid_edge!(from, to, EdgeFault::MissingTarget);
        }
        let Ok(weight) = Weight::try_from(weight) else {
            bail_invalid_edge!(from, to, EdgeFault::NegativeWeight(weight));
        };
        let Some(adjacency) = self.edges.get_mut(from) else {
            bail_invalid_edge!(from, to, EdgeFault::MissingSource);
        };

        if adjacency.weights.insert(to.clone(), weight).is_none() {
            adjacency.order.push(to.clone());
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Weight of the edge `from -> to`, or `None` when there is no such edge
    ///
    /// Fails with `UnknownVertex` if either vertex is not in the store.
    pub fn get_weight(&self, from: &V, to: &V) -> Result<Option<Weight>> {
        ensure_vertex!(self, to);
        let adjacency = self
            .edges
            .get(from)
            .ok_or_else(|| GraphError::unknown_vertex(from))?;
        Ok(adjacency.weights.get(to).copied())
    }

    /// Outgoing `(neighbour, weight)` pairs in edge insertion order
    pub fn neighbors<'a>(&'a self, vertex: &V) -> Result<impl Iterator<Item = (&'a V, Weight)>> {
        let adjacency = self
            .edges
            .get(vertex)
            .ok_or_else(|| GraphError::unknown_vertex(vertex))?;
        Ok(adjacency
            .order
            .iter()
            .filter_map(move |to| adjacency.weights.get(to).map(|w| (to, *w))))
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Insertion index of a vertex
    pub(crate) fn rank_of(&self, vertex: &V) -> Option<usize> {
        self.edges.get(vertex).map(|adjacency| adjacency.rank)
    }

    /// Vertex at an insertion index obtained from `rank_of`
    pub(crate) fn vertex_at(&self, rank: usize) -> &V {
        &self.vertices[rank]
    }
}
