use crate::error::{GraphError, Result};
use crate::graph::observer::ObserverRegistry;
use crate::graph::store::WeightedGraph;
use crate::graph::types::{Cost, FinishedVertex, ShortestPath};
use crate::trace_time;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

/// Min-heap key: lowest cost first, then lowest insertion rank
///
/// Ordering by rank on equal cost reproduces a linear scan over the vertex
/// list that keeps the first minimum it sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapEntry {
    pub cost: Cost,
    pub rank: usize,
}

/// State tracked during a Dijkstra run, indexed by vertex rank
///
/// `None` in `cost` is the only representation of "not reached yet".
struct DijkstraState {
    cost: Vec<Option<Cost>>,
    predecessor: Vec<Option<usize>>,
    finished: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(vertex_count: usize, start: usize) -> Self {
        let mut state = Self {
            cost: vec![None; vertex_count],
            predecessor: vec![None; vertex_count],
            finished: vec![false; vertex_count],
            heap: BinaryHeap::new(),
        };
        state.cost[start] = Some(0);
        // The source is its own predecessor
        state.predecessor[start] = Some(start);
        state.heap.push(Reverse(HeapEntry {
            cost: 0,
            rank: start,
        }));
        state
    }

    /// Next unfinished vertex with the lowest known cost
    fn pop_unfinished(&mut self) -> Option<HeapEntry> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            // Superseded entries carry a higher cost than the one on record
            if !self.finished[entry.rank] && self.cost[entry.rank] == Some(entry.cost) {
                return Some(entry);
            }
        }
        None
    }

    /// Lower the cost of `rank` through `via` if that is an improvement
    fn relax(&mut self, rank: usize, via: usize, candidate: Cost) -> bool {
        if self.finished[rank] || self.cost[rank].is_some_and(|known| candidate >= known) {
            return false;
        }
        self.cost[rank] = Some(candidate);
        self.predecessor[rank] = Some(via);
        self.heap.push(Reverse(HeapEntry {
            cost: candidate,
            rank,
        }));
        true
    }

    /// Ranks on the best path from `start` to `end`, or `None` if `end` was
    /// never reached
    fn path_ranks(&self, start: usize, end: usize) -> Option<Vec<usize>> {
        let mut ranks = vec![end];
        let mut current = end;
        while current != start {
            current = self.predecessor[current]?;
            ranks.push(current);
        }
        ranks.reverse();
        Some(ranks)
    }
}

/// Single-source shortest path from `start`, reporting the path to `end`
///
/// The run does not stop at `end`: every vertex reachable from `start` is
/// finished and reported through `on_vertex_finished` before the path is
/// rebuilt and handed to `on_dijkstra_over`. Vertices that cannot be reached
/// are never finished.
///
/// Fails with `UnknownVertex` if either endpoint is missing (before any
/// notification) and with `UnreachableTarget` if no path leads to `end`
/// (after the finishing notifications, without `on_dijkstra_over`).
#[tracing::instrument(level = "debug", skip(graph, observers))]
pub fn dijkstra<V>(
    graph: &WeightedGraph<V>,
    observers: &ObserverRegistry<V>,
    start: &V,
    end: &V,
) -> Result<ShortestPath<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    let start_rank = graph
        .rank_of(start)
        .ok_or_else(|| GraphError::unknown_vertex(start))?;
    let end_rank = graph
        .rank_of(end)
        .ok_or_else(|| GraphError::unknown_vertex(end))?;

    let started = Instant::now();
    observers.dijkstra_begun();

    let mut state = DijkstraState::new(graph.vertex_count(), start_rank);
    let mut finished = Vec::with_capacity(graph.vertex_count());

    while let Some(HeapEntry { cost, rank }) = state.pop_unfinished() {
        state.finished[rank] = true;
        let vertex = graph.vertex_at(rank);
        observers.vertex_finished(vertex, cost);
        finished.push(FinishedVertex {
            vertex: vertex.clone(),
            cost,
        });

        for (neighbor, weight) in graph.neighbors(vertex)? {
            let Some(neighbor_rank) = graph.rank_of(neighbor) else {
                continue;
            };
            let candidate = cost.saturating_add(weight);
            if state.relax(neighbor_rank, rank, candidate) {
                tracing::trace!(from = ?vertex, to = ?neighbor, cost = candidate, "relaxed");
            }
        }
    }

    let unreached = graph.vertex_count() - finished.len();
    if unreached > 0 {
        tracing::debug!(unreached, "vertices unreachable from start");
    }

    let (Some(cost), Some(ranks)) = (
        state.cost[end_rank],
        state.path_ranks(start_rank, end_rank),
    ) else {
        return Err(GraphError::unreachable_target(start, end));
    };

    let path: Vec<V> = ranks
        .into_iter()
        .map(|rank| graph.vertex_at(rank).clone())
        .collect();

    observers.dijkstra_over(&path);
    trace_time!(started, "dijkstra_over", finished = finished.len());

    Ok(ShortestPath {
        path,
        cost,
        finished,
    })
}
