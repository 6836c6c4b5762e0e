use crate::error::Result;
use crate::graph::algos::shared::{check_endpoints, Frontier};
use crate::graph::observer::ObserverRegistry;
use crate::graph::store::WeightedGraph;
use crate::graph::types::{SearchKind, SearchOutcome};
use crate::trace_time;
use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

/// State tracked during an unweighted search
struct SearchState<V, F> {
    visited: HashSet<V>,
    frontier: F,
}

/// Shared BFS/DFS skeleton; only the frontier discipline differs
///
/// The end check happens before the vertex is marked visited, so observers
/// never get `on_visit` for `end`, only `on_search_over`.
#[tracing::instrument(level = "debug", skip(graph, observers, frontier))]
fn search<V, F>(
    graph: &WeightedGraph<V>,
    observers: &ObserverRegistry<V>,
    start: &V,
    end: &V,
    kind: SearchKind,
    frontier: F,
) -> Result<SearchOutcome>
where
    V: Clone + Eq + Hash + Debug,
    F: Frontier<V>,
{
    check_endpoints(graph, start, end)?;

    let started = Instant::now();
    observers.search_begun(kind);

    let mut state = SearchState {
        visited: HashSet::new(),
        frontier,
    };
    state.frontier.push(start.clone());

    while let Some(current) = state.frontier.pop() {
        if current == *end {
            observers.search_over();
            trace_time!(started, "search_over", visited = state.visited.len());
            return Ok(SearchOutcome::Reached);
        }

        if !state.visited.insert(current.clone()) {
            continue;
        }
        tracing::trace!(vertex = ?current, pending = state.frontier.len(), "visit");
        observers.visit(&current);

        for (neighbor, _) in graph.neighbors(&current)? {
            if !state.visited.contains(neighbor) {
                state.frontier.push(neighbor.clone());
            }
        }
    }

    tracing::debug!(
        visited = state.visited.len(),
        "frontier exhausted before reaching end"
    );
    Ok(SearchOutcome::Exhausted)
}

/// Breadth-first search from `start`, stopping when `end` is dequeued
///
/// Fails with `UnknownVertex` if either endpoint is missing; no notification
/// is sent in that case. An unreachable `end` is not an error.
pub fn bfs<V>(
    graph: &WeightedGraph<V>,
    observers: &ObserverRegistry<V>,
    start: &V,
    end: &V,
) -> Result<SearchOutcome>
where
    V: Clone + Eq + Hash + Debug,
{
    search(graph, observers, start, end, SearchKind::Bfs, VecDeque::new())
}

/// Depth-first search from `start`, stopping when `end` is popped
///
/// Neighbours are pushed in store order, so the most recently added edge of
/// a vertex is explored first.
pub fn dfs<V>(
    graph: &WeightedGraph<V>,
    observers: &ObserverRegistry<V>,
    start: &V,
    end: &V,
) -> Result<SearchOutcome>
where
    V: Clone + Eq + Hash + Debug,
{
    search(graph, observers, start, end, SearchKind::Dfs, Vec::new())
}
