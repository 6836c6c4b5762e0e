//! Observer protocol for algorithm progress
//!
//! Algorithms report progress through an [`ObserverRegistry`], which fans each
//! notification out to every live [`GraphObserver`] in registration order.
//! The registry does not own its observers: it keeps `Weak` handles, and an
//! observer dropped by its owner simply stops receiving notifications.

use crate::graph::types::{Cost, SearchKind};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Listener for graph algorithm progress
///
/// Every method defaults to a no-op so listeners implement only the events
/// they care about. Methods take `&self`; stateful observers use interior
/// mutability.
pub trait GraphObserver<V> {
    /// A BFS or DFS is about to start
    fn on_search_begun(&self, _kind: SearchKind) {}

    /// A vertex was taken off the frontier and processed
    fn on_visit(&self, _vertex: &V) {}

    /// The end vertex was taken off the frontier
    fn on_search_over(&self) {}

    fn on_dijkstra_begun(&self) {}

    /// A vertex joined the finished set with its optimal cost
    fn on_vertex_finished(&self, _vertex: &V, _cost: Cost) {}

    /// The least-cost path from start to end, both inclusive
    fn on_dijkstra_over(&self, _path: &[V]) {}
}

/// Set of non-owning observer handles
pub struct ObserverRegistry<V> {
    observers: Vec<Weak<dyn GraphObserver<V>>>,
}

impl<V> Default for ObserverRegistry<V> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
        }
    }
}

impl<V> fmt::Debug for ObserverRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}

impl<V> ObserverRegistry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer
    ///
    /// Returns `false` if the same observer is already registered; it is not
    /// added a second time.
    pub fn register<O>(&mut self, observer: &Arc<O>) -> bool
    where
        O: GraphObserver<V> + 'static,
    {
        let handle: Weak<O> = Arc::downgrade(observer);
        let handle: Weak<dyn GraphObserver<V>> = handle;
        self.observers.retain(|h| h.strong_count() > 0);
        if self.observers.iter().any(|h| Weak::ptr_eq(h, &handle)) {
            return false;
        }
        self.observers.push(handle);
        true
    }

    /// Remove an observer, returning whether it was registered
    pub fn unregister<O>(&mut self, observer: &Arc<O>) -> bool
    where
        O: GraphObserver<V> + 'static,
    {
        let handle: Weak<O> = Arc::downgrade(observer);
        let handle: Weak<dyn GraphObserver<V>> = handle;
        let before = self.observers.len();
        self.observers.retain(|h| !Weak::ptr_eq(h, &handle));
        self.observers.len() != before
    }

    /// Number of registered observers that are still alive
    pub fn len(&self) -> usize {
        self.observers
            .iter()
            .filter(|h| h.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn each(&self, mut notify: impl FnMut(&dyn GraphObserver<V>)) {
        for handle in &self.observers {
            if let Some(observer) = handle.upgrade() {
                notify(observer.as_ref());
            }
        }
    }

    pub(crate) fn search_begun(&self, kind: SearchKind) {
        self.each(|o| o.on_search_begun(kind));
    }

    pub(crate) fn visit(&self, vertex: &V) {
        self.each(|o| o.on_visit(vertex));
    }

    pub(crate) fn search_over(&self) {
        self.each(|o| o.on_search_over());
    }

    pub(crate) fn dijkstra_begun(&self) {
        self.each(|o| o.on_dijkstra_begun());
    }

    pub(crate) fn vertex_finished(&self, vertex: &V, cost: Cost) {
        self.each(|o| o.on_vertex_finished(vertex, cost));
    }

    pub(crate) fn dijkstra_over(&self, path: &[V]) {
        self.each(|o| o.on_dijkstra_over(path));
    }
}

/// A single recorded notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GraphEvent<V> {
    SearchBegun { kind: SearchKind },
    Visit { vertex: V },
    SearchOver,
    DijkstraBegun,
    VertexFinished { vertex: V, cost: Cost },
    DijkstraOver { path: Vec<V> },
}

/// Observer that records every notification it receives
#[derive(Debug)]
pub struct EventLog<V> {
    events: Mutex<Vec<GraphEvent<V>>>,
}

impl<V> Default for EventLog<V> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<V: Clone> EventLog<V> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: GraphEvent<V>) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Snapshot of all events in arrival order
    pub fn events(&self) -> Vec<GraphEvent<V>> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Vertices reported through `on_visit`, in order
    pub fn visits(&self) -> Vec<V> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                GraphEvent::Visit { vertex } => Some(vertex),
                _ => None,
            })
            .collect()
    }

    /// Vertices reported through `on_vertex_finished`, in order
    pub fn finished(&self) -> Vec<(V, Cost)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                GraphEvent::VertexFinished { vertex, cost } => Some((vertex, cost)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Render the recorded events as a JSON array
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value>
    where
        V: Serialize,
    {
        serde_json::to_value(self.events())
    }
}

impl<V: Clone> GraphObserver<V> for EventLog<V> {
    fn on_search_begun(&self, kind: SearchKind) {
        self.push(GraphEvent::SearchBegun { kind });
    }

    fn on_visit(&self, vertex: &V) {
        self.push(GraphEvent::Visit {
            vertex: vertex.clone(),
        });
    }

    fn on_search_over(&self) {
        self.push(GraphEvent::SearchOver);
    }

    fn on_dijkstra_begun(&self) {
        self.push(GraphEvent::DijkstraBegun);
    }

    fn on_vertex_finished(&self, vertex: &V, cost: Cost) {
        self.push(GraphEvent::VertexFinished {
            vertex: vertex.clone(),
            cost,
        });
    }

    fn on_dijkstra_over(&self, path: &[V]) {
        self.push(GraphEvent::DijkstraOver {
            path: path.to_vec(),
        });
    }
}
