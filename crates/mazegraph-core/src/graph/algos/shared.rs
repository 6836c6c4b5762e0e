use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::store::WeightedGraph;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

/// Pending-visitation collection driving an unweighted search
pub trait Frontier<V> {
    fn push(&mut self, vertex: V);
    fn pop(&mut self) -> Option<V>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// FIFO discipline for breadth-first search
impl<V> Frontier<V> for VecDeque<V> {
    fn push(&mut self, vertex: V) {
        self.push_back(vertex);
    }

    fn pop(&mut self) -> Option<V> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// LIFO discipline for depth-first search
impl<V> Frontier<V> for Vec<V> {
    fn push(&mut self, vertex: V) {
        Vec::push(self, vertex);
    }

    fn pop(&mut self) -> Option<V> {
        Vec::pop(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Check that both endpoints of a query are in the graph
pub fn check_endpoints<V>(graph: &WeightedGraph<V>, start: &V, end: &V) -> Result<()>
where
    V: Clone + Eq + Hash + Debug,
{
    ensure_vertex!(graph, start);
    ensure_vertex!(graph, end);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn drain<F: Frontier<u8>>(mut frontier: F) -> Vec<u8> {
        assert!(frontier.is_empty());
        for v in [1, 2, 3] {
            frontier.push(v);
        }
        assert_eq!(frontier.len(), 3);
        let drained = std::iter::from_fn(|| frontier.pop()).collect();
        assert!(frontier.is_empty());
        drained
    }

    #[test]
    fn test_queue_is_fifo() {
        assert_eq!(drain(VecDeque::new()), vec![1, 2, 3]);
    }

    #[test]
    fn test_stack_is_lifo() {
        assert_eq!(drain(Vec::new()), vec![3, 2, 1]);
    }

    #[test]
    fn test_check_endpoints() {
        let mut graph = WeightedGraph::new();
        graph.add_vertex('a').unwrap();

        assert!(check_endpoints(&graph, &'a', &'a').is_ok());
        assert!(matches!(
            check_endpoints(&graph, &'a', &'z'),
            Err(GraphError::UnknownVertex { .. })
        ));
        assert!(matches!(
            check_endpoints(&graph, &'z', &'a'),
            Err(GraphError::UnknownVertex { .. })
        ));
    }
}
