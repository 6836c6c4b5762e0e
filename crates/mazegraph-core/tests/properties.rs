use mazegraph_core::error::GraphError;
use mazegraph_core::graph::{
    bfs, dfs, dijkstra, EventLog, ObserverRegistry, SearchOutcome, WeightedGraph,
};
use proptest::prelude::*;
use std::sync::Arc;

fn build(n: u8, edges: &[(u8, u8, u8)]) -> WeightedGraph<u8> {
    let mut graph = WeightedGraph::new();
    for v in 0..n {
        graph.add_vertex(v).unwrap();
    }
    for (from, to, weight) in edges {
        graph
            .add_edge(&(from % n), &(to % n), i64::from(*weight))
            .unwrap();
    }
    graph
}

fn graphs() -> impl Strategy<Value = (u8, Vec<(u8, u8, u8)>)> {
    (1u8..9).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0u8..20), 0..24),
        )
    })
}

fn observed() -> (Arc<EventLog<u8>>, ObserverRegistry<u8>) {
    let log = Arc::new(EventLog::<u8>::new());
    let mut registry = ObserverRegistry::<u8>::new();
    registry.register(&log);
    (log, registry)
}

proptest! {
    #[test]
    fn prop_duplicate_vertex_rejected((n, edges) in graphs(), v in any::<u8>()) {
        let mut graph = build(n, &edges);
        let v = v % n;
        let is_duplicate = matches!(graph.add_vertex(v), Err(GraphError::DuplicateVertex { .. }));
        prop_assert!(is_duplicate);
        prop_assert_eq!(graph.vertex_count(), usize::from(n));
    }

    #[test]
    fn prop_invalid_edges_rejected((n, edges) in graphs(), weight in i64::MIN..0) {
        let mut graph = build(n, &edges);
        let before = graph.edge_count();

        let missing_source = graph.add_edge(&200, &0, 1);
        let is_invalid = matches!(missing_source, Err(GraphError::InvalidEdge { .. }));
        prop_assert!(is_invalid);
        let missing_target = graph.add_edge(&0, &200, 1);
        let is_invalid = matches!(missing_target, Err(GraphError::InvalidEdge { .. }));
        prop_assert!(is_invalid);
        let negative = graph.add_edge(&0, &0, weight);
        let is_invalid = matches!(negative, Err(GraphError::InvalidEdge { .. }));
        prop_assert!(is_invalid);

        prop_assert_eq!(graph.edge_count(), before);
    }

    #[test]
    fn prop_get_weight_absent_edge_is_none((n, edges) in graphs()) {
        let graph = build(n, &edges);
        for from in 0..n {
            for to in 0..n {
                let present = edges.iter().any(|(f, t, _)| f % n == from && t % n == to);
                prop_assert_eq!(graph.get_weight(&from, &to).unwrap().is_some(), present);
            }
        }
        let unknown = graph.get_weight(&0, &200);
        let is_unknown = matches!(unknown, Err(GraphError::UnknownVertex { .. }));
        prop_assert!(is_unknown);
    }

    #[test]
    fn prop_search_visits_once_after_a_predecessor(
        (n, edges) in graphs(),
        start in any::<u8>(),
        end in any::<u8>(),
    ) {
        let graph = build(n, &edges);
        let (start, end) = (start % n, end % n);

        for run in [bfs::<u8>, dfs::<u8>] {
            let (log, registry) = observed();
            run(&graph, &registry, &start, &end).unwrap();
            let visits = log.visits();

            prop_assert!(!visits.contains(&end));
            for (i, v) in visits.iter().enumerate() {
                prop_assert!(!visits[..i].contains(v));
                if i > 0 {
                    let reached = visits[..i]
                        .iter()
                        .any(|u| graph.get_weight(u, v).unwrap().is_some());
                    prop_assert!(reached);
                } else {
                    prop_assert_eq!(*v, start);
                }
            }
        }
    }

    #[test]
    fn prop_start_equals_end_has_no_visits((n, edges) in graphs(), v in any::<u8>()) {
        let graph = build(n, &edges);
        let v = v % n;
        for run in [bfs::<u8>, dfs::<u8>] {
            let (log, registry) = observed();
            prop_assert_eq!(run(&graph, &registry, &v, &v).unwrap(), SearchOutcome::Reached);
            prop_assert!(log.visits().is_empty());
        }
    }

    #[test]
    fn prop_dijkstra_agrees_with_bfs_reachability(
        (n, edges) in graphs(),
        start in any::<u8>(),
        end in any::<u8>(),
    ) {
        let graph = build(n, &edges);
        let (start, end) = (start % n, end % n);
        let registry = ObserverRegistry::new();

        let reachable = bfs(&graph, &registry, &start, &end).unwrap().is_reached();
        match dijkstra(&graph, &registry, &start, &end) {
            Ok(result) => {
                prop_assert!(reachable);
                prop_assert_eq!(result.path.first(), Some(&start));
                prop_assert_eq!(result.path.last(), Some(&end));

                let walked: u64 = result
                    .path
                    .windows(2)
                    .map(|pair| graph.get_weight(&pair[0], &pair[1]).unwrap().unwrap())
                    .sum();
                prop_assert_eq!(walked, result.cost);
            }
            Err(err) => {
                prop_assert!(!reachable);
                let is_unreachable = matches!(err, GraphError::UnreachableTarget { .. });
                prop_assert!(is_unreachable);
            }
        }
    }

    #[test]
    fn prop_dijkstra_costs_are_optimal((n, edges) in graphs(), start in any::<u8>()) {
        let graph = build(n, &edges);
        let start = start % n;
        let registry = ObserverRegistry::new();

        let result = dijkstra(&graph, &registry, &start, &start).unwrap();
        let cost_of = |v: u8| result.finished.iter().find(|f| f.vertex == v).map(|f| f.cost);

        let mut previous = 0;
        for finished in &result.finished {
            prop_assert!(finished.cost >= previous);
            previous = finished.cost;
        }
        for (from, to, _) in &edges {
            let (from, to) = (from % n, to % n);
            let weight = graph.get_weight(&from, &to).unwrap().unwrap();
            if let Some(from_cost) = cost_of(from) {
                let to_cost = cost_of(to);
                prop_assert!(to_cost.is_some());
                prop_assert!(to_cost.unwrap_or(u64::MAX) <= from_cost + weight);
            }
        }
    }
}
