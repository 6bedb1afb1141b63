use std::collections::HashMap;

use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use proptest::prelude::*;
use saferoute_core::loading::RawEdgeRecord;
use saferoute_core::{Edge, LocationGraph, build_location_graph, find_safest_path};

const MAX_NODES: usize = 12;

/// (source, destination, danger, distance) with small integer weights
type EdgeRow = (usize, usize, u8, u8);

fn name(idx: usize) -> String {
    format!("loc{idx}")
}

fn edge_rows() -> impl Strategy<Value = Vec<EdgeRow>> {
    proptest::collection::vec(
        (0..MAX_NODES, 0..MAX_NODES, 0u8..10, 0u8..10),
        1..40,
    )
}

fn build(rows: &[EdgeRow]) -> LocationGraph {
    build_location_graph(rows.iter().map(|&(a, b, danger, distance)| {
        RawEdgeRecord::new(name(a), name(b), danger.to_string(), distance.to_string())
    }))
    .unwrap()
}

/// Expected weights per unordered pair, later rows overwriting earlier ones
fn last_written(rows: &[EdgeRow]) -> HashMap<(usize, usize), Edge> {
    rows.iter()
        .map(|&(a, b, danger, distance)| {
            (
                (a.min(b), a.max(b)),
                Edge::new(f64::from(danger), f64::from(distance)),
            )
        })
        .collect()
}

/// Independent petgraph copy of the same edge list
fn reference_graph(rows: &[EdgeRow]) -> (UnGraph<(), f64>, HashMap<usize, NodeIndex>) {
    let mut graph = UnGraph::new_undirected();
    let mut nodes = HashMap::new();
    for (&(a, b), edge) in &last_written(rows) {
        let na = *nodes.entry(a).or_insert_with(|| graph.add_node(()));
        let nb = *nodes.entry(b).or_insert_with(|| graph.add_node(()));
        graph.add_edge(na, nb, edge.danger);
    }
    (graph, nodes)
}

proptest! {
    #[test]
    fn prop_adjacency_is_symmetric(rows in edge_rows()) {
        let graph = build(&rows);

        for (&(a, b), expected) in &last_written(&rows) {
            let forward = graph.edge(&name(a), &name(b));
            prop_assert_eq!(forward, Some(expected));
            prop_assert_eq!(forward, graph.edge(&name(b), &name(a)));
        }
        for location in graph.locations() {
            for (neighbor, edge) in graph.neighbors(location) {
                prop_assert_eq!(graph.edge(neighbor, location), Some(edge));
            }
        }
    }

    #[test]
    fn prop_reachable_paths_are_well_formed(
        rows in edge_rows(),
        start in 0..MAX_NODES,
        end in 0..MAX_NODES
    ) {
        let graph = build(&rows);
        let (start, end) = (name(start), name(end));

        match find_safest_path(&graph, &start, &end) {
            Some(route) => {
                prop_assert_eq!(route.path.first(), Some(&start));
                prop_assert_eq!(route.path.last(), Some(&end));

                let mut danger = 0.0;
                let mut distance = 0.0;
                for pair in route.path.windows(2) {
                    let edge = graph.edge(&pair[0], &pair[1]);
                    prop_assert!(edge.is_some(), "{} and {} are not adjacent", pair[0], pair[1]);
                    let edge = edge.unwrap();
                    danger += edge.danger;
                    distance += edge.distance;
                }
                prop_assert!((route.total_danger - danger).abs() < 1e-9);
                prop_assert!((route.total_distance - distance).abs() < 1e-9);
            }
            None => {
                prop_assert!(!graph.contains(&start) || !graph.contains(&end) || start != end);
            }
        }
    }

    #[test]
    fn prop_cost_matches_petgraph_dijkstra(
        rows in edge_rows(),
        start in 0..MAX_NODES,
        end in 0..MAX_NODES
    ) {
        let graph = build(&rows);
        let (reference, nodes) = reference_graph(&rows);
        let found = find_safest_path(&graph, &name(start), &name(end));

        match (nodes.get(&start), nodes.get(&end)) {
            (Some(&s), Some(&e)) => {
                let costs = dijkstra(&reference, s, None, |edge| *edge.weight());
                match costs.get(&e) {
                    Some(&cost) => {
                        prop_assert!(found.is_some());
                        let route = found.unwrap();
                        prop_assert!((route.total_danger - cost).abs() < 1e-9);
                    }
                    None => prop_assert!(found.is_none()),
                }
            }
            _ => prop_assert!(found.is_none()),
        }
    }
}
