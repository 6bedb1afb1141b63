use std::fmt;

use hashbrown::HashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::Edge;

/// Undirected location graph with one edge per unordered pair of locations.
///
/// Built once from an edge list and read-only afterwards. Because the
/// underlying graph is undirected, `edge(a, b)` and `edge(b, a)` always
/// resolve to the same weight.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    pub(crate) graph: UnGraph<String, Edge>,
    index: HashMap<String, NodeIndex>,
}

impl LocationGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the node for `location`, creating it on first sight
    fn node_or_insert(&mut self, location: &str) -> NodeIndex {
        if let Some(&node) = self.index.get(location) {
            return node;
        }
        let node = self.graph.add_node(location.to_owned());
        self.index.insert(location.to_owned(), node);
        node
    }

    /// Inserts the edge in both directions, replacing any earlier weights
    /// between the same pair.
    pub(crate) fn insert_edge(&mut self, source: &str, destination: &str, edge: Edge) {
        let a = self.node_or_insert(source);
        let b = self.node_or_insert(destination);
        self.graph.update_edge(a, b, edge);
    }

    pub(crate) fn node(&self, location: &str) -> Option<NodeIndex> {
        self.index.get(location).copied()
    }

    pub(crate) fn name(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    /// All known locations in order of first appearance in the edge list
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    pub fn contains(&self, location: &str) -> bool {
        self.index.contains_key(location)
    }

    /// Edge between two locations, in either orientation
    pub fn edge(&self, a: &str, b: &str) -> Option<&Edge> {
        let edge = self.graph.find_edge(self.node(a)?, self.node(b)?)?;
        self.graph.edge_weight(edge)
    }

    /// Neighbors of `location` together with the connecting edge.
    /// Unknown locations have no neighbors.
    pub fn neighbors<'a>(&'a self, location: &str) -> impl Iterator<Item = (&'a str, &'a Edge)> {
        self.node(location).into_iter().flat_map(move |node| {
            self.graph.edges(node).map(move |edge| {
                let other = if edge.source() == node {
                    edge.target()
                } else {
                    edge.source()
                };
                (self.name(other), edge.weight())
            })
        })
    }

    pub fn location_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl fmt::Display for LocationGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LocationGraph with {} locations and {} edges",
            self.location_count(),
            self.edge_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> LocationGraph {
        let mut graph = LocationGraph::new();
        graph.insert_edge("A", "B", Edge::new(1.0, 2.0));
        graph.insert_edge("B", "C", Edge::new(1.0, 3.0));
        graph.insert_edge("A", "C", Edge::new(5.0, 1.0));
        graph
    }

    #[test]
    fn edges_are_visible_from_both_ends() {
        let graph = triangle();
        for (a, b) in [("A", "B"), ("B", "C"), ("A", "C")] {
            assert_eq!(graph.edge(a, b), graph.edge(b, a));
            assert!(graph.edge(a, b).is_some());
        }
        assert_eq!(graph.edge("A", "C"), Some(&Edge::new(5.0, 1.0)));
    }

    #[test]
    fn later_insert_overwrites_either_orientation() {
        let mut graph = triangle();
        graph.insert_edge("C", "A", Edge::new(0.5, 9.0));

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge("A", "C"), Some(&Edge::new(0.5, 9.0)));
        assert_eq!(graph.edge("C", "A"), Some(&Edge::new(0.5, 9.0)));
    }

    #[test]
    fn locations_keep_first_appearance_order() {
        let graph = triangle();
        assert_eq!(graph.locations().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(graph.location_count(), 3);
    }

    #[test]
    fn neighbors_report_the_other_endpoint() {
        let graph = triangle();
        let mut neighbors: Vec<_> = graph
            .neighbors("C")
            .map(|(name, edge)| (name.to_owned(), edge.danger))
            .collect();
        neighbors.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(neighbors, vec![("A".to_owned(), 5.0), ("B".to_owned(), 1.0)]);
        assert_eq!(graph.neighbors("Z").count(), 0);
    }

    #[test]
    fn self_loops_and_isolated_pairs_are_kept() {
        let mut graph = triangle();
        graph.insert_edge("D", "D", Edge::new(0.0, 0.0));
        graph.insert_edge("E", "F", Edge::new(1.0, 1.0));

        assert!(graph.contains("D"));
        assert_eq!(graph.edge("D", "D"), Some(&Edge::new(0.0, 0.0)));
        assert_eq!(graph.location_count(), 6);
    }
}
