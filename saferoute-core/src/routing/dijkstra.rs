use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::{DangerScore, LocationGraph};

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: DangerScore,
    node: NodeIndex,
}

// Weights are validated finite on load, so total ordering is safe
impl Eq for State {}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm weighted by edge danger.
/// Returns the total danger and the node sequence from `start` to `target`,
/// or `None` if `target` is unreachable.
pub(crate) fn dijkstra_path(
    graph: &LocationGraph,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<(DangerScore, Vec<NodeIndex>)> {
    let mut distances: HashMap<NodeIndex, DangerScore> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.graph.edges(node) {
            let next = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            let next_cost = cost + edge.weight().danger;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    let total = *distances.get(&target)?;

    // Follow predecessors backward from target to start
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        current = *predecessors.get(&current)?;
        path.push(current);
    }
    path.reverse();

    Some((total, path))
}
