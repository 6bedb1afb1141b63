use itertools::Itertools;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use super::dijkstra_path;
use crate::{DangerScore, Distance, LocationGraph};

/// Path with the lowest summed danger between two locations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafestPath {
    /// Locations from start to end, both inclusive
    pub path: Vec<String>,
    /// Sum of edge danger along `path`
    pub total_danger: DangerScore,
    /// Sum of edge distance along `path`; not what the search minimizes
    pub total_distance: Distance,
}

/// Why a route search came back empty
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown location: {0}")]
    UnknownLocation(String),
    #[error("No path between {start} and {end}")]
    Unreachable { start: String, end: String },
}

/// Finds the safest path between two locations.
///
/// Unknown identifiers and unreachable pairs both yield `None`; callers get
/// one uniform "no path found" outcome. Use [`try_find_safest_path`] to tell
/// them apart.
pub fn find_safest_path(graph: &LocationGraph, start: &str, end: &str) -> Option<SafestPath> {
    match try_find_safest_path(graph, start, end) {
        Ok(path) => Some(path),
        Err(e) => {
            debug!("Route search {start:?} -> {end:?} found nothing: {e}");
            None
        }
    }
}

/// Finds the safest path, reporting why the search failed.
///
/// When several paths share the lowest danger, the one returned depends on
/// traversal order and is not stable.
pub fn try_find_safest_path(
    graph: &LocationGraph,
    start: &str,
    end: &str,
) -> Result<SafestPath, RouteError> {
    let start_node = graph
        .node(start)
        .ok_or_else(|| RouteError::UnknownLocation(start.to_owned()))?;
    let end_node = graph
        .node(end)
        .ok_or_else(|| RouteError::UnknownLocation(end.to_owned()))?;

    let (_, nodes) =
        dijkstra_path(graph, start_node, end_node).ok_or_else(|| RouteError::Unreachable {
            start: start.to_owned(),
            end: end.to_owned(),
        })?;

    let path: Vec<String> = nodes
        .iter()
        .map(|&node| graph.name(node).to_owned())
        .collect();

    // Totals come from the stored edges, not from the search cost
    let (total_danger, total_distance) = path
        .iter()
        .tuple_windows()
        .filter_map(|(a, b)| graph.edge(a, b))
        .fold((0.0, 0.0), |(danger, distance), edge| {
            (danger + edge.danger, distance + edge.distance)
        });

    Ok(SafestPath {
        path,
        total_danger,
        total_distance,
    })
}
