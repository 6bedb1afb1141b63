//! Safest-path search over the location graph

mod dijkstra;
mod safest_path;

pub(crate) use dijkstra::dijkstra_path;
pub use safest_path::{RouteError, SafestPath, find_safest_path, try_find_safest_path};
