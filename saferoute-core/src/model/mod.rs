//! Data model for the location network
//!
//! Contains the edge weights and the undirected graph they live in.

pub mod components;
pub mod network;

pub use components::Edge;
pub use network::LocationGraph;
