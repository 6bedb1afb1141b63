//! Safe route navigation over a small weighted location graph.
//!
//! The crate loads an undirected location graph from a CSV edge list, finds
//! the path with the lowest summed danger between two locations, drives a
//! stepwise walkthrough of that path and can raise an emergency alert for
//! the walker's current location.

pub mod alert;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod simulation;

pub use error::Error;
pub use loading::{LocationGraphConfig, build_location_graph, create_location_graph};
pub use model::{Edge, LocationGraph};
pub use routing::{SafestPath, find_safest_path};
pub use simulation::{StepOutcome, WalkSimulator, WalkState};

/// Per-edge risk weight, the only routing criterion
pub type DangerScore = f64;
/// Per-edge physical length, reported but never optimized
pub type Distance = f64;
