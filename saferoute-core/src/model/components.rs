//! Location network components

use serde::Serialize;

use crate::{DangerScore, Distance};

/// Undirected edge between two locations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Risk score, the routing weight
    pub danger: DangerScore,
    /// Physical length, informational only
    pub distance: Distance,
}

impl Edge {
    pub fn new(danger: DangerScore, distance: Distance) -> Self {
        Self { danger, distance }
    }
}
