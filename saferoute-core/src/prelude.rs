// Re-export key components
pub use crate::alert::{AlertConfig, AlertDispatcher, TelegramDispatcher, compose_message};
pub use crate::loading::{
    LocationGraphConfig, RawEdgeRecord, build_location_graph, create_location_graph,
    read_edge_records,
};
pub use crate::model::{Edge, LocationGraph};
pub use crate::routing::{RouteError, SafestPath, find_safest_path, try_find_safest_path};
pub use crate::simulation::{StepOutcome, WalkSimulator, WalkState};

pub use crate::DangerScore;
pub use crate::Distance;
pub use crate::Error;
