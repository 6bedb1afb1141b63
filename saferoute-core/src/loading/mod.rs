//! This module is responsible for loading the CSV edge list
//! and building the location graph from it.

mod builder;
mod config;
mod parser;
mod raw_types;

pub use builder::{build_location_graph, create_location_graph};
pub use config::LocationGraphConfig;
pub use parser::{read_edge_records, read_edge_records_from_path};
pub use raw_types::RawEdgeRecord;
