use log::info;

use super::config::LocationGraphConfig;
use super::parser::read_edge_records_from_path;
use super::raw_types::RawEdgeRecord;
use crate::{Edge, Error, LocationGraph};

/// Creates the location graph from the configured CSV file
///
/// # Errors
///
/// Returns an error if the file cannot be read or any row is malformed
pub fn create_location_graph(config: &LocationGraphConfig) -> Result<LocationGraph, Error> {
    validate_config(config)?;

    info!("Loading edge list: {}", config.csv_path.display());
    let records = read_edge_records_from_path(&config.csv_path)?;
    let graph = build_location_graph(records)?;

    info!(
        "Location graph created with {} locations and {} edges",
        graph.location_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Builds an undirected graph from raw edge rows.
///
/// Each row is inserted in both directions; a later row between the same
/// pair replaces the earlier weights. Duplicates, self-loops and
/// disconnected components are accepted as-is.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] for the first row with a missing field
/// or a weight that is not a finite, non-negative number. No partial graph
/// is returned.
pub fn build_location_graph<I>(rows: I) -> Result<LocationGraph, Error>
where
    I: IntoIterator<Item = RawEdgeRecord>,
{
    let mut graph = LocationGraph::new();

    for (idx, record) in rows.into_iter().enumerate() {
        let row = idx + 1;
        let source = required(record.source, "Source", row)?;
        let destination = required(record.destination, "Destination", row)?;
        let danger = weight(record.danger_score, "DangerScore", row)?;
        let distance = weight(record.distance, "Distance", row)?;

        graph.insert_edge(&source, &destination, Edge::new(danger, distance));
    }

    Ok(graph)
}

fn validate_config(config: &LocationGraphConfig) -> Result<(), Error> {
    if !config.csv_path.exists() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Edge list not found: {}", config.csv_path.display()),
        )));
    }
    Ok(())
}

fn required(value: Option<String>, field: &str, row: usize) -> Result<String, Error> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MalformedInput {
            row,
            reason: format!("missing field `{field}`"),
        }),
    }
}

fn weight(value: Option<String>, field: &str, row: usize) -> Result<f64, Error> {
    let raw = required(value, field, row)?;
    let parsed = raw.trim().parse::<f64>().map_err(|_| Error::MalformedInput {
        row,
        reason: format!("`{field}` is not a number: {raw:?}"),
    })?;

    // Range rule, not a parse failure: Dijkstra needs finite, non-negative weights
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(Error::MalformedInput {
            row,
            reason: format!(
                "`{field}` is out of range: weights must be finite and non-negative, got {raw:?}"
            ),
        });
    }
    Ok(parsed)
}
