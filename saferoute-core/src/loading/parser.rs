use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::RawEdgeRecord;
use crate::Error;

/// Reads every row of a CSV edge list with a header line.
///
/// Unlike a lenient loader this stops at the first broken row, since a
/// partially loaded graph would route over missing edges.
pub fn read_edge_records<R: Read>(reader: R) -> Result<Vec<RawEdgeRecord>, Error> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .enumerate()
        .map(|(idx, record)| {
            record.map_err(|e| Error::MalformedInput {
                row: idx + 1,
                reason: e.to_string(),
            })
        })
        .collect()
}

pub fn read_edge_records_from_path(path: &Path) -> Result<Vec<RawEdgeRecord>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    read_edge_records(file)
}
