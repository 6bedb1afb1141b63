use serde::Deserialize;

/// One row of the edge list, exactly as read.
///
/// Every field is optional so that missing columns and empty cells surface
/// as a validation error while building the graph instead of a serde error.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RawEdgeRecord {
    #[serde(rename = "Source")]
    pub source: Option<String>,
    #[serde(rename = "Destination")]
    pub destination: Option<String>,
    #[serde(rename = "DangerScore")]
    pub danger_score: Option<String>,
    #[serde(rename = "Distance")]
    pub distance: Option<String>,
}

impl RawEdgeRecord {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        danger_score: impl Into<String>,
        distance: impl Into<String>,
    ) -> Self {
        Self {
            source: Some(source.into()),
            destination: Some(destination.into()),
            danger_score: Some(danger_score.into()),
            distance: Some(distance.into()),
        }
    }
}
