use std::path::PathBuf;

/// Where the location graph is loaded from
#[derive(Debug, Clone)]
pub struct LocationGraphConfig {
    /// CSV edge list with `Source,Destination,DangerScore,Distance` columns
    pub csv_path: PathBuf,
}

impl LocationGraphConfig {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
        }
    }
}
