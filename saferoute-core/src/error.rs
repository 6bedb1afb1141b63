use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed input at row {row}: {reason}")]
    MalformedInput { row: usize, reason: String },
    #[error("Cannot install an empty path")]
    InvalidPath,
    #[error("No path installed")]
    NoPathInstalled,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
