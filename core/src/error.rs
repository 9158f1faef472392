use thiserror::Error;

#[derive(Debug, Error)]
pub enum NtfsUtilsError {
    #[error("Filesystem is not detected on {0}")]
    NotDetected(String),

    #[error("Driver library error: {0}")]
    DriverLoad(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}
