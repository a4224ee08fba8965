use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("contact '{0}' not found")]
    NotFound(String),

    #[error("malformed contact data: {0}")]
    MalformedData(#[source] serde_json::Error),

    #[error("storage unavailable: failed to {operation} {}: {source}", .path.display())]
    StorageUnavailable {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
