use std::path::PathBuf;
use thiserror::Error;
use crate::order_actor::OrderError;

/// Errors surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read seed file {}: {source}", .path.display())]
    SeedRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse seed file {}: {source}", .path.display())]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Seed order {index} rejected: {source}")]
    SeedRejected {
        index: usize,
        source: OrderError,
    },
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store task failed: {0}")]
    Task(String),
}
