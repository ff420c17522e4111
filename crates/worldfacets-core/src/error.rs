// crates/worldfacets-core/src/error.rs
use thiserror::Error;

/// Errors raised at the edges of the engine: loading, persisting and
/// constructing state. The filter and aggregation operations themselves
/// never fail.
#[derive(Debug, Error)]
pub enum FacetError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("duplicate country code in snapshot: {0}")]
    DuplicateCountry(String),

    #[error("batch size must be at least 1")]
    InvalidBatchSize,
}

pub type Result<T> = std::result::Result<T, FacetError>;
